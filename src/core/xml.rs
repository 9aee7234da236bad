//! Minimal namespace-aware element tree over quick-xml.
//!
//! quick-xml does not expand external entities, so parsing untrusted
//! responses cannot reach the filesystem or network.

use quick_xml::escape::unescape;
use quick_xml::events::Event;
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;
use thiserror::Error;

/// Deepest element nesting accepted. The tree is recursive, so this also
/// bounds the stack used when it is compared or dropped.
pub const MAX_DEPTH: usize = 256;

#[derive(Error, Debug)]
pub enum XmlTreeError {
    #[error("{0}")]
    Syntax(#[from] quick_xml::Error),

    #[error("undeclared namespace prefix '{0}'")]
    UnboundPrefix(String),

    #[error("no root element found")]
    NoRoot,

    #[error("content after the document element")]
    TrailingContent,

    #[error("text outside the document element")]
    StrayText,

    #[error("element <{0}> is never closed")]
    Unclosed(String),

    #[error("elements nested deeper than {0} levels")]
    TooDeep(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub namespace: Option<String>,
    pub local: String,
}

impl QualifiedName {
    pub fn new(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            local: local.into(),
        }
    }

    pub fn unqualified(local: impl Into<String>) -> Self {
        Self {
            namespace: None,
            local: local.into(),
        }
    }

    fn resolve(ns: ResolveResult<'_>, local: &[u8]) -> Result<Self, XmlTreeError> {
        let namespace = match ns {
            // bindings come straight from the attribute, entities included
            ResolveResult::Bound(ns) => {
                let raw = String::from_utf8_lossy(ns.as_ref());
                Some(unescape(&raw).map_err(quick_xml::Error::from)?.into_owned())
            }
            ResolveResult::Unbound => None,
            ResolveResult::Unknown(prefix) => {
                return Err(XmlTreeError::UnboundPrefix(
                    String::from_utf8_lossy(&prefix).into_owned(),
                ))
            }
        };
        Ok(Self {
            namespace,
            local: String::from_utf8_lossy(local).into_owned(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    pub name: QualifiedName,
    /// Concatenated character data directly inside this element.
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    fn new(name: QualifiedName) -> Self {
        Self {
            name,
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn parse(xml: &str) -> Result<Self, XmlTreeError> {
        let mut reader = NsReader::from_str(xml);
        let mut open: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_resolved_event()? {
                (ns, Event::Start(e)) => {
                    if root.is_some() {
                        return Err(XmlTreeError::TrailingContent);
                    }
                    if open.len() >= MAX_DEPTH {
                        return Err(XmlTreeError::TooDeep(MAX_DEPTH));
                    }
                    open.push(XmlElement::new(QualifiedName::resolve(
                        ns,
                        e.local_name().as_ref(),
                    )?));
                }
                (ns, Event::Empty(e)) => {
                    if root.is_some() {
                        return Err(XmlTreeError::TrailingContent);
                    }
                    if open.len() >= MAX_DEPTH {
                        return Err(XmlTreeError::TooDeep(MAX_DEPTH));
                    }
                    let element =
                        XmlElement::new(QualifiedName::resolve(ns, e.local_name().as_ref())?);
                    close(&mut open, &mut root, element);
                }
                (_, Event::End(_)) => {
                    // quick-xml rejects mismatched and unmatched end tags itself
                    if let Some(element) = open.pop() {
                        close(&mut open, &mut root, element);
                    }
                }
                (_, Event::Text(e)) => {
                    let text = e.unescape()?;
                    push_text(&mut open, &text)?;
                }
                (_, Event::CData(e)) => {
                    let text = String::from_utf8_lossy(&e).into_owned();
                    push_text(&mut open, &text)?;
                }
                (_, Event::Eof) => break,
                _ => {}
            }
        }

        if let Some(element) = open.last() {
            return Err(XmlTreeError::Unclosed(element.name.local.clone()));
        }
        root.ok_or(XmlTreeError::NoRoot)
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &QualifiedName) -> Option<&XmlElement> {
        self.children.iter().find(|c| &c.name == name)
    }

    pub fn children_named(&self, name: &QualifiedName) -> Vec<&XmlElement> {
        self.children.iter().filter(|c| &c.name == name).collect()
    }

    /// Descendants in document order, excluding `self`.
    pub fn descendants(&self) -> Vec<&XmlElement> {
        let mut out = Vec::new();
        let mut stack: Vec<&XmlElement> = self.children.iter().rev().collect();
        while let Some(element) = stack.pop() {
            out.push(element);
            stack.extend(element.children.iter().rev());
        }
        out
    }

    /// First descendant with the given name.
    pub fn find(&self, name: &QualifiedName) -> Option<&XmlElement> {
        self.descendants().into_iter().find(|e| &e.name == name)
    }

    pub fn find_all(&self, name: &QualifiedName) -> Vec<&XmlElement> {
        self.descendants()
            .into_iter()
            .filter(|e| &e.name == name)
            .collect()
    }
}

fn close(open: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
    match open.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

fn push_text(open: &mut [XmlElement], text: &str) -> Result<(), XmlTreeError> {
    match open.last_mut() {
        Some(parent) => {
            parent.text.push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(XmlTreeError::StrayText),
    }
}
