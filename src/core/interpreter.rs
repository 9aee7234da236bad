use crate::core::xml::{QualifiedName, XmlElement};
use crate::domain::model::{
    CallOutcome, ClassRecord, Namespaces, OperationKind, RawResponse, ServiceFault, MISSING_FIELD,
};
use crate::utils::error::{Result, SoapError};

const RESULT_ENTRY: &str = "return";
const FIELD_NAME: &str = "Nome";
const FIELD_LIFE_DIE: &str = "DadoVida";
const FIELD_PRIMARY_ATTRIBUTE: &str = "AtributoPrimario";
const FIELD_FOCUS: &str = "Foco";
const FAULT_STRING: &str = "faultstring";
const FAULT_CODE: &str = "faultcode";

/// One place a result list may live: entries named `entry` under a `container`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePath {
    pub source: OperationKind,
    pub container: QualifiedName,
    pub entry: QualifiedName,
}

/// Candidate result locations, tried in order; the first container found wins.
///
/// Both operations answer with the same entry shape, so a response to one may
/// arrive wrapped in the other's container.
#[derive(Debug, Clone)]
pub struct ResponseLookup {
    candidates: Vec<ResponsePath>,
}

impl ResponseLookup {
    pub fn for_operation(invoked: OperationKind, namespaces: &Namespaces) -> Self {
        let path = |source: OperationKind| ResponsePath {
            source,
            container: QualifiedName::new(namespaces.service.as_str(), source.response_element()),
            entry: QualifiedName::unqualified(RESULT_ENTRY),
        };
        Self {
            candidates: vec![path(invoked), path(invoked.alternate())],
        }
    }

    pub fn resolve<'a>(
        &self,
        root: &'a XmlElement,
    ) -> Option<(&ResponsePath, Vec<&'a XmlElement>)> {
        self.candidates.iter().find_map(|path| {
            let containers = root.find_all(&path.container);
            if containers.is_empty() {
                return None;
            }
            let entries = containers
                .into_iter()
                .flat_map(|c| c.children_named(&path.entry))
                .collect();
            Some((path, entries))
        })
    }
}

#[derive(Debug, Clone)]
pub struct ResponseInterpreter {
    namespaces: Namespaces,
}

impl ResponseInterpreter {
    pub fn new(namespaces: Namespaces) -> Self {
        Self { namespaces }
    }

    pub fn interpret(&self, invoked: OperationKind, raw: &RawResponse) -> Result<CallOutcome> {
        if raw.is_success() {
            let records = self.interpret_success(invoked, raw)?;
            Ok(CallOutcome::Records { records })
        } else {
            Ok(CallOutcome::Fault(self.interpret_fault(raw)?))
        }
    }

    fn parse(&self, raw: &RawResponse) -> Result<XmlElement> {
        XmlElement::parse(&raw.body).map_err(|e| SoapError::MalformedResponse {
            status: raw.status,
            reason: e.to_string(),
            raw: raw.body.clone(),
        })
    }

    fn interpret_success(
        &self,
        invoked: OperationKind,
        raw: &RawResponse,
    ) -> Result<Vec<ClassRecord>> {
        let root = self.parse(raw)?;
        let lookup = ResponseLookup::for_operation(invoked, &self.namespaces);

        let Some((path, entries)) = lookup.resolve(&root) else {
            tracing::debug!(
                "No {} or {} element in response",
                invoked.response_element(),
                invoked.alternate().response_element()
            );
            return Ok(Vec::new());
        };

        if path.source != invoked {
            tracing::debug!(
                "{} answered inside {}",
                invoked.action(),
                path.container.local
            );
        }

        let records: Vec<ClassRecord> = entries
            .into_iter()
            .map(|entry| self.extract_record(entry))
            .collect();

        let partial = records.iter().filter(|r| !r.is_complete()).count();
        if partial > 0 {
            tracing::debug!("{} of {} record(s) have missing fields", partial, records.len());
        }
        Ok(records)
    }

    fn extract_record(&self, entry: &XmlElement) -> ClassRecord {
        let field = |local: &str| {
            entry
                .child(&QualifiedName::new(self.namespaces.service.as_str(), local))
                .map(|e| e.text.clone())
                .unwrap_or_else(|| MISSING_FIELD.to_string())
        };

        ClassRecord {
            name: field(FIELD_NAME),
            life_die: field(FIELD_LIFE_DIE),
            primary_attribute: field(FIELD_PRIMARY_ATTRIBUTE),
            focus: field(FIELD_FOCUS),
        }
    }

    fn interpret_fault(&self, raw: &RawResponse) -> Result<ServiceFault> {
        let root = self.parse(raw)?;
        let text_of = |local: &str| {
            root.find(&QualifiedName::unqualified(local))
                .map(|e| e.text.clone())
        };

        let fault = ServiceFault {
            status: raw.status,
            code: text_of(FAULT_CODE),
            message: text_of(FAULT_STRING),
        };

        if fault.message.is_none() {
            tracing::warn!("Server signalled a fault (HTTP {}) without a faultstring", raw.status);
        }
        Ok(fault)
    }
}
