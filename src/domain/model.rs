use serde::{Deserialize, Serialize};

/// Placeholder reported for a result field missing from the response.
pub const MISSING_FIELD: &str = "N/A";

pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub const BESTIARY_SERVICE_NS: &str = "http://bestiario.rpg.com/";

/// Namespace URIs bound to the `soap` and `ns` prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Namespaces {
    pub envelope: String,
    pub service: String,
}

impl Default for Namespaces {
    fn default() -> Self {
        Self {
            envelope: SOAP_ENVELOPE_NS.to_string(),
            service: BESTIARY_SERVICE_NS.to_string(),
        }
    }
}

/// Search filters. An empty field places no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    name: String,
    primary_attribute: String,
}

impl SearchCriteria {
    pub fn new(name: impl AsRef<str>, primary_attribute: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            primary_attribute: primary_attribute.as_ref().trim().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primary_attribute(&self) -> &str {
        &self.primary_attribute
    }

    pub fn is_unrestricted(&self) -> bool {
        self.name.is_empty() && self.primary_attribute.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Search,
    ListAll,
}

impl OperationKind {
    pub fn action(self) -> &'static str {
        match self {
            OperationKind::Search => "PesquisarClasses",
            OperationKind::ListAll => "ListarTodasAsClasses",
        }
    }

    /// Local name of the element wrapping this operation's results.
    pub fn response_element(self) -> &'static str {
        match self {
            OperationKind::Search => "PesquisarClassesResponse",
            OperationKind::ListAll => "ListarTodasAsClassesResponse",
        }
    }

    /// The other operation. Both share the same result shape.
    pub fn alternate(self) -> Self {
        match self {
            OperationKind::Search => OperationKind::ListAll,
            OperationKind::ListAll => OperationKind::Search,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteOperation {
    Search(SearchCriteria),
    ListAll,
}

impl RemoteOperation {
    pub fn kind(&self) -> OperationKind {
        match self {
            RemoteOperation::Search(_) => OperationKind::Search,
            RemoteOperation::ListAll => OperationKind::ListAll,
        }
    }

    pub fn action(&self) -> &'static str {
        self.kind().action()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub name: String,
    pub life_die: String,
    pub primary_attribute: String,
    pub focus: String,
}

impl ClassRecord {
    /// True when no field fell back to [`MISSING_FIELD`].
    pub fn is_complete(&self) -> bool {
        [
            &self.name,
            &self.life_die,
            &self.primary_attribute,
            &self.focus,
        ]
        .iter()
        .all(|field| field.as_str() != MISSING_FIELD)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFault {
    pub status: u16,
    pub code: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CallOutcome {
    Records { records: Vec<ClassRecord> },
    Fault(ServiceFault),
}

impl CallOutcome {
    pub fn records(&self) -> Option<&[ClassRecord]> {
        match self {
            CallOutcome::Records { records } => Some(records.as_slice()),
            CallOutcome::Fault(_) => None,
        }
    }

    pub fn fault(&self) -> Option<&ServiceFault> {
        match self {
            CallOutcome::Records { .. } => None,
            CallOutcome::Fault(fault) => Some(fault),
        }
    }
}
