use crate::domain::model::{Namespaces, RemoteOperation};
use quick_xml::escape::escape;

/// Renders SOAP 1.1 request envelopes for the bestiary operations.
#[derive(Debug, Clone)]
pub struct EnvelopeBuilder {
    namespaces: Namespaces,
}

impl EnvelopeBuilder {
    pub fn new(namespaces: Namespaces) -> Self {
        Self { namespaces }
    }

    pub fn build(&self, operation: &RemoteOperation) -> String {
        let body = match operation {
            RemoteOperation::Search(criteria) => format!(
                concat!(
                    "    <ns:{action}>\n",
                    "       <Nome>{name}</Nome>\n",
                    "       <AtributoPrimario>{attribute}</AtributoPrimario>\n",
                    "    </ns:{action}>",
                ),
                action = operation.action(),
                name = escape(criteria.name()),
                attribute = escape(criteria.primary_attribute()),
            ),
            RemoteOperation::ListAll => format!("    <ns:{}/>", operation.action()),
        };

        format!(
            r#"<soap:Envelope xmlns:soap="{envelope}" xmlns:ns="{service}">
  <soap:Body>
{body}
  </soap:Body>
</soap:Envelope>
"#,
            envelope = escape(self.namespaces.envelope.as_str()),
            service = escape(self.namespaces.service.as_str()),
            body = body,
        )
    }
}
