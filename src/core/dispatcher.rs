use crate::domain::model::RawResponse;
use crate::domain::ports::Transport;
use crate::utils::error::{Result, SoapError};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

pub const XML_CONTENT_TYPE: &str = "text/xml; charset=utf-8";
pub const SOAP_ACTION_HEADER: &str = "SOAPAction";

/// Posts envelopes to a single SOAP endpoint over HTTP.
pub struct HttpDispatcher {
    client: Client,
    endpoint: String,
    service_namespace: String,
    timeout: Duration,
}

impl HttpDispatcher {
    pub fn new(
        endpoint: impl Into<String>,
        service_namespace: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            service_namespace: service_namespace.into(),
            timeout,
        }
    }

    pub fn soap_action(&self, action: &str) -> String {
        format!("\"{}{}\"", self.service_namespace, action)
    }

    fn transport_error(&self, source: reqwest::Error) -> SoapError {
        SoapError::TransportError {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}

#[async_trait::async_trait]
impl Transport for HttpDispatcher {
    async fn dispatch(&self, envelope: &str, action: &str) -> Result<RawResponse> {
        tracing::debug!("POST {} (SOAPAction {})", self.endpoint, self.soap_action(action));

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, XML_CONTENT_TYPE)
            .header(SOAP_ACTION_HEADER, self.soap_action(action))
            .timeout(self.timeout)
            .body(envelope.to_owned())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status().as_u16();
        tracing::debug!("HTTP status: {}", status);

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        tracing::debug!("Response body ({} bytes):\n{}", body.len(), body);

        Ok(RawResponse { status, body })
    }
}
