use crate::core::dispatcher::HttpDispatcher;
use crate::core::envelope::EnvelopeBuilder;
use crate::core::interpreter::ResponseInterpreter;
use crate::domain::model::{CallOutcome, Namespaces, RemoteOperation, SearchCriteria};
use crate::domain::ports::{ConfigProvider, Transport};
use crate::utils::error::Result;

/// Entry point for the bestiary service: build, dispatch, interpret.
///
/// Calls are independent; nothing is kept between them.
pub struct BestiaryClient<T: Transport> {
    transport: T,
    builder: EnvelopeBuilder,
    interpreter: ResponseInterpreter,
}

impl BestiaryClient<HttpDispatcher> {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let namespaces = config.namespaces().clone();
        let transport = HttpDispatcher::new(
            config.endpoint(),
            namespaces.service.as_str(),
            config.timeout(),
        );
        Self::new(transport, namespaces)
    }
}

impl<T: Transport> BestiaryClient<T> {
    pub fn new(transport: T, namespaces: Namespaces) -> Self {
        Self {
            transport,
            builder: EnvelopeBuilder::new(namespaces.clone()),
            interpreter: ResponseInterpreter::new(namespaces),
        }
    }

    pub async fn search(&self, criteria: SearchCriteria) -> Result<CallOutcome> {
        if criteria.is_unrestricted() {
            tracing::debug!("Search without criteria; the server decides what matches");
        }
        self.call(&RemoteOperation::Search(criteria)).await
    }

    pub async fn list_all(&self) -> Result<CallOutcome> {
        self.call(&RemoteOperation::ListAll).await
    }

    pub async fn call(&self, operation: &RemoteOperation) -> Result<CallOutcome> {
        let envelope = self.builder.build(operation);
        tracing::debug!("Request envelope for {}:\n{}", operation.action(), envelope);

        let raw = self.transport.dispatch(&envelope, operation.action()).await?;
        tracing::info!("📡 {} answered with HTTP {}", operation.action(), raw.status);

        let outcome = self.interpreter.interpret(operation.kind(), &raw)?;
        match &outcome {
            CallOutcome::Records { records } => {
                tracing::info!("✅ {} returned {} record(s)", operation.action(), records.len());
            }
            CallOutcome::Fault(fault) => {
                tracing::warn!(
                    "⚠️ {} failed: {}",
                    operation.action(),
                    fault.message.as_deref().unwrap_or("<no faultstring>")
                );
            }
        }
        Ok(outcome)
    }
}
