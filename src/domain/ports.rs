use crate::domain::model::{Namespaces, RawResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn timeout(&self) -> Duration;
    fn namespaces(&self) -> &Namespaces;
}

/// Carries one rendered envelope to the service and hands back whatever it answered.
///
/// Any HTTP status is a successful dispatch; only failing to complete the
/// exchange is an error.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn dispatch(&self, envelope: &str, action: &str) -> Result<RawResponse>;
}
