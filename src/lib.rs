pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::TomlConfig;
pub use crate::core::{client::BestiaryClient, dispatcher::HttpDispatcher};
pub use domain::model::{CallOutcome, ClassRecord, SearchCriteria, ServiceFault};
pub use utils::error::{Result, SoapError};
