pub mod client;
pub mod dispatcher;
pub mod envelope;
pub mod interpreter;
pub mod xml;

pub use crate::domain::model::{
    CallOutcome, ClassRecord, Namespaces, OperationKind, RawResponse, RemoteOperation,
    SearchCriteria, ServiceFault,
};
pub use crate::domain::ports::{ConfigProvider, Transport};
pub use crate::utils::error::Result;
