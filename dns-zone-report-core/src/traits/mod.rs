//! Collaborator abstraction trait definitions

mod credential_provider;
mod progress_reporter;
mod provider_factory;
mod report_sink;

pub use credential_provider::{CredentialProvider, StaticCredentialProvider};
pub use progress_reporter::ProgressReporter;
pub use provider_factory::{DefaultProviderFactory, ProviderFactory};
pub use report_sink::{ReportSink, SheetId};
