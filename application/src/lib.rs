//! Application layer for outreach-scout
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{OutreachContext, PipelineConfig};
pub use ports::{
    mail_transport::{MailTransport, TransportError},
    page_fetcher::{FetchError, FetchedPage, PageFetcher},
    progress::{DispatchNotifier, NoDispatchNotifier, NoProgress, ProgressNotifier},
    text_generator::{GenerationError, TextGenerator},
};
pub use use_cases::dispatch_mail::{
    DEFAULT_SUBJECT, DispatchError, DispatchMailUseCase, job_for_result,
};
pub use use_cases::draft_outreach::DraftOutreachUseCase;
pub use use_cases::harvest_contacts::HarvestContactsUseCase;
pub use use_cases::run_outreach::{
    BatchOutcome, DomainFailure, RunOutreachError, RunOutreachInput, RunOutreachUseCase,
};
