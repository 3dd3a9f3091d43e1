pub mod config;
pub mod diagnostics;
pub mod entities;
pub mod error;
pub mod gateway;
pub mod history_recorder;
pub mod pipeline;
pub mod session;
pub mod stages;
pub mod types;
pub mod validation;

pub use config::{ConfigLoader, ConfigValidator, FormpipeConfig, GatewayKind};
pub use diagnostics::{DiagnosticReporter, TracingReporter};
pub use entities::{FailureEvent, SubmissionInput, SubmissionRecord, SuccessToken};
pub use error::AppError;
pub use gateway::{HttpGateway, PersistenceGateway, SaveError, SimulatedGateway};
pub use history_recorder::HistoryRecorder;
pub use pipeline::{SubmissionOutcome, SubmissionPipeline};
pub use session::FormSession;
pub use types::*;
pub use validation::{ValidationGate, Violation};
