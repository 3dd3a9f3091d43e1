#![allow(clippy::result_large_err)]

use crate::core::config::FormpipeConfig;
use crate::core::diagnostics::{DiagnosticReporter, TracingReporter};
use crate::core::entities::{FailureEvent, SubmissionInput, SubmissionRecord};
use crate::core::error::AppError;
use crate::core::gateway::{self, PersistenceGateway};
use crate::core::session::FormSession;
use crate::core::stages::{
    apply_transforms, AlternatingNameOverride, ErrorStage, IndexStage, RecordTransform,
    RecordingStage,
};
use crate::core::types::SubmissionPhase;
use crate::core::validation::{ValidationGate, Violation};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

/// Terminal result of one submission.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// The input failed the validation gate; nothing else happened.
    Rejected(Vec<Violation>),
    /// The save succeeded and the record was appended to the history.
    Recorded(SubmissionRecord),
    /// The save failed; carries the re-signalled error.
    Failed(AppError),
}

impl SubmissionOutcome {
    pub fn phase(&self) -> SubmissionPhase {
        match self {
            SubmissionOutcome::Rejected(_) => SubmissionPhase::Rejected,
            SubmissionOutcome::Recorded(_) => SubmissionPhase::Done,
            SubmissionOutcome::Failed(_) => SubmissionPhase::Failed,
        }
    }

    pub fn is_recorded(&self) -> bool {
        matches!(self, SubmissionOutcome::Recorded(_))
    }

    pub fn record(&self) -> Option<&SubmissionRecord> {
        match self {
            SubmissionOutcome::Recorded(record) => Some(record),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            SubmissionOutcome::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Runs submissions through validation, the gateway and the record stages.
///
/// The pipeline holds no per-submission state: any number of submissions may
/// be suspended on the gateway at once, and each resumes independently.
pub struct SubmissionPipeline {
    session: Arc<FormSession>,
    gateway: Arc<dyn PersistenceGateway>,
    transforms: Vec<Box<dyn RecordTransform>>,
    reporter: Box<dyn DiagnosticReporter>,
    failure_tx: Option<mpsc::UnboundedSender<FailureEvent>>,
}

impl SubmissionPipeline {
    /// Pipeline with the default name override and a tracing reporter.
    pub fn new(session: Arc<FormSession>, gateway: Arc<dyn PersistenceGateway>) -> Self {
        Self {
            session,
            gateway,
            transforms: vec![Box::new(AlternatingNameOverride::default())],
            reporter: Box::new(TracingReporter::new()),
            failure_tx: None,
        }
    }

    /// Build the gateway and transforms described by configuration.
    pub fn from_config(
        config: &FormpipeConfig,
        session: Arc<FormSession>,
    ) -> Result<Self, AppError> {
        let gateway = gateway::from_config(&config.gateway)?;
        Ok(Self::new(session, gateway).with_transforms(vec![Box::new(
            AlternatingNameOverride::new(config.mutation.override_name.clone()),
        )]))
    }

    /// Replace the whole transform chain, including the default name override.
    pub fn with_transforms(mut self, transforms: Vec<Box<dyn RecordTransform>>) -> Self {
        self.transforms = transforms;
        self
    }

    /// Append a transform after the ones already configured.
    pub fn add_transform(mut self, transform: Box<dyn RecordTransform>) -> Self {
        self.transforms.push(transform);
        self
    }

    pub fn transform_names(&self) -> Vec<&'static str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }

    pub fn with_reporter(mut self, reporter: Box<dyn DiagnosticReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Attach a channel that receives one event per failed save.
    pub fn with_failure_channel(mut self) -> (Self, mpsc::UnboundedReceiver<FailureEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        self.failure_tx = Some(tx);
        (self, rx)
    }

    pub fn gateway_name(&self) -> &'static str {
        self.gateway.name()
    }

    /// Submit whatever is currently staged in the session's form.
    pub async fn submit_form(&self) -> SubmissionOutcome {
        let input = self.session.draft();
        self.submit(input).await
    }

    /// Start a submission on the runtime and return without waiting for it.
    pub fn spawn_submit(self: &Arc<Self>, input: SubmissionInput) -> JoinHandle<SubmissionOutcome> {
        let pipeline = Arc::clone(self);
        tokio::spawn(async move { pipeline.submit(input).await })
    }

    /// Run one submission to a terminal phase.
    pub async fn submit(&self, input: SubmissionInput) -> SubmissionOutcome {
        let submission_id = Uuid::new_v4();
        let span = tracing::debug_span!("submission", %submission_id);
        self.run(submission_id, input).instrument(span).await
    }

    async fn run(&self, submission_id: Uuid, input: SubmissionInput) -> SubmissionOutcome {
        enter(SubmissionPhase::Validating);
        let violations = ValidationGate::violations(&input);
        if !violations.is_empty() {
            enter(SubmissionPhase::Rejected);
            self.reporter
                .report_rejection(submission_id, &input, &violations);
            return SubmissionOutcome::Rejected(violations);
        }

        enter(SubmissionPhase::Saving);
        match self.gateway.save(&input).await {
            Ok(token) => {
                enter(SubmissionPhase::Persisted);
                tracing::debug!(gateway = self.gateway.name(), token = token.as_str(), "save completed");
                let record = self.complete(submission_id, input);
                enter(SubmissionPhase::Done);
                SubmissionOutcome::Recorded(record)
            }
            Err(cause) => {
                enter(SubmissionPhase::ErrorReporting);
                let error = ErrorStage::intercept(submission_id, cause, self.reporter.as_ref());
                self.signal_failure(submission_id, &error);
                enter(SubmissionPhase::Failed);
                SubmissionOutcome::Failed(error)
            }
        }
    }

    /// Success path stages. Index, transforms and the append share one
    /// session lock; the history report runs after it is released.
    fn complete(&self, submission_id: Uuid, input: SubmissionInput) -> SubmissionRecord {
        let snapshot = {
            let mut state = self.session.lock();

            enter(SubmissionPhase::Transforming);
            let indexed = IndexStage::assign(input, &mut state);

            enter(SubmissionPhase::Mutating);
            let record = apply_transforms(&self.transforms, indexed.record, indexed.counter_after);

            enter(SubmissionPhase::Recording);
            RecordingStage::record(record, &mut state)
        };
        RecordingStage::emit(submission_id, snapshot, self.reporter.as_ref())
    }

    fn signal_failure(&self, submission_id: Uuid, error: &AppError) {
        let Some(tx) = &self.failure_tx else {
            return;
        };
        let event = FailureEvent {
            submission_id,
            code: error.code.clone(),
            message: error.message.clone(),
            occurred_at: error.occurred_at,
        };
        if tx.send(event).is_err() {
            tracing::debug!(%submission_id, "failure channel closed; event dropped");
        }
    }
}

fn enter(phase: SubmissionPhase) {
    if phase.is_terminal() {
        tracing::debug!(%phase, "submission finished");
    } else {
        tracing::trace!(%phase, "submission phase");
    }
}
