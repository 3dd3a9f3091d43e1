use super::{PersistenceGateway, SaveError};
use crate::core::entities::{SubmissionInput, SuccessToken};
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// Default round trip of the reference gateway.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// In-process stand-in for a remote store.
///
/// Every call sleeps on the runtime timer and then succeeds, unless a
/// non-zero `failure_rate` makes it fail at random.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
    failure_rate: f64,
}

impl SimulatedGateway {
    pub fn new(delay: Duration, failure_rate: f64) -> Self {
        Self {
            delay,
            failure_rate: failure_rate.clamp(0.0, 1.0),
        }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY, 0.0)
    }
}

#[async_trait]
impl PersistenceGateway for SimulatedGateway {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn save(&self, input: &SubmissionInput) -> Result<SuccessToken, SaveError> {
        tracing::trace!(name = %input.name, delay_ms = self.delay.as_millis() as u64, "simulating save");
        tokio::time::sleep(self.delay).await;

        let fail = self.failure_rate > 0.0 && rand::thread_rng().gen_bool(self.failure_rate);
        if fail {
            return Err(SaveError::Simulated);
        }
        Ok(SuccessToken::default())
    }
}
