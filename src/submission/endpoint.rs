use crate::core::field::FormSnapshot;
use crate::submission::outcome::SubmissionOutcome;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

pub type SubmissionJob = Box<dyn FnOnce() -> SubmissionOutcome + Send + 'static>;

pub enum Delivery {
    Deferred {
        delay: Duration,
        outcome: SubmissionOutcome,
    },
    Background(SubmissionJob),
}

impl std::fmt::Debug for Delivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deferred { delay, outcome } => f
                .debug_struct("Deferred")
                .field("delay", delay)
                .field("outcome", outcome)
                .finish(),
            Self::Background(_) => f.write_str("Background(..)"),
        }
    }
}

pub trait SubmissionEndpoint {
    fn submit(&mut self, snapshot: &FormSnapshot) -> Delivery;
}

pub struct SimulatedEndpoint<R = StdRng> {
    latency: Duration,
    success_rate: f64,
    rng: R,
}

impl SimulatedEndpoint<StdRng> {
    pub fn new(latency: Duration, success_rate: f64) -> Self {
        Self::with_rng(latency, success_rate, StdRng::from_entropy())
    }
}

impl<R: Rng> SimulatedEndpoint<R> {
    pub fn with_rng(latency: Duration, success_rate: f64, rng: R) -> Self {
        Self {
            latency,
            success_rate: success_rate.clamp(0.0, 1.0),
            rng,
        }
    }

    fn draw(&mut self) -> SubmissionOutcome {
        if self.rng.gen_bool(self.success_rate) {
            SubmissionOutcome::Success
        } else {
            SubmissionOutcome::network_error()
        }
    }
}

impl<R: Rng> SubmissionEndpoint for SimulatedEndpoint<R> {
    fn submit(&mut self, snapshot: &FormSnapshot) -> Delivery {
        let outcome = self.draw();
        tracing::debug!(
            fields = snapshot.fields().len(),
            success = outcome.is_success(),
            "simulated submission drawn"
        );
        Delivery::Deferred {
            delay: self.latency,
            outcome,
        }
    }
}
