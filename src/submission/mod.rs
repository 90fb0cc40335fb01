pub mod endpoint;
pub mod executor;
pub mod http;
pub mod outcome;

pub use endpoint::{Delivery, SimulatedEndpoint, SubmissionEndpoint, SubmissionJob};
pub use executor::SubmissionExecutor;
pub use http::HttpEndpoint;
pub use outcome::{AttemptId, Resolution, SubmissionOutcome};

use crate::config::{EndpointConfig, FolioConfig};
use std::time::Duration;

pub fn endpoint_from_config(config: &FolioConfig) -> Box<dyn SubmissionEndpoint> {
    match &config.endpoint {
        EndpointConfig::Simulated { success_rate } => Box::new(SimulatedEndpoint::new(
            config.timings.submit_latency(),
            *success_rate,
        )),
        EndpointConfig::Http { url, timeout_ms } => {
            Box::new(HttpEndpoint::new(url.clone(), Duration::from_millis(*timeout_ms)))
        }
    }
}
