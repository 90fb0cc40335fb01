use crate::core::field::FormSnapshot;
use crate::submission::endpoint::{Delivery, SubmissionEndpoint};
use crate::submission::outcome::SubmissionOutcome;
use std::time::Duration;

pub struct HttpEndpoint {
    url: String,
    agent: ureq::Agent,
}

impl HttpEndpoint {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            url: url.into(),
            agent,
        }
    }
}

impl SubmissionEndpoint for HttpEndpoint {
    fn submit(&mut self, snapshot: &FormSnapshot) -> Delivery {
        let body = match serde_json::to_string(&snapshot.values()) {
            Ok(body) => body,
            Err(err) => {
                return Delivery::Deferred {
                    delay: Duration::ZERO,
                    outcome: SubmissionOutcome::Failure(format!("encode failed: {err}")),
                };
            }
        };
        let agent = self.agent.clone();
        let url = self.url.clone();
        Delivery::Background(Box::new(move || post(&agent, &url, &body)))
    }
}

fn post(agent: &ureq::Agent, url: &str, body: &str) -> SubmissionOutcome {
    let result = agent
        .post(url)
        .set("Content-Type", "application/json")
        .set("Accept", "application/json")
        .send_string(body);

    match result {
        Ok(response) => {
            tracing::info!(status = response.status(), url, "form submitted");
            SubmissionOutcome::Success
        }
        Err(ureq::Error::Status(code, _)) => {
            tracing::warn!(status = code, url, "form endpoint rejected submission");
            SubmissionOutcome::Failure(format!("server responded with status {code}"))
        }
        Err(ureq::Error::Transport(transport)) => {
            tracing::warn!(error = %transport, url, "form endpoint unreachable");
            SubmissionOutcome::Failure(classify_transport(&transport))
        }
    }
}

fn classify_transport(transport: &ureq::Transport) -> String {
    let message = transport.to_string();
    if message.to_ascii_lowercase().contains("timed out") {
        "timeout".to_string()
    } else {
        format!("network error: {}", transport.kind())
    }
}
