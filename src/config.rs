use crate::core::field::{Field, FieldKind};
use crate::error::{FolioError, Result};
use crate::state::notification::StackPolicy;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FolioConfig {
    pub fields: Vec<Field>,
    pub contact_address: String,
    pub submit_label: String,
    pub messages: Messages,
    pub timings: Timings,
    pub notifications: NotificationConfig,
    pub endpoint: EndpointConfig,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            fields: vec![
                Field::new("name", "Name", FieldKind::ShortText)
                    .required()
                    .with_placeholder("Your name"),
                Field::new("email", "Email", FieldKind::Email)
                    .required()
                    .with_placeholder("you@example.com"),
                Field::new("subject", "Subject", FieldKind::ShortText),
                Field::new("message", "Message", FieldKind::ShortText)
                    .required()
                    .with_placeholder("What would you like to talk about?"),
            ],
            contact_address: "hello@example.com".to_string(),
            submit_label: "Send Message".to_string(),
            messages: Messages::default(),
            timings: Timings::default(),
            notifications: NotificationConfig::default(),
            endpoint: EndpointConfig::default(),
        }
    }
}

impl FolioConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path).map_err(|err| FolioError::io(path, err))?;
        let config = Self::from_yaml(&raw).map_err(|source| FolioError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(raw: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(raw)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err(FolioError::InvalidConfig("field with empty name".to_string()));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(FolioError::InvalidConfig(format!(
                    "duplicate field name '{}'",
                    field.name
                )));
            }
        }
        match &self.endpoint {
            EndpointConfig::Simulated { success_rate } if !(0.0..=1.0).contains(success_rate) => {
                Err(FolioError::InvalidConfig(format!(
                    "success_rate must be within 0..=1, got {success_rate}"
                )))
            }
            EndpointConfig::Http { url, .. } if url.trim().is_empty() => Err(
                FolioError::InvalidConfig("http endpoint needs a url".to_string()),
            ),
            _ => Ok(()),
        }
    }

    pub fn failure_message(&self) -> String {
        format!("{} {}", self.messages.failure, self.contact_address)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Messages {
    pub invalid: String,
    pub success: String,
    pub failure: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            invalid: "Please fill in all required fields correctly.".to_string(),
            success: "Thank you! Your message has been sent successfully. I'll get back to you soon."
                .to_string(),
            failure: "Sorry, there was an error sending your message. Please try again or contact me directly at"
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Timings {
    pub submit_latency_ms: u64,
    pub reset_delay_ms: u64,
    pub notification_ttl_ms: u64,
    pub transition_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            submit_latency_ms: 1_500,
            reset_delay_ms: 3_000,
            notification_ttl_ms: 6_000,
            transition_ms: 300,
        }
    }
}

impl Timings {
    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotificationConfig {
    pub policy: StackPolicy,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EndpointConfig {
    Simulated {
        #[serde(default = "default_success_rate")]
        success_rate: f64,
    },
    Http {
        url: String,
        #[serde(default = "default_http_timeout_ms")]
        timeout_ms: u64,
    },
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::Simulated {
            success_rate: default_success_rate(),
        }
    }
}

fn default_success_rate() -> f64 {
    0.95
}

fn default_http_timeout_ms() -> u64 {
    10_000
}
