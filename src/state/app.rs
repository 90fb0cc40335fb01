use crate::config::{FolioConfig, Timings};
use crate::state::button::{ButtonEvent, ButtonState};
use crate::state::form::FormState;
use crate::state::notification::NotificationCenter;
use crate::state::theme::ThemePreference;
use crate::submission::outcome::AttemptId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackCopy {
    pub invalid: String,
    pub success: String,
    /// Already includes the fallback contact address.
    pub failure: String,
}

pub struct AppState {
    form: FormState,
    button: ButtonState,
    notifications: NotificationCenter,
    theme: ThemePreference,
    submit_label: String,
    copy: FeedbackCopy,
    timings: Timings,
    next_attempt: AttemptId,
    pending: Option<AttemptId>,
    should_exit: bool,
}

impl AppState {
    pub fn new(config: &FolioConfig, theme: ThemePreference) -> Self {
        Self {
            form: FormState::new(config.fields.clone()),
            button: ButtonState::Idle,
            notifications: NotificationCenter::new(config.notifications.policy),
            theme,
            submit_label: config.submit_label.clone(),
            copy: FeedbackCopy {
                invalid: config.messages.invalid.clone(),
                success: config.messages.success.clone(),
                failure: config.failure_message(),
            },
            timings: config.timings,
            next_attempt: AttemptId::first(),
            pending: None,
            should_exit: false,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn button(&self) -> ButtonState {
        self.button
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationCenter {
        &mut self.notifications
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> ThemePreference {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    pub fn copy(&self) -> &FeedbackCopy {
        &self.copy
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    pub fn pending_attempt(&self) -> Option<AttemptId> {
        self.pending
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }

    pub fn apply_button(&mut self, event: ButtonEvent) -> Option<ButtonState> {
        match self.button.transition(event) {
            Some(next) => {
                tracing::debug!(from = ?self.button, to = ?next, "button transition");
                self.button = next;
                Some(next)
            }
            None => {
                tracing::debug!(state = ?self.button, ?event, "button event rejected");
                None
            }
        }
    }

    pub fn begin_attempt(&mut self) -> Option<AttemptId> {
        self.apply_button(ButtonEvent::Accepted)?;
        let attempt = self.next_attempt;
        self.next_attempt = attempt.next();
        self.pending = Some(attempt);
        Some(attempt)
    }

    pub fn settle_attempt(&mut self, attempt: AttemptId) -> bool {
        if self.pending != Some(attempt) {
            return false;
        }
        self.pending = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::AppState;
    use crate::config::FolioConfig;
    use crate::state::button::{ButtonEvent, ButtonState};
    use crate::state::theme::ThemePreference;

    #[test]
    fn attempts_are_numbered_and_settled_once() {
        let mut state = AppState::new(&FolioConfig::default(), ThemePreference::Light);
        let first = state.begin_attempt().expect("idle accepts");
        assert_eq!(state.button(), ButtonState::Sending);
        assert!(state.begin_attempt().is_none());

        assert!(state.settle_attempt(first));
        assert!(!state.settle_attempt(first));

        state.apply_button(ButtonEvent::Failed);
        state.apply_button(ButtonEvent::ResetElapsed);
        let second = state.begin_attempt().expect("idle again");
        assert!(second > first);
    }

    #[test]
    fn failure_copy_carries_contact_address() {
        let state = AppState::new(&FolioConfig::default(), ThemePreference::Dark);
        assert!(state.copy().failure.contains("hello@example.com"));
        assert_eq!(state.theme(), ThemePreference::Dark);
    }
}
