use crate::runtime::command::Command;
use crate::runtime::effect::Effect;
use crate::runtime::event::{AppEvent, StateChange, TimerEvent};
use crate::runtime::scheduler::{SchedulerCommand, TimerKey};
use crate::state::app::AppState;
use crate::state::button::{ButtonEvent, ButtonState};
use crate::state::form::{Focus, MarkChanges};
use crate::state::notification::{NotificationId, Severity};
use crate::submission::outcome::{Resolution, SubmissionOutcome};
use std::time::Instant;

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, command: Command, now: Instant) -> Vec<Effect> {
        match command {
            Command::Exit => {
                state.request_exit();
                vec![Effect::RequestRender]
            }
            Command::NextFocus => {
                state.form_mut().focus_next();
                vec![Effect::RequestRender]
            }
            Command::PrevFocus => {
                state.form_mut().focus_prev();
                vec![Effect::RequestRender]
            }
            Command::Confirm => match state.form().focus() {
                Focus::Field(_) => {
                    state.form_mut().focus_next();
                    vec![Effect::RequestRender]
                }
                Focus::Submit => submit(state, now),
            },
            Command::Submit => submit(state, now),
            Command::InputKey(key) => match state.form_mut().apply_key(key) {
                Some(changes) => edited(changes),
                None => vec![],
            },
            Command::DeleteWordLeft => match state.form_mut().delete_word_left() {
                Some(changes) => edited(changes),
                None => vec![],
            },
            Command::ToggleTheme => {
                let theme = state.toggle_theme();
                vec![
                    Effect::PersistTheme(theme),
                    Effect::Changed(StateChange::ThemeChanged(theme)),
                    Effect::RequestRender,
                ]
            }
            Command::DismissNotification => match state.notifications_mut().dismiss_newest() {
                Some(id) => vec![
                    cancel_notification_timers(id),
                    Effect::Changed(StateChange::NotificationDismissed(id)),
                    Effect::RequestRender,
                ],
                None => vec![],
            },
            Command::Noop => vec![],
        }
    }

    pub fn on_timer(state: &mut AppState, timer: TimerEvent, now: Instant) -> Vec<Effect> {
        match timer {
            TimerEvent::NotificationEntered(id) => {
                if state.notifications_mut().mark_shown(id) {
                    vec![Effect::RequestRender]
                } else {
                    vec![]
                }
            }
            TimerEvent::NotificationExpired(id) => {
                if !state.notifications_mut().begin_leaving(id) {
                    return vec![];
                }
                let delay = state.timings().transition();
                vec![
                    Effect::Schedule(SchedulerCommand::EmitAfter {
                        key: TimerKey::Notification(id),
                        delay,
                        event: AppEvent::Timer(TimerEvent::NotificationRemoved(id)),
                    }),
                    Effect::RequestRender,
                ]
            }
            TimerEvent::NotificationRemoved(id) => {
                if let Some(notification) = state.notifications().get(id) {
                    let lifetime = now.saturating_duration_since(notification.created_at);
                    tracing::debug!(%id, ?lifetime, "notification removed");
                }
                if state.notifications_mut().remove(id) {
                    vec![
                        Effect::Changed(StateChange::NotificationDismissed(id)),
                        Effect::RequestRender,
                    ]
                } else {
                    vec![]
                }
            }
            TimerEvent::ButtonReset(attempt) => {
                let previous = state.button();
                if state.apply_button(ButtonEvent::ResetElapsed).is_none() {
                    tracing::debug!(%attempt, "reset timer found nothing to reset");
                    return vec![];
                }
                let mut effects = Vec::new();
                if previous == ButtonState::Sent {
                    state.form_mut().reset();
                    effects.push(Effect::Changed(StateChange::FormReset));
                }
                tracing::debug!(%attempt, ?now, "submit button re-enabled");
                effects.push(Effect::Changed(StateChange::Button(ButtonState::Idle)));
                effects.push(Effect::RequestRender);
                effects
            }
        }
    }

    pub fn on_resolution(state: &mut AppState, resolution: Resolution, now: Instant) -> Vec<Effect> {
        let Resolution { attempt, outcome } = resolution;
        if !state.settle_attempt(attempt) {
            tracing::warn!(%attempt, "ignoring resolution for an attempt that is not pending");
            return vec![];
        }

        let (event, message, severity) = match outcome {
            SubmissionOutcome::Success => {
                tracing::info!(%attempt, "submission succeeded");
                (ButtonEvent::Succeeded, state.copy().success.clone(), Severity::Success)
            }
            SubmissionOutcome::Failure(reason) => {
                tracing::warn!(%attempt, reason = reason.as_str(), "submission failed");
                (ButtonEvent::Failed, state.copy().failure.clone(), Severity::Error)
            }
        };

        let Some(button) = state.apply_button(event) else {
            return vec![];
        };
        let mut effects = vec![Effect::Changed(StateChange::Button(button))];
        effects.extend(show_notification(state, message, severity, now));
        effects.push(Effect::Schedule(SchedulerCommand::EmitAfter {
            key: TimerKey::ButtonReset,
            delay: state.timings().reset_delay(),
            event: AppEvent::Timer(TimerEvent::ButtonReset(attempt)),
        }));
        effects
    }
}

fn submit(state: &mut AppState, now: Instant) -> Vec<Effect> {
    if !state.button().is_enabled() {
        tracing::debug!(button = ?state.button(), "submit ignored while trigger is disabled");
        return vec![];
    }

    let (report, marks) = state.form_mut().validate_required();
    let mut effects = mark_effects(marks);
    if !report.is_valid() {
        tracing::info!(invalid = ?report.invalid(), "form rejected");
        let message = state.copy().invalid.clone();
        effects.extend(show_notification(state, message, Severity::Error, now));
        return effects;
    }

    let Some(attempt) = state.begin_attempt() else {
        return effects;
    };
    tracing::info!(%attempt, "form accepted, submitting");
    effects.push(Effect::Changed(StateChange::Button(ButtonState::Sending)));
    effects.push(Effect::Submit {
        attempt,
        snapshot: state.form().snapshot(),
    });
    effects.push(Effect::RequestRender);
    effects
}

fn show_notification(
    state: &mut AppState,
    message: String,
    severity: Severity,
    now: Instant,
) -> Vec<Effect> {
    let transition = state.timings().transition();
    let ttl = state.timings().notification_ttl();
    let shown = state
        .notifications_mut()
        .show(message.clone(), severity, now);

    let mut effects = Vec::new();
    for replaced in shown.replaced {
        effects.push(cancel_notification_timers(replaced));
        effects.push(Effect::Changed(StateChange::NotificationDismissed(replaced)));
    }

    let id = shown.id;
    effects.push(Effect::Changed(StateChange::NotificationShown {
        id,
        severity,
        message,
    }));
    effects.push(Effect::Schedule(SchedulerCommand::EmitAfter {
        key: TimerKey::Notification(id),
        delay: transition,
        event: AppEvent::Timer(TimerEvent::NotificationEntered(id)),
    }));
    effects.push(Effect::Schedule(SchedulerCommand::EmitAfter {
        key: TimerKey::Notification(id),
        delay: ttl,
        event: AppEvent::Timer(TimerEvent::NotificationExpired(id)),
    }));
    effects.push(Effect::RequestRender);
    effects
}

fn cancel_notification_timers(id: NotificationId) -> Effect {
    Effect::Schedule(SchedulerCommand::Cancel {
        key: TimerKey::Notification(id),
    })
}

fn edited(changes: MarkChanges) -> Vec<Effect> {
    let mut effects = mark_effects(changes);
    effects.push(Effect::RequestRender);
    effects
}

fn mark_effects(changes: MarkChanges) -> Vec<Effect> {
    changes
        .into_iter()
        .map(|(field, errored)| Effect::Changed(StateChange::FieldMarked { field, errored }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::Reducer;
    use crate::config::FolioConfig;
    use crate::runtime::command::Command;
    use crate::runtime::effect::Effect;
    use crate::runtime::event::{StateChange, TimerEvent};
    use crate::state::app::AppState;
    use crate::state::button::ButtonState;
    use crate::state::theme::ThemePreference;
    use crate::submission::outcome::{AttemptId, Resolution, SubmissionOutcome};
    use std::time::Instant;

    fn filled_state() -> AppState {
        let mut state = AppState::new(&FolioConfig::default(), ThemePreference::Light);
        state.form_mut().set_value("name", "Jo");
        state.form_mut().set_value("email", "a@b.c");
        state.form_mut().set_value("message", "Hi there");
        state
    }

    fn submits(effects: &[Effect]) -> usize {
        effects
            .iter()
            .filter(|effect| matches!(effect, Effect::Submit { .. }))
            .count()
    }

    #[test]
    fn invalid_form_never_submits() {
        let mut state = AppState::new(&FolioConfig::default(), ThemePreference::Light);
        let effects = Reducer::reduce(&mut state, Command::Submit, Instant::now());

        assert_eq!(submits(&effects), 0);
        assert_eq!(state.button(), ButtonState::Idle);
        assert_eq!(state.notifications().visible().len(), 1);
    }

    #[test]
    fn accepted_form_submits_once_while_sending() {
        let mut state = filled_state();
        let now = Instant::now();
        let first = Reducer::reduce(&mut state, Command::Submit, now);
        let second = Reducer::reduce(&mut state, Command::Submit, now);

        assert_eq!(submits(&first), 1);
        assert!(second.is_empty());
        assert_eq!(state.button(), ButtonState::Sending);
    }

    #[test]
    fn confirm_on_field_moves_focus_instead_of_submitting() {
        let mut state = filled_state();
        let effects = Reducer::reduce(&mut state, Command::Confirm, Instant::now());
        assert_eq!(submits(&effects), 0);
        assert_eq!(state.button(), ButtonState::Idle);
    }

    #[test]
    fn stale_resolution_is_ignored() {
        let mut state = filled_state();
        let effects = Reducer::on_resolution(
            &mut state,
            Resolution {
                attempt: AttemptId::first(),
                outcome: SubmissionOutcome::Success,
            },
            Instant::now(),
        );
        assert!(effects.is_empty());
        assert_eq!(state.button(), ButtonState::Idle);
    }

    #[test]
    fn reset_after_failure_keeps_fields() {
        let mut state = filled_state();
        let now = Instant::now();
        Reducer::reduce(&mut state, Command::Submit, now);
        let attempt = state.pending_attempt().expect("pending");
        Reducer::on_resolution(
            &mut state,
            Resolution {
                attempt,
                outcome: SubmissionOutcome::network_error(),
            },
            now,
        );
        assert_eq!(state.button(), ButtonState::Failed);

        let effects = Reducer::on_timer(&mut state, TimerEvent::ButtonReset(attempt), now);
        assert_eq!(state.button(), ButtonState::Idle);
        assert!(!effects.contains(&Effect::Changed(StateChange::FormReset)));
        assert_eq!(
            state.form().field("name").map(|s| s.field().value.as_str()),
            Some("Jo")
        );
    }

    #[test]
    fn toggling_theme_requests_persistence() {
        let mut state = AppState::new(&FolioConfig::default(), ThemePreference::Light);
        let effects = Reducer::reduce(&mut state, Command::ToggleTheme, Instant::now());
        assert!(matches!(
            effects.first(),
            Some(Effect::PersistTheme(ThemePreference::Dark))
        ));
    }
}
