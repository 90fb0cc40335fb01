use crate::runtime::command::Command;
use crate::state::button::ButtonState;
use crate::state::notification::{NotificationId, Severity};
use crate::state::theme::ThemePreference;
use crate::submission::outcome::{AttemptId, Resolution};
use crate::terminal::TerminalEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    NotificationEntered(NotificationId),
    NotificationExpired(NotificationId),
    NotificationRemoved(NotificationId),
    ButtonReset(AttemptId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Terminal(TerminalEvent),
    Command(Command),
    Timer(TimerEvent),
    Resolved(Resolution),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    Button(ButtonState),
    FieldMarked { field: String, errored: bool },
    FormReset,
    NotificationShown {
        id: NotificationId,
        severity: Severity,
        message: String,
    },
    NotificationDismissed(NotificationId),
    ThemeChanged(ThemePreference),
}
