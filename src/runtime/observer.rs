use crate::runtime::event::StateChange;

pub trait StateObserver {
    fn on_change(&mut self, change: &StateChange);
}

impl<F> StateObserver for F
where
    F: FnMut(&StateChange),
{
    fn on_change(&mut self, change: &StateChange) {
        self(change)
    }
}

#[derive(Debug, Default)]
pub struct ChangeLog;

impl StateObserver for ChangeLog {
    fn on_change(&mut self, change: &StateChange) {
        match change {
            StateChange::Button(state) => tracing::info!(?state, "submit button"),
            StateChange::NotificationShown { id, severity, .. } => {
                tracing::info!(%id, ?severity, "notification shown")
            }
            StateChange::NotificationDismissed(id) => tracing::debug!(%id, "notification dismissed"),
            StateChange::FieldMarked { field, errored } => {
                tracing::debug!(field = field.as_str(), errored, "field mark")
            }
            StateChange::FormReset => tracing::info!("form reset"),
            StateChange::ThemeChanged(theme) => tracing::info!(%theme, "theme changed"),
        }
    }
}
