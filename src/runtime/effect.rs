use crate::core::field::FormSnapshot;
use crate::runtime::event::StateChange;
use crate::runtime::scheduler::SchedulerCommand;
use crate::state::theme::ThemePreference;
use crate::submission::outcome::AttemptId;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Schedule(SchedulerCommand),
    Submit {
        attempt: AttemptId,
        snapshot: FormSnapshot,
    },
    PersistTheme(ThemePreference),
    Changed(StateChange),
    RequestRender,
}
