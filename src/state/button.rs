#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonState {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Accepted,
    Succeeded,
    Failed,
    ResetElapsed,
}

impl ButtonState {
    /// Returns the next state, or `None` when `event` is not legal from `self`.
    pub fn transition(self, event: ButtonEvent) -> Option<Self> {
        match (self, event) {
            (Self::Idle, ButtonEvent::Accepted) => Some(Self::Sending),
            (Self::Sending, ButtonEvent::Succeeded) => Some(Self::Sent),
            (Self::Sending, ButtonEvent::Failed) => Some(Self::Failed),
            (Self::Sent | Self::Failed, ButtonEvent::ResetElapsed) => Some(Self::Idle),
            _ => None,
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Self::Idle
    }
}
