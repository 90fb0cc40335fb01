use serde::Deserialize;
use std::fmt;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Shown,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub created_at: Instant,
    pub phase: Phase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackPolicy {
    /// At most one notification is visible; a new one evicts the rest.
    #[default]
    Replace,
    Stack,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shown {
    pub id: NotificationId,
    pub replaced: Vec<NotificationId>,
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
    policy: StackPolicy,
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new(policy: StackPolicy) -> Self {
        Self {
            policy,
            items: Vec::new(),
            next_id: 0,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, severity: Severity, now: Instant) -> Shown {
        let replaced = match self.policy {
            StackPolicy::Replace => self.items.drain(..).map(|item| item.id).collect(),
            StackPolicy::Stack => Vec::new(),
        };

        self.next_id = self.next_id.saturating_add(1);
        let id = NotificationId(self.next_id);
        self.items.push(Notification {
            id,
            message: message.into(),
            severity,
            created_at: now,
            phase: Phase::Entering,
        });

        Shown { id, replaced }
    }

    pub fn mark_shown(&mut self, id: NotificationId) -> bool {
        match self.get_mut(id) {
            Some(item) if item.phase == Phase::Entering => {
                item.phase = Phase::Shown;
                true
            }
            _ => false,
        }
    }

    pub fn begin_leaving(&mut self, id: NotificationId) -> bool {
        match self.get_mut(id) {
            Some(item) if item.phase != Phase::Leaving => {
                item.phase = Phase::Leaving;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn dismiss_newest(&mut self) -> Option<NotificationId> {
        self.items.pop().map(|item| item.id)
    }

    pub fn visible(&self) -> &[Notification] {
        &self.items
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|item| item.id == id)
    }

    fn get_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::{NotificationCenter, Phase, Severity, StackPolicy};
    use std::time::Instant;

    #[test]
    fn replace_policy_keeps_single_notification() {
        let now = Instant::now();
        let mut center = NotificationCenter::new(StackPolicy::Replace);
        let first = center.show("first", Severity::Info, now);
        let second = center.show("second", Severity::Error, now);

        assert!(first.replaced.is_empty());
        assert_eq!(second.replaced, vec![first.id]);
        assert_eq!(center.visible().len(), 1);
        assert_eq!(center.visible()[0].message, "second");
    }

    #[test]
    fn stack_policy_keeps_creation_order() {
        let now = Instant::now();
        let mut center = NotificationCenter::new(StackPolicy::Stack);
        center.show("first", Severity::Info, now);
        let second = center.show("second", Severity::Success, now);

        assert!(second.replaced.is_empty());
        let messages: Vec<_> = center.visible().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn phases_advance_forward_only() {
        let mut center = NotificationCenter::default();
        let shown = center.show("hello", Severity::Info, Instant::now());

        assert_eq!(center.get(shown.id).map(|n| n.phase), Some(Phase::Entering));
        assert!(center.mark_shown(shown.id));
        assert!(!center.mark_shown(shown.id));
        assert!(center.begin_leaving(shown.id));
        assert!(!center.begin_leaving(shown.id));
        assert!(!center.mark_shown(shown.id));
        assert!(center.remove(shown.id));
        assert!(!center.remove(shown.id));
    }

    #[test]
    fn dismissing_one_leaves_others_untouched() {
        let now = Instant::now();
        let mut center = NotificationCenter::new(StackPolicy::Stack);
        let first = center.show("first", Severity::Info, now);
        let second = center.show("second", Severity::Info, now);

        assert_eq!(center.dismiss_newest(), Some(second.id));
        assert!(center.get(first.id).is_some());
        assert!(!center.begin_leaving(second.id));
    }
}
