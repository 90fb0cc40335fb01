use crate::runtime::event::AppEvent;
use crate::state::notification::NotificationId;
use crate::submission::outcome::AttemptId;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKey {
    Submission(AttemptId),
    ButtonReset,
    Notification(NotificationId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SchedulerCommand {
    EmitAfter {
        key: TimerKey,
        delay: Duration,
        event: AppEvent,
    },
    Cancel {
        key: TimerKey,
    },
}

#[derive(Debug, Clone)]
struct DelayedTask {
    due_at: Instant,
    seq: u64,
    key: TimerKey,
    event: AppEvent,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    delayed: Vec<DelayedTask>,
    seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, command: SchedulerCommand, now: Instant) {
        match command {
            SchedulerCommand::EmitAfter { key, delay, event } => {
                self.seq = self.seq.wrapping_add(1);
                self.delayed.push(DelayedTask {
                    due_at: now + delay,
                    seq: self.seq,
                    key,
                    event,
                });
            }
            SchedulerCommand::Cancel { key } => {
                self.delayed.retain(|task| task.key != key);
            }
        }
    }

    /// Pops the earliest task due at or before `now`, with its due time.
    /// Tasks due at the same instant come out in scheduling order.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, AppEvent)> {
        let idx = self
            .delayed
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due_at <= now)
            .min_by_key(|(_, task)| (task.due_at, task.seq))
            .map(|(idx, _)| idx)?;
        let task = self.delayed.swap_remove(idx);
        Some((task.due_at, task.event))
    }

    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        self.delayed
            .iter()
            .map(|task| task.due_at.saturating_duration_since(now))
            .fold(default_timeout, Duration::min)
    }

    pub fn is_scheduled(&self, key: TimerKey) -> bool {
        self.delayed.iter().any(|task| task.key == key)
    }

    pub fn len(&self) -> usize {
        self.delayed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delayed.is_empty()
    }
}
