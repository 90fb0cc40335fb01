use crate::prefs::ThemeStore;
use crate::runtime::command::Command;
use crate::runtime::effect::Effect;
use crate::runtime::event::{AppEvent, StateChange};
use crate::runtime::key_bindings::KeyBindings;
use crate::runtime::observer::StateObserver;
use crate::runtime::reducer::Reducer;
use crate::runtime::scheduler::{Scheduler, SchedulerCommand, TimerKey};
use crate::state::app::AppState;
use crate::submission::endpoint::{Delivery, SubmissionEndpoint};
use crate::submission::executor::SubmissionExecutor;
use crate::submission::outcome::Resolution;
use crate::terminal::TerminalEvent;
use std::time::{Duration, Instant};

pub struct Engine {
    state: AppState,
    scheduler: Scheduler,
    endpoint: Box<dyn SubmissionEndpoint>,
    executor: SubmissionExecutor,
    key_bindings: KeyBindings,
    theme_store: Option<ThemeStore>,
    observers: Vec<Box<dyn StateObserver>>,
}

impl Engine {
    pub fn new(state: AppState, endpoint: Box<dyn SubmissionEndpoint>) -> Self {
        Self {
            state,
            scheduler: Scheduler::new(),
            endpoint,
            executor: SubmissionExecutor::new(),
            key_bindings: KeyBindings::new(),
            theme_store: None,
            observers: Vec::new(),
        }
    }

    pub fn with_theme_store(mut self, store: ThemeStore) -> Self {
        self.theme_store = Some(store);
        self
    }

    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn handle(&mut self, event: AppEvent, now: Instant) -> bool {
        let effects = match event {
            AppEvent::Terminal(TerminalEvent::Key(key)) => {
                let command = self
                    .key_bindings
                    .resolve(key)
                    .unwrap_or(Command::InputKey(key));
                Reducer::reduce(&mut self.state, command, now)
            }
            AppEvent::Terminal(TerminalEvent::Resize(_)) => return true,
            AppEvent::Terminal(TerminalEvent::Tick) => return false,
            AppEvent::Command(command) => Reducer::reduce(&mut self.state, command, now),
            AppEvent::Timer(timer) => Reducer::on_timer(&mut self.state, timer, now),
            AppEvent::Resolved(resolution) => {
                self.scheduler.schedule(
                    SchedulerCommand::Cancel {
                        key: TimerKey::Submission(resolution.attempt),
                    },
                    now,
                );
                Reducer::on_resolution(&mut self.state, resolution, now)
            }
        };
        self.apply_effects(effects, now)
    }

    /// Fires every timer due at or before `now`, then collects finished
    /// background submissions. Each timer runs at its own due time.
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut render_requested = false;
        while let Some((due_at, event)) = self.scheduler.pop_due(now) {
            render_requested |= self.handle(event, due_at);
        }
        for resolution in self.executor.drain_ready() {
            render_requested |= self.handle(AppEvent::Resolved(resolution), now);
        }
        render_requested
    }

    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        self.scheduler.poll_timeout(now, default_timeout)
    }

    fn apply_effects(&mut self, effects: Vec<Effect>, now: Instant) -> bool {
        let mut render_requested = false;

        for effect in effects {
            match effect {
                Effect::Schedule(cmd) => self.scheduler.schedule(cmd, now),
                Effect::Submit { attempt, snapshot } => {
                    tracing::debug!(%attempt, fields = snapshot.fields().len(), "dispatching submission");
                    match self.endpoint.submit(&snapshot) {
                        Delivery::Deferred { delay, outcome } => {
                            self.scheduler.schedule(
                                SchedulerCommand::EmitAfter {
                                    key: TimerKey::Submission(attempt),
                                    delay,
                                    event: AppEvent::Resolved(Resolution { attempt, outcome }),
                                },
                                now,
                            );
                        }
                        Delivery::Background(job) => self.executor.spawn(attempt, job),
                    }
                }
                Effect::PersistTheme(theme) => {
                    if let Some(store) = &self.theme_store
                        && let Err(err) = store.save(theme)
                    {
                        tracing::warn!(error = %err, "could not persist theme preference");
                    }
                }
                Effect::Changed(change) => self.notify(&change),
                Effect::RequestRender => render_requested = true,
            }
        }

        render_requested
    }

    fn notify(&mut self, change: &StateChange) {
        for observer in &mut self.observers {
            observer.on_change(change);
        }
    }
}
