use folio::config::FolioConfig;
use folio::core::FormSnapshot;
use folio::prefs::ThemeStore;
use folio::runtime::{AppEvent, Command, Engine, StateChange, TimerKey};
use folio::state::notification::Phase;
use folio::state::{AppState, ButtonState, Severity, StackPolicy, ThemePreference};
use folio::submission::{Delivery, SubmissionEndpoint, SubmissionOutcome};
use folio::terminal::{KeyCode, KeyEvent, TerminalEvent};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Endpoint with a fixed verdict and the default simulated latency.
struct Scripted {
    outcome: SubmissionOutcome,
    calls: Rc<RefCell<Vec<FormSnapshot>>>,
}

impl SubmissionEndpoint for Scripted {
    fn submit(&mut self, snapshot: &FormSnapshot) -> Delivery {
        self.calls.borrow_mut().push(snapshot.clone());
        Delivery::Deferred {
            delay: Duration::from_millis(1500),
            outcome: self.outcome.clone(),
        }
    }
}

struct Harness {
    engine: Engine,
    changes: Rc<RefCell<Vec<StateChange>>>,
    calls: Rc<RefCell<Vec<FormSnapshot>>>,
    now: Instant,
}

impl Harness {
    fn new(config: &FolioConfig, outcome: SubmissionOutcome) -> Self {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let endpoint = Scripted {
            outcome,
            calls: Rc::clone(&calls),
        };
        let state = AppState::new(config, ThemePreference::Light);
        let mut engine = Engine::new(state, Box::new(endpoint));

        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        engine.subscribe(move |change: &StateChange| sink.borrow_mut().push(change.clone()));

        Self {
            engine,
            changes,
            calls,
            now: Instant::now(),
        }
    }

    fn with_outcome(outcome: SubmissionOutcome) -> Self {
        Self::new(&FolioConfig::default(), outcome)
    }

    fn command(&mut self, command: Command) {
        self.engine.handle(AppEvent::Command(command), self.now);
    }

    fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            let key = KeyEvent::plain(KeyCode::Char(ch));
            self.engine
                .handle(AppEvent::Terminal(TerminalEvent::Key(key)), self.now);
        }
    }

    fn key(&mut self, code: KeyCode) {
        self.engine
            .handle(AppEvent::Terminal(TerminalEvent::Key(KeyEvent::plain(code))), self.now);
    }

    fn wait(&mut self, ms: u64) {
        self.now += Duration::from_millis(ms);
        self.engine.advance(self.now);
    }

    /// Types into name, email, subject and message in focus order.
    fn fill(&mut self, name: &str, email: &str, message: &str) {
        self.type_text(name);
        self.key(KeyCode::Tab);
        self.type_text(email);
        self.key(KeyCode::Tab);
        self.key(KeyCode::Tab);
        self.type_text(message);
    }

    fn button_sequence(&self) -> Vec<ButtonState> {
        self.changes
            .borrow()
            .iter()
            .filter_map(|change| match change {
                StateChange::Button(state) => Some(*state),
                _ => None,
            })
            .collect()
    }

    fn shown(&self) -> Vec<(Severity, String)> {
        self.changes
            .borrow()
            .iter()
            .filter_map(|change| match change {
                StateChange::NotificationShown {
                    severity, message, ..
                } => Some((*severity, message.clone())),
                _ => None,
            })
            .collect()
    }

    fn value(&self, name: &str) -> String {
        self.engine
            .state()
            .form()
            .field(name)
            .map(|state| state.field().value.clone())
            .unwrap_or_default()
    }
}

#[test]
fn empty_required_fields_are_rejected() {
    let mut h = Harness::with_outcome(SubmissionOutcome::Success);
    h.command(Command::Submit);

    assert!(h.calls.borrow().is_empty());
    assert_eq!(h.engine.state().button(), ButtonState::Idle);
    assert!(h.button_sequence().is_empty());

    let shown = h.shown();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].0, Severity::Error);
    assert_eq!(shown[0].1, "Please fill in all required fields correctly.");

    let marked: Vec<String> = h
        .changes
        .borrow()
        .iter()
        .filter_map(|change| match change {
            StateChange::FieldMarked { field, errored: true } => Some(field.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(marked, vec!["name", "email", "message"]);
}

#[test]
fn successful_submission_clears_form_after_reset_delay() {
    let mut h = Harness::with_outcome(SubmissionOutcome::Success);
    h.fill("Jo", "a@b.c", "Hi there");
    h.command(Command::Submit);

    assert_eq!(h.engine.state().button(), ButtonState::Sending);
    assert_eq!(h.calls.borrow().len(), 1);
    assert_eq!(h.calls.borrow()[0].value("email"), Some("a@b.c"));

    // A second trigger while sending is ignored.
    h.command(Command::Submit);
    assert_eq!(h.calls.borrow().len(), 1);

    h.wait(1500);
    assert_eq!(h.engine.state().button(), ButtonState::Sent);
    assert_eq!(h.value("name"), "Jo");

    h.wait(3000);
    assert_eq!(
        h.button_sequence(),
        vec![ButtonState::Sending, ButtonState::Sent, ButtonState::Idle]
    );
    let shown = h.shown();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].0, Severity::Success);
    assert!(h.changes.borrow().contains(&StateChange::FormReset));
    assert_eq!(h.value("name"), "");
    assert_eq!(h.value("message"), "");
}

#[test]
fn failed_submission_keeps_fields_and_offers_contact_address() {
    let mut h = Harness::with_outcome(SubmissionOutcome::network_error());
    h.fill("Jo", "a@b.c", "Hi there");
    h.command(Command::Submit);
    h.wait(1500);
    assert_eq!(h.engine.state().button(), ButtonState::Failed);
    h.wait(3000);

    assert_eq!(
        h.button_sequence(),
        vec![ButtonState::Sending, ButtonState::Failed, ButtonState::Idle]
    );
    let shown = h.shown();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].0, Severity::Error);
    assert!(shown[0].1.contains("hello@example.com"));
    assert!(!h.changes.borrow().contains(&StateChange::FormReset));
    assert_eq!(h.value("name"), "Jo");
    assert_eq!(h.value("email"), "a@b.c");
}

#[test]
fn second_notification_replaces_the_first() {
    let mut h = Harness::with_outcome(SubmissionOutcome::Success);
    h.command(Command::Submit);
    h.wait(100);
    h.command(Command::Submit);

    let visible = h.engine.state().notifications().visible();
    assert_eq!(visible.len(), 1);
    let first = {
        let changes = h.changes.borrow();
        changes
            .iter()
            .find_map(|change| match change {
                StateChange::NotificationShown { id, .. } => Some(*id),
                _ => None,
            })
            .expect("first notification")
    };
    assert!(h
        .changes
        .borrow()
        .contains(&StateChange::NotificationDismissed(first)));
    let survivor = visible[0].id;
    assert_ne!(survivor, first);

    let scheduler = h.engine.scheduler();
    assert!(!scheduler.is_scheduled(TimerKey::Notification(first)));
    assert!(scheduler.is_scheduled(TimerKey::Notification(survivor)));
}

#[test]
fn notification_enters_expires_and_is_removed() {
    let mut h = Harness::with_outcome(SubmissionOutcome::Success);
    h.command(Command::Submit);
    let phase = |h: &Harness| h.engine.state().notifications().visible().first().map(|n| n.phase);

    assert_eq!(phase(&h), Some(Phase::Entering));
    h.wait(300);
    assert_eq!(phase(&h), Some(Phase::Shown));
    h.wait(5700);
    assert_eq!(phase(&h), Some(Phase::Leaving));
    h.wait(300);
    assert_eq!(phase(&h), None);
}

#[test]
fn stacked_notifications_expire_independently() {
    let mut config = FolioConfig::default();
    config.notifications.policy = StackPolicy::Stack;
    let mut h = Harness::new(&config, SubmissionOutcome::Success);

    h.command(Command::Submit);
    h.wait(2000);
    h.command(Command::Submit);
    assert_eq!(h.engine.state().notifications().visible().len(), 2);

    h.wait(4000 + 300);
    assert_eq!(h.engine.state().notifications().visible().len(), 1);
    h.wait(2000);
    assert!(h.engine.state().notifications().visible().is_empty());
}

#[test]
fn manual_dismiss_removes_immediately() {
    let mut h = Harness::with_outcome(SubmissionOutcome::Success);
    h.command(Command::Submit);
    h.command(Command::DismissNotification);
    assert!(h.engine.state().notifications().visible().is_empty());
    h.wait(10_000);
    assert!(h.engine.state().notifications().visible().is_empty());
}

#[test]
fn enter_on_fields_moves_focus_then_submits() {
    let mut h = Harness::with_outcome(SubmissionOutcome::Success);
    h.type_text("Jo");
    h.key(KeyCode::Enter);
    h.type_text("a@b.c");
    h.key(KeyCode::Enter);
    h.key(KeyCode::Enter);
    h.type_text("Hello");
    assert!(h.calls.borrow().is_empty());
    h.key(KeyCode::Enter);
    h.key(KeyCode::Enter);
    assert_eq!(h.calls.borrow().len(), 1);
}

#[test]
fn unbound_control_keys_leave_fields_untouched() {
    let mut h = Harness::with_outcome(SubmissionOutcome::Success);
    for key in [KeyEvent::ctrl('a'), KeyEvent::ctrl('q')] {
        h.engine.handle(AppEvent::Terminal(TerminalEvent::Key(key)), h.now);
    }
    assert_eq!(h.value("name"), "");
    assert!(h.changes.borrow().is_empty());
}

#[test]
fn theme_toggle_is_persisted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ThemeStore::new(dir.path().join("prefs").join("preferences.json"));
    let state = AppState::new(&FolioConfig::default(), ThemePreference::Light);
    let endpoint = Scripted {
        outcome: SubmissionOutcome::Success,
        calls: Rc::default(),
    };
    let mut engine = Engine::new(state, Box::new(endpoint)).with_theme_store(store.clone());

    engine.handle(
        AppEvent::Terminal(TerminalEvent::Key(KeyEvent::ctrl('t'))),
        Instant::now(),
    );
    assert_eq!(engine.state().theme(), ThemePreference::Dark);
    assert_eq!(store.load().expect("load"), ThemePreference::Dark);

    let raw = std::fs::read_to_string(store.path()).expect("read");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(json["portfolio-theme"], "dark");
}
