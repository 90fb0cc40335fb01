pub mod command;
pub mod effect;
pub mod engine;
pub mod event;
pub mod key_bindings;
pub mod observer;
pub mod reducer;
pub mod runner;
pub mod scheduler;

pub use command::Command;
pub use effect::Effect;
pub use engine::Engine;
pub use event::{AppEvent, StateChange, TimerEvent};
pub use key_bindings::{KeyBinding, KeyBindings};
pub use observer::{ChangeLog, StateObserver};
pub use reducer::Reducer;
pub use runner::Runtime;
pub use scheduler::{Scheduler, SchedulerCommand, TimerKey};
