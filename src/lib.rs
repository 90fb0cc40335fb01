pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod prefs;
pub mod runtime;
pub mod state;
pub mod submission;
pub mod terminal;
pub mod ui;

pub use config::FolioConfig;
pub use error::{FolioError, Result};
