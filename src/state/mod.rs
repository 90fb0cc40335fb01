pub mod app;
pub mod button;
pub mod form;
pub mod notification;
pub mod theme;

pub use app::{AppState, FeedbackCopy};
pub use button::{ButtonEvent, ButtonState};
pub use form::{Focus, FormState};
pub use notification::{Notification, NotificationCenter, NotificationId, Severity, StackPolicy};
pub use theme::ThemePreference;
