use crate::state::button::ButtonState;
use crate::state::notification::Severity;
use crate::state::theme::ThemePreference;
use crate::ui::style::{Color, Style};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub text: Style,
    pub muted: Style,
    pub accent: Style,
    pub error: Style,
    pub success: Style,
    pub info: Style,
    pub button_idle: Style,
    pub button_busy: Style,
    pub button_sent: Style,
    pub button_failed: Style,
}

impl Palette {
    pub fn for_theme(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Light => Self {
                text: Style::new().color(Color::Black),
                muted: Style::new().color(Color::DarkGrey),
                accent: Style::new().color(Color::Rgb(33, 128, 141)).bold(),
                error: Style::new().color(Color::Rgb(192, 21, 47)).bold(),
                success: Style::new().color(Color::Rgb(33, 128, 141)).bold(),
                info: Style::new().color(Color::Blue),
                button_idle: Style::new().color(Color::White).background(Color::Rgb(33, 128, 141)).bold(),
                button_busy: Style::new().color(Color::White).background(Color::DarkGrey),
                button_sent: Style::new().color(Color::White).background(Color::Green).bold(),
                button_failed: Style::new().color(Color::White).background(Color::Red).bold(),
            },
            ThemePreference::Dark => Self {
                text: Style::new().color(Color::White),
                muted: Style::new().color(Color::Grey),
                accent: Style::new().color(Color::Rgb(50, 184, 198)).bold(),
                error: Style::new().color(Color::Rgb(255, 84, 89)).bold(),
                success: Style::new().color(Color::Rgb(50, 184, 198)).bold(),
                info: Style::new().color(Color::Cyan),
                button_idle: Style::new().color(Color::Black).background(Color::Rgb(50, 184, 198)).bold(),
                button_busy: Style::new().color(Color::White).background(Color::DarkGrey),
                button_sent: Style::new().color(Color::Black).background(Color::Green).bold(),
                button_failed: Style::new().color(Color::White).background(Color::Red).bold(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonAppearance {
    pub label: String,
    pub enabled: bool,
    pub style: Style,
}

pub fn button_appearance(state: ButtonState, idle_label: &str, palette: &Palette) -> ButtonAppearance {
    let (label, style) = match state {
        ButtonState::Idle => (idle_label, palette.button_idle),
        ButtonState::Sending => ("Sending…", palette.button_busy),
        ButtonState::Sent => ("Message Sent!", palette.button_sent),
        ButtonState::Failed => ("Failed to Send", palette.button_failed),
    };
    ButtonAppearance {
        label: label.to_string(),
        enabled: state.is_enabled(),
        style,
    }
}

pub fn severity_badge(severity: Severity, palette: &Palette) -> (&'static str, Style) {
    match severity {
        Severity::Success => ("✔", palette.success),
        Severity::Error => ("✖", palette.error),
        Severity::Info => ("ℹ", palette.info),
    }
}
