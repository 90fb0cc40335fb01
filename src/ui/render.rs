use crate::core::field::{Field, FieldKind};
use crate::state::app::AppState;
use crate::state::form::Focus;
use crate::state::notification::Phase;
use crate::terminal::{CursorPos, TerminalSize};
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::Style;
use crate::ui::theme::{Palette, button_appearance, severity_badge};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const INDENT: &str = "  ";
const FOCUS_MARKER: &str = "› ";

#[derive(Debug, Default, Clone)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

impl RenderFrame {
    fn push(&mut self, line: SpanLine) {
        self.lines.push(line);
    }

    fn row(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }
}

pub fn render(state: &AppState, size: TerminalSize) -> RenderFrame {
    let palette = Palette::for_theme(state.theme());
    let mut frame = RenderFrame::default();

    frame.push(vec![
        Span::styled("Get in touch", palette.accent),
        Span::styled(format!("  [{} theme]", state.theme()), palette.muted),
    ]);
    frame.push(Vec::new());

    render_fields(state, &palette, &mut frame);
    render_button(state, &palette, &mut frame);
    render_notifications(state, &palette, size.width as usize, &mut frame);

    frame.push(Vec::new());
    frame.push(vec![Span::styled(
        "tab next · enter confirm · ctrl-s send · ctrl-t theme · ctrl-x close · esc quit",
        palette.muted,
    )]);

    if size.width > 0
        && let Some(cursor) = frame.cursor.as_mut()
    {
        cursor.col = cursor.col.min(size.width.saturating_sub(1));
    }
    frame
}

fn render_fields(state: &AppState, palette: &Palette, frame: &mut RenderFrame) {
    let form = state.form();
    for (index, field_state) in form.fields().iter().enumerate() {
        let field = field_state.field();
        let focused = form.is_focused(index);
        let marker = if focused { FOCUS_MARKER } else { INDENT };
        let label_style = if field_state.is_errored() {
            palette.error
        } else if focused {
            palette.accent
        } else {
            palette.muted
        };
        let required = if field.required { " *" } else { "" };
        let label = format!("{}{required}", field.label);

        if form.is_label_raised(index) {
            frame.push(vec![
                Span::new(INDENT),
                Span::styled(label, label_style),
            ]);
            let value_style = if field_state.is_errored() {
                palette.error
            } else {
                palette.text
            };
            let row = frame.row();
            frame.push(vec![
                Span::styled(marker, palette.accent),
                Span::styled(field.value.clone(), value_style),
            ]);
            if focused {
                let before: String = field.value.chars().take(field_state.cursor()).collect();
                let col = UnicodeWidthStr::width(marker) + UnicodeWidthStr::width(before.as_str());
                frame.cursor = Some(CursorPos {
                    col: col.min(u16::MAX as usize) as u16,
                    row,
                });
            }
        } else {
            // Lowered label sits on the value row; the placeholder trails it.
            frame.push(Vec::new());
            let mut line = vec![
                Span::styled(marker, palette.accent),
                Span::styled(label, label_style),
            ];
            if let Some(placeholder) = &field.placeholder {
                line.push(Span::styled(format!("  {placeholder}"), palette.muted.dim()));
            }
            frame.push(line);
        }

        if field_state.is_errored() {
            frame.push(vec![
                Span::new(INDENT),
                Span::styled(error_hint(field), palette.error),
            ]);
        }
        frame.push(Vec::new());
    }
}

fn error_hint(field: &Field) -> String {
    match field.kind {
        FieldKind::Email => "! enter a valid email address".to_string(),
        FieldKind::ShortText => "! at least 2 characters".to_string(),
        FieldKind::Generic => "! required".to_string(),
    }
}

fn render_button(state: &AppState, palette: &Palette, frame: &mut RenderFrame) {
    let appearance = button_appearance(state.button(), state.submit_label(), palette);
    let focused = state.form().focus() == Focus::Submit;
    let marker = if focused { FOCUS_MARKER } else { INDENT };
    let style = if appearance.enabled {
        appearance.style
    } else {
        appearance.style.dim()
    };
    frame.push(vec![
        Span::styled(marker, palette.accent),
        Span::styled(format!(" {} ", appearance.label), style),
    ]);
}

fn render_notifications(state: &AppState, palette: &Palette, width: usize, frame: &mut RenderFrame) {
    let visible = state.notifications().visible();
    if visible.is_empty() {
        return;
    }
    frame.push(Vec::new());
    for notification in visible.iter().rev() {
        let (icon, icon_style) = severity_badge(notification.severity, palette);
        let text_style = match notification.phase {
            Phase::Shown => palette.text,
            Phase::Entering | Phase::Leaving => palette.text.dim(),
        };
        let prefix = UnicodeWidthStr::width(INDENT) + UnicodeWidthStr::width(icon) + 1;
        let hanging = " ".repeat(prefix);
        let rows = wrap_words(&notification.message, width.saturating_sub(prefix));
        for (row, text) in rows.into_iter().enumerate() {
            let line = if row == 0 {
                vec![
                    Span::new(INDENT),
                    Span::styled(icon, phase_style(icon_style, notification.phase)),
                    Span::styled(format!(" {text}"), text_style),
                ]
            } else {
                vec![Span::new(hanging.clone()), Span::styled(text, text_style)]
            };
            frame.push(line);
        }
    }
}

fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);
        let gap = usize::from(!current.is_empty());
        if current_width + gap + word_width <= width {
            if gap == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += gap + word_width;
            continue;
        }
        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        for ch in word.chars() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if current_width + ch_width > width && !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }
    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

fn phase_style(style: Style, phase: Phase) -> Style {
    match phase {
        Phase::Shown => style,
        Phase::Entering | Phase::Leaving => style.dim(),
    }
}

#[cfg(test)]
mod tests {
    use super::{render, wrap_words};
    use crate::config::FolioConfig;
    use crate::state::app::AppState;
    use crate::state::button::ButtonEvent;
    use crate::state::notification::Severity;
    use crate::state::theme::ThemePreference;
    use crate::terminal::TerminalSize;
    use crate::ui::span::line_text;
    use std::time::Instant;

    const SIZE: TerminalSize = TerminalSize {
        width: 100,
        height: 40,
    };

    fn text(state: &AppState) -> Vec<String> {
        render(state, SIZE).lines.iter().map(line_text).collect()
    }

    #[test]
    fn focused_field_raises_label_and_places_cursor() {
        let mut state = AppState::new(&FolioConfig::default(), ThemePreference::Light);
        state.form_mut().set_value("name", "Ada");
        let frame = render(&state, SIZE);
        let cursor = frame.cursor.expect("cursor on focused field");
        let row = line_text(&frame.lines[cursor.row as usize]);
        assert!(row.ends_with("Ada"));
        assert_eq!(cursor.col, 5);
    }

    #[test]
    fn empty_unfocused_field_shows_placeholder() {
        let state = AppState::new(&FolioConfig::default(), ThemePreference::Light);
        let lines = text(&state);
        assert!(lines.iter().any(|line| line.contains("you@example.com")));
    }

    #[test]
    fn button_label_follows_state() {
        let mut state = AppState::new(&FolioConfig::default(), ThemePreference::Dark);
        assert!(text(&state).iter().any(|line| line.contains("Send Message")));
        state.apply_button(ButtonEvent::Accepted);
        assert!(text(&state).iter().any(|line| line.contains("Sending…")));
        assert!(text(&state)[0].contains("dark theme"));
    }

    #[test]
    fn notifications_are_listed_newest_first() {
        let mut state = AppState::new(&FolioConfig::default(), ThemePreference::Light);
        let now = Instant::now();
        state.notifications_mut().show("older", Severity::Info, now);
        state.notifications_mut().show("newer", Severity::Error, now);
        let lines = text(&state);
        let newer = lines.iter().position(|l| l.contains("newer")).expect("newer");
        assert!(lines.iter().all(|l| !l.contains("older")));
        assert!(lines[newer].contains('✖'));
    }

    #[test]
    fn failure_notification_wraps_to_show_contact_address() {
        let mut state = AppState::new(&FolioConfig::default(), ThemePreference::Light);
        let message = state.copy().failure.clone();
        state.notifications_mut().show(message, Severity::Error, Instant::now());

        let narrow = TerminalSize {
            width: 80,
            height: 40,
        };
        let lines: Vec<String> = render(&state, narrow).lines.iter().map(line_text).collect();
        let start = lines.iter().position(|l| l.contains("Sorry")).expect("failure line");

        assert!(lines[start + 1..].iter().any(|l| l.contains("hello@example.com")));
        for line in lines[start..].iter().take_while(|l| !l.is_empty()) {
            assert!(unicode_width::UnicodeWidthStr::width(line.as_str()) <= 80, "{line:?}");
        }
    }

    #[test]
    fn wrap_splits_on_words_and_breaks_long_words() {
        assert_eq!(wrap_words("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_words("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap_words("", 10), vec![""]);
        assert_eq!(wrap_words("no limit here", 0), vec!["no limit here"]);
    }
}
