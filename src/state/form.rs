use crate::core::field::{Field, FormSnapshot};
use crate::core::text_edit::TextBuffer;
use crate::core::validation::{FormReport, shows_error, validate_form};
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(usize),
    Submit,
}

#[derive(Debug, Clone)]
pub struct FieldState {
    field: Field,
    buffer: TextBuffer,
    errored: bool,
}

impl FieldState {
    fn new(field: Field) -> Self {
        let buffer = TextBuffer::new(field.value.clone());
        Self {
            field,
            buffer,
            errored: false,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    pub fn is_errored(&self) -> bool {
        self.errored
    }

    fn sync_value(&mut self) {
        self.field.value = self.buffer.value().to_string();
    }
}

pub type MarkChanges = Vec<(String, bool)>;

#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<FieldState>,
    focus: Focus,
}

impl FormState {
    pub fn new(fields: Vec<Field>) -> Self {
        let focus = if fields.is_empty() {
            Focus::Submit
        } else {
            Focus::Field(0)
        };
        Self {
            fields: fields.into_iter().map(FieldState::new).collect(),
            focus,
        }
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|state| state.field.name == name)
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.focus == Focus::Field(index)
    }

    pub fn is_label_raised(&self, index: usize) -> bool {
        self.is_focused(index)
            || self
                .fields
                .get(index)
                .is_some_and(|state| !state.field.is_blank())
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Field(idx) if idx + 1 < self.fields.len() => Focus::Field(idx + 1),
            Focus::Field(_) => Focus::Submit,
            Focus::Submit if self.fields.is_empty() => Focus::Submit,
            Focus::Submit => Focus::Field(0),
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Field(0) => Focus::Submit,
            Focus::Field(idx) => Focus::Field(idx - 1),
            Focus::Submit if self.fields.is_empty() => Focus::Submit,
            Focus::Submit => Focus::Field(self.fields.len() - 1),
        };
    }

    pub fn set_value(&mut self, name: &str, value: &str) -> Option<(String, bool)> {
        let idx = self.fields.iter().position(|s| s.field.name == name)?;
        let state = &mut self.fields[idx];
        state.buffer = TextBuffer::new(value);
        state.sync_value();
        self.revalidate(idx)
    }

    /// Routes an editing key to the focused field. Returns `None` when the key
    /// was not an edit, otherwise the (possibly empty) mark changes.
    pub fn apply_key(&mut self, key: KeyEvent) -> Option<MarkChanges> {
        let Focus::Field(idx) = self.focus else {
            return None;
        };
        let state = self.fields.get_mut(idx)?;
        let chord = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(KeyModifiers::ALT);
        let edited = match key.code {
            KeyCode::Char(_) if chord => return None,
            KeyCode::Char(ch) => {
                state.buffer.insert(ch);
                true
            }
            KeyCode::Backspace => state.buffer.backspace(),
            KeyCode::Delete => state.buffer.delete(),
            KeyCode::Left => {
                state.buffer.move_left();
                false
            }
            KeyCode::Right => {
                state.buffer.move_right();
                false
            }
            KeyCode::Home => {
                state.buffer.move_home();
                false
            }
            KeyCode::End => {
                state.buffer.move_end();
                false
            }
            _ => return None,
        };
        if !edited {
            return Some(Vec::new());
        }
        state.sync_value();
        Some(self.revalidate(idx).into_iter().collect())
    }

    pub fn delete_word_left(&mut self) -> Option<MarkChanges> {
        let Focus::Field(idx) = self.focus else {
            return None;
        };
        let state = self.fields.get_mut(idx)?;
        if !state.buffer.delete_word_left() {
            return Some(Vec::new());
        }
        state.sync_value();
        Some(self.revalidate(idx).into_iter().collect())
    }

    pub fn validate_required(&mut self) -> (FormReport, MarkChanges) {
        let report = validate_form(self.fields.iter().map(|state| &state.field));
        let mut changes = Vec::new();
        for state in self.fields.iter_mut().filter(|s| s.field.required) {
            let errored = report.is_invalid(&state.field.name);
            if state.errored != errored {
                state.errored = errored;
                changes.push((state.field.name.clone(), errored));
            }
        }
        (report, changes)
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot::capture(self.fields.iter().map(|state| &state.field))
    }

    pub fn reset(&mut self) {
        for state in &mut self.fields {
            state.buffer.clear();
            state.sync_value();
            state.errored = false;
        }
        self.focus = if self.fields.is_empty() {
            Focus::Submit
        } else {
            Focus::Field(0)
        };
    }

    fn revalidate(&mut self, idx: usize) -> Option<(String, bool)> {
        let state = self.fields.get_mut(idx)?;
        let errored = shows_error(state.field.kind, &state.field.value);
        if state.errored == errored {
            return None;
        }
        state.errored = errored;
        Some((state.field.name.clone(), errored))
    }
}
