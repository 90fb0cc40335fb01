use crate::runtime::command::Command;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(ch: char) -> Self {
        Self::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    pub fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

#[derive(Debug, Default)]
pub struct KeyBindings {
    bindings: HashMap<KeyBinding, Command>,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut manager = Self::default();
        manager.install_defaults();
        manager
    }

    pub fn bind(&mut self, key: KeyBinding, command: Command) {
        self.bindings.insert(key, command);
    }

    pub fn unbind(&mut self, key: &KeyBinding) {
        self.bindings.remove(key);
    }

    pub fn resolve(&self, event: KeyEvent) -> Option<Command> {
        self.bindings.get(&KeyBinding::from_event(event)).cloned()
    }

    fn install_defaults(&mut self) {
        self.bind(KeyBinding::ctrl('c'), Command::Exit);
        self.bind(KeyBinding::key(KeyCode::Esc), Command::Exit);
        self.bind(KeyBinding::key(KeyCode::Tab), Command::NextFocus);
        self.bind(KeyBinding::key(KeyCode::Down), Command::NextFocus);
        self.bind(KeyBinding::key(KeyCode::BackTab), Command::PrevFocus);
        self.bind(
            KeyBinding::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Command::PrevFocus,
        );
        self.bind(KeyBinding::key(KeyCode::Up), Command::PrevFocus);
        self.bind(KeyBinding::key(KeyCode::Enter), Command::Confirm);
        self.bind(KeyBinding::ctrl('s'), Command::Submit);
        self.bind(KeyBinding::ctrl('t'), Command::ToggleTheme);
        self.bind(KeyBinding::ctrl('x'), Command::DismissNotification);
        self.bind(KeyBinding::ctrl('w'), Command::DeleteWordLeft);
        self.bind(
            KeyBinding::new(KeyCode::Backspace, KeyModifiers::CONTROL),
            Command::DeleteWordLeft,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyBinding, KeyBindings};
    use crate::runtime::command::Command;
    use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn defaults_cover_form_shortcuts() {
        let bindings = KeyBindings::new();
        assert_eq!(bindings.resolve(KeyEvent::ctrl('s')), Some(Command::Submit));
        assert_eq!(bindings.resolve(KeyEvent::ctrl('t')), Some(Command::ToggleTheme));
        assert_eq!(
            bindings.resolve(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(Command::PrevFocus)
        );
        assert_eq!(bindings.resolve(KeyEvent::plain(KeyCode::Char('s'))), None);
    }

    #[test]
    fn rebinding_replaces_command() {
        let mut bindings = KeyBindings::new();
        bindings.bind(KeyBinding::key(KeyCode::Esc), Command::DismissNotification);
        assert_eq!(
            bindings.resolve(KeyEvent::plain(KeyCode::Esc)),
            Some(Command::DismissNotification)
        );
        bindings.unbind(&KeyBinding::key(KeyCode::Esc));
        assert_eq!(bindings.resolve(KeyEvent::plain(KeyCode::Esc)), None);
    }
}
