use crate::terminal::KeyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    NextFocus,
    PrevFocus,
    Confirm,
    Submit,
    InputKey(KeyEvent),
    DeleteWordLeft,
    ToggleTheme,
    DismissNotification,
    Noop,
}
