use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Fling towards the previous page
    PageLeft,
    /// Fling towards the next page
    PageRight,
    JumpToFirst,
    JumpToLast,
    ClearSelection,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Paging
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::PageLeft,
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::PageRight,
        (KeyCode::Left, KeyModifiers::NONE) => Action::PageLeft,
        (KeyCode::Right, KeyModifiers::NONE) => Action::PageRight,

        // Jump to first/last page
        (KeyCode::Char('g'), KeyModifiers::NONE) => Action::JumpToFirst,
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::JumpToLast,
        (KeyCode::Char('G'), KeyModifiers::NONE) => Action::JumpToLast,

        (KeyCode::Esc, KeyModifiers::NONE) => Action::ClearSelection,

        _ => Action::None,
    }
}
