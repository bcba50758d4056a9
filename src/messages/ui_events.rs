//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Tabs of the applications table
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AppsTab {
    #[default]
    All,
    Recent,
    Deleted,
}

impl AppsTab {
    pub const ALL: [AppsTab; 3] = [AppsTab::All, AppsTab::Recent, AppsTab::Deleted];

    pub fn title(&self) -> &'static str {
        match self {
            AppsTab::All => "All Applications",
            AppsTab::Recent => "Recently Used",
            AppsTab::Deleted => "Deleted Apps",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            AppsTab::All => 0,
            AppsTab::Recent => 1,
            AppsTab::Deleted => 2,
        }
    }

    pub fn next(&self) -> AppsTab {
        match self {
            AppsTab::All => AppsTab::Recent,
            AppsTab::Recent => AppsTab::Deleted,
            AppsTab::Deleted => AppsTab::All,
        }
    }

    pub fn prev(&self) -> AppsTab {
        match self {
            AppsTab::All => AppsTab::Deleted,
            AppsTab::Recent => AppsTab::All,
            AppsTab::Deleted => AppsTab::Recent,
        }
    }
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Tab navigation
    SwitchTab(AppsTab),
    NextTab,
    PrevTab,

    // Row selection
    SelectPrev,
    SelectNext,
    SelectFirst,
    SelectLast,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, show_help: bool) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('1') => Some(UiEvent::SwitchTab(AppsTab::All)),
        KeyCode::Char('2') => Some(UiEvent::SwitchTab(AppsTab::Recent)),
        KeyCode::Char('3') => Some(UiEvent::SwitchTab(AppsTab::Deleted)),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(UiEvent::NextTab),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(UiEvent::PrevTab),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNext),
        KeyCode::Home | KeyCode::Char('g') => Some(UiEvent::SelectFirst),
        KeyCode::End | KeyCode::Char('G') => Some(UiEvent::SelectLast),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_tab_keys() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('3')), false),
            Some(UiEvent::SwitchTab(AppsTab::Deleted))
        );
        assert_eq!(key_to_ui_event(press(KeyCode::Tab), false), Some(UiEvent::NextTab));
        assert_eq!(key_to_ui_event(press(KeyCode::BackTab), false), Some(UiEvent::PrevTab));
    }

    #[test]
    fn test_help_popup_swallows_keys() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('q')), true), Some(UiEvent::CloseHelp));
        assert_eq!(
            key_to_ui_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), true),
            Some(UiEvent::Quit)
        );
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_ui_event(key, false), None);
    }

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(AppsTab::Deleted.next(), AppsTab::All);
        assert_eq!(AppsTab::All.prev(), AppsTab::Deleted);
        for tab in AppsTab::ALL {
            assert_eq!(tab.next().prev(), tab);
        }
    }
}
