//! Input event mapping.
//!
//! Translates raw crossterm events into app-level events. Only key presses
//! are interesting; resize events fall through to a redraw and everything
//! else is ignored.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::Tab;

/// App-level events produced from terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Select a tab directly (digit keys)
    SelectTab(Tab),
    /// Select the tab to the right (Right arrow / Tab key)
    NextTab,
    /// Select the tab to the left (Left arrow / BackTab)
    PrevTab,
    /// Scroll the active tab's content down one line (Down arrow)
    ScrollDown,
    /// Scroll the active tab's content up one line (Up arrow)
    ScrollUp,
    /// Leave the dashboard (q, Esc, Ctrl-C)
    Quit,
    /// Terminal was resized; redraw on the next loop iteration
    Redraw,
}

/// Map a crossterm event to an app event, if it means anything to us.
pub fn map_event(event: &Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => map_key_event(key),
        Event::Resize(_, _) => Some(AppEvent::Redraw),
        _ => None,
    }
}

/// Map a key event to an app event.
///
/// Only `Press` events are handled so terminals reporting key releases
/// (Kitty protocol) do not double-trigger tab changes.
pub fn map_key_event(key: &KeyEvent) -> Option<AppEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(AppEvent::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
        KeyCode::Char('1') => Some(AppEvent::SelectTab(Tab::Market)),
        KeyCode::Char('2') => Some(AppEvent::SelectTab(Tab::Popular)),
        KeyCode::Char('3') => Some(AppEvent::SelectTab(Tab::Behavior)),
        KeyCode::Char('4') => Some(AppEvent::SelectTab(Tab::Distribution)),
        KeyCode::Right | KeyCode::Tab => Some(AppEvent::NextTab),
        KeyCode::Left | KeyCode::BackTab => Some(AppEvent::PrevTab),
        KeyCode::Down => Some(AppEvent::ScrollDown),
        KeyCode::Up => Some(AppEvent::ScrollUp),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_digit_keys_select_tabs() {
        assert_eq!(
            map_key_event(&press(KeyCode::Char('1'))),
            Some(AppEvent::SelectTab(Tab::Market))
        );
        assert_eq!(
            map_key_event(&press(KeyCode::Char('2'))),
            Some(AppEvent::SelectTab(Tab::Popular))
        );
        assert_eq!(
            map_key_event(&press(KeyCode::Char('3'))),
            Some(AppEvent::SelectTab(Tab::Behavior))
        );
        assert_eq!(
            map_key_event(&press(KeyCode::Char('4'))),
            Some(AppEvent::SelectTab(Tab::Distribution))
        );
    }

    #[test]
    fn test_arrows_cycle_tabs() {
        assert_eq!(map_key_event(&press(KeyCode::Right)), Some(AppEvent::NextTab));
        assert_eq!(map_key_event(&press(KeyCode::Tab)), Some(AppEvent::NextTab));
        assert_eq!(map_key_event(&press(KeyCode::Left)), Some(AppEvent::PrevTab));
        assert_eq!(
            map_key_event(&press(KeyCode::BackTab)),
            Some(AppEvent::PrevTab)
        );
    }

    #[test]
    fn test_vertical_arrows_scroll_content() {
        assert_eq!(map_key_event(&press(KeyCode::Down)), Some(AppEvent::ScrollDown));
        assert_eq!(map_key_event(&press(KeyCode::Up)), Some(AppEvent::ScrollUp));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key_event(&press(KeyCode::Char('q'))), Some(AppEvent::Quit));
        assert_eq!(map_key_event(&press(KeyCode::Esc)), Some(AppEvent::Quit));

        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key_event(&ctrl_c), Some(AppEvent::Quit));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('2'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key_event(&release), None);
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(map_key_event(&press(KeyCode::Char('x'))), None);
        assert_eq!(map_key_event(&press(KeyCode::Char('5'))), None);
        assert_eq!(map_key_event(&press(KeyCode::Enter)), None);
    }

    #[test]
    fn test_resize_maps_to_redraw() {
        assert_eq!(map_event(&Event::Resize(80, 24)), Some(AppEvent::Redraw));
    }
}
