//! Key bindings.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::event::Action;

/// Maps a terminal event to an action; only key presses are bound.
#[must_use]
pub fn handle_event(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_press(key),
        _ => None,
    }
}

fn handle_key_press(key_event: &KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
        KeyCode::Enter => Some(Action::Connect),
        KeyCode::Char('l') => Some(Action::DeepLink),
        KeyCode::Char('c') => Some(Action::CopyUri),
        KeyCode::Char('n') => Some(Action::SimulateNetworkSwitch),
        KeyCode::Char('b') | KeyCode::Esc => Some(Action::Back),
        KeyCode::Char('s') => Some(Action::OpenNetworkSelector),
        KeyCode::Char('x') => Some(Action::ConnectConnector),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};
    use rstest::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[rstest]
    #[case::quit(KeyCode::Char('q'), Action::Quit)]
    #[case::up(KeyCode::Up, Action::SelectPrev)]
    #[case::down(KeyCode::Down, Action::SelectNext)]
    #[case::vim_up(KeyCode::Char('k'), Action::SelectPrev)]
    #[case::vim_down(KeyCode::Char('j'), Action::SelectNext)]
    #[case::enter(KeyCode::Enter, Action::Connect)]
    #[case::link(KeyCode::Char('l'), Action::DeepLink)]
    #[case::copy(KeyCode::Char('c'), Action::CopyUri)]
    #[case::network(KeyCode::Char('n'), Action::SimulateNetworkSwitch)]
    #[case::back(KeyCode::Char('b'), Action::Back)]
    #[case::esc(KeyCode::Esc, Action::Back)]
    #[case::switch(KeyCode::Char('s'), Action::OpenNetworkSelector)]
    #[case::connector(KeyCode::Char('x'), Action::ConnectConnector)]
    fn test_key_bindings(#[case] code: KeyCode, #[case] expected: Action) {
        assert_eq!(handle_event(&press(code)), Some(expected));
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(handle_event(&press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(handle_event(&release), None);
    }

    #[test]
    fn test_resize_is_ignored() {
        assert_eq!(handle_event(&Event::Resize(80, 24)), None);
    }
}
