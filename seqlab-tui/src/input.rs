//! Key dispatch — vim-style movement over the selector grid.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::AppState;

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        KeyCode::Tab | KeyCode::BackTab => app.switch_pane(),
        KeyCode::Char('j') | KeyCode::Down => {
            let pane = app.focused_pane_mut();
            pane.field = pane.field.next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            let pane = app.focused_pane_mut();
            pane.field = pane.field.prev();
        }
        KeyCode::Char('l') | KeyCode::Right => app.cycle_value(1),
        KeyCode::Char('h') | KeyCode::Left => app.cycle_value(-1),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SelectorField;
    use crossterm::event::{KeyEventState, KeyModifiers};
    use seqlab_core::data::{demo_dataset, Instrument};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app() -> AppState {
        AppState::new(demo_dataset(Instrument::Cl, 300), "CL (synthetic)".into())
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn tab_switches_pane() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.focused, 1);
    }

    #[test]
    fn j_and_k_move_the_field_cursor() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.panes[0].field, SelectorField::Position);
        handle_key(&mut app, press(KeyCode::Char('k')));
        assert_eq!(app.panes[0].field, SelectorField::StartPoint);
    }

    #[test]
    fn l_cycles_the_focused_value() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('l')));
        assert_eq!(app.panes[0].selection[0], 1 % app.options.start_points.len());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key(&mut app, release);
        assert!(app.running);
    }
}
