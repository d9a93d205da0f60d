use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Any key closes the help overlay
    if app.dialog.is_some() {
        app.close_dialog();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('?') => app.open_help(),
        KeyCode::Left | KeyCode::Char('h') => app.nudge_left(),
        KeyCode::Right | KeyCode::Char('l') => app.nudge_right(),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.dialog.is_some() {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.begin_drag(mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => app.drag_to(mouse.column),
        MouseEventKind::Up(MouseButton::Left) => app.end_drag(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DialogKind, GameConfig};
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    fn app() -> App {
        let config = GameConfig {
            seed: Some(3),
            sounds: false,
            ..GameConfig::default()
        };
        App::new(config, Rect::new(1, 6, 80, 24))
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
        handle_mouse(
            app,
            MouseEvent {
                kind,
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
        );
    }

    #[test]
    fn test_arrow_and_vim_keys_move() {
        let mut app = app();
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.game.icon().x, 330.0);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.game.icon().x, 350.0);
    }

    #[test]
    fn test_help_opens_and_any_key_closes() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.dialog, Some(DialogKind::Help));
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.dialog, None);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_mouse_drag_sequence() {
        let mut app = app();
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 39, 6);
        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 49, 6);
        assert_eq!(app.game.icon().x, 470.0);
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 49, 6);
        assert_eq!(app.drag_anchor, None);
    }
}
