//! 键盘/鼠标事件映射 (Input -> Action)

use std::io;

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::actions::Action;
use super::state::App;

/// 根据按键获取对应的 Action
pub fn get_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::NextStory),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevStory),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::FocusLeft),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::FocusRight),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ClickFocused),
        KeyCode::Char('r') => Some(Action::Remount),
        KeyCode::Char('t') => Some(Action::ToggleRenderLog),
        KeyCode::Char(c) => c.to_digit(10).map(|d| Action::Click(d as usize)),
        _ => None,
    }
}

/// 鼠标左键按下时，命中哪个按钮就点击哪个
pub fn get_mouse_action(app: &App, event: MouseEvent) -> Option<Action> {
    if event.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let position = Position::new(event.column, event.row);
    app.button_areas
        .iter()
        .position(|area| area.contains(position))
        .map(Action::Click)
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

/// 处理鼠标事件
pub fn handle_mouse_event(app: &mut App, event: MouseEvent) -> io::Result<bool> {
    if let Some(action) = get_mouse_action(app, event) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HarnessConfig;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(get_action(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(get_action(KeyCode::Down), Some(Action::NextStory));
        assert_eq!(get_action(KeyCode::Char('k')), Some(Action::PrevStory));
        assert_eq!(get_action(KeyCode::Right), Some(Action::FocusRight));
        assert_eq!(get_action(KeyCode::Char(' ')), Some(Action::ClickFocused));
        assert_eq!(get_action(KeyCode::Char('3')), Some(Action::Click(3)));
        assert_eq!(get_action(KeyCode::Char('t')), Some(Action::ToggleRenderLog));
        assert_eq!(get_action(KeyCode::Char('x')), None);
        assert_eq!(get_action(KeyCode::Tab), None);
    }

    #[test]
    fn test_mouse_hits_button_area() {
        let mut app = App::new(&HarnessConfig::default());
        app.button_areas = vec![Rect::new(0, 0, 5, 3), Rect::new(5, 0, 5, 3)];

        let hit = mouse(MouseEventKind::Down(MouseButton::Left), 6, 1);
        assert_eq!(get_mouse_action(&app, hit), Some(Action::Click(1)));

        let miss = mouse(MouseEventKind::Down(MouseButton::Left), 20, 1);
        assert_eq!(get_mouse_action(&app, miss), None);

        let right = mouse(MouseEventKind::Down(MouseButton::Right), 1, 1);
        assert_eq!(get_mouse_action(&app, right), None);
    }
}
