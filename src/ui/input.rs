//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::{App, AppMode};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: AppMode, key: KeyEvent) -> Option<Action> {
    // Ctrl 组合键不作为文字输入；任何模式下 Ctrl-C 退出
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match mode {
        AppMode::Normal => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Char('a') | KeyCode::Char('i') => Some(Action::StartEditing),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::NextIcon),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevIcon),
            KeyCode::Char('x') | KeyCode::Char('d') => Some(Action::RemoveLast),
            KeyCode::Enter => Some(Action::ReAddSelected),
            _ => None,
        },
        AppMode::Editing => match key.code {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Tab => Some(Action::NextIcon),
            KeyCode::BackTab => Some(Action::PrevIcon),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    if let Some(action) = get_action(app.mode, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(mode: AppMode, code: KeyCode) -> Option<Action> {
        get_action(mode, code.into())
    }

    #[test]
    fn test_normal_mode_commands() {
        assert_eq!(action(AppMode::Normal, KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(action(AppMode::Normal, KeyCode::Char('x')), Some(Action::RemoveLast));
        assert_eq!(action(AppMode::Normal, KeyCode::Right), Some(Action::NextIcon));
        assert_eq!(action(AppMode::Normal, KeyCode::Enter), Some(Action::ReAddSelected));
        assert_eq!(action(AppMode::Normal, KeyCode::Char('z')), None);
    }

    #[test]
    fn test_editing_mode_takes_letters_as_input() {
        assert_eq!(action(AppMode::Editing, KeyCode::Char('q')), Some(Action::Input('q')));
        assert_eq!(action(AppMode::Editing, KeyCode::Char('x')), Some(Action::Input('x')));
        assert_eq!(action(AppMode::Editing, KeyCode::BackTab), Some(Action::PrevIcon));
        assert_eq!(action(AppMode::Editing, KeyCode::Esc), Some(Action::Cancel));
    }

    #[test]
    fn test_ctrl_c_quits_instead_of_typing() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(get_action(AppMode::Editing, ctrl_c), Some(Action::Quit));
        assert_eq!(get_action(AppMode::Normal, ctrl_c), Some(Action::Quit));

        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(get_action(AppMode::Editing, ctrl_a), None);

        // Shift 输入的大写字母照常输入
        let shift_a = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(get_action(AppMode::Editing, shift_a), Some(Action::Input('A')));
    }

    #[test]
    fn test_handle_key_event_ctrl_c_leaves_input_untouched() {
        use crate::config::Config;
        use crate::models::TodoStore;

        let mut app = App::new(TodoStore::new(), &Config::default());
        app.mode = AppMode::Editing;
        let quit = handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        )
        .unwrap();
        assert!(quit);
        assert!(app.input_buffer.is_empty());
    }
}
