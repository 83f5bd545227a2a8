use crate::ui::app::{App, Mode, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match app.mode() {
        Mode::Browse => handle_browse_key(app, key),
        Mode::Compose(_) | Mode::Edit(_) => handle_form_key(app, key),
    }
}

fn handle_browse_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Tab => app.switch_screen(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        code => match app.screen() {
            Screen::Notes => match code {
                KeyCode::Char('n') => app.start_compose(),
                KeyCode::Char('e') | KeyCode::Enter => app.begin_edit_selected(),
                KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
                KeyCode::Char('f') => app.toggle_favorite_selected(),
                _ => {}
            },
            Screen::Grocery => {
                if matches!(code, KeyCode::Char(' ') | KeyCode::Enter) {
                    app.toggle_selected_item();
                }
            }
        },
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab => app.next_field(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Left => app.cycle_label(-1),
        KeyCode::Right => app.cycle_label(1),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.type_char(ch),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::NoteId;
    use crate::config::Config;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_str(app: &mut App, text: &str) {
        for ch in text.chars() {
            handle_key(app, press(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn q_in_form_is_text_not_quit() {
        let mut app = App::from_config(&Config::default());
        handle_key(&mut app, press(KeyCode::Char('n')));
        type_str(&mut app, "quiz");
        assert!(!app.should_quit());
        assert_eq!(app.notes().draft.title, "quiz");
    }

    #[test]
    fn ctrl_q_quits_from_form() {
        let mut app = App::from_config(&Config::default());
        handle_key(&mut app, press(KeyCode::Char('n')));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn favorite_then_delete_via_keys() {
        let mut app = App::from_config(&Config::default());
        handle_key(&mut app, press(KeyCode::Char('f')));
        assert!(app.notes().book.is_favorite(NoteId(1)));
        handle_key(&mut app, press(KeyCode::Char('d')));
        assert!(!app.notes().book.notes().contains(NoteId(1)));
        assert!(app.notes().favorites().is_empty());
    }

    #[test]
    fn edit_and_save_via_keys() {
        let mut app = App::from_config(&Config::default());
        handle_key(&mut app, press(KeyCode::Char('e')));
        for _ in 0.."test note 1 title".len() {
            handle_key(&mut app, press(KeyCode::Backspace));
        }
        type_str(&mut app, "Updated Title");
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.selected_note().unwrap().title, "Updated Title");
        assert_eq!(app.mode(), Mode::Browse);
    }

    #[test]
    fn space_toggles_grocery_item() {
        let mut app = App::from_config(&Config::default());
        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert_eq!(app.grocery().bought_line(), "Items bought: 1");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::from_config(&Config::default());
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.should_quit());
    }
}
