use crate::tasks::Priority;
use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'l') {
        app.logout();
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.cycle_focus(true);
            return;
        }
        KeyCode::BackTab => {
            app.cycle_focus(false);
            return;
        }
        _ => {}
    }

    match app.focus() {
        Focus::TaskList => handle_task_list_key(app, key),
        Focus::TaskInput => match key.code {
            KeyCode::Left => app.cycle_priority(false),
            KeyCode::Right => app.cycle_priority(true),
            _ => handle_text_key(app, key),
        },
        Focus::Login | Focus::Search | Focus::Assistant => handle_text_key(app, key),
    }
}

fn handle_text_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input_char(ch)
        }
        _ => {}
    }
}

fn handle_task_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Delete | KeyCode::Char('d') => app.delete_selected(),
        KeyCode::Char('h') => app.set_selected_priority(Priority::High),
        KeyCode::Char('m') => app.set_selected_priority(Priority::Medium),
        KeyCode::Char('l') => app.set_selected_priority(Priority::Low),
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
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn type_str(app: &mut App, text: &str) {
        for ch in text.chars() {
            handle_key(app, key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = App::new(None);
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn typing_login_and_adding_tasks() {
        let mut app = App::new(None);
        type_str(&mut app, "alice");
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.state().is_authenticated());
        assert_eq!(app.focus(), Focus::TaskInput);

        type_str(&mut app, "write report");
        handle_key(&mut app, key(KeyCode::Right)); // Medium -> Low
        handle_key(&mut app, key(KeyCode::Enter));

        type_str(&mut app, "urgent fix");
        handle_key(&mut app, key(KeyCode::Right)); // Low -> High
        handle_key(&mut app, key(KeyCode::Enter));

        let tasks: Vec<(&str, Priority)> = app
            .state()
            .tasks
            .iter()
            .map(|t| (t.description.as_str(), t.priority))
            .collect();
        assert_eq!(
            tasks,
            vec![("urgent fix", Priority::High), ("write report", Priority::Low)]
        );
    }

    #[test]
    fn task_list_keys_edit_selected_task() {
        let mut app = App::new(None);
        type_str(&mut app, "bob");
        handle_key(&mut app, key(KeyCode::Enter));
        type_str(&mut app, "one");
        handle_key(&mut app, key(KeyCode::Enter));
        type_str(&mut app, "two");
        handle_key(&mut app, key(KeyCode::Enter));

        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::TaskList);

        // "two" is selected after being added; raise it above "one".
        handle_key(&mut app, key(KeyCode::Char('h')));
        assert_eq!(app.state().tasks[0].description, "two");

        handle_key(&mut app, key(KeyCode::Char('d')));
        assert_eq!(app.state().tasks.len(), 1);
        assert_eq!(app.state().tasks[0].description, "one");
    }

    #[test]
    fn ctrl_l_logs_out() {
        let mut app = App::new(None);
        type_str(&mut app, "carol");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, ctrl('l'));
        assert!(!app.state().is_authenticated());
        assert_eq!(app.focus(), Focus::Login);
    }
}
