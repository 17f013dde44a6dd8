use super::ui::help_line_count;
use crate::application::{App, AppMode, TextInput};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Browse => Self::handle_browse_mode(app, key, modifiers),
            AppMode::AddForm => Self::handle_form_mode(app, key),
            AppMode::Search => Self::handle_search_mode(app, key),
            AppMode::ExportCsv => Self::handle_export_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_browse_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('e') = key {
                app.start_export();
            }
            return;
        }

        match key {
            KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            KeyCode::Char('a') => app.start_add(),
            KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
            KeyCode::Char('C') => app.clear_all(),
            KeyCode::Char('/') => app.start_search(),
            KeyCode::Esc => app.clear_filter(),
            KeyCode::F(1) | KeyCode::Char('?') => app.open_help(),
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_form_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => app.submit_form(),
            KeyCode::Esc => app.cancel_form(),
            KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => app.form.focus_previous(),
            _ => {
                Self::edit_line(app.form.focused_mut(), key);
            }
        }
    }

    fn handle_search_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => app.finish_search(),
            KeyCode::Esc => app.cancel_search(),
            _ => {
                if Self::edit_line(&mut app.search_input, key) {
                    // Live filtering as the user types
                    app.update_search();
                }
            }
        }
    }

    fn handle_export_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => app.finish_export(),
            KeyCode::Esc => app.cancel_export(),
            _ => {
                Self::edit_line(&mut app.export_input, key);
            }
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if app.help_scroll + 1 < help_line_count() {
                    app.help_scroll += 1;
                }
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }

    /// Applies a line-editing key. Returns whether the text changed.
    fn edit_line(input: &mut TextInput, key: KeyCode) -> bool {
        match key {
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_home(),
            KeyCode::End => input.move_end(),
            KeyCode::Char(c) => {
                input.insert(c);
                return true;
            }
            _ => return false,
        }
        matches!(key, KeyCode::Backspace | KeyCode::Delete)
    }
}
