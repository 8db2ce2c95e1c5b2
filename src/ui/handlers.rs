use crossterm::event::{KeyCode, KeyEvent};

use crate::app::AppState;

pub fn handle_key_event(app_state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app_state.move_column(-1),
        KeyCode::Char('l') | KeyCode::Right => app_state.move_column(1),
        KeyCode::Char('j') | KeyCode::Down => app_state.scroll_rows(1),
        KeyCode::Char('k') | KeyCode::Up => app_state.scroll_rows(-1),
        KeyCode::PageDown => {
            let page = app_state.visible_rows as isize;
            app_state.scroll_rows(page);
        }
        KeyCode::PageUp => {
            let page = app_state.visible_rows as isize;
            app_state.scroll_rows(-page);
        }
        KeyCode::Char('0') | KeyCode::Home => app_state.jump_to_first_column(),
        KeyCode::Char('$') | KeyCode::End => app_state.jump_to_last_column(),

        KeyCode::Char('s') | KeyCode::Enter => app_state.sort_selected_column(),
        KeyCode::Char('t') => app_state.cycle_strategy(),
        KeyCode::Char('w') => {
            if let Err(e) = app_state.save() {
                app_state.status_message = format!("Save failed: {}", e);
            }
        }

        KeyCode::Char('q') | KeyCode::Esc => app_state.quit(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorter::{SortOrder, Strategy};
    use crate::table::Table;
    use crossterm::event::KeyModifiers;
    use std::path::PathBuf;

    fn press(app: &mut AppState, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_clicking_a_column_twice_flips_direction() {
        let table = Table::from_strings(
            "fruit",
            ["name", "count"],
            [["banana", "3"], ["apple", "7"], ["cherry", "1"]],
        );
        let mut app = AppState::new(table, PathBuf::from("fruit.json"), Strategy::Lexical).unwrap();

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.table.column_texts(0), vec!["apple", "banana", "cherry"]);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.table.column_texts(0), vec!["cherry", "banana", "apple"]);
        assert_eq!(app.last_sort, Some((0, SortOrder::Descending)));

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.strategy, Strategy::Symbolic);
        press(&mut app, KeyCode::Char('s'));
        // The descending name order already lists the counts ascending
        assert_eq!(app.table.column_texts(1), vec!["7", "3", "1"]);
        assert_eq!(app.last_sort, Some((1, SortOrder::Descending)));

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
