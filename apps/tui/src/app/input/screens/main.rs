use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_main_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => app.adjust_focused(true),
        KeyCode::Left => app.adjust_focused(false),
        KeyCode::Char('o') => app.toggle_out_of_sample(),
        KeyCode::Char('[') => app.move_inspector(-1),
        KeyCode::Char(']') => app.move_inspector(1),
        KeyCode::Char('q') => app.running = false,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crate::app::handle_input;
    use crate::app::{App, Control};
    use crossterm::event::KeyCode;
    use projection_core::{Dataset, ModelType, Selection};

    fn app() -> App {
        let projections = r#"[
            {"technology": "wind", "model": "Logistic", "training_year": 2015, "year": 2020, "Projected": "0.15"}
        ]"#;
        let (dataset, report) = Dataset::from_json("[]", projections).unwrap();
        App::new(dataset, report, Selection::default())
    }

    #[test]
    fn arrows_move_focus_and_change_values() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Down);
        assert_eq!(app.focused(), Control::Model);
        handle_input(&mut app, KeyCode::Right);
        assert_eq!(app.view.selection().model, ModelType::Exponential);
        handle_input(&mut app, KeyCode::Left);
        assert_eq!(app.view.selection().model, ModelType::Logistic);
    }

    #[test]
    fn o_toggles_out_of_sample_from_any_control() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Char('o'));
        assert!(app.view.selection().show_out_of_sample);
    }

    #[test]
    fn brackets_move_the_inspector() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Char(']'));
        assert_eq!(app.inspect_year, 2016);
        handle_input(&mut app, KeyCode::Char('['));
        handle_input(&mut app, KeyCode::Char('['));
        assert_eq!(app.inspect_year, 2014);
    }

    #[test]
    fn help_swallows_keys_until_closed() {
        let mut app = app();
        handle_input(&mut app, KeyCode::F(1));
        assert!(app.show_help);
        handle_input(&mut app, KeyCode::Char('o'));
        assert!(!app.view.selection().show_out_of_sample);
        handle_input(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(app.running);
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }
}
