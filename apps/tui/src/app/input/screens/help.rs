use crate::app::state::App;
use crossterm::event::KeyCode;

/// Returns true when the key was consumed by the help popup.
pub fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if key == KeyCode::F(1) {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        match key {
            KeyCode::Esc => app.show_help = false,
            KeyCode::Char('q') => app.running = false,
            _ => {}
        }
        return true;
    }

    false
}
