// App module for projection_tui
// Handles application state and input handling

pub mod input;
pub mod state;

pub use input::handle_input;
pub use projection_core::Control;
pub use state::App;
