mod loop_handler;

pub use loop_handler::{render_headless_text, run, run_headless};
