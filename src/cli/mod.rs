//! CLI output formatting
//!
//! Human-readable terminal display for generated programs and history.

pub mod display;

pub use display::print_history;
pub use display::print_summary;
pub use display::render_program;
pub use display::ProgramDisplay;
