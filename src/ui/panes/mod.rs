//! TUI pane rendering modules
//!
//! Each pane module exports a single `render_*` function that draws one area
//! of the screen from borrowed application state. Panes hold no state of
//! their own; scroll offsets live in [`App`](crate::ui::App) and are passed in
//! by mutable reference so a pane can clamp them to its content.
//!
//! # Pane Modules
//!
//! - [`display`]: The numeric display with memory, operator and grand-total indicators
//! - [`keypad`]: The button grid with cursor and press highlighting
//! - [`tape`]: Scrollable history of inputs and results
//! - [`status`]: Status bar with keybindings and entry state

pub mod display;
pub mod keypad;
pub mod status;
pub mod tape;

pub use display::render_display_pane;
pub use keypad::render_keypad_pane;
pub use status::render_status_bar;
pub use tape::render_tape_pane;
