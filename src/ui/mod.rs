//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus, keypad cursor
//! - **[`keypad`]** — the button grid layout and the keyboard shortcut table
//! - **[`panes`]** — stateless render functions for each visible pane (display,
//!   keypad, tape, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Tape`] and
//! call [`App::run`] to start the event loop. The UI never computes anything
//! itself; every key press is forwarded to the [`Calculator`] unchanged.
//!
//! [`Tape`]: crate::tape::Tape
//! [`Calculator`]: crate::calculator::Calculator
//! [`App::run`]: app::App::run

pub mod app;
pub mod keypad;
pub mod panes;
pub mod theme;

pub use app::App;
