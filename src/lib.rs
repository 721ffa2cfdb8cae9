//! # Introduction
//!
//! Total Recall is a four-function calculator with a memory register
//! (M+, M-, MR, MC) and a running grand total (GT, GC), driven from a
//! keypad in the terminal built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Input pipeline
//!
//! ```text
//! Key / Button → Input → Calculator → Display ─┬─► TUI
//!                                              └─► Tape
//! ```
//!
//! 1. [`calculator`] — the engine: one handler per button, the display
//!    formatter, and the [`calculator::Input`] tokens that drive it.
//! 2. [`tape`] — bounded history of inputs and the display each produced,
//!    plus headless [`tape::replay`] of scripted key sequences.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//! 4. [`config`] and [`logging`] — command line and log subscriber setup for
//!    the binary.
//!
//! ## Example
//!
//! ```
//! use totalrecall::calculator::{Calculator, Digit, Operator};
//!
//! let mut calc = Calculator::new();
//! calc.digit(Digit::new(6).unwrap());
//! calc.operator(Operator::Add);
//! calc.digit(Digit::new(4).unwrap());
//! calc.equals();
//! assert_eq!(calc.display(), "10");
//! assert_eq!(calc.grand_total(), 10.0);
//! ```

pub mod calculator;
pub mod config;
pub mod logging;
pub mod tape;
pub mod ui;
