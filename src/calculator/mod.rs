//! Calculator engine
//!
//! This module owns every piece of calculator state and the rules that
//! mutate it:
//! - [`engine`]: the [`Calculator`] state machine, one method per button
//! - [`input`]: input tokens ([`Input`], [`Digit`], [`Operator`]) and key parsing
//! - [`format`]: fitting numbers into the 15-character display
//! - [`errors`]: engine and input error types
//!
//! # Evaluation Model
//!
//! There is no expression parser and no precedence. Operators are applied
//! strictly left to right as they are pressed:
//!
//! ```text
//! 5 + 3 * 2 =   →   (5 + 3) * 2 = 16
//! ```
//!
//! Errors never leave the engine. A failed computation shows `"Error"` on the
//! display until a digit, decimal point, clear or recall replaces it.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod format;
pub mod input;

pub use engine::{Calculator, EntryMode, PendingOperation};
pub use errors::{CalcError, InputError};
pub use format::{format_display, parse_display};
pub use input::{Digit, Input, Operator, parse_key_sequence};
