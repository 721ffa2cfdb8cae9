//! Error types for the calculator
//!
//! [`CalcError`] covers failures inside the engine. Handlers never return it:
//! the engine absorbs every [`CalcError`] by showing the `"Error"` sentinel on
//! the display. [`InputError`] is raised at the boundary where keys, labels or
//! scripted sequences are turned into [`Input`](super::input::Input) tokens.

use thiserror::Error;

/// Failures while evaluating a calculation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Right-hand operand of `/` was exactly zero
    #[error("Division by zero")]
    DivisionByZero,

    /// The display text is not a usable number
    #[error("Invalid number on display: '{text}'")]
    InvalidNumber { text: String },
}

/// Failures while translating raw user input into calculator inputs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Keyboard character with no calculator meaning
    #[error("Unknown key '{0}'")]
    UnknownKey(char),

    /// Button label with no calculator meaning
    #[error("Unknown button label '{0}'")]
    UnknownLabel(String),

    /// Digit value outside `0..=9`
    #[error("Digit {0} is out of range (expected 0-9)")]
    DigitOutOfRange(u8),
}
