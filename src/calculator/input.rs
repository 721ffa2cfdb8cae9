//! Calculator input tokens
//!
//! Every button on the keypad maps to exactly one [`Input`]. Inputs can be
//! built from keypad labels (`"M+"`, `"GT"`, …) through [`FromStr`], from single
//! keyboard characters through [`Input::from_key`], or from a whole scripted
//! sequence through [`parse_key_sequence`].
//!
//! # Keyboard mapping
//!
//! | Key        | Input              |
//! |------------|--------------------|
//! | `0`-`9`    | digit              |
//! | `.`        | decimal point      |
//! | `+ - * /`  | operator           |
//! | `=`        | equals             |
//! | `c`        | clear              |
//! | `m` / `n`  | memory add / sub   |
//! | `r` / `x`  | memory recall / clear |
//! | `g` / `z`  | grand total recall / clear |

use super::errors::InputError;
use std::fmt;
use std::str::FromStr;

/// A single decimal digit, guaranteed to be in `0..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Result<Self, InputError> {
        if value <= 9 {
            Ok(Digit(value))
        } else {
            Err(InputError::DigitOutOfRange(value))
        }
    }

    /// The ASCII character for this digit
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = InputError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Digit(d as u8))
            .ok_or(InputError::UnknownKey(c))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        Operator::ALL.into_iter().find(|op| op.symbol() == c)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One user input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    MemoryClear,
    MemoryRecall,
    MemoryAdd,
    MemorySubtract,
    GrandTotalClear,
    GrandTotalRecall,
}

impl Input {
    /// Translate a keyboard character into an input
    pub fn from_key(c: char) -> Result<Self, InputError> {
        if let Ok(digit) = Digit::try_from(c) {
            return Ok(Input::Digit(digit));
        }
        if let Some(op) = Operator::from_symbol(c) {
            return Ok(Input::Operator(op));
        }

        match c {
            '.' => Ok(Input::Decimal),
            '=' => Ok(Input::Equals),
            'c' | 'C' => Ok(Input::Clear),
            'm' => Ok(Input::MemoryAdd),
            'n' => Ok(Input::MemorySubtract),
            'r' => Ok(Input::MemoryRecall),
            'x' => Ok(Input::MemoryClear),
            'g' => Ok(Input::GrandTotalRecall),
            'z' => Ok(Input::GrandTotalClear),
            _ => Err(InputError::UnknownKey(c)),
        }
    }

    /// The keyboard character that produces this input
    pub fn key(self) -> char {
        match self {
            Input::Digit(d) => d.as_char(),
            Input::Decimal => '.',
            Input::Operator(op) => op.symbol(),
            Input::Equals => '=',
            Input::Clear => 'c',
            Input::MemoryAdd => 'm',
            Input::MemorySubtract => 'n',
            Input::MemoryRecall => 'r',
            Input::MemoryClear => 'x',
            Input::GrandTotalRecall => 'g',
            Input::GrandTotalClear => 'z',
        }
    }

    /// The label printed on the keypad button
    pub fn label(self) -> String {
        match self {
            Input::Digit(d) => d.to_string(),
            Input::Decimal => ".".to_string(),
            Input::Operator(op) => op.to_string(),
            Input::Equals => "=".to_string(),
            Input::Clear => "C".to_string(),
            Input::MemoryClear => "MC".to_string(),
            Input::MemoryRecall => "MR".to_string(),
            Input::MemoryAdd => "M+".to_string(),
            Input::MemorySubtract => "M-".to_string(),
            Input::GrandTotalClear => "GC".to_string(),
            Input::GrandTotalRecall => "GT".to_string(),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "C" => Ok(Input::Clear),
            "MC" => Ok(Input::MemoryClear),
            "MR" => Ok(Input::MemoryRecall),
            "M+" => Ok(Input::MemoryAdd),
            "M-" => Ok(Input::MemorySubtract),
            "GC" => Ok(Input::GrandTotalClear),
            "GT" => Ok(Input::GrandTotalRecall),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    // Single-character labels share the keyboard mapping,
                    // except letters which are keyboard-only shortcuts
                    (Some(c), None) if !c.is_ascii_alphabetic() => Input::from_key(c)
                        .map_err(|_| InputError::UnknownLabel(label.to_string())),
                    _ => Err(InputError::UnknownLabel(label.to_string())),
                }
            }
        }
    }
}

/// Parse a scripted key sequence such as `"12+7="` into inputs.
///
/// Whitespace is ignored so sequences can be grouped for readability.
pub fn parse_key_sequence(keys: &str) -> Result<Vec<Input>, InputError> {
    keys.chars()
        .filter(|c| !c.is_whitespace())
        .map(Input::from_key)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_range() {
        assert_eq!(Digit::new(7).map(Digit::as_char), Ok('7'));
        assert_eq!(Digit::new(10), Err(InputError::DigitOutOfRange(10)));
        assert_eq!(Digit::try_from('4').map(Digit::as_char), Ok('4'));
        assert_eq!(Digit::try_from('a'), Err(InputError::UnknownKey('a')));
    }

    #[test]
    fn test_operator_symbols() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol('%'), None);
    }

    #[test]
    fn test_keys_map_back() {
        for key in "0123456789.+-*/=cmnrxgz".chars() {
            let input = Input::from_key(key).unwrap();
            assert_eq!(input.key(), key);
        }
        assert_eq!(Input::from_key('C'), Ok(Input::Clear));
        assert_eq!(Input::from_key('?'), Err(InputError::UnknownKey('?')));
    }

    #[test]
    fn test_labels() {
        assert_eq!("M+".parse::<Input>(), Ok(Input::MemoryAdd));
        assert_eq!("GT".parse::<Input>(), Ok(Input::GrandTotalRecall));
        assert_eq!("/".parse::<Input>(), Ok(Input::Operator(Operator::Divide)));
        assert_eq!(
            "8".parse::<Input>(),
            Ok(Input::Digit(Digit::new(8).unwrap()))
        );
        assert_eq!(
            "m".parse::<Input>(),
            Err(InputError::UnknownLabel("m".to_string()))
        );
        assert_eq!(
            "MM".parse::<Input>(),
            Err(InputError::UnknownLabel("MM".to_string()))
        );
    }

    #[test]
    fn test_parse_key_sequence() {
        let inputs = parse_key_sequence("12 + 7 =").unwrap();
        assert_eq!(
            inputs,
            vec![
                Input::Digit(Digit::new(1).unwrap()),
                Input::Digit(Digit::new(2).unwrap()),
                Input::Operator(Operator::Add),
                Input::Digit(Digit::new(7).unwrap()),
                Input::Equals,
            ]
        );
        assert_eq!(parse_key_sequence("1#"), Err(InputError::UnknownKey('#')));
        assert_eq!(parse_key_sequence(""), Ok(vec![]));
    }
}
