//! Paper tape: a bounded history of inputs and the display each produced
//!
//! The tape is for viewing only. It never feeds back into the engine, so it
//! cannot be used to undo an input.

use crate::calculator::{Calculator, Input, InputError, parse_key_sequence};
use std::collections::VecDeque;

/// Default number of entries kept on the tape
pub const DEFAULT_TAPE_LIMIT: usize = 256;

/// One line of tape: the button pressed and the display afterwards
#[derive(Debug, Clone, PartialEq)]
pub struct TapeEntry {
    pub input: Input,
    pub display: String,
}

impl TapeEntry {
    /// Render as a fixed-width line: label on the left, display on the right
    pub fn render(&self, width: usize) -> String {
        let label = self.input.label();
        let gap = width.saturating_sub(label.len() + self.display.len()).max(1);
        format!("{}{}{}", label, " ".repeat(gap), self.display)
    }
}

/// Bounded tape; the oldest entries are dropped first
#[derive(Debug, Clone)]
pub struct Tape {
    entries: VecDeque<TapeEntry>,
    limit: usize,
}

impl Tape {
    pub fn new(limit: usize) -> Self {
        Tape {
            entries: VecDeque::with_capacity(limit.min(DEFAULT_TAPE_LIMIT)),
            limit,
        }
    }

    /// Record an input together with the calculator state it produced
    pub fn record(&mut self, input: Input, calculator: &Calculator) {
        if self.limit == 0 {
            return;
        }
        while self.entries.len() >= self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(TapeEntry {
            input,
            display: calculator.display().to_string(),
        });
    }

    pub fn entries(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new(DEFAULT_TAPE_LIMIT)
    }
}

/// Replay a scripted key sequence on a fresh calculator, recording every
/// input on `tape`.
///
/// The whole sequence is parsed before anything is applied, so an unknown key
/// leaves the tape untouched.
pub fn replay(keys: &str, tape: &mut Tape) -> Result<Calculator, InputError> {
    let inputs = parse_key_sequence(keys)?;
    let mut calculator = Calculator::new();
    for input in inputs {
        calculator.apply(input);
        tape.record(input, &calculator);
    }
    Ok(calculator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(tape: &mut Tape, keys: &str) -> Calculator {
        replay(keys, tape).unwrap()
    }

    #[test]
    fn test_records_each_input() {
        let mut tape = Tape::default();
        run(&mut tape, "6+4=");

        let displays: Vec<&str> = tape.entries().map(|e| e.display.as_str()).collect();
        assert_eq!(displays, vec!["6", "6", "4", "10"]);
        assert_eq!(tape.last().map(|e| e.input), Some(Input::Equals));
    }

    #[test]
    fn test_limit_evicts_oldest() {
        let mut tape = Tape::new(3);
        run(&mut tape, "12345");

        assert_eq!(tape.len(), 3);
        let labels: Vec<String> = tape.entries().map(|e| e.input.label()).collect();
        assert_eq!(labels, vec!["3", "4", "5"]);
    }

    #[test]
    fn test_zero_limit_records_nothing() {
        let mut tape = Tape::new(0);
        run(&mut tape, "1+1=");
        assert!(tape.is_empty());
    }

    #[test]
    fn test_replay_rejects_unknown_keys_before_applying() {
        let mut tape = Tape::default();
        assert_eq!(replay("12?3", &mut tape).unwrap_err(), InputError::UnknownKey('?'));
        assert!(tape.is_empty());
    }

    #[test]
    fn test_render_aligns_display() {
        let entry = TapeEntry {
            input: Input::MemoryAdd,
            display: "42".to_string(),
        };
        assert_eq!(entry.render(10), "M+      42");
        // Never glues label and value together
        assert_eq!(entry.render(2), "M+ 42");
    }
}
