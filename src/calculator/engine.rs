// State machine for the calculator

use super::constants::{ERROR_DISPLAY, INITIAL_DISPLAY, MAX_DISPLAY_LENGTH};
use super::errors::CalcError;
use super::format::{format_display, parse_display};
use super::input::{Digit, Input, Operator};
use tracing::{debug, warn};

/// How the next digit or decimal point is applied to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryMode {
    /// Next numeric input replaces the display
    #[default]
    Fresh,
    /// Next numeric input extends the display
    Appending,
}

/// Left operand and operator waiting for a right operand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingOperation {
    pub operand: f64,
    pub operator: Operator,
}

/// The calculator engine.
///
/// Each handler is a total, synchronous state transition. Failures never
/// escape: they are shown as `"Error"` on the display.
#[derive(Debug, Clone)]
pub struct Calculator {
    /// Text shown to the user
    display: String,

    /// In-progress binary operation
    pending: Option<PendingOperation>,

    entry_mode: EntryMode,

    /// Memory register (M+, M-, MR, MC)
    memory: f64,

    /// Whether memory was written since the last MC
    memory_has_value: bool,

    /// Running sum of every result produced by equals
    grand_total: f64,
}

impl Calculator {
    pub fn new() -> Self {
        Calculator {
            display: INITIAL_DISPLAY.to_string(),
            pending: None,
            entry_mode: EntryMode::Fresh,
            memory: 0.0,
            memory_has_value: false,
            grand_total: 0.0,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn memory_has_value(&self) -> bool {
        self.memory_has_value
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn grand_total(&self) -> f64 {
        self.grand_total
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    pub fn pending_operand(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    pub fn entry_mode(&self) -> EntryMode {
        self.entry_mode
    }

    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// Dispatch a single input to its handler
    pub fn apply(&mut self, input: Input) {
        match input {
            Input::Digit(d) => self.digit(d),
            Input::Decimal => self.decimal_point(),
            Input::Operator(op) => self.operator(op),
            Input::Equals => self.equals(),
            Input::Clear => self.clear(),
            Input::MemoryClear => self.memory_clear(),
            Input::MemoryRecall => self.memory_recall(),
            Input::MemoryAdd => self.memory_add(),
            Input::MemorySubtract => self.memory_subtract(),
            Input::GrandTotalClear => self.grand_total_clear(),
            Input::GrandTotalRecall => self.grand_total_recall(),
        }
        debug!(%input, display = %self.display, "applied input");
    }

    pub fn digit(&mut self, d: Digit) {
        if self.is_error() || self.entry_mode == EntryMode::Fresh {
            self.display = d.to_string();
            self.entry_mode = EntryMode::Appending;
        } else if self.display.len() < MAX_DISPLAY_LENGTH {
            if self.display == INITIAL_DISPLAY {
                self.display = d.to_string();
            } else {
                self.display.push(d.as_char());
            }
        }
    }

    pub fn decimal_point(&mut self) {
        if self.is_error() || self.entry_mode == EntryMode::Fresh {
            self.display = String::from("0.");
            self.entry_mode = EntryMode::Appending;
        } else if !self.display.contains('.') && self.display.len() < MAX_DISPLAY_LENGTH - 1 {
            self.display.push('.');
        }
    }

    pub fn operator(&mut self, op: Operator) {
        if self.is_error() {
            return;
        }

        let current = match parse_display(&self.display) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "operator pressed on unusable display");
                self.display = ERROR_DISPLAY.to_string();
                return;
            }
        };

        let operand = match (self.pending, self.entry_mode) {
            // A right operand was typed since the operator was chosen
            (Some(pending), EntryMode::Appending) => {
                match self.compute(pending, current) {
                    Ok(result) => {
                        self.display = format_display(result);
                        result
                    }
                    Err(_) => return,
                }
            }
            // No pending operation, or the operator is being replaced
            _ => current,
        };

        self.pending = Some(PendingOperation {
            operand,
            operator: op,
        });
        self.entry_mode = EntryMode::Fresh;
    }

    pub fn equals(&mut self) {
        if self.is_error() {
            return;
        }
        let Some(pending) = self.pending else {
            return;
        };

        let current = match parse_display(&self.display) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "equals pressed on unusable display");
                self.fail();
                return;
            }
        };

        if let Ok(result) = self.compute(pending, current) {
            self.display = format_display(result);
            self.grand_total += result;
            self.pending = None;
            self.entry_mode = EntryMode::Fresh;
        }
    }

    pub fn clear(&mut self) {
        self.display = INITIAL_DISPLAY.to_string();
        self.pending = None;
        self.entry_mode = EntryMode::Fresh;
    }

    pub fn memory_clear(&mut self) {
        self.memory = 0.0;
        self.memory_has_value = false;
    }

    pub fn memory_recall(&mut self) {
        self.recall(self.memory);
    }

    pub fn memory_add(&mut self) {
        self.accumulate_memory(1.0);
    }

    pub fn memory_subtract(&mut self) {
        self.accumulate_memory(-1.0);
    }

    pub fn grand_total_clear(&mut self) {
        self.grand_total = 0.0;
    }

    pub fn grand_total_recall(&mut self) {
        self.recall(self.grand_total);
    }

    /// Evaluate `pending.operand <op> right`.
    ///
    /// Division by zero resets the pending state and shows the error sentinel
    /// before returning the error.
    fn compute(&mut self, pending: PendingOperation, right: f64) -> Result<f64, CalcError> {
        let left = pending.operand;
        match pending.operator {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => {
                if right == 0.0 {
                    warn!(dividend = left, "division by zero");
                    self.fail();
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }

    /// Show the error sentinel and drop any pending operation
    fn fail(&mut self) {
        self.display = ERROR_DISPLAY.to_string();
        self.pending = None;
        self.entry_mode = EntryMode::Fresh;
    }

    fn recall(&mut self, value: f64) {
        self.display = format_display(value);
        self.entry_mode = EntryMode::Fresh;
    }

    /// Add `sign * display` into memory
    fn accumulate_memory(&mut self, sign: f64) {
        if self.is_error() {
            return;
        }
        match parse_display(&self.display) {
            Ok(value) => {
                self.memory += sign * value;
                self.memory_has_value = true;
            }
            Err(e) => warn!(error = %e, "memory update skipped"),
        }
        // Fresh entry even when the display could not be parsed
        self.entry_mode = EntryMode::Fresh;
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(calc: &mut Calculator, keys: &str) {
        for key in keys.chars() {
            calc.apply(Input::from_key(key).unwrap());
        }
    }

    fn calc_after(keys: &str) -> Calculator {
        let mut calc = Calculator::new();
        press(&mut calc, keys);
        calc
    }

    #[test]
    fn test_initial_state() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.entry_mode(), EntryMode::Fresh);
        assert_eq!(calc.pending_operator(), None);
        assert_eq!(calc.memory(), 0.0);
        assert_eq!(calc.grand_total(), 0.0);
        assert!(!calc.memory_has_value());
    }

    #[test]
    fn test_no_leading_zeros() {
        assert_eq!(calc_after("c005").display(), "5");
        assert_eq!(calc_after("000").display(), "0");
    }

    #[test]
    fn test_digit_limit() {
        let calc = calc_after("12345678901234567890");
        assert_eq!(calc.display(), "123456789012345");
    }

    #[test]
    fn test_single_decimal_point() {
        assert_eq!(calc_after("1...5.").display(), "1.5");
        assert_eq!(calc_after(".").display(), "0.");
        assert_eq!(calc_after("..").display(), "0.");
    }

    #[test]
    fn test_decimal_point_length_limit() {
        // 14 characters: no room for a point plus a digit
        assert_eq!(calc_after("12345678901234.").display(), "12345678901234");
        assert_eq!(calc_after("1234567890123.").display(), "1234567890123.");
    }

    #[test]
    fn test_addition() {
        let calc = calc_after("6+4=");
        assert_eq!(calc.display(), "10");
        assert_eq!(calc.grand_total(), 10.0);
        assert_eq!(calc.pending_operator(), None);
        assert_eq!(calc.entry_mode(), EntryMode::Fresh);
    }

    #[test]
    fn test_each_operator() {
        assert_eq!(calc_after("9-12=").display(), "-3");
        assert_eq!(calc_after("7*6=").display(), "42");
        assert_eq!(calc_after("1/4=").display(), "0.25");
        assert_eq!(calc_after("0.1+0.2=").display(), "0.3");
    }

    #[test]
    fn test_left_to_right_chaining() {
        let mut calc = calc_after("5+3*");
        assert_eq!(calc.display(), "8");
        assert_eq!(calc.pending_operand(), Some(8.0));
        press(&mut calc, "2=");
        assert_eq!(calc.display(), "16");
    }

    #[test]
    fn test_operator_replacement() {
        let mut calc = calc_after("5+");
        press(&mut calc, "*");
        assert_eq!(calc.pending_operator(), Some(Operator::Multiply));
        assert_eq!(calc.pending_operand(), Some(5.0));
        press(&mut calc, "3=");
        assert_eq!(calc.display(), "15");
    }

    #[test]
    fn test_division_by_zero() {
        let mut calc = calc_after("5/0=");
        assert_eq!(calc.display(), "Error");
        assert!(calc.is_error());
        assert_eq!(calc.pending_operator(), None);
        assert_eq!(calc.grand_total(), 0.0);

        press(&mut calc, "3");
        assert_eq!(calc.display(), "3");
    }

    #[test]
    fn test_division_by_zero_while_chaining() {
        let calc = calc_after("5/0+");
        assert_eq!(calc.display(), "Error");
        assert_eq!(calc.pending_operator(), None);
        assert_eq!(calc.entry_mode(), EntryMode::Fresh);
    }

    #[test]
    fn test_division_by_negative_zero() {
        let mut calc = Calculator::new();
        calc.apply(Input::Digit(Digit::new(8).unwrap()));
        calc.operator(Operator::Divide);
        calc.display = String::from("-0");
        calc.entry_mode = EntryMode::Appending;
        calc.equals();
        assert_eq!(calc.display(), "Error");
    }

    #[test]
    fn test_error_blocks_operator_and_equals() {
        let mut calc = calc_after("5/0=");
        press(&mut calc, "+=");
        assert_eq!(calc.display(), "Error");
        assert_eq!(calc.pending_operator(), None);
    }

    #[test]
    fn test_decimal_after_error() {
        let calc = calc_after("5/0=.");
        assert_eq!(calc.display(), "0.");
        assert_eq!(calc.entry_mode(), EntryMode::Appending);
    }

    #[test]
    fn test_equals_without_pending_is_noop() {
        let calc = calc_after("42=");
        assert_eq!(calc.display(), "42");
        assert_eq!(calc.grand_total(), 0.0);
    }

    #[test]
    fn test_repeated_equals_does_not_reapply() {
        let calc = calc_after("2+3===");
        assert_eq!(calc.display(), "5");
        assert_eq!(calc.grand_total(), 5.0);
    }

    #[test]
    fn test_equals_uses_left_operand_when_no_right_typed() {
        // The display still shows the left operand
        let calc = calc_after("4*=");
        assert_eq!(calc.display(), "16");
    }

    #[test]
    fn test_clear_keeps_registers() {
        let mut calc = calc_after("7m2+3=");
        press(&mut calc, "c");
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.memory(), 7.0);
        assert_eq!(calc.grand_total(), 5.0);
        assert_eq!(calc.pending_operator(), None);
    }

    #[test]
    fn test_memory_round_trip() {
        let mut calc = calc_after("c7mcr");
        assert_eq!(calc.display(), "7");
        assert!(calc.memory_has_value());

        press(&mut calc, "x");
        assert!(!calc.memory_has_value());
        press(&mut calc, "r");
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_memory_subtract() {
        let calc = calc_after("10m3nr");
        assert_eq!(calc.memory(), 7.0);
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_memory_add_starts_fresh_entry() {
        let calc = calc_after("12m5");
        assert_eq!(calc.display(), "5");
    }

    #[test]
    fn test_memory_ignored_on_error() {
        let calc = calc_after("5/0=m");
        assert_eq!(calc.memory(), 0.0);
        assert!(!calc.memory_has_value());
    }

    #[test]
    fn test_memory_recall_clears_error() {
        let calc = calc_after("4m5/0=r");
        assert_eq!(calc.display(), "4");
        assert_eq!(calc.entry_mode(), EntryMode::Fresh);
    }

    #[test]
    fn test_grand_total_accumulates() {
        let mut calc = calc_after("6+4=2*3=");
        assert_eq!(calc.grand_total(), 16.0);
        press(&mut calc, "g");
        assert_eq!(calc.display(), "16");

        press(&mut calc, "zg");
        assert_eq!(calc.grand_total(), 0.0);
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_recalled_value_is_replaced_by_next_digit() {
        let calc = calc_after("9mcr1");
        assert_eq!(calc.display(), "1");
    }

    #[test]
    fn test_overflow_to_infinity() {
        let mut calc = Calculator::new();
        calc.display = String::from("1e308");
        calc.entry_mode = EntryMode::Appending;
        press(&mut calc, "*");
        press(&mut calc, "10=");
        assert_eq!(calc.display(), "inf");
        assert_eq!(calc.grand_total(), f64::INFINITY);
    }

    #[test]
    fn test_unparseable_display_sets_error() {
        let mut calc = Calculator::new();
        calc.display = String::from("NaN");
        calc.entry_mode = EntryMode::Appending;
        press(&mut calc, "+");
        assert_eq!(calc.display(), "Error");
    }

    #[test]
    fn test_memory_update_on_unparseable_display() {
        for key in ["m", "n"] {
            let mut calc = Calculator::new();
            calc.display = String::from("NaN");
            calc.entry_mode = EntryMode::Appending;
            press(&mut calc, key);

            assert_eq!(calc.memory(), 0.0);
            assert!(!calc.memory_has_value());
            assert_eq!(calc.entry_mode(), EntryMode::Fresh);
            assert_eq!(calc.display(), "NaN");
        }
    }

    #[test]
    fn test_equals_on_unparseable_display_sets_error() {
        let mut calc = calc_after("4+");
        calc.display = String::from("NaN");
        calc.entry_mode = EntryMode::Appending;
        press(&mut calc, "=");

        assert_eq!(calc.display(), "Error");
        assert_eq!(calc.pending_operator(), None);
        assert_eq!(calc.grand_total(), 0.0);
    }

    #[test]
    fn test_shortened_result_rounds_tie_away_from_zero() {
        let calc = calc_after("12345678901234+.5=");
        assert_eq!(calc.display(), "12345678901235");
        assert_eq!(calc.grand_total(), 12345678901234.5);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = Calculator::new();
        let b = Calculator::new();
        press(&mut a, "3m");
        assert!(a.memory_has_value());
        assert!(!b.memory_has_value());
    }
}
