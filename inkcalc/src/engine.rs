//! Calculator input model.
//!
//! A pure reducer over keypad events: the UI owns a [`CalcState`] and folds
//! [`CalcEvent`]s into it with [`CalcState::apply`]; rendering never mutates
//! the state directly. Two input modes exist: fresh entry (the next digit
//! replaces the display) and appending (the next digit extends it).

use thiserror::Error;

/// The four binary operations on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinOp {
    /// The keypad glyph for this operation.
    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Subtract => '-',
            BinOp::Multiply => '*',
            BinOp::Divide => '/',
        }
    }

    /// Apply the operation to two operands.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            BinOp::Add => Ok(a + b),
            BinOp::Subtract => Ok(a - b),
            BinOp::Multiply => Ok(a * b),
            BinOp::Divide => {
                if b == 0.0 {
                    Err(CalcError::DivideByZero)
                } else {
                    Ok(a / b)
                }
            }
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Divide by zero")]
    DivideByZero,
    #[error("not a number: {0}")]
    BadNumber(String),
}

/// One keypad press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcEvent {
    Digit(u8),
    DecimalPoint,
    Clear,
    Backspace,
    Operator(BinOp),
    Equals,
}

/// The whole calculator state.
///
/// Invariants on `display`: at most one decimal point, and no leading
/// zeros except a lone "0" or "0.".
#[derive(Debug, Clone, PartialEq)]
pub struct CalcState {
    display: String,
    stored: f64,
    pending: Option<BinOp>,
    fresh: bool,
}

impl Default for CalcState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            stored: 0.0,
            pending: None,
            fresh: true,
        }
    }
}

impl CalcState {
    /// The visible display text: a partial or complete number, or an
    /// error marker.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The operator chosen but not yet applied, if any.
    pub fn pending(&self) -> Option<BinOp> {
        self.pending
    }

    /// The left operand retained across operator chaining.
    pub fn stored(&self) -> f64 {
        self.stored
    }

    /// Whether the next digit starts a fresh number.
    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    /// The display parsed as a number, if it holds one.
    pub fn entry(&self) -> Option<f64> {
        self.display.parse().ok()
    }

    /// A copy of this state showing `value` as a fresh entry.
    /// Used by memory recall.
    pub fn with_entry(&self, value: f64) -> CalcState {
        let mut next = self.clone();
        next.display = format_value(value);
        next.fresh = true;
        next
    }

    /// Fold one event into the state, returning the successor state.
    pub fn apply(&self, event: CalcEvent) -> CalcState {
        let mut next = self.clone();
        match event {
            CalcEvent::Digit(d) => next.push_digit(d),
            CalcEvent::DecimalPoint => next.push_decimal(),
            CalcEvent::Clear => next = CalcState::default(),
            CalcEvent::Backspace => next.backspace(),
            CalcEvent::Operator(op) => next.apply_operator(op),
            CalcEvent::Equals => next.equals(),
        }
        next
    }

    fn push_digit(&mut self, d: u8) {
        let d = char::from(b'0' + d.min(9));
        if self.fresh {
            self.display = d.to_string();
            self.fresh = false;
        } else if self.display == "0" {
            // collapse the lone zero instead of producing "05"
            self.display = d.to_string();
        } else {
            self.display.push(d);
        }
    }

    fn push_decimal(&mut self) {
        if self.fresh {
            self.display = "0.".to_string();
            self.fresh = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn backspace(&mut self) {
        if self.fresh {
            // nothing to backspace; keep 0
            self.display = "0".to_string();
            return;
        }
        if self.display.len() > 1 {
            self.display.pop();
        } else {
            self.display = "0".to_string();
            self.fresh = true;
        }
    }

    fn apply_operator(&mut self, op: BinOp) {
        let current = match self.parse_display() {
            Ok(v) => v,
            Err(_) => {
                self.fail("Error".to_string());
                return;
            }
        };

        if let Some(pending) = self.pending {
            // chain: fold the pending operation and show the intermediate
            match pending.apply(self.stored, current) {
                Ok(v) => {
                    self.stored = v;
                    self.display = format_value(v);
                }
                Err(_) => {
                    self.fail("Error".to_string());
                    return;
                }
            }
        } else {
            self.stored = current;
        }

        self.pending = Some(op);
        self.fresh = true;
    }

    fn equals(&mut self) {
        let Some(op) = self.pending else {
            // nothing to compute
            return;
        };
        let current = match self.parse_display() {
            Ok(v) => v,
            Err(_) => {
                self.fail("Error".to_string());
                return;
            }
        };
        match op.apply(self.stored, current) {
            Ok(v) => {
                self.display = format_value(v);
                self.stored = 0.0;
                self.pending = None;
                self.fresh = true;
            }
            Err(err) => self.fail(format!("Error: {err}")),
        }
    }

    fn parse_display(&self) -> Result<f64, CalcError> {
        self.display
            .parse()
            .map_err(|_| CalcError::BadNumber(self.display.clone()))
    }

    /// Show an error marker and reset to a clean state so the next input
    /// starts fresh. Only the display text differs from Clear.
    fn fail(&mut self, message: String) {
        self.display = message;
        self.stored = 0.0;
        self.pending = None;
        self.fresh = true;
    }
}

/// Render a result with up to ten fractional digits, trailing zeros
/// suppressed.
pub fn format_value(n: f64) -> String {
    let s = format!("{:.10}", n);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: &[CalcEvent]) -> CalcState {
        events
            .iter()
            .fold(CalcState::default(), |state, &event| state.apply(event))
    }

    use BinOp::{Add, Divide, Multiply, Subtract};
    use CalcEvent::{Backspace, Clear, DecimalPoint, Digit, Equals, Operator};

    #[test]
    fn test_digits_accumulate() {
        assert_eq!(run(&[Digit(5), Digit(0)]).display(), "50");
        assert_eq!(run(&[Digit(1), Digit(2), Digit(3)]).display(), "123");
    }

    #[test]
    fn test_leading_zero_collapses() {
        assert_eq!(run(&[Digit(0)]).display(), "0");
        assert_eq!(run(&[Digit(0), Digit(5)]).display(), "5");
        assert_eq!(run(&[Digit(0), Digit(0), Digit(7)]).display(), "7");
    }

    #[test]
    fn test_decimal_point_idempotent() {
        let state = run(&[Digit(1), DecimalPoint, DecimalPoint, Digit(5)]);
        assert_eq!(state.display(), "1.5");
    }

    #[test]
    fn test_decimal_on_fresh_entry() {
        assert_eq!(run(&[DecimalPoint]).display(), "0.");
        assert_eq!(run(&[DecimalPoint, Digit(5)]).display(), "0.5");
    }

    #[test]
    fn test_backspace_trims_last_char() {
        assert_eq!(run(&[Digit(1), Digit(2), Digit(3), Backspace]).display(), "12");
    }

    #[test]
    fn test_backspace_to_empty_resets_to_fresh_zero() {
        let state = run(&[Digit(5), Backspace]);
        assert_eq!(state.display(), "0");
        assert!(state.is_fresh());
        // the next digit replaces, it does not append
        assert_eq!(run(&[Digit(5), Backspace, Digit(7)]).display(), "7");
    }

    #[test]
    fn test_backspace_on_fresh_state_returns_zero() {
        let state = run(&[Backspace]);
        assert_eq!(state.display(), "0");
        assert!(state.is_fresh());
        // a result on the display is wiped, not trimmed
        let state = run(&[Digit(7), Operator(Add), Digit(3), Equals, Backspace]);
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn test_backspace_keeps_pending_operator() {
        let state = run(&[Digit(7), Operator(Add), Backspace, Digit(3), Equals]);
        assert_eq!(state.display(), "10");
    }

    #[test]
    fn test_clear_resets_everything() {
        let state = run(&[Digit(5), Operator(Add), Digit(3), Clear]);
        assert_eq!(state, CalcState::default());
    }

    #[test]
    fn test_simple_addition() {
        assert_eq!(run(&[Digit(7), Operator(Add), Digit(3), Equals]).display(), "10");
    }

    #[test]
    fn test_decimal_addition() {
        let state = run(&[
            Digit(1),
            DecimalPoint,
            Digit(5),
            Operator(Add),
            Digit(2),
            DecimalPoint,
            Digit(5),
            Equals,
        ]);
        assert_eq!(state.display(), "4");
    }

    #[test]
    fn test_subtraction_negative_result() {
        assert_eq!(run(&[Digit(3), Operator(Subtract), Digit(5), Equals]).display(), "-2");
    }

    #[test]
    fn test_chained_operators_left_to_right() {
        // 2 + 3 * 4 = 20, no precedence; intermediate 5 shown after '*'
        let mid = run(&[Digit(2), Operator(Add), Digit(3), Operator(Multiply)]);
        assert_eq!(mid.display(), "5");
        assert_eq!(mid.pending(), Some(Multiply));
        let state = mid.apply(Digit(4)).apply(Equals);
        assert_eq!(state.display(), "20");
        assert_eq!(state.pending(), None);
    }

    #[test]
    fn test_operator_twice_folds_current_display() {
        // the display still reads "2" when '+' lands the second time
        assert_eq!(run(&[Digit(2), Operator(Add), Operator(Add)]).display(), "4");
    }

    #[test]
    fn test_equals_without_operator_is_noop() {
        let before = run(&[Digit(4), Digit(2)]);
        let after = before.apply(Equals);
        assert_eq!(after, before);
        // input mode is untouched, so digits keep appending
        assert_eq!(after.apply(Digit(7)).display(), "427");
    }

    #[test]
    fn test_result_feeds_next_computation() {
        let state = run(&[
            Digit(7),
            Operator(Add),
            Digit(3),
            Equals,
            Operator(Add),
            Digit(2),
            Equals,
        ]);
        assert_eq!(state.display(), "12");
    }

    #[test]
    fn test_divide_by_zero_on_equals() {
        let state = run(&[Digit(5), Operator(Divide), Digit(0), Equals]);
        assert_eq!(state.display(), "Error: Divide by zero");
        assert_eq!(state.pending(), None);
        assert_eq!(state.stored(), 0.0);
        assert!(state.is_fresh());
        // a new computation starts cleanly afterwards
        let state = run(&[
            Digit(5),
            Operator(Divide),
            Digit(0),
            Equals,
            Digit(7),
            Operator(Add),
            Digit(3),
            Equals,
        ]);
        assert_eq!(state.display(), "10");
    }

    #[test]
    fn test_divide_by_zero_while_chaining() {
        let state = run(&[Digit(5), Operator(Divide), Digit(0), Operator(Multiply)]);
        assert_eq!(state.display(), "Error");
        assert_eq!(state.pending(), None);
    }

    #[test]
    fn test_operator_on_error_marker_is_guarded() {
        // after an error the display is not a number; pressing an operator
        // must not panic and must leave the error state clean
        let state = run(&[Digit(5), Operator(Divide), Digit(0), Equals, Operator(Add)]);
        assert_eq!(state.display(), "Error");
        assert_eq!(state.pending(), None);
    }

    #[test]
    fn test_digits_recover_after_error() {
        let state = run(&[Digit(5), Operator(Divide), Digit(0), Equals, Digit(8)]);
        assert_eq!(state.display(), "8");
    }

    #[test]
    fn test_trailing_decimal_parses() {
        // "5." is a complete enough number for evaluation
        let state = run(&[Digit(5), DecimalPoint, Operator(Add), Digit(1), Equals]);
        assert_eq!(state.display(), "6");
    }

    #[test]
    fn test_float_artifacts_trimmed() {
        // 0.1 + 0.2 renders as 0.3 at ten fractional digits
        let state = run(&[
            DecimalPoint,
            Digit(1),
            Operator(Add),
            DecimalPoint,
            Digit(2),
            Equals,
        ]);
        assert_eq!(state.display(), "0.3");
    }

    #[test]
    fn test_repeating_fraction_ten_digits() {
        let state = run(&[Digit(1), Operator(Divide), Digit(3), Equals]);
        assert_eq!(state.display(), "0.3333333333");
    }

    #[test]
    fn test_with_entry_is_fresh() {
        let state = run(&[Digit(9)]).with_entry(42.5);
        assert_eq!(state.display(), "42.5");
        assert!(state.is_fresh());
        assert_eq!(state.entry(), Some(42.5));
    }

    #[test]
    fn test_entry_on_error_marker_is_none() {
        let state = run(&[Digit(1), Operator(Divide), Digit(0), Equals]);
        assert_eq!(state.entry(), None);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(10.0), "10");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(-2.0), "-2");
        assert_eq!(format_value(1.0 / 3.0), "0.3333333333");
    }

    #[test]
    fn test_binop_apply() {
        assert_eq!(Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Subtract.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(Multiply.apply(2.0, 3.0), Ok(6.0));
        assert_eq!(Divide.apply(6.0, 3.0), Ok(2.0));
        assert_eq!(Divide.apply(6.0, 0.0), Err(CalcError::DivideByZero));
    }
}
