//! The key-event state machine.
//!
//! A [`Calculator`] consumes one decoded key event at a time and maintains
//! the display string plus the two pending operands of a four-function
//! calculator. It never fails: parse problems and division by zero surface
//! as the literal display value `"Error"`, and anything the keypad cannot
//! express is a silent no-op.
//!
//! The engine is a plain owned value with no interior locking; hosts that
//! take input from more than one source must serialize calls themselves.

use tracing::{debug, trace};

use super::event::{Key, Op};
use super::format::format_number;

/// What the next digit or decimal-point key does to the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryMode {
    /// Digits extend the number currently shown.
    Accumulating,
    /// An operator was just pressed; the next digit starts a fresh number.
    OperatorPending,
    /// Equals just produced a value; the next digit starts a fresh number,
    /// and a repeated equals re-applies the captured second operand.
    ResultShown,
}

/// The calculator state machine.
///
/// The display width is fixed at construction and bounds how many digit
/// characters (sign and decimal point excluded) the display accumulates.
#[derive(Clone, Debug)]
pub struct Calculator {
    width: usize,
    display: String,
    operand0: String,
    operand1: String,
    op: Option<Op>,
    mode: EntryMode,
}

impl Calculator {
    /// Create an engine for a `width`-digit display.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            display: String::from("0"),
            operand0: String::from("0"),
            operand1: String::from("0"),
            op: None,
            mode: EntryMode::Accumulating,
        }
    }

    /// Restore the identity defaults: display `"0"`, both operands `"0"`,
    /// no pending operator.
    pub fn reset(&mut self) {
        self.display = String::from("0");
        self.operand0 = String::from("0");
        self.operand1 = String::from("0");
        self.op = None;
        self.mode = EntryMode::Accumulating;
    }

    /// The current display contents.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Decode and apply a single raw key character.
    ///
    /// Characters with no key mapping leave the state untouched.
    pub fn handle_char(&mut self, c: char) -> &str {
        match Key::from_char(c) {
            Some(key) => self.handle(key),
            None => {
                trace!(input = %c, "ignoring unmapped key");
                self.display()
            }
        }
    }

    /// Apply a single key event and return the new display contents.
    pub fn handle(&mut self, key: Key) -> &str {
        trace!(?key, display = %self.display, "key");
        match key {
            Key::Digit(d) => self.digit(d),
            Key::Op(op) => self.operator(op),
            Key::Equals => self.equals(),
            Key::Backspace => self.backspace(),
            Key::ClearEntry => self.display = String::from("0"),
            Key::ClearAll => self.reset(),
            Key::Negate => self.negate(),
            Key::Decimal => self.decimal(),
        }
        self.display()
    }

    /// Record an operator and snapshot the display as the first operand.
    ///
    /// Pressing a second operator before any digit simply overwrites the
    /// first: only the last operator before an operand is honored.
    fn operator(&mut self, op: Op) {
        self.op = Some(op);
        self.operand0 = self.display.clone();
        self.mode = EntryMode::OperatorPending;
        debug!(op = %op.symbol(), operand0 = %self.operand0, "operator selected");
    }

    fn equals(&mut self) {
        // A repeated equals keeps the captured second operand, so the same
        // delta is applied to the running value again.
        if self.mode != EntryMode::ResultShown {
            self.operand1 = self.display.clone();
        }
        self.mode = EntryMode::ResultShown;

        // Equals with no operator ever selected leaves the display alone.
        let Some(op) = self.op else {
            return;
        };

        let (Some(a), Some(b)) = (parse_operand(&self.operand0), parse_operand(&self.operand1))
        else {
            debug!(operand0 = %self.operand0, operand1 = %self.operand1, "operand did not parse");
            self.display = String::from("Error");
            return;
        };

        match op.apply(a, b).filter(|result| result.is_finite()) {
            Some(result) => {
                // The result becomes the first operand of the next operation.
                self.operand0 = format_number(result, self.width);
                self.display = self.operand0.clone();
                debug!(a, op = %op.symbol(), b, result = %self.display, "evaluated");
            }
            None => {
                debug!(a, op = %op.symbol(), b, "evaluation failed");
                self.display = String::from("Error");
            }
        }
    }

    fn backspace(&mut self) {
        if self.display.len() > 1 {
            self.display.pop();
        } else {
            self.display = String::from("0");
        }
    }

    fn negate(&mut self) {
        if self.display == "0" {
            // A bare sign; digits follow.
            self.display = String::from("-");
        } else if let Some(unsigned) = self.display.strip_prefix('-') {
            self.display = unsigned.to_string();
        } else {
            self.display.insert(0, '-');
        }
    }

    fn decimal(&mut self) {
        if self.starts_fresh_number() {
            self.display = String::from("0.");
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        // A second decimal point in the same number is silently ignored.
    }

    fn digit(&mut self, d: u8) {
        if self.starts_fresh_number() {
            self.display = String::from("0");
        }

        // The width bound counts digits only, not the sign or the point.
        let digits = self.display.chars().filter(char::is_ascii_digit).count();
        if digits >= self.width {
            trace!(digit = d, "display full, digit dropped");
            return;
        }

        let c = char::from(b'0' + d);
        if self.display == "0" {
            self.display = String::from(c);
        } else {
            self.display.push(c);
        }
    }

    /// Consume a pending fresh-number trigger, if any.
    fn starts_fresh_number(&mut self) -> bool {
        match self.mode {
            EntryMode::Accumulating => false,
            EntryMode::OperatorPending | EntryMode::ResultShown => {
                self.mode = EntryMode::Accumulating;
                true
            }
        }
    }
}

/// Parse an operand snapshot as a finite number.
fn parse_operand(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}
