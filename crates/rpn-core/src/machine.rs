//! The calculator stack machine.
//!
//! Owns the calculation stack, the comment-mode flag and the random replay
//! cursor for one session. All arithmetic saturates, and every failure mode
//! is a [`Notice`] resolved at the point of detection; nothing here aborts
//! the session.

use crate::error::Notice;
use crate::token::Op;
use crate::value::SatInt;

/// Fixed stack capacity. A push at capacity is rejected, never evicts.
pub const STACK_CAPACITY: usize = 23;

/// Replay sequence backing the `r` command: the first 22 outputs of glibc
/// `rand()` with the default seed.
pub const RANDOM_SEQUENCE: [i32; 22] = [
    1804289383, 846930886, 1681692777, 1714636915, 1957747793, 424238335, 719885386, 1649760492,
    596516649, 1189641421, 1025202362, 1350490027, 783368690, 1102520059, 2044897763, 1967513926,
    1365180540, 1540383426, 304089172, 1303455736, 35005211, 521595368,
];

/// Stack machine state for one session.
pub struct Machine {
    stack: Vec<SatInt>,
    in_comment: bool,
    rand_cursor: usize,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

impl Machine {
    pub fn new() -> Self {
        Machine {
            stack: Vec::with_capacity(STACK_CAPACITY),
            in_comment: false,
            rand_cursor: 0,
        }
    }

    /// Current stack depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether comment mode is active.
    pub fn in_comment(&self) -> bool {
        self.in_comment
    }

    /// Flip comment mode. `#` is the only token dispatched while a comment
    /// is open.
    pub fn toggle_comment(&mut self) {
        self.in_comment = !self.in_comment;
    }

    /// Push a value, rejecting it if the stack is full.
    pub fn push(&mut self, value: SatInt) -> Result<(), Notice> {
        if self.stack.len() == STACK_CAPACITY {
            return Err(Notice::StackOverflow);
        }
        self.stack.push(value);
        Ok(())
    }

    /// Pop `y` then `x` and push the saturated result of `x op y`.
    ///
    /// Divide by zero consumes both operands and pushes nothing, while a
    /// negative exponent restores both operands in their original order.
    /// That asymmetry is a compatibility requirement, not an oversight to
    /// fix. Remainder by zero reports the same way division does.
    pub fn apply(&mut self, op: Op) -> Result<(), Notice> {
        if self.stack.len() < 2 {
            return Err(Notice::StackUnderflow);
        }
        let y = self.stack.pop().unwrap();
        let x = self.stack.pop().unwrap();
        let result = match op {
            Op::Add => x.saturating_add(y),
            Op::Sub => x.saturating_sub(y),
            Op::Mul => x.saturating_mul(y),
            Op::Div | Op::Rem if y.get() == 0 => return Err(Notice::DivideByZero),
            Op::Div => x.saturating_div(y),
            Op::Rem => x.saturating_rem(y),
            Op::Pow if y.get() < 0 => {
                self.stack.push(x);
                self.stack.push(y);
                return Err(Notice::NegativePower);
            }
            Op::Pow => x.saturating_pow(y),
        };
        self.stack.push(result);
        Ok(())
    }

    /// The stack from bottom to top; an empty stack dumps as a single
    /// `i32::MIN`.
    pub fn dump(&self) -> Vec<SatInt> {
        if self.stack.is_empty() {
            vec![SatInt::MIN]
        } else {
            self.stack.clone()
        }
    }

    /// Top of stack without removing it.
    pub fn result(&self) -> Result<SatInt, Notice> {
        self.stack.last().copied().ok_or(Notice::StackEmpty)
    }

    /// Push the next value of the replay sequence. The cursor advances even
    /// when the push is rejected, and the index wraps once the sequence is
    /// exhausted.
    pub fn push_random(&mut self) -> Result<(), Notice> {
        let value = SatInt::new(RANDOM_SEQUENCE[self.rand_cursor % RANDOM_SEQUENCE.len()]);
        self.rand_cursor += 1;
        self.push(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_machine() -> Machine {
        let mut machine = Machine::new();
        for i in 0..STACK_CAPACITY as i32 {
            machine.push(SatInt::new(i)).unwrap();
        }
        machine
    }

    #[test]
    fn push_at_capacity_is_rejected() {
        let mut machine = full_machine();
        assert_eq!(machine.push(SatInt::new(99)), Err(Notice::StackOverflow));
        assert_eq!(machine.depth(), STACK_CAPACITY);
        // The stack itself is untouched.
        assert_eq!(machine.result(), Ok(SatInt::new(STACK_CAPACITY as i32 - 1)));
    }

    #[test]
    fn operator_needs_two_operands() {
        let mut machine = Machine::new();
        assert_eq!(machine.apply(Op::Add), Err(Notice::StackUnderflow));
        machine.push(SatInt::new(1)).unwrap();
        assert_eq!(machine.apply(Op::Add), Err(Notice::StackUnderflow));
        assert_eq!(machine.depth(), 1);
    }

    #[test]
    fn operand_order() {
        let mut machine = Machine::new();
        machine.push(SatInt::new(10)).unwrap();
        machine.push(SatInt::new(3)).unwrap();
        machine.apply(Op::Sub).unwrap();
        assert_eq!(machine.result(), Ok(SatInt::new(7)));
    }

    #[test]
    fn divide_by_zero_consumes_both_operands() {
        let mut machine = Machine::new();
        machine.push(SatInt::new(9)).unwrap();
        machine.push(SatInt::new(0)).unwrap();
        assert_eq!(machine.apply(Op::Div), Err(Notice::DivideByZero));
        assert_eq!(machine.depth(), 0);
    }

    #[test]
    fn remainder_by_zero_reports_like_division() {
        let mut machine = Machine::new();
        machine.push(SatInt::new(9)).unwrap();
        machine.push(SatInt::new(0)).unwrap();
        assert_eq!(machine.apply(Op::Rem), Err(Notice::DivideByZero));
        assert_eq!(machine.depth(), 0);
    }

    #[test]
    fn negative_power_restores_both_operands() {
        let mut machine = Machine::new();
        machine.push(SatInt::new(3)).unwrap();
        machine.push(SatInt::new(-2)).unwrap();
        assert_eq!(machine.apply(Op::Pow), Err(Notice::NegativePower));
        assert_eq!(machine.dump(), vec![SatInt::new(3), SatInt::new(-2)]);
    }

    #[test]
    fn zero_exponent_computes() {
        let mut machine = Machine::new();
        machine.push(SatInt::new(3)).unwrap();
        machine.push(SatInt::new(0)).unwrap();
        machine.apply(Op::Pow).unwrap();
        assert_eq!(machine.result(), Ok(SatInt::new(1)));
    }

    #[test]
    fn empty_dump_is_min_value() {
        assert_eq!(Machine::new().dump(), vec![SatInt::MIN]);
    }

    #[test]
    fn dump_is_bottom_to_top() {
        let mut machine = Machine::new();
        for v in [1, 2, 3] {
            machine.push(SatInt::new(v)).unwrap();
        }
        assert_eq!(
            machine.dump(),
            vec![SatInt::new(1), SatInt::new(2), SatInt::new(3)]
        );
    }

    #[test]
    fn result_does_not_pop() {
        let mut machine = Machine::new();
        machine.push(SatInt::new(7)).unwrap();
        assert_eq!(machine.result(), Ok(SatInt::new(7)));
        assert_eq!(machine.result(), Ok(SatInt::new(7)));
        assert_eq!(machine.depth(), 1);
    }

    #[test]
    fn result_on_empty_stack() {
        assert_eq!(Machine::new().result(), Err(Notice::StackEmpty));
    }

    #[test]
    fn random_replays_fixed_sequence() {
        let mut machine = Machine::new();
        machine.push_random().unwrap();
        machine.push_random().unwrap();
        assert_eq!(
            machine.dump(),
            vec![
                SatInt::new(RANDOM_SEQUENCE[0]),
                SatInt::new(RANDOM_SEQUENCE[1]),
            ]
        );
    }

    #[test]
    fn random_cursor_advances_past_rejected_push() {
        let mut machine = full_machine();
        assert_eq!(machine.push_random(), Err(Notice::StackOverflow));
        machine.apply(Op::Add).unwrap();
        machine.push_random().unwrap();
        assert_eq!(machine.result(), Ok(SatInt::new(RANDOM_SEQUENCE[1])));
    }

    #[test]
    fn random_cursor_wraps_after_sequence() {
        let mut machine = Machine::new();
        for _ in 0..RANDOM_SEQUENCE.len() {
            machine.push_random().ok();
            // Keep the stack from filling up.
            if machine.depth() > 1 {
                machine.apply(Op::Rem).ok();
            }
        }
        machine.push_random().unwrap();
        assert_eq!(machine.result(), Ok(SatInt::new(RANDOM_SEQUENCE[0])));
    }
}
