//! Reportable calculator conditions.
//!
//! Every non-fatal condition is resolved where it is detected and surfaces
//! as exactly one printed line. The strings here are a compatibility
//! contract and must match verbatim.

use thiserror::Error;

/// A non-fatal condition reported on the output stream.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Notice {
    /// A push was attempted with the stack at capacity; the value is lost.
    #[error("Stack overflow.")]
    StackOverflow,
    /// An operator needed two operands the stack did not have.
    #[error("Stack underflow.")]
    StackUnderflow,
    /// Division or remainder with a zero divisor; both operands are lost.
    #[error("Divide by 0.")]
    DivideByZero,
    /// Exponentiation with a negative exponent; both operands are restored.
    #[error("Negative power.")]
    NegativePower,
    /// `=` on an empty stack.
    #[error("Stack empty.")]
    StackEmpty,
    /// Input matching no recognized token class, reported verbatim.
    #[error("Unrecognised operator or operand \"{0}\".")]
    Unrecognized(String),
}
