//! Token model for one input line.
//!
//! Tokens borrow their text from the line being processed and are transient;
//! nothing stores them beyond a single pass.

/// Binary operator symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl Op {
    /// Map an operator character to its operator, if it is one.
    pub fn from_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            '%' => Some(Op::Rem),
            '^' => Some(Op::Pow),
            _ => None,
        }
    }

}

/// Single-character calculator commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cmd {
    /// `d`: print the whole stack, bottom first.
    PrintStack,
    /// `r`: push the next value of the replay sequence.
    PushRandom,
    /// `=`: print the top of stack without removing it.
    PrintResult,
}

/// One atomic unit of an input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Decimal or octal numeral, optionally signed.
    Literal(&'a str),
    Operator(Op),
    Command(Cmd),
    /// `#`, toggling comment mode.
    CommentToggle,
    Whitespace,
    /// Input matching no recognized class, reported verbatim.
    Unrecognized(&'a str),
}
