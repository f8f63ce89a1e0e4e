//! Core of the saturating RPN calculator.
//!
//! This crate provides everything behind the line protocol:
//! - [`SatInt`]: 32-bit values with saturating conversion and arithmetic
//! - [`tokenizer`]: line splitting and `-` sign/subtraction disambiguation
//! - [`literal`]: decimal and octal numeral parsing rules
//! - [`Machine`]: the bounded calculation stack and its commands
//! - [`Session`]: per-line orchestration

pub mod error;
pub mod literal;
pub mod machine;
pub mod session;
pub mod token;
pub mod tokenizer;
pub mod value;

// Re-export commonly used types at crate root
pub use error::Notice;
pub use machine::{Machine, RANDOM_SEQUENCE, STACK_CAPACITY};
pub use session::Session;
pub use token::{Cmd, Op, Token};
pub use value::SatInt;
