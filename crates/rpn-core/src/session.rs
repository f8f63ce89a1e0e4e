//! Per-line orchestration.
//!
//! A [`Session`] owns one [`Machine`] for its whole lifetime and drives the
//! tokenizer over each incoming line, dispatching tokens left to right and
//! collecting everything the calculator prints in response.

use crate::error::Notice;
use crate::literal;
use crate::machine::Machine;
use crate::token::{Cmd, Token};
use crate::tokenizer;

/// One calculator session.
#[derive(Default)]
pub struct Session {
    machine: Machine,
}

impl Session {
    pub fn new() -> Self {
        Session {
            machine: Machine::new(),
        }
    }

    /// Process one input line and return the lines to print for it.
    pub fn eval_line(&mut self, line: &str) -> Vec<String> {
        let mut out = Vec::new();
        for token in tokenizer::tokenize(line) {
            self.dispatch(token, &mut out);
        }
        out
    }

    fn dispatch(&mut self, token: Token<'_>, out: &mut Vec<String>) {
        match token {
            // Comment toggles stay live inside comments; nothing else does.
            Token::CommentToggle => self.machine.toggle_comment(),
            _ if self.machine.in_comment() => {}
            Token::Whitespace => {}
            Token::Literal(text) => {
                // A discarded literal (malformed octal) prints nothing.
                if let Some(value) = literal::parse(text) {
                    if let Err(notice) = self.machine.push(value) {
                        out.push(notice.to_string());
                    }
                }
            }
            Token::Operator(op) => {
                if let Err(notice) = self.machine.apply(op) {
                    out.push(notice.to_string());
                }
            }
            Token::Command(Cmd::PrintStack) => {
                out.extend(self.machine.dump().iter().map(|v| v.to_string()));
            }
            Token::Command(Cmd::PrintResult) => match self.machine.result() {
                Ok(value) => out.push(value.to_string()),
                Err(notice) => out.push(notice.to_string()),
            },
            Token::Command(Cmd::PushRandom) => {
                if let Err(notice) = self.machine.push_random() {
                    out.push(notice.to_string());
                }
            }
            Token::Unrecognized(text) => {
                out.push(Notice::Unrecognized(text.to_string()).to_string());
            }
        }
    }
}
