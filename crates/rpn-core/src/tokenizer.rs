//! Line tokenizer.
//!
//! Splits a raw input line into tokens in a single iterative pass:
//! whitespace, `#`, single-character commands and unrecognized characters
//! each become one token, while maximal runs of digits and operator
//! characters are decomposed further. Decomposition resolves the `-`
//! sign/subtraction ambiguity from the surrounding atoms and then flattens
//! the run into evaluation order, so the session never re-tokenizes.

use std::ops::Range;

use smallvec::SmallVec;

use crate::token::{Cmd, Op, Token};

/// Token buffer for one line. Most lines are short enough to stay inline.
pub type Tokens<'a> = SmallVec<[Token<'a>; 16]>;

/// Characters that glue together into a composite run.
fn is_run_char(c: char) -> bool {
    c.is_ascii_digit() || Op::from_char(c).is_some()
}

/// Tokenize one input line.
pub fn tokenize(line: &str) -> Tokens<'_> {
    Tokenizer::new(line).run()
}

/// One element of a decomposed composite run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Atom<'a> {
    Lit(&'a str),
    Op(Op),
}

/// Coarse pieces of a run, before `-` disambiguation.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Raw {
    /// Byte range of a maximal digit group within the run.
    Digits(Range<usize>),
    /// Byte offset of a single operator character.
    OpChar(usize, Op),
}

struct Tokenizer<'a> {
    src: &'a str,
    tokens: Tokens<'a>,
}

impl<'a> Tokenizer<'a> {
    fn new(src: &'a str) -> Self {
        Tokenizer {
            src,
            tokens: Tokens::new(),
        }
    }

    fn run(mut self) -> Tokens<'a> {
        let src = self.src;
        let mut chars = src.char_indices().peekable();
        while let Some(&(start, c)) = chars.peek() {
            if c.is_ascii_whitespace() {
                while chars.next_if(|&(_, c)| c.is_ascii_whitespace()).is_some() {}
                self.tokens.push(Token::Whitespace);
            } else if is_run_char(c) {
                let mut end = start;
                while let Some((at, c)) = chars.next_if(|&(_, c)| is_run_char(c)) {
                    end = at + c.len_utf8();
                }
                self.composite(&src[start..end]);
            } else {
                chars.next();
                self.tokens.push(match c {
                    '#' => Token::CommentToggle,
                    'd' => Token::Command(Cmd::PrintStack),
                    'r' => Token::Command(Cmd::PushRandom),
                    '=' => Token::Command(Cmd::PrintResult),
                    _ => Token::Unrecognized(&src[start..start + c.len_utf8()]),
                });
            }
        }
        self.tokens
    }

    /// Decompose a digit/operator run and emit its tokens.
    fn composite(&mut self, run: &'a str) {
        let raw = coarse_split(run);
        let atoms = disambiguate(run, &raw);
        self.schedule(&atoms);
    }

    /// Emit a run's atoms in evaluation order.
    ///
    /// The first atom is emitted as-is; the rest are consumed pairwise. An
    /// operator followed by a literal emits the literal first so the operand
    /// is on the stack when the operator runs. An operator followed by
    /// another operator emits the first on its own. A middle literal with no
    /// operator to consume it is dropped, matching the reference calculator;
    /// the final atom is always emitted.
    fn schedule(&mut self, atoms: &[Atom<'a>]) {
        let Some((first, rest)) = atoms.split_first() else {
            return;
        };
        self.emit(*first);
        let mut i = 0;
        while i < rest.len() {
            if i == rest.len() - 1 {
                self.emit(rest[i]);
                break;
            }
            match (rest[i], rest[i + 1]) {
                (Atom::Op(op), Atom::Lit(text)) => {
                    self.emit(Atom::Lit(text));
                    self.emit(Atom::Op(op));
                    i += 2;
                }
                (Atom::Op(op), Atom::Op(_)) => {
                    self.emit(Atom::Op(op));
                    i += 1;
                }
                (Atom::Lit(_), _) => i += 1,
            }
        }
    }

    fn emit(&mut self, atom: Atom<'a>) {
        self.tokens.push(match atom {
            Atom::Lit(text) => Token::Literal(text),
            Atom::Op(op) => Token::Operator(op),
        });
    }
}

/// Split a run into digit groups and single operator characters.
fn coarse_split(run: &str) -> SmallVec<[Raw; 8]> {
    let mut raw = SmallVec::new();
    let mut digits_start = None;
    for (at, c) in run.char_indices() {
        if c.is_ascii_digit() {
            digits_start.get_or_insert(at);
            continue;
        }
        if let Some(start) = digits_start.take() {
            raw.push(Raw::Digits(start..at));
        }
        // Anything in a run that is not a digit is an operator character.
        if let Some(op) = Op::from_char(c) {
            raw.push(Raw::OpChar(at, op));
        }
    }
    if let Some(start) = digits_start {
        raw.push(Raw::Digits(start..run.len()));
    }
    raw
}

/// Resolve each `-` into a signed literal or a subtraction.
///
/// A `-` merges with a following digit group when it opens the run or when
/// the preceding atom is an operator; between two digit groups, after a
/// digit group, at the end of the run, and in every other adjacency it is a
/// standalone operator.
fn disambiguate<'a>(run: &'a str, raw: &[Raw]) -> SmallVec<[Atom<'a>; 8]> {
    let mut atoms = SmallVec::new();
    let mut i = 0;
    while i < raw.len() {
        match &raw[i] {
            Raw::Digits(range) => atoms.push(Atom::Lit(&run[range.clone()])),
            Raw::OpChar(_, op) if *op != Op::Sub => atoms.push(Atom::Op(*op)),
            Raw::OpChar(at, _) => {
                let next_digits = match raw.get(i + 1) {
                    Some(Raw::Digits(range)) => Some(range.clone()),
                    _ => None,
                };
                let merge = if i == 0 {
                    next_digits.is_some()
                } else if i + 1 == raw.len() {
                    false
                } else {
                    matches!(raw[i - 1], Raw::OpChar(..)) && next_digits.is_some()
                };
                match (merge, next_digits) {
                    (true, Some(range)) => {
                        atoms.push(Atom::Lit(&run[*at..range.end]));
                        // The digit group was consumed by the sign.
                        i += 1;
                    }
                    _ => atoms.push(Atom::Op(Op::Sub)),
                }
            }
        }
        i += 1;
    }
    atoms
}
