//! Turns an AtomC source buffer into a token stream.
//!
//! The lexer never backtracks and never aggregates diagnostics: the first
//! malformed literal or stray character aborts the run with a single
//! line-numbered [`CompileError`](atomc_util::CompileError), matching the
//! fail-fast discipline the rest of the pipeline follows.

pub mod cursor;
mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{keyword_from_ident, Literal, Token, TokenKind};
