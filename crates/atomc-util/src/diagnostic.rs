//! Fatal compiler diagnostics.
//!
//! Every stage (lexer, parser, domain analyser, type analyser) reports at
//! most one error before the whole pipeline aborts, so there's no
//! `Handler` accumulating diagnostics here — just a single [`CompileError`]
//! that carries the offending line and is formatted the way the driver
//! prints it to stderr.

use crate::span::Span;
use thiserror::Error;

/// A single fatal diagnostic, fatal because AtomC stops at the first one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("error in line {line}: {message}", line = span.line)]
pub struct CompileError {
    pub span: Span,
    pub message: String,
}

impl CompileError {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        CompileError {
            span,
            message: message.into(),
        }
    }
}

pub type CompileResult<T> = Result<T, CompileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_like_original_diagnostics() {
        let err = CompileError::new(Span::new(12), "missing ; after expression");
        assert_eq!(err.to_string(), "error in line 12: missing ; after expression");
    }
}
