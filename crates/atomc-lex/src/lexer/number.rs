//! Integer and floating-point literals.
//!
//! Both share one scanner (§4.1): consume digits, at most one `.`, and
//! optionally an `e`/`E` exponent followed by an optional sign then digits.
//! Whether the result is `INT` or `DOUBLE` is decided after the fact by
//! whether a `.`, `e`, or `E` was seen.

use super::core::Lexer;
use crate::token::{Literal, Token, TokenKind};
use atomc_util::CompileError;

impl<'a> Lexer<'a> {
    pub(super) fn lex_number(&mut self, line: u32) -> Result<Token, CompileError> {
        let mut saw_dot = false;
        let mut saw_exp = false;

        while self.current_byte().is_ascii_digit() {
            self.advance();
        }

        if self.current_byte() == b'.' && self.peek_byte().is_ascii_digit() {
            saw_dot = true;
            self.advance();
            while self.current_byte().is_ascii_digit() {
                self.advance();
            }
        }

        if matches!(self.current_byte(), b'e' | b'E') {
            let after_sign = matches!(self.peek_byte(), b'+' | b'-');
            let exp_has_digits = if after_sign {
                self.peek_byte2().is_ascii_digit()
            } else {
                self.peek_byte().is_ascii_digit()
            };
            if exp_has_digits {
                saw_exp = true;
                self.advance();
                if after_sign {
                    self.advance();
                }
                while self.current_byte().is_ascii_digit() {
                    self.advance();
                }
            }
        }

        let text = self.text_from_start();
        self.reject_trailing_letter(text)?;

        if saw_dot || saw_exp {
            let value: f64 = text
                .parse()
                .map_err(|_| self.fatal(format!("invalid double literal: {text}")))?;
            Ok(Token::new(TokenKind::Double, line, Literal::Double(value)))
        } else {
            let value: i64 = text
                .parse()
                .map_err(|_| self.fatal(format!("invalid int literal: {text}")))?;
            Ok(Token::new(TokenKind::Int, line, Literal::Int(value)))
        }
    }

    /// A letter other than `e`/`E` immediately after the numeric run is a
    /// lex error (e.g. `42x`). The dot/exponent scans above only ever
    /// consume a `.` or `e`/`E` when a confirming digit follows, so the
    /// scanned text itself can never end in `.`, `e`, `E`, `+`, or `-`.
    fn reject_trailing_letter(&self, text: &str) -> Result<(), CompileError> {
        let next = self.current_byte();
        if next.is_ascii_alphabetic() && next != b'e' && next != b'E' {
            return Err(self.fatal(format!(
                "malformed numeric literal: {text}{}",
                next as char
            )));
        }
        Ok(())
    }
}
