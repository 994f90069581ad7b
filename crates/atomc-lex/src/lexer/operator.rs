//! Operators and punctuation.
//!
//! One-character tokens are emitted directly. The six two-character forms
//! (`&&`, `||`, `==`, `!=`, `<=`, `>=`) are recognised by peeking the next
//! character; a solitary `&`, `|`, or `!` is a lex error — `!` is the
//! exception, since unary `!` is spelled `NOT` and is legal on its own.

use super::core::Lexer;
use crate::token::{Token, TokenKind};
use atomc_util::CompileError;

impl<'a> Lexer<'a> {
    pub(super) fn lex_operator(&mut self, line: u32) -> Result<Token, CompileError> {
        let c = self.current_byte();
        self.advance();

        let kind = match c {
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::Lpar,
            b')' => TokenKind::Rpar,
            b'[' => TokenKind::Lbracket,
            b']' => TokenKind::Rbracket,
            b'{' => TokenKind::Lacc,
            b'}' => TokenKind::Racc,
            b'+' => TokenKind::Add,
            b'-' => TokenKind::Sub,
            b'*' => TokenKind::Mul,
            b'/' => TokenKind::Div,
            b'.' => TokenKind::Dot,
            b'&' if self.current_byte() == b'&' => {
                self.advance();
                TokenKind::And
            }
            b'|' if self.current_byte() == b'|' => {
                self.advance();
                TokenKind::Or
            }
            b'=' if self.current_byte() == b'=' => {
                self.advance();
                TokenKind::Equal
            }
            b'=' => TokenKind::Assign,
            b'!' if self.current_byte() == b'=' => {
                self.advance();
                TokenKind::Noteq
            }
            b'!' => TokenKind::Not,
            b'<' if self.current_byte() == b'=' => {
                self.advance();
                TokenKind::Lesseq
            }
            b'<' => TokenKind::Less,
            b'>' if self.current_byte() == b'=' => {
                self.advance();
                TokenKind::Greatereq
            }
            b'>' => TokenKind::Greater,
            b'&' => return Err(self.fatal("Invalid &")),
            b'|' => return Err(self.fatal("Invalid |")),
            other => {
                return Err(self.fatal(format!(
                    "unrecognised character '{}'",
                    other as char
                )))
            }
        };
        Ok(Token::simple(kind, line))
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::token::TokenKind;

    fn kinds(src: &str) -> Vec<TokenKind> {
        let (tokens, _) = Lexer::new(src).tokenize().unwrap();
        tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn two_character_operators() {
        assert_eq!(
            kinds("&& || == != <= >="),
            vec![
                TokenKind::And,
                TokenKind::Or,
                TokenKind::Equal,
                TokenKind::Noteq,
                TokenKind::Lesseq,
                TokenKind::Greatereq,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn single_char_operators_dont_need_a_pair() {
        assert_eq!(
            kinds("= < > !"),
            vec![
                TokenKind::Assign,
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::Not,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn solitary_ampersand_is_a_lex_error() {
        assert!(Lexer::new("a & b").tokenize().is_err());
    }

    #[test]
    fn solitary_pipe_is_a_lex_error() {
        assert!(Lexer::new("a | b").tokenize().is_err());
    }
}
