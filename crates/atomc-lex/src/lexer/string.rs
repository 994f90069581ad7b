//! String and character literals. Neither interprets escape sequences.

use super::core::Lexer;
use crate::token::{Literal, Token, TokenKind};
use atomc_util::CompileError;

impl<'a> Lexer<'a> {
    /// `"..."`, ending at the next `"`; end-of-input before the closing
    /// quote is a lex error.
    pub(super) fn lex_string(&mut self, line: u32) -> Result<Token, CompileError> {
        self.advance(); // opening quote
        let content_start = self.position();
        loop {
            match self.current_byte() {
                b'"' => break,
                0 => return Err(self.fatal("unterminated string literal")),
                _ => self.advance(),
            }
        }
        let text = self.slice(content_start, self.position());
        self.advance(); // closing quote
        let sym = self.interner.intern(text);
        Ok(Token::new(TokenKind::String, line, Literal::Str(sym)))
    }

    /// `'x'` for exactly one character `x`; anything else is a lex error.
    pub(super) fn lex_char(&mut self, line: u32) -> Result<Token, CompileError> {
        self.advance(); // opening quote
        let c = self.current_byte();
        if c == 0 || c == b'\'' {
            return Err(self.fatal("malformed char literal"));
        }
        self.advance();
        if self.current_byte() != b'\'' {
            return Err(self.fatal("malformed char literal: expected closing '"));
        }
        self.advance();
        Ok(Token::new(TokenKind::Char, line, Literal::Char(c as char)))
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::token::{Literal, TokenKind};

    #[test]
    fn simple_string() {
        let (tokens, interner) = Lexer::new(r#""hello""#).tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String);
        let Literal::Str(sym) = tokens[0].literal.clone() else {
            panic!("expected Str literal")
        };
        assert_eq!(interner.resolve(sym), "hello");
    }

    #[test]
    fn unterminated_string_is_a_lex_error() {
        assert!(Lexer::new(r#""unterminated"#).tokenize().is_err());
    }

    #[test]
    fn simple_char() {
        let (tokens, _) = Lexer::new("'a'").tokenize().unwrap();
        assert_eq!(tokens[0].literal, Literal::Char('a'));
    }

    #[test]
    fn empty_char_is_malformed() {
        assert!(Lexer::new("''").tokenize().is_err());
    }

    #[test]
    fn unterminated_char_is_malformed() {
        assert!(Lexer::new("'ab").tokenize().is_err());
    }
}
