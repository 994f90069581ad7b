//! Identifiers and keyword reclassification.

use super::core::Lexer;
use crate::token::{keyword_from_ident, Literal, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// A run beginning with a letter or `_` and continuing with letters,
    /// digits, or `_`; reclassified as a keyword iff it matches one of the
    /// nine reserved words.
    pub(super) fn lex_identifier(&mut self, line: u32) -> Token {
        loop {
            match self.current_byte() {
                b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' => self.advance(),
                _ => break,
            }
        }
        let text = self.text_from_start();
        match keyword_from_ident(text) {
            Some(kind) => Token::simple(kind, line),
            None => {
                let sym = self.interner.intern(text);
                Token::new(TokenKind::Id, line, Literal::Id(sym))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::token::{Literal, TokenKind};

    #[test]
    fn keyword_is_reclassified() {
        let (tokens, _) = Lexer::new("while").tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::While);
    }

    #[test]
    fn plain_identifier_is_interned() {
        let (tokens, interner) = Lexer::new("foo_bar1").tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Id);
        let Literal::Id(sym) = tokens[0].literal.clone() else {
            panic!("expected Id literal")
        };
        assert_eq!(interner.resolve(sym), "foo_bar1");
    }
}
