//! Comment skipping.
//!
//! AtomC only has `//` line comments; there are no block comments.

use super::core::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes a `//` comment up to (not including) the terminating
    /// newline or end of input.
    pub(super) fn skip_line_comment(&mut self) {
        self.advance();
        self.advance();
        loop {
            match self.current_byte() {
                0 | b'\n' | b'\r' => return,
                _ => self.advance(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::token::TokenKind;

    #[test]
    fn comment_runs_to_end_of_line() {
        let (tokens, _) = Lexer::new("// skip this\nint").tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::TypeInt);
    }

    #[test]
    fn comment_at_end_of_input_is_fine() {
        let (tokens, _) = Lexer::new("int // trailing").tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::TypeInt);
        assert_eq!(tokens[1].kind, TokenKind::End);
    }
}
