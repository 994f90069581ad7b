use crate::cursor::{Cursor, EOF};
use crate::token::{Token, TokenKind};
use atomc_util::{CompileError, Interner, Span};

/// Scans a source buffer into a flat token stream terminated by `END`.
///
/// The lexer never backtracks: every token is produced from a bounded
/// lookahead of two characters (`current_byte`/`peek_byte`).
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    line: u32,
    token_start: usize,
    pub interner: Interner,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            line: 1,
            token_start: 0,
            interner: Interner::new(),
        }
    }

    /// Scan the whole buffer, returning the token list ending in `END`, or
    /// the first lexical error encountered.
    pub fn tokenize(mut self) -> Result<(Vec<Token>, Interner), CompileError> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token()?;
            let is_end = tok.kind == TokenKind::End;
            tokens.push(tok);
            if is_end {
                return Ok((tokens, self.interner));
            }
        }
    }

    fn err(&self, message: impl Into<String>) -> CompileError {
        CompileError::new(Span::new(self.line), message)
    }

    fn next_token(&mut self) -> Result<Token, CompileError> {
        self.skip_trivia()?;
        self.token_start = self.cursor.position();
        let line = self.line;
        let c = self.cursor.current_byte();

        if c == EOF {
            return Ok(Token::simple(TokenKind::End, line));
        }
        if c.is_ascii_digit() {
            return self.lex_number(line);
        }
        if c == b'"' {
            return self.lex_string(line);
        }
        if c == b'\'' {
            return self.lex_char(line);
        }
        if c.is_ascii_alphabetic() || c == b'_' {
            return Ok(self.lex_identifier(line));
        }
        self.lex_operator(line)
    }

    /// Skips spaces, tabs, line breaks, and `//` comments. A newline, or a
    /// carriage return optionally followed by a newline, counts as exactly
    /// one line.
    fn skip_trivia(&mut self) -> Result<(), CompileError> {
        loop {
            match self.cursor.current_byte() {
                b' ' | b'\t' => self.cursor.advance(),
                b'\r' => {
                    self.cursor.advance();
                    if self.cursor.current_byte() == b'\n' {
                        self.cursor.advance();
                    }
                    self.line += 1;
                }
                b'\n' => {
                    self.cursor.advance();
                    self.line += 1;
                }
                b'/' if self.cursor.peek_byte() == b'/' => self.skip_line_comment(),
                _ => return Ok(()),
            }
        }
    }

    pub(super) fn advance(&mut self) {
        self.cursor.advance();
    }

    pub(super) fn current_byte(&self) -> u8 {
        self.cursor.current_byte()
    }

    pub(super) fn peek_byte(&self) -> u8 {
        self.cursor.peek_byte()
    }

    pub(super) fn peek_byte2(&self) -> u8 {
        self.cursor.peek_byte2()
    }

    pub(super) fn text_from_start(&self) -> &'a str {
        self.cursor.slice_from(self.token_start)
    }

    pub(super) fn position(&self) -> usize {
        self.cursor.position()
    }

    pub(super) fn slice(&self, start: usize, end: usize) -> &'a str {
        self.cursor.slice(start, end)
    }

    pub(super) fn fatal(&self, message: impl Into<String>) -> CompileError {
        self.err(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        let (tokens, _) = Lexer::new(src).tokenize().unwrap();
        tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn empty_source_is_just_end() {
        assert_eq!(kinds(""), vec![TokenKind::End]);
    }

    #[test]
    fn skips_whitespace_and_line_comments() {
        assert_eq!(
            kinds("  \t// a comment\n  int"),
            vec![TokenKind::TypeInt, TokenKind::End]
        );
    }

    #[test]
    fn cr_lf_counts_as_one_line() {
        let (tokens, _) = Lexer::new("int\r\nx").tokenize().unwrap();
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn bare_cr_counts_as_one_line() {
        let (tokens, _) = Lexer::new("int\rx").tokenize().unwrap();
        assert_eq!(tokens[1].line, 2);
    }
}
