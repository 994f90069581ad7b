//! The token cursor, entry point (`unit`), and the two shared grammar
//! pieces (`typeBase`, `arrayDecl`) every declaration production uses.

use atomc_lex::{Literal, Token, TokenKind};
use atomc_sem::{BaseType, DomainStack, SymbolId, Type};
use atomc_util::{CompileError, Interner, Span};

/// Threads the parser's cursor and the two ambient values the grammar
/// needs while inside a declaration: the symbol owning whatever's being
/// declared next, and the return type of the function currently being
/// parsed (for checking `return`). Kept as fields on one value passed by
/// `&mut self` rather than process-wide globals, so a parse is reentrant
/// and testable in isolation.
pub struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    interner: &'a Interner,
    pub(crate) sem: DomainStack,
    pub(crate) owner_fn: Option<SymbolId>,
    pub(crate) current_return: Option<Type>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, interner: &'a Interner) -> Self {
        Parser {
            tokens,
            pos: 0,
            interner,
            sem: DomainStack::new(),
            owner_fn: None,
            current_return: None,
        }
    }

    /// Consumes the parser and hands back the domain/symbol state it built.
    pub fn into_domain_stack(self) -> DomainStack {
        self.sem
    }

    pub(crate) fn cur(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub(crate) fn cur_kind(&self) -> TokenKind {
        self.cur().kind
    }

    pub(crate) fn line(&self) -> u32 {
        self.cur().line
    }

    pub(crate) fn peek_kind(&self, offset: usize) -> TokenKind {
        self.tokens
            .get(self.pos + offset)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::End)
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.cur_kind() == kind
    }

    pub(crate) fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    pub(crate) fn consume(&mut self, kind: TokenKind, msg: &str) -> Result<Token, CompileError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.fatal(msg))
        }
    }

    pub(crate) fn mark(&self) -> usize {
        self.pos
    }

    pub(crate) fn reset(&mut self, mark: usize) {
        self.pos = mark;
    }

    pub(crate) fn fatal(&self, message: impl Into<String>) -> CompileError {
        CompileError::new(Span::new(self.line()), message)
    }

    pub(crate) fn resolve_id(&self, tok: &Token) -> String {
        match &tok.literal {
            Literal::Id(sym) => self.interner.resolve(*sym).to_string(),
            _ => unreachable!("resolve_id called on a non-Id token"),
        }
    }

    /// Whether the current token can begin an expression — used at every
    /// point the grammar makes an expression optional (`expr?`) instead of
    /// threading `Option` through the whole precedence chain.
    pub(crate) fn can_start_expr(&self) -> bool {
        matches!(
            self.cur_kind(),
            TokenKind::Sub
                | TokenKind::Not
                | TokenKind::Id
                | TokenKind::Int
                | TokenKind::Double
                | TokenKind::Char
                | TokenKind::String
                | TokenKind::Lpar
        )
    }

    /// **unit** := (structDef | fnDef | varDef)\* END
    pub fn unit(&mut self) -> Result<(), CompileError> {
        loop {
            match self.cur_kind() {
                TokenKind::End => break,
                TokenKind::Struct
                    if self.peek_kind(1) == TokenKind::Id && self.peek_kind(2) == TokenKind::Lacc =>
                {
                    self.struct_def()?;
                }
                TokenKind::Void => {
                    self.advance();
                    let name_tok = self.consume(TokenKind::Id, "missing function name")?;
                    self.consume(TokenKind::Lpar, "missing ( in function definition")?;
                    self.fn_def(Type::scalar(BaseType::Void), name_tok)?;
                }
                TokenKind::TypeInt | TokenKind::TypeDouble | TokenKind::TypeChar | TokenKind::Struct => {
                    let ty = self.type_base()?;
                    let name_tok = self.consume(TokenKind::Id, "missing identifier")?;
                    if self.check(TokenKind::Lpar) {
                        self.advance();
                        self.fn_def(ty, name_tok)?;
                    } else {
                        self.var_def_global(ty, name_tok)?;
                    }
                }
                _ => return Err(self.fatal("unexpected token at end of file")),
            }
        }
        self.consume(TokenKind::End, "unexpected token at end of file")?;
        Ok(())
    }

    /// **typeBase** := TYPE_INT | TYPE_DOUBLE | TYPE_CHAR | STRUCT ID
    pub(crate) fn type_base(&mut self) -> Result<Type, CompileError> {
        match self.cur_kind() {
            TokenKind::TypeInt => {
                self.advance();
                Ok(Type::scalar(BaseType::Int))
            }
            TokenKind::TypeDouble => {
                self.advance();
                Ok(Type::scalar(BaseType::Double))
            }
            TokenKind::TypeChar => {
                self.advance();
                Ok(Type::scalar(BaseType::Char))
            }
            TokenKind::Struct => {
                self.advance();
                let name_tok = self.consume(TokenKind::Id, "missing struct name")?;
                let name = self.resolve_id(&name_tok);
                let sym_id = self
                    .sem
                    .find_symbol(&name)
                    .ok_or_else(|| self.fatal(format!("undefined struct: {name}")))?;
                if !self.sem.symbols.get(sym_id).is_struct() {
                    return Err(self.fatal(format!("{name} is not a struct")));
                }
                Ok(Type::struct_scalar(sym_id))
            }
            _ => Err(self.fatal("missing type")),
        }
    }

    /// **arrayDecl** := LBRACKET INT? RBRACKET. `None` means no brackets at
    /// all (a scalar); `Some(0)` means brackets with no dimension inside.
    pub(crate) fn array_decl(&mut self) -> Result<Option<i32>, CompileError> {
        if !self.check(TokenKind::Lbracket) {
            return Ok(None);
        }
        self.advance();
        let dim = if let TokenKind::Int = self.cur_kind() {
            let Literal::Int(v) = self.cur().literal.clone() else {
                unreachable!()
            };
            self.advance();
            v as i32
        } else {
            0
        };
        self.consume(TokenKind::Rbracket, "missing ] after array dimension")?;
        Ok(Some(dim))
    }

    /// `n=0` ("unspecified size") is only legal for function parameters and
    /// string literals (§3); everywhere else an unspecified array must be
    /// rejected with this message.
    pub(crate) fn reject_unspecified_dimension(&self, dim: Option<i32>) -> Result<(), CompileError> {
        if dim == Some(0) {
            return Err(self.fatal("a vector variable must have a specified dimension"));
        }
        Ok(())
    }

    pub(crate) fn apply_array_dim(base: Type, dim: Option<i32>) -> Type {
        match dim {
            None => base,
            Some(n) => base.array_of(n),
        }
    }
}
