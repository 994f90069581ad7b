//! Statements: `stmCompound`, `if`/`else`, `while`, `return`, and the
//! expression-statement fallback.

use crate::parser::Parser;
use atomc_lex::TokenKind;
use atomc_util::CompileError;

impl<'a> Parser<'a> {
    /// **stmCompound** := LACC (varDef | stmt)\* RACC
    ///
    /// `own_domain` is false when called right after a function's parameter
    /// list, so the body shares the params' domain (§4.3) instead of
    /// nesting another one a parameter could never be shadowed into.
    pub(crate) fn stm_compound(&mut self, own_domain: bool) -> Result<(), CompileError> {
        self.consume(TokenKind::Lacc, "missing { at start of block")?;
        if own_domain {
            self.sem.push_domain();
        }
        loop {
            match self.cur_kind() {
                TokenKind::Racc => break,
                TokenKind::TypeInt | TokenKind::TypeDouble | TokenKind::TypeChar | TokenKind::Struct => {
                    self.local_var_def()?;
                }
                _ => self.stmt()?,
            }
        }
        if own_domain {
            self.sem.drop_domain();
        }
        self.consume(TokenKind::Racc, "missing } at end of block")?;
        Ok(())
    }

    /// **stmt** := exprStmt | ifStmt | whileStmt | returnStmt | stmCompound
    pub(crate) fn stmt(&mut self) -> Result<(), CompileError> {
        match self.cur_kind() {
            TokenKind::If => self.if_stmt(),
            TokenKind::While => self.while_stmt(),
            TokenKind::Return => self.return_stmt(),
            TokenKind::Lacc => self.stm_compound(true),
            _ => self.expr_stmt(),
        }
    }

    fn if_stmt(&mut self) -> Result<(), CompileError> {
        self.advance(); // IF
        self.consume(TokenKind::Lpar, "missing ( after if")?;
        let cond = self.expr()?;
        if !atomc_sem::can_be_scalar(&cond.ty) {
            return Err(self.fatal("the if condition must be a scalar value"));
        }
        self.consume(TokenKind::Rpar, "missing ) in expression")?;
        self.stmt()?;
        // Greedy else-binding: the nearest unmatched `if` claims the `else`,
        // which falls out of simply checking for ELSE right here rather
        // than tracking any open-if state.
        if self.check(TokenKind::Else) {
            self.advance();
            self.stmt()?;
        }
        Ok(())
    }

    fn while_stmt(&mut self) -> Result<(), CompileError> {
        self.advance(); // WHILE
        self.consume(TokenKind::Lpar, "missing ( after while")?;
        let cond = self.expr()?;
        if !atomc_sem::can_be_scalar(&cond.ty) {
            return Err(self.fatal("the while condition must be a scalar value"));
        }
        self.consume(TokenKind::Rpar, "missing ) in expression")?;
        self.stmt()?;
        Ok(())
    }

    fn return_stmt(&mut self) -> Result<(), CompileError> {
        self.advance(); // RETURN
        let expected = self
            .current_return
            .expect("return_stmt called outside a function body");
        if self.can_start_expr() {
            let line = self.line();
            let ret = self.expr()?;
            if expected.base == atomc_sem::BaseType::Void {
                return Err(CompileError::new(
                    atomc_util::Span::new(line),
                    "a void function cannot return a value",
                ));
            }
            if !atomc_sem::can_be_scalar(&ret.ty) {
                return Err(CompileError::new(
                    atomc_util::Span::new(line),
                    "a return expression must be scalar",
                ));
            }
            if !atomc_sem::conv_to(&ret.ty, &expected) {
                return Err(self.fatal("incompatible type of the returned expression"));
            }
        } else if expected.base != atomc_sem::BaseType::Void {
            return Err(self.fatal("a non-void function must return a value"));
        }
        self.consume(TokenKind::Semicolon, "missing ; after return statement")?;
        Ok(())
    }

    fn expr_stmt(&mut self) -> Result<(), CompileError> {
        if self.can_start_expr() {
            self.expr()?;
        }
        self.consume(TokenKind::Semicolon, "missing ; after expression")?;
        Ok(())
    }
}
