//! Expressions, lowest precedence to highest: `exprAssign`, the binary
//! chain (`exprOr` .. `exprMul`), `exprCast`, `exprUnary`, `exprPostfix`,
//! `exprPrimary`. Every production returns the [`Ret`] the type analyser
//! computed for it — there's no separate AST node to re-walk afterward.

use crate::parser::Parser;
use atomc_lex::{Literal, TokenKind};
use atomc_sem::{arith_type_to, can_be_scalar, conv_to, BaseType, Ret, Type};
use atomc_util::CompileError;

impl<'a> Parser<'a> {
    pub(crate) fn expr(&mut self) -> Result<Ret, CompileError> {
        self.expr_assign()
    }

    /// **exprAssign** := exprUnary ASSIGN exprAssign | exprOr
    ///
    /// Tried speculatively: parse an `exprUnary`, and only commit to the
    /// assignment reading if `=` follows. `exprUnary`/`exprPostfix`/
    /// `exprPrimary` never declare symbols — only `find_symbol` — so a
    /// failed speculative parse needs no domain rollback, just a cursor
    /// reset back to `mark` and a full reparse as `exprOr`. A genuine parse
    /// error inside the speculative branch (not just "no `=` follows") is
    /// still a real error and must propagate, not be swallowed.
    pub(crate) fn expr_assign(&mut self) -> Result<Ret, CompileError> {
        let mark = self.mark();
        if self.can_start_expr() {
            let lhs = self.expr_unary()?;
            if self.check(TokenKind::Assign) {
                self.advance();
                let rhs = self.expr_assign()?;
                if !lhs.lval || lhs.ct {
                    return Err(self.fatal("cannot assign to a non-lvalue"));
                }
                if !can_be_scalar(&lhs.ty) || !can_be_scalar(&rhs.ty) {
                    return Err(self.fatal("both operands of an assignment must be scalar"));
                }
                if !conv_to(&rhs.ty, &lhs.ty) {
                    return Err(self.fatal("the assignment's right operand type cannot be converted to the left one"));
                }
                return Ok(Ret::new(lhs.ty, false, true));
            }
        }
        self.reset(mark);
        self.expr_or()
    }

    pub(crate) fn expr_or(&mut self) -> Result<Ret, CompileError> {
        let mut acc = self.expr_and()?;
        while self.check(TokenKind::Or) {
            self.advance();
            let rhs = self.expr_and()?;
            acc = Self::logic_result(self.line(), &acc, &rhs, "||")?;
        }
        Ok(acc)
    }

    pub(crate) fn expr_and(&mut self) -> Result<Ret, CompileError> {
        let mut acc = self.expr_eq()?;
        while self.check(TokenKind::And) {
            self.advance();
            let rhs = self.expr_eq()?;
            acc = Self::logic_result(self.line(), &acc, &rhs, "&&")?;
        }
        Ok(acc)
    }

    pub(crate) fn expr_eq(&mut self) -> Result<Ret, CompileError> {
        let mut acc = self.expr_rel()?;
        loop {
            let op = match self.cur_kind() {
                TokenKind::Equal => "==",
                TokenKind::Noteq => "!=",
                _ => break,
            };
            self.advance();
            let rhs = self.expr_rel()?;
            acc = Self::logic_result(self.line(), &acc, &rhs, op)?;
        }
        Ok(acc)
    }

    pub(crate) fn expr_rel(&mut self) -> Result<Ret, CompileError> {
        let mut acc = self.expr_add()?;
        loop {
            let op = match self.cur_kind() {
                TokenKind::Less => "<",
                TokenKind::Lesseq => "<=",
                TokenKind::Greater => ">",
                TokenKind::Greatereq => ">=",
                _ => break,
            };
            self.advance();
            let rhs = self.expr_add()?;
            acc = Self::logic_result(self.line(), &acc, &rhs, op)?;
        }
        Ok(acc)
    }

    pub(crate) fn expr_add(&mut self) -> Result<Ret, CompileError> {
        let mut acc = self.expr_mul()?;
        loop {
            let op = match self.cur_kind() {
                TokenKind::Add => "+",
                TokenKind::Sub => "-",
                _ => break,
            };
            self.advance();
            let rhs = self.expr_mul()?;
            acc = Self::arith_result(self.line(), &acc, &rhs, op)?;
        }
        Ok(acc)
    }

    pub(crate) fn expr_mul(&mut self) -> Result<Ret, CompileError> {
        let mut acc = self.expr_cast()?;
        loop {
            let op = match self.cur_kind() {
                TokenKind::Mul => "*",
                TokenKind::Div => "/",
                _ => break,
            };
            self.advance();
            let rhs = self.expr_cast()?;
            acc = Self::arith_result(self.line(), &acc, &rhs, op)?;
        }
        Ok(acc)
    }

    /// Comparisons and logical connectives: both sides must satisfy
    /// `arithTypeTo` (scalar, numeric) just like `+`/`-`/`*`/`/`; the result
    /// is always a plain `int`, never an lvalue, regardless of which side
    /// the promotion would have favored.
    fn logic_result(line: u32, lhs: &Ret, rhs: &Ret, op: &str) -> Result<Ret, CompileError> {
        if arith_type_to(&lhs.ty, &rhs.ty).is_none() {
            return Err(CompileError::new(
                atomc_util::Span::new(line),
                format!("invalid operand type for {op}"),
            ));
        }
        Ok(Ret::rvalue(Type::scalar(BaseType::Int)))
    }

    /// `+ - * /`: both sides must be scalar and numeric; the result is the
    /// arithmetically promoted type.
    fn arith_result(line: u32, lhs: &Ret, rhs: &Ret, op: &str) -> Result<Ret, CompileError> {
        match arith_type_to(&lhs.ty, &rhs.ty) {
            Some(ty) => Ok(Ret::rvalue(ty)),
            None => Err(CompileError::new(
                atomc_util::Span::new(line),
                format!("invalid operand type for {op}"),
            )),
        }
    }

    /// **exprCast** := LPAR typeBase arrayDecl? RPAR exprUnary | exprUnary
    ///
    /// The grammar's own recursive form would be `… RPAR exprCast`, letting
    /// `(int)(double)x` chain; the type-checking path this is grounded on
    /// instead recurses into `exprUnary`, so chained casts aren't
    /// recognised as such (see the struct-cast note below for the other
    /// half of this rule).
    ///
    /// `(` alone doesn't commit to a cast: only a type keyword right after
    /// it does, checked with a cheap one-token peek before calling
    /// `type_base`, so a parenthesized expression like `(a + b)` never
    /// takes the cast branch in the first place. Once the peek confirms a
    /// cast, any failure past that point (e.g. an undefined struct name) is
    /// a real error, not a reason to backtrack.
    pub(crate) fn expr_cast(&mut self) -> Result<Ret, CompileError> {
        if self.check(TokenKind::Lpar) && self.starts_type_base(1) {
            self.advance();
            let target = self.type_base()?;
            let dim = self.array_decl()?;
            let target = Self::apply_array_dim(target, dim);
            self.consume(TokenKind::Rpar, "missing ) in cast expression")?;
            let operand = self.expr_unary()?;
            let same_struct = target.base == BaseType::Struct
                && operand.ty.base == BaseType::Struct
                && target.struct_ref == operand.ty.struct_ref;
            if (target.base == BaseType::Struct || operand.ty.base == BaseType::Struct) && !same_struct {
                return Err(self.fatal("a struct value cannot be cast"));
            }
            if target.is_array() != operand.ty.is_array() {
                return Err(self.fatal("cannot cast between a scalar and an array"));
            }
            return Ok(Ret::rvalue(target));
        }
        self.expr_unary()
    }

    fn starts_type_base(&self, offset: usize) -> bool {
        matches!(
            self.peek_kind(offset),
            TokenKind::TypeInt | TokenKind::TypeDouble | TokenKind::TypeChar | TokenKind::Struct
        )
    }

    /// **exprUnary** := (SUB | NOT) exprUnary | exprPostfix
    pub(crate) fn expr_unary(&mut self) -> Result<Ret, CompileError> {
        match self.cur_kind() {
            TokenKind::Sub => {
                let line = self.line();
                self.advance();
                let operand = self.expr_unary()?;
                if !can_be_scalar(&operand.ty) {
                    return Err(CompileError::new(
                        atomc_util::Span::new(line),
                        "unary - requires a scalar operand",
                    ));
                }
                Ok(Ret::rvalue(operand.ty))
            }
            TokenKind::Not => {
                let line = self.line();
                self.advance();
                let operand = self.expr_unary()?;
                if !can_be_scalar(&operand.ty) {
                    return Err(CompileError::new(
                        atomc_util::Span::new(line),
                        "unary ! requires a scalar operand",
                    ));
                }
                Ok(Ret::rvalue(Type::scalar(BaseType::Int)))
            }
            _ => self.expr_postfix(),
        }
    }

    /// **exprPostfix** := exprPrimary (LBRACKET expr RBRACKET | DOT ID)\*
    pub(crate) fn expr_postfix(&mut self) -> Result<Ret, CompileError> {
        let mut acc = self.expr_primary()?;
        loop {
            match self.cur_kind() {
                TokenKind::Lbracket => {
                    let line = self.line();
                    self.advance();
                    if !acc.ty.is_array() {
                        return Err(CompileError::new(
                            atomc_util::Span::new(line),
                            "only an array can be indexed",
                        ));
                    }
                    let index = self.expr()?;
                    if !conv_to(&index.ty, &Type::scalar(BaseType::Int)) {
                        return Err(self.fatal("an array index must convert to int"));
                    }
                    self.consume(TokenKind::Rbracket, "missing ] in index expression")?;
                    let elem = Type {
                        base: acc.ty.base,
                        struct_ref: acc.ty.struct_ref,
                        n: -1,
                    };
                    acc = Ret::new(elem, true, false);
                }
                TokenKind::Dot => {
                    let line = self.line();
                    self.advance();
                    let name_tok = self.consume(TokenKind::Id, "missing field name after .")?;
                    let name = self.resolve_id(&name_tok);
                    let struct_id = acc.ty.struct_ref.filter(|_| acc.ty.base == BaseType::Struct)
                        .ok_or_else(|| {
                            CompileError::new(atomc_util::Span::new(line), "the left side of . must be a struct")
                        })?;
                    let member_id = self
                        .sem
                        .symbols
                        .find_member(struct_id, &name)
                        .ok_or_else(|| self.fatal(format!("struct has no member named {name}")))?;
                    let member_ty = self.sem.symbols.get(member_id).ty;
                    acc = Ret::new(member_ty, true, member_ty.is_array());
                }
                _ => break,
            }
        }
        Ok(acc)
    }

    /// **exprPrimary** := ID (LPAR (expr (COMMA expr)\*)? RPAR)?
    ///                 | INT | DOUBLE | CHAR | STRING | LPAR expr RPAR
    pub(crate) fn expr_primary(&mut self) -> Result<Ret, CompileError> {
        match self.cur_kind() {
            TokenKind::Id => {
                let name_tok = self.advance();
                let name = self.resolve_id(&name_tok);
                if self.check(TokenKind::Lpar) {
                    self.advance();
                    self.fn_call(&name)
                } else {
                    let sym_id = self
                        .sem
                        .find_symbol(&name)
                        .ok_or_else(|| self.fatal("undefined id"))?;
                    let symbol = self.sem.symbols.get(sym_id);
                    if !symbol.is_var_or_param() {
                        return Err(self.fatal(format!("{name} is not a variable")));
                    }
                    Ok(Ret::new(symbol.ty, true, symbol.ty.is_array()))
                }
            }
            TokenKind::Int => {
                let Literal::Int(_) = self.cur().literal.clone() else {
                    unreachable!()
                };
                self.advance();
                Ok(Ret::rvalue(Type::scalar(BaseType::Int)))
            }
            TokenKind::Double => {
                self.advance();
                Ok(Ret::rvalue(Type::scalar(BaseType::Double)))
            }
            TokenKind::Char => {
                self.advance();
                Ok(Ret::rvalue(Type::scalar(BaseType::Char)))
            }
            TokenKind::String => {
                self.advance();
                Ok(Ret::rvalue(Type::scalar(BaseType::Char).array_of(0)))
            }
            TokenKind::Lpar => {
                self.advance();
                if !self.can_start_expr() {
                    return Err(self.fatal("invalid expression after ("));
                }
                let inner = self.expr()?;
                self.consume(TokenKind::Rpar, "missing ) in expression")?;
                Ok(inner)
            }
            _ => Err(self.fatal("invalid expression")),
        }
    }

    fn fn_call(&mut self, name: &str) -> Result<Ret, CompileError> {
        let sym_id = self
            .sem
            .find_symbol(name)
            .ok_or_else(|| self.fatal(format!("undefined function: {name}")))?;
        let symbol = self.sem.symbols.get(sym_id);
        if !symbol.is_fn() {
            return Err(self.fatal(format!("{name} is not a function")));
        }
        let return_ty = symbol.ty;
        let params = match &symbol.kind {
            atomc_sem::SymbolKind::Fn { params, .. } => params.clone(),
            _ => unreachable!(),
        };

        let mut args = Vec::new();
        if self.can_start_expr() {
            loop {
                args.push(self.expr()?);
                if self.check(TokenKind::Comma) {
                    self.advance();
                    if !self.can_start_expr() {
                        return Err(self.fatal("invalid expression after ,"));
                    }
                    continue;
                }
                break;
            }
        }
        self.consume(TokenKind::Rpar, "missing ) in function call")?;

        if args.len() > params.len() {
            return Err(self.fatal("too many arguments in function call"));
        }
        if args.len() < params.len() {
            return Err(self.fatal("too few arguments in function call"));
        }
        for (arg, &param_id) in args.iter().zip(params.iter()) {
            let param_ty = self.sem.symbols.get(param_id).ty;
            if !conv_to(&arg.ty, &param_ty) {
                return Err(self.fatal("argument type mismatch in function call"));
            }
        }
        Ok(Ret::rvalue(return_ty))
    }
}
