//! Declarations: `structDef`, `varDef` (at global, struct-member, and local
//! scope), `fnDef`, and `fnParam`. Each calls straight into the domain
//! analyser at the point it introduces a name — there's no intermediate
//! declaration AST to build and walk later.

use crate::parser::Parser;
use atomc_lex::{Token, TokenKind};
use atomc_sem::{Symbol, SymbolId, SymbolKind, Type, VarStorage};
use atomc_util::{CompileError, Span};

impl<'a> Parser<'a> {
    /// **structDef** := STRUCT ID LACC varDef\* RACC SEMICOLON
    ///
    /// Only reachable from `unit`'s top-level loop, so a struct definition
    /// nested in a function body is a syntax error rather than a silently
    /// accepted construct.
    pub(crate) fn struct_def(&mut self) -> Result<(), CompileError> {
        self.advance(); // STRUCT
        let name_tok = self.consume(TokenKind::Id, "missing struct name")?;
        let name = self.resolve_id(&name_tok);
        self.advance(); // LACC, already confirmed by the caller's lookahead

        let span = Span::new(name_tok.line);
        let struct_id = self.sem.add_symbol_to_domain(
            span,
            Symbol {
                name,
                ty: Type::scalar(atomc_sem::BaseType::Void),
                owner: None,
                kind: SymbolKind::Struct { members: vec![] },
            },
        )?;

        self.sem.push_domain();
        loop {
            if self.check(TokenKind::Racc) {
                break;
            }
            self.struct_member_def(struct_id)?;
        }
        self.sem.drop_domain();
        self.consume(TokenKind::Racc, "missing } after struct body")?;
        self.consume(TokenKind::Semicolon, "missing ; after struct definition")?;
        Ok(())
    }

    fn struct_member_def(&mut self, struct_id: SymbolId) -> Result<(), CompileError> {
        let ty = self.type_base()?;
        let name_tok = self.consume(TokenKind::Id, "missing member name")?;
        let dim = self.array_decl()?;
        self.consume(TokenKind::Semicolon, "missing ; after variable declaration")?;
        self.reject_unspecified_dimension(dim)?;

        let full_ty = Self::apply_array_dim(ty, dim);
        let offset: u32 = self.sem.symbols.member_sizes(struct_id).iter().sum();
        let name = self.resolve_id(&name_tok);
        let span = Span::new(name_tok.line);
        let member_id = self.sem.add_symbol_to_domain(
            span,
            Symbol {
                name,
                ty: full_ty,
                owner: Some(struct_id),
                kind: SymbolKind::Var(VarStorage::Member { offset }),
            },
        )?;
        self.sem.symbols.add_struct_member(struct_id, member_id);
        Ok(())
    }

    /// **varDef** at global scope: typeBase ID arrayDecl? SEMICOLON.
    pub(crate) fn var_def_global(&mut self, ty: Type, name_tok: Token) -> Result<(), CompileError> {
        let dim = self.array_decl()?;
        self.consume(TokenKind::Semicolon, "missing ; after variable declaration")?;
        self.reject_unspecified_dimension(dim)?;

        let full_ty = Self::apply_array_dim(ty, dim);
        let name = self.resolve_id(&name_tok);
        let span = Span::new(name_tok.line);
        self.sem.add_symbol_to_domain(
            span,
            Symbol {
                name,
                ty: full_ty,
                owner: None,
                kind: SymbolKind::Var(VarStorage::Global),
            },
        )?;
        Ok(())
    }

    /// A local `varDef` inside a `stmCompound`: same grammar as the global
    /// form, but the declaring symbol is owned by the enclosing function
    /// and an unspecified dimension is always rejected (§8 boundary).
    pub(crate) fn local_var_def(&mut self) -> Result<(), CompileError> {
        let ty = self.type_base()?;
        let name_tok = self.consume(TokenKind::Id, "missing variable name")?;
        let dim = self.array_decl()?;
        self.consume(TokenKind::Semicolon, "missing ; after variable declaration")?;
        self.reject_unspecified_dimension(dim)?;

        let fn_id = self
            .owner_fn
            .expect("local_var_def called outside a function body");
        let full_ty = Self::apply_array_dim(ty, dim);
        let index = match &self.sem.symbols.get(fn_id).kind {
            SymbolKind::Fn { locals, .. } => locals.len() as u32,
            _ => unreachable!("owner_fn does not name a function symbol"),
        };
        let name = self.resolve_id(&name_tok);
        let span = Span::new(name_tok.line);
        let local_id = self.sem.add_symbol_to_domain(
            span,
            Symbol {
                name,
                ty: full_ty,
                owner: Some(fn_id),
                kind: SymbolKind::Var(VarStorage::Local { index }),
            },
        )?;
        self.sem.symbols.add_fn_local(fn_id, local_id);
        Ok(())
    }

    /// **fnDef** := (typeBase | VOID) ID LPAR (fnParam (COMMA fnParam)\*)? RPAR stmCompound
    ///
    /// The caller has already consumed the return type, the function's
    /// name, and the opening `(`.
    pub(crate) fn fn_def(&mut self, return_ty: Type, name_tok: Token) -> Result<(), CompileError> {
        let name = self.resolve_id(&name_tok);
        let span = Span::new(name_tok.line);
        let fn_id = self.sem.add_symbol_to_domain(
            span,
            Symbol {
                name,
                ty: return_ty,
                owner: None,
                kind: SymbolKind::Fn {
                    params: vec![],
                    locals: vec![],
                },
            },
        )?;

        self.sem.push_domain();
        let prev_owner = self.owner_fn.replace(fn_id);
        let prev_return = self.current_return.replace(return_ty);

        if !self.check(TokenKind::Rpar) {
            loop {
                self.fn_param(fn_id)?;
                if self.check(TokenKind::Comma) {
                    self.advance();
                    continue;
                }
                break;
            }
        }
        self.consume(TokenKind::Rpar, "missing ) in function definition")?;
        // The params and the compound statement share one domain (§4.3):
        // `stmCompound` must not push a second one here.
        self.stm_compound(false)?;

        self.owner_fn = prev_owner;
        self.current_return = prev_return;
        self.sem.drop_domain();
        Ok(())
    }

    fn fn_param(&mut self, fn_id: SymbolId) -> Result<(), CompileError> {
        let ty = self.type_base()?;
        let name_tok = self.consume(TokenKind::Id, "missing parameter name")?;
        let dim = self.array_decl()?; // unspecified size is legal for params
        let full_ty = Self::apply_array_dim(ty, dim);

        let index = match &self.sem.symbols.get(fn_id).kind {
            SymbolKind::Fn { params, .. } => params.len() as u32,
            _ => unreachable!("fn_param called with a non-function owner"),
        };
        let name = self.resolve_id(&name_tok);
        let span = Span::new(name_tok.line);
        let param_id = self.sem.add_symbol_to_domain(
            span,
            Symbol {
                name,
                ty: full_ty,
                owner: Some(fn_id),
                kind: SymbolKind::Param { index },
            },
        )?;
        self.sem.symbols.add_fn_param(fn_id, param_id);
        Ok(())
    }
}
