//! Recursive-descent parser for AtomC, tightly coupled with the domain and
//! type analysers: every grammar production that introduces or uses a name
//! calls straight into [`atomc_sem`] at the point the grammar commits to it,
//! rather than building an intermediate AST for a later pass to walk.
//!
//! The four submodules split the grammar by concern:
//! - [`parser`]: the token cursor and the productions shared by every
//!   declaration (`typeBase`, `arrayDecl`, `unit`).
//! - [`decl`]: `structDef`, `varDef`, `fnDef`, `fnParam`.
//! - [`stmt`]: `stmCompound` and the statement forms.
//! - [`expr`]: the expression precedence chain, `exprAssign` down to
//!   `exprPrimary`.

mod decl;
mod expr;
mod parser;
mod stmt;

use atomc_lex::Token;
use atomc_sem::DomainStack;
use atomc_util::{CompileError, Interner};

pub use parser::Parser;

/// Parse a complete token stream, running domain and type analysis inline
/// as the grammar is recognised. Returns the populated [`DomainStack`] on
/// success, or the first fatal [`CompileError`] encountered — parsing
/// always stops at the first error (§ single fatal diagnostic per run).
pub fn parse(tokens: Vec<Token>, interner: &Interner) -> Result<DomainStack, CompileError> {
    let mut parser = Parser::new(tokens, interner);
    parser.unit()?;
    Ok(parser.into_domain_stack())
}
