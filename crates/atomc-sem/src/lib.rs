//! Domain (scope) analysis and type analysis.
//!
//! Unlike a pipeline that builds a persistent AST/HIR and walks it in a
//! later pass, the parser calls directly into this crate at every grammar
//! point that declares or uses a name, so `DomainStack` and the functions in
//! [`types`] are the entire semantic model — there is no separate
//! resolution or type-checking pass to run afterwards.

pub mod domain;
pub mod dump;
pub mod ret;
pub mod symbol;
pub mod types;

pub use domain::{DomainId, DomainStack};
pub use dump::show_domain;
pub use ret::Ret;
pub use symbol::{Owner, Symbol, SymbolArena, SymbolId, SymbolKind, VarStorage};
pub use types::{arith_type_to, can_be_scalar, conv_to, type_size, BaseType, Type};
