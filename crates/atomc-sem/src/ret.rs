//! The type analyser's per-expression verdict.

use crate::types::Type;

/// `(type, lval, ct)` as produced for every expression the parser checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ret {
    pub ty: Type,
    /// True iff the expression denotes a storage location assignable via `=`.
    pub lval: bool,
    /// True iff the expression is not modifiable (a literal, cast, or
    /// arithmetic result). Some lvalues — arrays — are also `ct`.
    pub ct: bool,
}

impl Ret {
    pub const fn new(ty: Type, lval: bool, ct: bool) -> Self {
        Ret { ty, lval, ct }
    }

    pub const fn rvalue(ty: Type) -> Self {
        Ret::new(ty, false, true)
    }
}
