//! Symbol table entries.
//!
//! A `Type` of kind `STRUCT` names a struct symbol, whose own declared type
//! points back at itself — rather than give `Symbol` an owning link into
//! the arena that stores it, every reference here is the stable [`SymbolId`]
//! handle, and the arena (`SymbolArena`) is the single owner.

use crate::types::Type;
use atomc_util::define_idx;

define_idx!(SymbolId);

/// The enclosing function or struct a declaration belongs to; `None` at
/// global scope.
pub type Owner = Option<SymbolId>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VarStorage {
    /// Global scope: a dedicated heap region, sized by `typeSize`.
    Global,
    /// Local to a function: position among that function's locals.
    Local { index: u32 },
    /// A struct member: byte offset from the start of the struct.
    Member { offset: u32 },
}

#[derive(Clone, Debug)]
pub enum SymbolKind {
    Var(VarStorage),
    Param { index: u32 },
    Fn {
        params: Vec<SymbolId>,
        locals: Vec<SymbolId>,
    },
    Struct { members: Vec<SymbolId> },
}

#[derive(Clone, Debug)]
pub struct Symbol {
    pub name: String,
    pub ty: Type,
    pub owner: Owner,
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn is_fn(&self) -> bool {
        matches!(self.kind, SymbolKind::Fn { .. })
    }

    pub fn is_struct(&self) -> bool {
        matches!(self.kind, SymbolKind::Struct { .. })
    }

    pub fn is_var_or_param(&self) -> bool {
        matches!(self.kind, SymbolKind::Var(_) | SymbolKind::Param { .. })
    }
}

/// Owns every `Symbol` ever declared; symbols outlive the domain that
/// declared them; nothing is ever freed before the run ends.
#[derive(Default)]
pub struct SymbolArena {
    symbols: atomc_util::IndexVec<SymbolId, Symbol>,
}

impl SymbolArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, symbol: Symbol) -> SymbolId {
        self.symbols.push(symbol)
    }

    pub fn get(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id]
    }

    pub fn get_mut(&mut self, id: SymbolId) -> &mut Symbol {
        &mut self.symbols[id]
    }

    /// Append `member` to the struct's member list and return its byte
    /// offset (the running sum of the preceding members' sizes).
    pub fn add_struct_member(&mut self, struct_id: SymbolId, member: SymbolId) {
        if let SymbolKind::Struct { members } = &mut self.get_mut(struct_id).kind {
            members.push(member);
        } else {
            panic!("add_struct_member on a non-struct symbol");
        }
    }

    pub fn add_fn_param(&mut self, fn_id: SymbolId, param: SymbolId) {
        if let SymbolKind::Fn { params, .. } = &mut self.get_mut(fn_id).kind {
            params.push(param);
        } else {
            panic!("add_fn_param on a non-function symbol");
        }
    }

    pub fn add_fn_local(&mut self, fn_id: SymbolId, local: SymbolId) {
        if let SymbolKind::Fn { locals, .. } = &mut self.get_mut(fn_id).kind {
            locals.push(local);
        } else {
            panic!("add_fn_local on a non-function symbol");
        }
    }

    /// Find a member of `struct_id` by name, for `.` field access.
    pub fn find_member(&self, struct_id: SymbolId, name: &str) -> Option<SymbolId> {
        let SymbolKind::Struct { members } = &self.get(struct_id).kind else {
            panic!("find_member on a non-struct symbol");
        };
        members
            .iter()
            .copied()
            .find(|&m| self.get(m).name == name)
    }

    /// Sizes, in declaration order, of a struct's members — used by
    /// `type_size` to compute a struct's total size without circularly
    /// borrowing the arena from within `Type`.
    pub fn member_sizes(&self, struct_id: SymbolId) -> Vec<u32> {
        let SymbolKind::Struct { members } = &self.get(struct_id).kind else {
            panic!("member_sizes on a non-struct symbol");
        };
        members
            .iter()
            .map(|&m| crate::types::type_size(&self.get(m).ty, |s| self.member_sizes(s)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BaseType;

    #[test]
    fn struct_member_offsets_follow_declaration_order() {
        let mut arena = SymbolArena::new();
        let s = arena.declare(Symbol {
            name: "P".into(),
            ty: Type::scalar(BaseType::Void),
            owner: None,
            kind: SymbolKind::Struct { members: vec![] },
        });
        let x = arena.declare(Symbol {
            name: "x".into(),
            ty: Type::scalar(BaseType::Int),
            owner: Some(s),
            kind: SymbolKind::Var(VarStorage::Member { offset: 0 }),
        });
        let y = arena.declare(Symbol {
            name: "y".into(),
            ty: Type::scalar(BaseType::Int),
            owner: Some(s),
            kind: SymbolKind::Var(VarStorage::Member { offset: 4 }),
        });
        arena.add_struct_member(s, x);
        arena.add_struct_member(s, y);
        assert_eq!(arena.member_sizes(s), vec![4, 4]);
    }
}
