//! The stack of lexical scopes ("domains") the parser threads through
//! struct bodies, function bodies, and blocks.

use crate::symbol::{Symbol, SymbolArena, SymbolId};
use atomc_util::{define_idx, CompileError, IndexVec, Span};

define_idx!(DomainId);

/// A single lexical scope: the symbols declared directly in it, and a link
/// to the enclosing scope.
struct Domain {
    symbols: Vec<SymbolId>,
    parent: Option<DomainId>,
}

/// The stack of domains plus the arena of every symbol ever declared.
///
/// The global domain is pushed once by `new` and is never popped; callers
/// must not call `drop_domain` past it.
pub struct DomainStack {
    domains: IndexVec<DomainId, Domain>,
    current: DomainId,
    pub symbols: SymbolArena,
}

impl DomainStack {
    pub fn new() -> Self {
        let mut domains = IndexVec::new();
        let global = domains.push(Domain {
            symbols: Vec::new(),
            parent: None,
        });
        DomainStack {
            domains,
            current: global,
            symbols: SymbolArena::new(),
        }
    }

    pub fn global(&self) -> DomainId {
        DomainId(0)
    }

    pub fn current(&self) -> DomainId {
        self.current
    }

    /// `pushDomain`: allocate a new empty domain whose parent is the
    /// current one, and make it current.
    pub fn push_domain(&mut self) -> DomainId {
        let new_domain = self.domains.push(Domain {
            symbols: Vec::new(),
            parent: Some(self.current),
        });
        self.current = new_domain;
        new_domain
    }

    /// `dropDomain`: move `current` to its parent. The popped domain's
    /// symbols remain reachable via owner back-references; nothing here is
    /// freed.
    pub fn drop_domain(&mut self) {
        if let Some(parent) = self.domains[self.current].parent {
            self.current = parent;
        }
    }

    /// `findSymbolInDomain`: scan one domain only.
    fn find_in_domain(&self, domain: DomainId, name: &str) -> Option<SymbolId> {
        self.domains[domain]
            .symbols
            .iter()
            .copied()
            .find(|&id| self.symbols.get(id).name == name)
    }

    /// `addSymbolToDomain`: declare `symbol` in the current domain after
    /// checking for a redefinition within that single domain.
    pub fn add_symbol_to_domain(&mut self, span: Span, symbol: Symbol) -> Result<SymbolId, CompileError> {
        let name = symbol.name.clone();
        if self.find_in_domain(self.current, &name).is_some() {
            return Err(CompileError::new(
                span,
                format!("symbol redefinition: {name}"),
            ));
        }
        let id = self.symbols.declare(symbol);
        self.domains[self.current].symbols.push(id);
        Ok(id)
    }

    /// `findSymbol`: walk from the current domain outward through parent
    /// links, returning the first match.
    pub fn find_symbol(&self, name: &str) -> Option<SymbolId> {
        let mut domain = self.current;
        loop {
            if let Some(id) = self.find_in_domain(domain, name) {
                return Some(id);
            }
            match self.domains[domain].parent {
                Some(parent) => domain = parent,
                None => return None,
            }
        }
    }

    /// Symbols declared directly in `domain`, in declaration order.
    pub fn symbols_in(&self, domain: DomainId) -> &[SymbolId] {
        &self.domains[domain].symbols
    }
}

impl Default for DomainStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::{SymbolKind, VarStorage};
    use crate::types::{BaseType, Type};

    fn var(name: &str) -> Symbol {
        Symbol {
            name: name.to_string(),
            ty: Type::scalar(BaseType::Int),
            owner: None,
            kind: SymbolKind::Var(VarStorage::Global),
        }
    }

    #[test]
    fn redefinition_in_same_domain_is_rejected() {
        let mut stack = DomainStack::new();
        stack.add_symbol_to_domain(Span::new(1), var("a")).unwrap();
        let err = stack
            .add_symbol_to_domain(Span::new(1), var("a"))
            .unwrap_err();
        assert_eq!(err.message, "symbol redefinition: a");
    }

    #[test]
    fn shadowing_across_domains_is_permitted() {
        let mut stack = DomainStack::new();
        stack.add_symbol_to_domain(Span::new(1), var("a")).unwrap();
        stack.push_domain();
        assert!(stack.add_symbol_to_domain(Span::new(2), var("a")).is_ok());
    }

    #[test]
    fn find_symbol_walks_parent_chain() {
        let mut stack = DomainStack::new();
        stack.add_symbol_to_domain(Span::new(1), var("outer")).unwrap();
        stack.push_domain();
        assert!(stack.find_symbol("outer").is_some());
        assert!(stack.find_symbol("nope").is_none());
    }

    #[test]
    fn drop_domain_does_not_forget_symbols() {
        let mut stack = DomainStack::new();
        stack.push_domain();
        let id = stack.add_symbol_to_domain(Span::new(1), var("a")).unwrap();
        stack.drop_domain();
        assert_eq!(stack.symbols.get(id).name, "a");
    }
}
