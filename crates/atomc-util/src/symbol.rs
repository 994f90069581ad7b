//! Interned identifier strings.
//!
//! A single compilation is single-threaded and short-lived, so unlike a
//! long-running compiler driver we don't need a process-global, concurrent
//! string table — just a plain arena owned by the [`Lexer`](atomc_lex::Lexer)
//! for the duration of one run.

use rustc_hash::FxHashMap;
use std::fmt;

/// An interned identifier. Cheap to copy and compare.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(u32);

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Interns identifier text so names compare by a cheap integer instead of
/// repeated string comparisons during domain/scope lookups.
#[derive(Default)]
pub struct Interner {
    strings: Vec<Box<str>>,
    map: FxHashMap<Box<str>, Symbol>,
}

impl Interner {
    pub fn new() -> Self {
        Interner::default()
    }

    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(&sym) = self.map.get(text) {
            return sym;
        }
        let sym = Symbol(self.strings.len() as u32);
        let boxed: Box<str> = text.into();
        self.strings.push(boxed.clone());
        self.map.insert(boxed, sym);
        sym
    }

    pub fn resolve(&self, sym: Symbol) -> &str {
        &self.strings[sym.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_same_text_returns_same_symbol() {
        let mut interner = Interner::new();
        let a = interner.intern("foo");
        let b = interner.intern("foo");
        assert_eq!(a, b);
        assert_eq!(interner.resolve(a), "foo");
    }

    #[test]
    fn distinct_text_gets_distinct_symbols() {
        let mut interner = Interner::new();
        let a = interner.intern("foo");
        let b = interner.intern("bar");
        assert_ne!(a, b);
        assert_eq!(interner.resolve(b), "bar");
    }
}
