//! Lexer round-trip property (§8): re-joining the scanned tokens with
//! single spaces reproduces a lex-equivalent source for any sequence of
//! plain identifiers.

use atomc_lex::{Lexer, Literal, TokenKind};
use proptest::prelude::*;

fn ident() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,8}".prop_filter("not a keyword", |s| {
        atomc_lex::keyword_from_ident(s).is_none()
    })
}

proptest! {
    #[test]
    fn identifier_sequence_round_trips(names in prop::collection::vec(ident(), 1..8)) {
        let source = names.join(" ");
        let (tokens, interner) = Lexer::new(&source).tokenize().unwrap();
        prop_assert_eq!(tokens.len(), names.len() + 1); // + END

        let mut ids = Vec::new();
        for tok in &tokens[..tokens.len() - 1] {
            prop_assert_eq!(tok.kind, TokenKind::Id);
            match &tok.literal {
                Literal::Id(sym) => ids.push(interner.resolve(*sym).to_string()),
                other => prop_assert!(false, "expected Id literal, got {:?}", other),
            }
        }
        prop_assert_eq!(ids, names);
    }
}
