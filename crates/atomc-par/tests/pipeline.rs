//! End-to-end lex+parse+analyse checks: feed source text straight through
//! `atomc_lex::Lexer` and `atomc_par::parse`, assert on the outcome.

use atomc_lex::Lexer;

fn compile(src: &str) -> Result<(), String> {
    let (tokens, interner) = Lexer::new(src).tokenize().map_err(|e| e.to_string())?;
    atomc_par::parse(tokens, &interner)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[test]
fn minimal_program_is_accepted() {
    assert!(compile("int main() { return 0; }").is_ok());
}

#[test]
fn empty_translation_unit_is_accepted() {
    assert!(compile("").is_ok());
}

#[test]
fn redefinition_is_a_fatal_error() {
    let err = compile("int a; int a;").unwrap_err();
    assert!(err.contains("symbol redefinition: a"), "{err}");
}

#[test]
fn if_condition_must_be_scalar() {
    let src = r#"
        struct P { int x; };
        void f() {
            struct P p;
            if (p) { }
        }
    "#;
    let err = compile(src).unwrap_err();
    assert!(err.contains("scalar"), "{err}");
}

#[test]
fn function_call_arity_mismatch_is_rejected() {
    let src = r#"
        int add(int a, int b) { return a + b; }
        void main() { add(1); }
    "#;
    let err = compile(src).unwrap_err();
    assert!(err.contains("too few arguments"), "{err}");
}

#[test]
fn struct_field_access_resolves_member_type() {
    let src = r#"
        struct Point { int x; int y; };
        void main() {
            struct Point p;
            int v;
            v = p.x;
        }
    "#;
    assert!(compile(src).is_ok());
}

#[test]
fn undefined_struct_member_is_rejected() {
    let src = r#"
        struct Point { int x; };
        void main() {
            struct Point p;
            int v;
            v = p.z;
        }
    "#;
    let err = compile(src).unwrap_err();
    assert!(err.contains("no member named z"), "{err}");
}

#[test]
fn array_without_dimension_is_rejected_for_locals() {
    let err = compile("void main() { int v[]; }").unwrap_err();
    assert!(
        err.contains("must have a specified dimension"),
        "{err}"
    );
}

#[test]
fn array_without_dimension_is_accepted_for_params() {
    assert!(compile("void f(int v[]) { }").is_ok());
}

#[test]
fn string_literal_converts_to_char_array_parameter() {
    assert!(compile(r#"void f(char s[]) { } void main() { f("hi"); }"#).is_ok());
}

#[test]
fn return_with_value_in_void_function_is_rejected() {
    let err = compile("void f() { return 1; }").unwrap_err();
    assert!(err.contains("void function"), "{err}");
}

#[test]
fn missing_return_value_in_non_void_function_is_rejected() {
    let err = compile("int f() { return; }").unwrap_err();
    assert!(err.contains("must return a value"), "{err}");
}

#[test]
fn dangling_else_binds_to_nearest_if() {
    let src = r#"
        void main() {
            int a;
            int b;
            if (a)
                if (b)
                    a = 1;
                else
                    a = 2;
        }
    "#;
    assert!(compile(src).is_ok());
}

#[test]
fn assignment_to_a_non_lvalue_is_rejected() {
    let err = compile("void main() { 1 = 2; }").unwrap_err();
    assert!(err.contains("non-lvalue"), "{err}");
}

#[test]
fn shadowing_a_global_in_a_function_body_is_permitted() {
    let src = r#"
        int a;
        void main() {
            int a;
            a = 1;
        }
    "#;
    assert!(compile(src).is_ok());
}
