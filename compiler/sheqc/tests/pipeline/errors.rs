//! Every failure class, as category plus message.

use pretty_assertions::assert_eq;
use sheqc::{run_source, Config, Error};

use crate::common::{diagnostic, eval, fail};

#[test]
fn lexical() {
    assert_eq!(
        diagnostic("\"abc"),
        ("lexical", "unterminated string at line 1 col 1".to_string())
    );
    assert_eq!(
        diagnostic("{+ 1 @}"),
        ("lexical", "unexpected '@' at line 1 col 6".to_string())
    );
}

#[test]
fn syntax() {
    assert_eq!(
        diagnostic("1 2"),
        (
            "syntax",
            "unexpected number after expression at line 1 col 3".to_string()
        )
    );
    assert_eq!(
        diagnostic("{lambda (x x) : x}"),
        ("syntax", "duplicate parameter 'x' at line 1 col 12".to_string())
    );
    assert_eq!(
        diagnostic("{let {[if = 1]} in 2 end}"),
        (
            "syntax",
            "keyword 'if' cannot be used as a binding name at line 1 col 8".to_string()
        )
    );
    assert_eq!(fail("").category(), "syntax");
}

#[test]
fn binding_names_need_whitespace_before_equals() {
    // `x=1` lexes as one identifier.
    assert_eq!(
        diagnostic("{let {[x=1]} in x end}"),
        ("syntax", "expected '=', found ']' at line 1 col 11".to_string())
    );
    assert_eq!(eval("{let {[x = 1]} in x end}"), "1");
}

#[test]
fn unterminated_input() {
    assert_eq!(fail("{+ 1 2").category(), "syntax");
}

#[test]
fn unbound_identifier() {
    assert_eq!(
        diagnostic("nope"),
        (
            "unbound-identifier",
            "unbound identifier: nope at line 1 col 1".to_string()
        )
    );
}

#[test]
fn type_errors() {
    assert_eq!(
        diagnostic(r#"{+ 1 "2"}"#),
        (
            "type",
            "+ expects number, got string at line 1 col 1".to_string()
        )
    );
    assert_eq!(fail("{if \"x\" 1 2}").category(), "type");
    assert_eq!(fail("{5 5}").category(), "type");
}

#[test]
fn arity_errors() {
    assert_eq!(
        diagnostic("{strlen \"a\" \"b\"}"),
        (
            "arity",
            "strlen expects 1 argument, got 2 at line 1 col 1".to_string()
        )
    );
    assert_eq!(fail("{{lambda (x) : x}}").category(), "arity");
}

#[test]
fn user_errors_carry_the_serialized_argument() {
    assert_eq!(
        diagnostic("{error {+ 40 2}}"),
        ("user", "42 at line 1 col 1".to_string())
    );
}

#[test]
fn diagnostics_keep_user_message_bytes() {
    let err = fail(r#"{error {substring "é" 0 1}}"#);
    let mut out = Vec::new();
    err.write_diagnostic(&mut out).unwrap();
    assert_eq!(out, b"sheq: user error: \"\xC3\" at line 1 col 1\n");

    let mut out = Vec::new();
    fail("{/ 1 0}").write_diagnostic(&mut out).unwrap();
    assert_eq!(out, b"sheq: domain error: division by zero at line 1 col 1\n");
}

#[test]
fn errors_on_later_lines_report_their_line() {
    let (_, message) = diagnostic("{+ 1\n   {/ 2 0}}");
    assert_eq!(message, "division by zero at line 2 col 4");
}

#[test]
fn resource_exhaustion_in_each_phase() {
    let tiny = Config { arena_capacity: 8 };
    let err = run_source("{+ 1 2}", &tiny).unwrap_err();
    assert!(matches!(err, Error::Lex(_)), "{err:?}");
    assert_eq!(err.category(), "resource-exhaustion");

    let deep = Config {
        arena_capacity: 16 * 1024,
    };
    let err = run_source("{let {[f = {lambda (f) : {f f}}]} in {f f} end}", &deep).unwrap_err();
    assert!(matches!(err, Error::Eval(_)), "{err:?}");
    assert_eq!(err.category(), "resource-exhaustion");
}
