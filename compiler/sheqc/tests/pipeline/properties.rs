//! Documented behavioral properties of the language.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sheqc::{run_source, Config};

use crate::common::{eval, eval_bytes, fail};

#[test]
fn arithmetic_and_comparison() {
    assert_eq!(eval("{+ 3 4}"), "7");
    assert_eq!(eval("{<= 5 3}"), "false");
    assert_eq!(eval("{- 10 {* 2 {/ 9 3}}}"), "4");
}

#[test]
fn equality() {
    assert_eq!(eval(r#"{equal? "a" "a"}"#), "true");
    assert_eq!(eval(r#"{equal? 1 "1"}"#), "false");
    assert_eq!(eval("{equal? true true}"), "true");
    assert_eq!(eval("{equal? + +}"), "false");
}

#[test]
fn substring_and_bounds() {
    assert_eq!(eval(r#"{substring "hello" 1 3}"#), r#""el""#);
    assert_eq!(fail(r#"{substring "hello" -1 3}"#).category(), "domain");
    assert_eq!(fail(r#"{substring "hello" 1 6}"#).category(), "domain");
}

#[test]
fn shadowing() {
    assert_eq!(eval("{{lambda (x) : {{lambda (x) : x} 9}} 1}"), "9");
}

#[test]
fn division_by_zero_never_yields_infinity() {
    assert_eq!(fail("{/ 5 0}").category(), "domain");
    assert_eq!(fail("{/ 0 0}").category(), "domain");
}

#[test]
fn unbound_identifier_before_any_output() {
    assert_eq!(
        fail("{{lambda (a b) : {+ a b}} {+ 1 2} missing}").category(),
        "unbound-identifier"
    );
}

#[test]
fn output_is_not_truncated() {
    let long = "y".repeat(8000);
    let out = eval(&format!("\"{long}\""));
    assert_eq!(out.len(), 8002);
}

#[test]
fn higher_order_program() {
    let source = "
        {let {[compose = {lambda (f g) : {lambda (x) : {f {g x}}}}]
              [inc = {lambda (n) : {+ n 1}}]
              [double = {lambda (n) : {* n 2}}]}
         in {{compose inc double} 20}
         end}";
    assert_eq!(eval(source), "41");
}

#[test]
fn string_program() {
    let source = r#"
        {let {[s = "interpreter"]}
         in {if {<= {strlen s} 5} "short" {substring s 5 {strlen s}}}
         end}"#;
    assert_eq!(eval(source), r#""preter""#);
}

#[test]
fn strings_print_their_exact_bytes() {
    assert_eq!(eval_bytes(r#"{substring "é" 0 1}"#), b"\"\xC3\"");
    assert_eq!(eval_bytes(r#"{substring "aé" 0 3}"#), "\"aé\"".as_bytes());
}

fn run(source: &str) -> Result<String, sheqc::Error> {
    run_source(source, &Config::default()).map(|out| String::from_utf8(out).unwrap())
}

proptest! {
    #[test]
    fn numeric_literals_round_trip(value in -1e12f64..1e12) {
        let printed = format!("{value}");
        prop_assume!(!printed.contains('e'));
        let out = run(&printed).unwrap();
        let back: f64 = out.parse().unwrap();
        prop_assert!((back - value).abs() <= value.abs() * 1e-14, "{printed} -> {out}");
    }

    #[test]
    fn let_is_an_immediate_lambda_application(a in -500i32..500, b in -500i32..500) {
        let sugared = run(&format!("{{let {{[x = {a}] [y = {b}]}} in {{+ x y}} end}}"));
        let plain = run(&format!("{{{{lambda (x y) : {{+ x y}}}} {a} {b}}}"));
        prop_assert_eq!(sugared.clone(), plain);
        prop_assert_eq!(sugared.unwrap(), (a + b).to_string());
    }

    #[test]
    fn closure_arity_is_never_padded_or_truncated(params in 0usize..6, args in 0usize..6) {
        let names: Vec<String> = (0..params).map(|i| format!("a{i}")).collect();
        let values: Vec<String> = (0..args).map(|i| format!("{}", i + 1)).collect();
        let source = format!("{{{{lambda ({}) : 0}} {}}}", names.join(" "), values.join(" "));
        let result = run(&source);
        if params == args {
            prop_assert_eq!(result.unwrap(), "0");
        } else {
            prop_assert_eq!(result.unwrap_err().category(), "arity");
        }
    }
}
