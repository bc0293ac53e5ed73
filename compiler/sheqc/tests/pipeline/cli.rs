//! The `sheq` binary.

use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn sheq(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sheq"))
        .args(args)
        .env_remove("SHEQ_LOG")
        .env_remove("RUST_LOG")
        .env_remove("SHEQ_ARENA_BYTES")
        .output()
        .unwrap()
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[test]
fn prints_the_value() {
    let out = sheq(&["{+ 3 4}"]);
    assert!(out.status.success());
    assert_eq!(text(&out.stdout), "7\n");
    assert_eq!(text(&out.stderr), "");
}

#[test]
fn prints_string_bytes_unaltered() {
    let out = sheq(&[r#"{substring "é" 0 1}"#]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"\"\xC3\"\n");

    let out = sheq(&[r#"{error {substring "é" 0 1}}"#]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(out.stderr, b"sheq: user error: \"\xC3\" at line 1 col 1\n");
}

#[test]
fn prints_one_diagnostic_on_failure() {
    let out = sheq(&["{/ 1 0}"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(text(&out.stdout), "");
    assert_eq!(
        text(&out.stderr),
        "sheq: domain error: division by zero at line 1 col 1\n"
    );
}

#[test]
fn requires_exactly_one_argument() {
    for args in [&[][..], &["1", "2"][..]] {
        let out = sheq(args);
        assert_eq!(out.status.code(), Some(1));
        assert_eq!(text(&out.stderr), "usage: sheq '<expr>'\n");
    }
}

#[test]
fn arena_size_from_environment() {
    let out = Command::new(env!("CARGO_BIN_EXE_sheq"))
        .arg("{+ 1 2}")
        .env_remove("SHEQ_LOG")
        .env_remove("RUST_LOG")
        .env("SHEQ_ARENA_BYTES", "16")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(text(&out.stderr).starts_with("sheq: resource-exhaustion error: arena exhausted"));

    let out = Command::new(env!("CARGO_BIN_EXE_sheq"))
        .arg("1")
        .env_remove("SHEQ_LOG")
        .env_remove("RUST_LOG")
        .env("SHEQ_ARENA_BYTES", "plenty")
        .output()
        .unwrap();
    assert_eq!(
        text(&out.stderr),
        "sheq: configuration error: SHEQ_ARENA_BYTES must be a positive byte count, got 'plenty'\n"
    );
}
