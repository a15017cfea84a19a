//! End-to-end tests for complete program execution

use psil::parser::ReadError;
use psil::types::TypeError;
use psil::{Config, Error, run};

/// Run a program, returning the printed lines and the final result
fn run_program(source: &str) -> (Vec<String>, Result<(), Error>) {
    let mut lines = Vec::new();
    let result = run(source, &Config::default(), |outcome| {
        lines.push(outcome.to_string())
    });
    (lines, result)
}

fn run_ok(source: &str) -> Vec<String> {
    let (lines, result) = run_program(source);
    if let Err(err) = result {
        panic!("program failed: {}", err);
    }
    lines
}

#[test]
fn e2e_empty_program() {
    assert!(run_ok("").is_empty());
    assert!(run_ok("; nothing here\n").is_empty());
}

#[test]
fn e2e_arithmetic() {
    assert_eq!(
        run_ok("(def r (/ (* (- 68 32) 5) 9))"),
        vec!["  20 : Int"]
    );
}

#[test]
fn e2e_values_render() {
    let lines = run_ok("(def f (fun x x)) (def g (+ 1)) (def h +)");
    assert_eq!(
        lines,
        vec![
            "  <function> : (Int -> Int)",
            "  <primitive> : (Int -> Int)",
            "  <primitive> : (Int -> (Int -> Int))",
        ]
    );
}

#[test]
fn e2e_demo_program() {
    let lines = run_ok(include_str!("../demos/factorial.psil"));
    assert_eq!(
        lines,
        vec![
            "  20 : Int",
            "  <function> : (Int -> Int)",
            "  80 : Int",
            "  <function> : (Int -> Int)",
            "  6 : Int",
            "  3628800 : Int",
            "  <function> : (Int -> (Int -> Int))",
            "  <function> : (Int -> Int)",
            "  11 : Int",
        ]
    );
}

#[test]
fn e2e_redefinition_refers_to_previous_binding() {
    let lines = run_ok("(def f 5) (def f (fun x (+ x f))) (def r (f 1))");
    assert_eq!(
        lines,
        vec!["  5 : Int", "  <function> : (Int -> Int)", "  6 : Int"]
    );
    let lines = run_ok("(def f 5) (def g (let ((f (fun x (+ x f)))) (f 1)))");
    assert_eq!(lines, vec!["  5 : Int", "  6 : Int"]);
}

#[test]
fn e2e_non_ascii_names() {
    let lines = run_ok("(def é 1) (def λ (+ é 1))");
    assert_eq!(lines, vec!["  1 : Int", "  2 : Int"]);
}

#[test]
fn e2e_missing_definitions() {
    let lines = run_ok("(dec x Int) (dec y Int) (def y 2) (dec z Int)");
    assert_eq!(
        lines,
        vec![
            "  <missing definition of x> : Int",
            "  2 : Int",
            "  <missing definition of z> : Int",
        ]
    );
}

#[test]
fn e2e_type_error_keeps_earlier_output() {
    let (lines, result) = run_program("(def a 1) (def b z) (def c 3)");
    assert_eq!(lines, vec!["  1 : Int"]);
    assert_eq!(
        result,
        Err(Error::Type(TypeError::UnknownVariable {
            name: "z".to_string()
        }))
    );
}

#[test]
fn e2e_declared_mismatch_aborts() {
    let (lines, result) = run_program("(def a 1) (dec f (Int -> Int)) (def f 3) (def b 2)");
    assert_eq!(lines, vec!["  1 : Int"]);
    assert!(matches!(
        result,
        Err(Error::Type(TypeError::DeclarationMismatch { .. }))
    ));
}

#[test]
fn e2e_syntax_error_keeps_earlier_output() {
    let (lines, result) = run_program("(def a 1)\n(def b");
    assert_eq!(lines, vec!["  1 : Int"]);
    assert!(matches!(
        result,
        Err(Error::Read(ReadError::UnexpectedEof { .. }))
    ));
}

#[test]
fn e2e_bad_character() {
    let (lines, result) = run_program("(def a 1)\n(def b #)");
    assert_eq!(lines, vec!["  1 : Int"]);
    let err = result.unwrap_err();
    assert!(matches!(err, Error::Read(ReadError::UnexpectedCharacter(_))));
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn e2e_unrecognized_declaration() {
    let (lines, result) = run_program("(def a 1) (+ 1 2)");
    assert_eq!(lines, vec!["  1 : Int"]);
    let err = result.unwrap_err();
    assert!(matches!(err, Error::Elab(_)));
    assert!(err.to_string().contains("(+ 1 2)"));
}

#[test]
fn e2e_is_deterministic() {
    let source = include_str!("../demos/factorial.psil");
    assert_eq!(run_ok(source), run_ok(source));
}
