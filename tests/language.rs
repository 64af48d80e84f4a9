use std::fs;

use petrel::{
    error::{RunError, runtime_error::ErrorKind},
    interpreter::{
        environment::Environment,
        evaluator::builtin::{BUILTIN_NAMES, lookup},
        value::Value,
    },
    run_source,
};
use walkdir::WalkDir;

fn run(source: &str) -> Value {
    let env = Environment::new();
    run_source(source, &env).unwrap_or_else(|e| panic!("Script failed: {e}\nScript: {source}"))
}

fn run_error(source: &str) -> String {
    let env = Environment::new();
    match run_source(source, &env) {
        Ok(value) => panic!("Script yielded {value} but was expected to fail: {source}"),
        Err(error) => error.to_string(),
    }
}

#[test]
fn integer_arithmetic() {
    let tests = [("5", 5),
                 ("10", 10),
                 ("-5", -5),
                 ("-(-5)", 5),
                 ("5 + 5 + 5 + 5 - 10", 10),
                 ("2 * 2 * 2 * 2 * 2", 32),
                 ("-50 + 100 + -50", 0),
                 ("5 * 2 + 10", 20),
                 ("5 + 2 * 10", 25),
                 ("20 + 2 * -10", 0),
                 ("50 / 2 * 2 + 10", 60),
                 ("2 * (5 + 10)", 30),
                 ("3 * 3 * 3 + 10", 37),
                 ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50)];

    for (source, expected) in tests {
        assert_eq!(run(source), Value::Integer(expected), "value of {source:?}");
    }
}

#[test]
fn arithmetic_invariants() {
    assert_eq!(run("(1 + 2) + 3"), run("1 + (2 + 3)"));
    assert_eq!(run("12345 * 0"), Value::Integer(0));
    assert_eq!(run("7 == 7"), Value::Bool(true));
    assert_eq!(run("7 != 7"), Value::Bool(false));
    assert!(run("1 + 1").is_integer());
}

#[test]
fn boolean_operators() {
    let tests = [("true", true),
                 ("false", false),
                 ("1 < 2", true),
                 ("1 > 2", false),
                 ("1 < 1", false),
                 ("1 > 1", false),
                 ("1 == 1", true),
                 ("1 != 1", false),
                 ("1 == 2", false),
                 ("1 != 2", true),
                 ("true == true", true),
                 ("false == false", true),
                 ("true == false", false),
                 ("true != false", true),
                 ("(1 < 2) == true", true),
                 ("(1 > 2) == true", false)];

    for (source, expected) in tests {
        assert_eq!(run(source), Value::Bool(expected), "value of {source:?}");
    }
}

#[test]
fn bang_operator() {
    let tests = [("!true", Value::Bool(false)),
                 ("!false", Value::Bool(true)),
                 ("!!true", Value::Bool(true)),
                 ("!!false", Value::Bool(false)),
                 ("!5", Value::Null),
                 ("!!5", Value::Null),
                 ("!\"x\"", Value::Null)];

    for (source, expected) in tests {
        assert_eq!(run(source), expected, "value of {source:?}");
    }
}

#[test]
fn string_operators() {
    assert_eq!(run("\"foo\" + \"bar\""), Value::from("foobar"));
    assert_eq!(run("\"\" + \"x\""), Value::from("x"));
    assert_eq!(run("\"abc\" == \"abc\""), Value::Bool(true));
    assert_eq!(run("\"abc\" != \"abd\""), Value::Bool(true));
    assert_eq!(run("\"a\" < \"b\""), Value::Bool(true));
    assert_eq!(run("\"b\" > \"a\""), Value::Bool(true));
    assert_eq!(run("\"a\" > \"a\""), Value::Bool(false));
}

#[test]
fn unterminated_strings_run_to_end_of_line() {
    assert_eq!(run("\"abc"), Value::from("abc"));
}

#[test]
fn conditionals() {
    let tests = [("if (true) { 10 }", Value::Integer(10)),
                 ("if (false) { 10 }", Value::Null),
                 ("if (1 < 2) { 10 }", Value::Integer(10)),
                 ("if (1 > 2) { 10 }", Value::Null),
                 ("if (1 > 2) { 10 } else { 20 }", Value::Integer(20)),
                 ("if (1 < 2) { 10 } else { 20 }", Value::Integer(10))];

    for (source, expected) in tests {
        assert_eq!(run(source), expected, "value of {source:?}");
    }
}

#[test]
fn condition_must_be_boolean() {
    assert_eq!(run_error("if (1) { 10 }"), "expected boolean, got int");
    assert_eq!(run_error("if (\"yes\") { 10 }"), "expected boolean, got str");
    assert_eq!(run_error("if (1 + 1) { 10 } else { 20 }"), "expected boolean, got int");
}

#[test]
fn let_bindings() {
    let tests = [("let a = 5; a;", 5),
                 ("let a = 5 * 5; a;", 25),
                 ("let a = 5; let b = a; b;", 5),
                 ("let a = 5; let b = a; let c = a + b + 5; c;", 15),
                 ("let a = 5", 5)];

    for (source, expected) in tests {
        assert_eq!(run(source), Value::Integer(expected), "value of {source:?}");
    }

    assert_eq!(run_error("foobar"), "identifier not found: foobar");
    assert_eq!(run_error("let a = 1; b"), "identifier not found: b");
}

#[test]
fn return_unwinds_to_the_call_boundary() {
    let tests = [("return 10;", 10),
                 ("return 10; 9;", 10),
                 ("9; return 2 * 5; 9;", 10),
                 ("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10)];

    for (source, expected) in tests {
        assert_eq!(run(source), Value::Integer(expected), "value of {source:?}");
    }
}

#[test]
fn functions_and_calls() {
    let tests = [("let identity = fn(x) { x; }; identity(5);", 5),
                 ("let identity = fn(x) { return x; }; identity(5);", 5),
                 ("let double = fn(x) { x * 2; }; double(5);", 10),
                 ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
                 ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
                 ("fn(x) { x; }(5)", 5)];

    for (source, expected) in tests {
        assert_eq!(run(source), Value::Integer(expected), "value of {source:?}");
    }
}

#[test]
fn closures_capture_their_defining_environment() {
    assert_eq!(run("let mkAdder = fn(x) { fn(y) { x + y } }; mkAdder(3)(4)"),
               Value::Integer(7));

    // Two closures from the same call share the same captured binding.
    assert_eq!(run("let mkAdder = fn(x) { fn(y) { x + y } };
                    let addThree = mkAdder(3);
                    addThree(1) + addThree(10)"),
               Value::Integer(17));

    // Captured environments are shared, so later rebindings are observed.
    assert_eq!(run("let x = 1; let f = fn() { x }; let x = 2; f()"),
               Value::Integer(2));
}

#[test]
fn recursion() {
    assert_eq!(run("let fib = fn(x) { if (x < 2) { return x; } return fib(x - 1) + fib(x - 2); };
                    fib(10)"),
               Value::Integer(55));

    assert_eq!(run("let counter = fn(x) { if (x > 100) { return true; } return counter(x + 1); };
                    counter(0)"),
               Value::Bool(true));
}

#[test]
fn call_arity_is_checked() {
    assert_eq!(run_error("let f = fn(a, b) { a }; f(1)"),
               "arity mismatch: expected 2 arguments, got 1");
    assert_eq!(run_error("let f = fn() { 1 }; f(1, 2)"),
               "arity mismatch: expected 0 arguments, got 2");
    assert_eq!(run_error("let f = fn(a) { a }; f()"),
               "arity mismatch: expected 1 argument, got 0");
}

#[test]
fn duplicate_parameters_bind_last_wins() {
    assert_eq!(run("let f = fn(a, a) { a }; f(1, 2)"), Value::Integer(2));
}

#[test]
fn lists_and_indexing() {
    assert_eq!(run("[1, 2 * 2, 3 + 3]"),
               Value::from(vec![Value::Integer(1), Value::Integer(4), Value::Integer(6)]));

    let tests = [("[1, 2, 3][0]", 1),
                 ("[1, 2, 3][1]", 2),
                 ("[1, 2, 3][2]", 3),
                 ("let i = 0; [1][i];", 1),
                 ("[1, 2, 3][1 + 1];", 3),
                 ("let myList = [1, 2, 3]; myList[2];", 3),
                 ("let myList = [1, 2, 3]; myList[0] + myList[1] + myList[2];", 6),
                 ("[1, 2, 3][-1]", 3),
                 ("[1, 2, 3][-3]", 1)];

    for (source, expected) in tests {
        assert_eq!(run(source), Value::Integer(expected), "value of {source:?}");
    }
}

#[test]
fn string_indexing_is_by_byte() {
    assert_eq!(run("\"hello\"[0]"), Value::from("h"));
    assert_eq!(run("\"hello\"[1]"), Value::from("e"));
    assert_eq!(run("\"hello\"[-1]"), Value::from("o"));
}

#[test]
fn index_errors() {
    assert_eq!(run_error("[1, 2, 3][99]"), "List index out of range");
    assert_eq!(run_error("[1, 2, 3][3]"), "List index out of range");
    assert_eq!(run_error("[1, 2, 3][-4]"), "List index out of range");
    assert_eq!(run_error("\"abc\"[10]"), "str index out of range");
    assert_eq!(run_error("[1][true]"), "expected integer, got bool");
    assert_eq!(run_error("[1][\"0\"]"), "expected integer, got str");
    assert_eq!(run_error("5[0]"), "expected list or string, got int");
    assert_eq!(run_error("true[0]"), "expected list or string, got bool");
}

#[test]
fn operator_error_taxonomy() {
    let tests = [("5 + true", "type mismatch: int + bool"),
                 ("5 + true; 5", "type mismatch: int + bool"),
                 ("5 + \"x\"", "type mismatch: int + str"),
                 ("\"x\" + 5", "type mismatch: str + int"),
                 ("true + false", "invalid operation: bool + bool"),
                 ("true + 5", "invalid operation: bool + int"),
                 ("5 < \"a\"", "type mismatch: int < str"),
                 ("true < false", "invalid operation: bool < bool"),
                 ("true > false", "invalid operation: bool > bool"),
                 ("\"a\" - \"b\"", "invalid operation: str - str"),
                 ("\"a\" * \"b\"", "invalid operation: str * str"),
                 ("[1] + [2]", "invalid operation: List + List"),
                 ("-true", "unknown operator: -bool"),
                 ("-\"x\"", "unknown operator: -str"),
                 ("5 / 0", "division by zero"),
                 ("5(1)", "not a function int"),
                 ("\"f\"(1)", "not a function str"),
                 ("if (10 > 1) { true + false; }", "invalid operation: bool + bool")];

    for (source, expected) in tests {
        assert_eq!(run_error(source), expected, "error of {source:?}");
    }
}

#[test]
fn error_kinds() {
    let kind_of = |source: &str| {
        let env = Environment::new();
        match run_source(source, &env) {
            Err(RunError::Runtime(error)) => error.kind(),
            other => panic!("expected a runtime error for {source:?}, got {other:?}"),
        }
    };

    assert_eq!(kind_of("5 + true"), ErrorKind::TypeError);
    assert_eq!(kind_of("[1][99]"), ErrorKind::IndexError);
    assert_eq!(kind_of("foobar"), ErrorKind::Exception);
    assert_eq!(kind_of("5 / 0"), ErrorKind::Exception);
}

#[test]
fn builtin_len() {
    assert_eq!(run("len(\"\")"), Value::Integer(0));
    assert_eq!(run("len(\"abcdef\")"), Value::Integer(6));
    assert_eq!(run("len(\"hello world\")"), Value::Integer(11));
    assert_eq!(run("len([1, [2, 3]])"), Value::Integer(2));
    assert_eq!(run("len([])"), Value::Integer(0));

    assert_eq!(run_error("len(5)"), "object is not iterable: int");
    assert_eq!(run_error("len(true)"), "object is not iterable: bool");
    assert_eq!(run_error("len(\"a\", \"b\")"), "expected 1 positional argument but received 2");
    assert_eq!(run_error("len()"), "expected 1 positional argument but received 0");
}

#[test]
fn builtin_list() {
    assert_eq!(run("list(\"abc\")"),
               Value::from(vec![Value::from("a"), Value::from("b"), Value::from("c")]));
    assert_eq!(run("len(list(\"abc\"))"), Value::Integer(3));

    assert_eq!(run_error("list(5)"), "object is not listable: int");
    assert_eq!(run_error("list([1])"), "object is not listable: List");
}

#[test]
fn builtin_add() {
    assert_eq!(run("add(2, 3)"), Value::Integer(5));
    assert_eq!(run("add(\"foo\", \"bar\")"), Value::from("foobar"));

    assert_eq!(run_error("add(1)"), "expected 2 positional arguments but received 1");
    assert_eq!(run_error("add(2, \"b\")"), "type mismatch: int + str");
    assert_eq!(run_error("add(true, true)"), "invalid operation: bool + bool");
}

#[test]
fn builtin_print_yields_null() {
    assert_eq!(run("print(\"hello\")"), Value::Null);
    assert_eq!(run("print([1, 2])"), Value::Null);
    assert_eq!(run_error("print()"), "expected 1 positional argument but received 0");
}

#[test]
fn builtin_exit_validates_before_exiting() {
    // Only the failing paths are testable: a successful exit ends the
    // process.
    assert_eq!(run_error("exit(\"x\")"),
               "expected positional argument 1 to be type int but received type str");
    assert_eq!(run_error("exit(1, 2)"), "expected 1 positional argument but received 2");
}

#[test]
fn builtins_can_be_shadowed() {
    assert_eq!(run("let len = 5; len"), Value::Integer(5));
    assert_eq!(run("let len = fn(x) { 42 }; len(\"abc\")"), Value::Integer(42));
}

#[test]
fn builtin_registry_is_complete() {
    for name in BUILTIN_NAMES {
        assert!(lookup(name).is_some(), "built-in {name:?} is not registered");
    }
    assert!(lookup("missing").is_none());
}

#[test]
fn builtins_are_first_class() {
    assert_eq!(run("let f = len; f(\"abc\")"), Value::Integer(3));
}

#[test]
fn evaluation_stops_at_the_first_error() {
    assert_eq!(run_error("let a = 5 + true; a"), "type mismatch: int + bool");
    assert_eq!(run_error("[1, foobar, 3]"), "identifier not found: foobar");
    assert_eq!(run_error("len(foobar)"), "identifier not found: foobar");
    assert_eq!(run_error("foobar(1)"), "identifier not found: foobar");
}

#[test]
fn display_forms() {
    assert_eq!(run("\"hi\"").to_string(), "\"hi\"");
    assert_eq!(run("[1, \"x\", true]").to_string(), "[1, \"x\", true]");
    assert_eq!(run("true").to_string(), "true");
    assert_eq!(run("if (false) { 1 }").to_string(), "null");
    assert_eq!(run("fn(a, b) { a + b; }").to_string(), "fn(a, b) {\n(a + b)\n}");
}

#[test]
fn repl_session() {
    let input = b"let x = 2;\nlet x 5;\nx * 3\nnope\n" as &[u8];
    let mut output = Vec::new();

    petrel::repl::start(input, &mut output).unwrap();

    let session = String::from_utf8(output).unwrap();
    assert!(session.contains(">> 2\n"), "session: {session:?}");
    assert!(session.contains("\tError on line 1: expected next token to be =, got INT instead.\n"),
            "session: {session:?}");
    assert!(session.contains(">> 6\n"), "session: {session:?}");
    assert!(session.contains("identifier not found: nope\n"), "session: {session:?}");
}

#[test]
fn demo_scripts_run_clean() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "ptl")
                                      })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let env = Environment::new();
        if let Err(e) = run_source(&source, &env) {
            panic!("Demo script {path:?} failed:\n{e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}
