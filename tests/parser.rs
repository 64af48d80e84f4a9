use petrel::{
    ast::{Expr, Statement},
    parse_source,
};

fn parse_display(source: &str) -> String {
    let (program, errors) = parse_source(source);
    assert!(errors.is_empty(), "parse errors for {source:?}: {errors:?}");
    program.to_string()
}

fn parse_single_statement(source: &str) -> Statement {
    let (mut program, errors) = parse_source(source);
    assert!(errors.is_empty(), "parse errors for {source:?}: {errors:?}");
    assert_eq!(program.statements.len(), 1, "expected one statement in {source:?}");
    program.statements.remove(0)
}

#[test]
fn operator_precedence() {
    let tests = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true", "true"),
                 ("false", "false"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("3 < 5 == true", "((3 < 5) == true)")];

    for (source, expected) in tests {
        assert_eq!(parse_display(source), expected, "precedence of {source:?}");
    }
}

#[test]
fn grouped_expressions_override_precedence() {
    let tests = [("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))")];

    for (source, expected) in tests {
        assert_eq!(parse_display(source), expected, "grouping of {source:?}");
    }
}

#[test]
fn calls_and_indexing_bind_tightest() {
    let tests = [("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))")];

    for (source, expected) in tests {
        assert_eq!(parse_display(source), expected, "call/index precedence of {source:?}");
    }
}

#[test]
fn let_statements() {
    let tests = [("let x = 5;", "x", "5"),
                 ("let y = true;", "y", "true"),
                 ("let foobar = y;", "foobar", "y")];

    for (source, expected_name, expected_value) in tests {
        let statement = parse_single_statement(source);
        let Statement::Let { name, value, .. } = statement else {
            panic!("expected a let statement for {source:?}");
        };
        assert_eq!(name, expected_name);
        assert_eq!(value.to_string(), expected_value);
    }
}

#[test]
fn return_statements() {
    let tests = [("return 5;", "5"), ("return x + y;", "(x + y)")];

    for (source, expected_value) in tests {
        let statement = parse_single_statement(source);
        let Statement::Return { value, .. } = statement else {
            panic!("expected a return statement for {source:?}");
        };
        assert_eq!(value.to_string(), expected_value);
    }
}

#[test]
fn trailing_semicolons_are_optional() {
    assert_eq!(parse_display("let x = 5"), "let x = 5;");
    assert_eq!(parse_display("return 5"), "return 5;");
    assert_eq!(parse_display("1 + 2"), "(1 + 2)");
}

#[test]
fn literals() {
    let statement = parse_single_statement("\"hello world\";");
    let Statement::Expression { expr: Expr::StringLiteral { value, .. }, .. } = statement else {
        panic!("expected a string literal");
    };
    assert_eq!(value, "hello world");

    let statement = parse_single_statement("5;");
    assert!(matches!(statement,
                     Statement::Expression { expr: Expr::IntegerLiteral { value: 5, .. }, .. }));

    let statement = parse_single_statement("[1, 2 * 2, 3 + 3]");
    let Statement::Expression { expr: Expr::List { items, .. }, .. } = statement else {
        panic!("expected a list literal");
    };
    assert_eq!(items.len(), 3);
    assert_eq!(items[1].to_string(), "(2 * 2)");

    let statement = parse_single_statement("[]");
    assert!(matches!(statement,
                     Statement::Expression { expr: Expr::List { ref items, .. }, .. }
                     if items.is_empty()));
}

#[test]
fn if_expressions() {
    assert_eq!(parse_display("if (x < y) { x }"), "if ((x < y)) { x }");
    assert_eq!(parse_display("if (x < y) { x } else { y }"),
               "if ((x < y)) { x } else { y }");

    let statement = parse_single_statement("if (x) { 1 } else { 2 }");
    let Statement::Expression { expr: Expr::If { alternative, .. }, .. } = statement else {
        panic!("expected an if expression");
    };
    assert!(alternative.is_some());
}

#[test]
fn function_literals() {
    let statement = parse_single_statement("fn(x, y) { x + y; }");
    let Statement::Expression { expr: Expr::FunctionLiteral { parameters, body, .. }, .. } =
        statement
    else {
        panic!("expected a function literal");
    };
    assert_eq!(parameters, vec!["x".to_string(), "y".to_string()]);
    assert_eq!(body.to_string(), "(x + y)");

    let tests = [("fn() {};", 0), ("fn(x) {};", 1), ("fn(x, y, z) {};", 3)];
    for (source, expected) in tests {
        let statement = parse_single_statement(source);
        let Statement::Expression { expr: Expr::FunctionLiteral { parameters, .. }, .. } =
            statement
        else {
            panic!("expected a function literal");
        };
        assert_eq!(parameters.len(), expected, "parameter count of {source:?}");
    }
}

#[test]
fn call_expressions() {
    let statement = parse_single_statement("add(1, 2 * 3, 4 + 5);");
    let Statement::Expression { expr: Expr::Call { function, arguments, .. }, .. } = statement
    else {
        panic!("expected a call expression");
    };
    assert_eq!(function.to_string(), "add");
    assert_eq!(arguments.len(), 3);
    assert_eq!(arguments[1].to_string(), "(2 * 3)");
    assert_eq!(arguments[2].to_string(), "(4 + 5)");
}

#[test]
fn canonical_print_reparses_to_the_same_tree() {
    let sources = ["let x = 5;",
                   "return (1 + 2) * 3;",
                   "-a * b",
                   "if (x < y) { x } else { y }",
                   "let adder = fn(x, y) { x + y; };",
                   "add(1, 2 * 3)",
                   "[1, \"two\", true][0]",
                   "myList[1 + 1]"];

    for source in sources {
        let (first, errors) = parse_source(source);
        assert!(errors.is_empty(), "parse errors for {source:?}: {errors:?}");

        let printed = first.to_string();
        let (second, errors) = parse_source(&printed);
        assert!(errors.is_empty(), "re-parse errors for {printed:?}: {errors:?}");

        assert_eq!(first, second, "round trip of {source:?} via {printed:?}");
    }
}

#[test]
fn parse_errors_name_the_expected_and_found_kinds() {
    let tests = [("let x 5;", "Error on line 1: expected next token to be =, got INT instead."),
                 ("let = 5;", "Error on line 1: expected next token to be IDENT, got = instead."),
                 ("(1 + 2", "Error on line 1: expected next token to be ), got EOF instead."),
                 ("!;", "Error on line 1: no prefix parse function for ; found."),
                 ("@", "Error on line 1: illegal token '@'.")];

    for (source, expected) in tests {
        let (_, errors) = parse_source(source);
        assert!(!errors.is_empty(), "expected errors for {source:?}");
        assert_eq!(errors[0].to_string(), expected, "first error of {source:?}");
    }
}

#[test]
fn parsing_continues_after_a_bad_statement() {
    let (program, errors) = parse_source("let x 5; let y = 10; @; let z = 1;");

    assert_eq!(errors.len(), 2, "errors: {errors:?}");
    assert_eq!(program.to_string(), "let y = 10;let z = 1;");
}

#[test]
fn statements_carry_their_source_line() {
    let (program, errors) = parse_source("5;\nlet x = true;\nreturn x;");
    assert!(errors.is_empty(), "parse errors: {errors:?}");

    let lines: Vec<usize> = program.statements.iter().map(Statement::line_number).collect();
    assert_eq!(lines, vec![1, 2, 3]);
}
