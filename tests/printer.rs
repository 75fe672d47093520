use calx::{
    ast::Arena,
    config::Config,
    interpreter::{
        parser::parse_expression,
        printer::{format_real, render_tree},
        session::{Outcome, Session},
        value::{complex::ComplexNumber, core::Value},
    },
};

fn shortest(value: f64) -> String {
    format_real(value, &Config::default())
}

fn general(value: f64) -> String {
    let config = Config { precision: Some(10),
                          ..Config::default() };
    format_real(value, &config)
}

fn render(config: Config, src: &str) -> String {
    let mut session = Session::with_output(config, Vec::new());
    let value = match session.run(src).pop() {
        Some(Outcome::Value(value)) => value,
        other => panic!("{src:?} did not produce a value: {other:?}"),
    };
    session.render(&value).unwrap()
}

fn tree(src: &str) -> String {
    let mut arena = Arena::new();
    let id = parse_expression(src, &mut arena).unwrap();
    render_tree(&arena, &Config::default(), id).unwrap()
}

#[test]
fn reals_default_to_shortest_round_trip_digits() {
    assert_eq!(shortest(14.0), "14");
    assert_eq!(shortest(-2.5), "-2.5");
    assert_eq!(shortest(0.1 + 0.2), "0.30000000000000004");
    assert_eq!(shortest(std::f64::consts::PI), "3.141592653589793");
    assert_eq!(shortest(0.123_456_789_012_3), "0.1234567890123");
    assert_eq!(shortest(1e10), "10000000000");
    assert_eq!(shortest(-0.0), "-0");
}

#[test]
fn shortest_digits_switch_to_scientific_notation() {
    assert_eq!(shortest(1e20), "1e+20");
    assert_eq!(shortest(1.234_567_890_123_4e17), "1.2345678901234e+17");
    assert_eq!(shortest(1e16), "10000000000000000");
    assert_eq!(shortest(0.0001), "0.0001");
    assert_eq!(shortest(0.000_012_34), "1.234e-05");
    assert_eq!(shortest(-1.5e-300), "-1.5e-300");
}

#[test]
fn reals_use_significant_digits() {
    assert_eq!(general(14.0), "14");
    assert_eq!(general(-2.5), "-2.5");
    assert_eq!(general(0.1 + 0.2), "0.3");
    assert_eq!(general(std::f64::consts::PI), "3.141592654");
    assert_eq!(general(123_456_789.0), "123456789");
    assert_eq!(general(0.0), "0");
}

#[test]
fn reals_switch_to_scientific_notation() {
    assert_eq!(general(1e10), "1e+10");
    assert_eq!(general(1e20), "1e+20");
    assert_eq!(general(-2.5e15), "-2.5e+15");
    assert_eq!(general(0.0001), "0.0001");
    assert_eq!(general(0.000_012_34), "1.234e-05");
    assert_eq!(general(1.5e-300), "1.5e-300");
}

#[test]
fn non_finite_reals() {
    assert_eq!(general(f64::NAN), "nan");
    assert_eq!(general(f64::INFINITY), "inf");
    assert_eq!(general(f64::NEG_INFINITY), "-inf");
}

#[test]
fn precision_is_configurable() {
    let short = Config { precision: Some(3),
                         ..Config::default() };
    assert_eq!(format_real(std::f64::consts::PI, &short), "3.14");
    assert_eq!(format_real(1234.0, &short), "1.23e+03");

    let fixed = Config { precision: Some(3),
                         full_precision: true,
                         ..Config::default() };
    assert_eq!(format_real(2.0, &fixed), "2.000");
    assert_eq!(format_real(1234.5678, &fixed), "1234.568");

    let plain = Config { full_precision: true,
                         ..Config::default() };
    assert_eq!(format_real(1e20, &plain), "100000000000000000000");
    assert_eq!(format_real(0.1 + 0.2, &plain), "0.30000000000000004");
}

#[test]
fn complex_numbers() {
    let config = Config::default();
    assert_eq!(render(config.clone(), "1 + 2i"), "1+2i");
    assert_eq!(render(config.clone(), "1 - 2i"), "1-2i");
    assert_eq!(render(config, "sqrt(-4)"), "0+2i");

    let mut session = Session::with_output(Config::default(), Vec::new());
    let value = Value::Complex(ComplexNumber::new(-1.5, 0.25));
    assert_eq!(session.render(&value).unwrap(), "-1.5+0.25i");
}

#[test]
fn booleans() {
    assert_eq!(render(Config::default(), "1 < 2"), "true");
    assert_eq!(render(Config::default(), "false"), "false");

    let numeric = Config { bools_as_numbers: true,
                           ..Config::default() };
    assert_eq!(render(numeric.clone(), "1 < 2"), "1");
    assert_eq!(render(numeric, "false"), "0");
}

#[test]
fn vectors_and_functions() {
    assert_eq!(render(Config::default(), "[1, 2.5, [3, 4]]"), "[1, 2.5, [3, 4]]");
    assert_eq!(render(Config::default(), "[]"), "[]");
    assert_eq!(render(Config::default(), "[int(7), 1 + i]"), "[7, 1+1i]");
    assert_eq!(render(Config::default(), "func(x, y, x + y)"), "<function(x, y)>");
}

#[test]
fn nothing_renders_empty() {
    let mut session = Session::with_output(Config::default(), Vec::new());
    assert_eq!(session.render(&Value::Nothing).unwrap(), "");
}

#[test]
fn rendered_literals_reparse_to_equal_values() {
    for src in ["42",
                "2.5",
                "-0.125",
                "true",
                "false",
                "int(-17)",
                "123456.789",
                "0.00001234",
                "100000000000000000000",
                "0.1234567890123",
                "123456789012.345",
                "-98765432109876543210.5",
                "1.5e-300",
                "0.1 + 0.2",
                "pi",
                "1 + 2.000000000001i"]
    {
        let mut session = Session::with_output(Config::default(), Vec::new());
        let outcomes = session.run(src);
        let Some(Outcome::Value(original)) = outcomes.last() else {
            panic!("{src:?} did not produce a value");
        };
        let text = session.render(original).unwrap();

        let check = format!("({text}) == ({src})");
        let outcome = session.run(&check).pop();
        assert!(matches!(outcome, Some(Outcome::Value(Value::Boolean(true)))),
                "{src:?} rendered as {text:?} did not round-trip");
    }
}

#[test]
fn print_tracks_trailing_newline() {
    let mut session = Session::with_output(Config::default(), Vec::new());
    session.run("print(1, 2)");
    assert_eq!(session.output(), b"1 2");
    assert!(!session.ended_with_newline());

    session.run("println()");
    assert_eq!(session.output(), b"1 2\n");
    assert!(session.ended_with_newline());

    session.run("println(3, 4)");
    assert_eq!(session.output(), b"1 2\n3\n4\n");
}

#[test]
fn print_value_appends_a_newline() {
    let mut session = Session::with_output(Config::default(), Vec::new());
    session.run("print(0)");
    session.print_value(&Value::Real(2.0)).unwrap();
    session.print_value(&Value::Nothing).unwrap();
    assert_eq!(session.into_output(), b"02\n");
}

#[test]
fn expression_trees() {
    assert_eq!(tree("2 + x"), "Operation(Add,\n    Real(2),\n    Identifier('x'),\n)");
    assert_eq!(tree("-x"), "Operation(Negate,\n    Identifier('x'),\n)");
    assert_eq!(tree("[1, 2]"), "Vector(n=2,\n    Real(1),\n    Real(2),\n)");
    assert_eq!(tree("v.0"),
               "Operation(Index,\n    Identifier('v'),\n    Integer(0),\n)");
    assert_eq!(tree("|1 * 2|"),
               "Operation(Abs,\n    Operation(Mul,\n        Real(1),\n        Real(2),\n    ),\n)");
}

#[test]
fn ast_builtin_prints_the_tree_unevaluated() {
    let mut session = Session::with_output(Config::default(), Vec::new());
    session.run("ast(undefined + 1)");
    assert_eq!(String::from_utf8_lossy(session.output()),
               "Operation(Add,\n    Identifier('undefined'),\n    Real(1),\n)\n");
}
