use calx::{
    ast::{Arena, Expr, ExprId, UnaryOperator},
    error::ParseError,
    interpreter::parser::{MAX_NESTING, Parser, parse_expression, parse_statements},
};

/// Renders a tree as a compact s-expression.
fn sexpr(arena: &Arena, id: ExprId) -> String {
    match arena.get(id).expect("live node") {
        Expr::Integer(n) => format!("{n}"),
        Expr::Real(x) => format!("{x:?}"),
        Expr::Identifier(name) => name.clone(),
        Expr::Vector(elements) => {
            let elements: Vec<String> = elements.iter().map(|&e| sexpr(arena, e)).collect();
            format!("[{}]", elements.join(" "))
        },
        Expr::UnaryOp { op, operand } => {
            let name = match op {
                UnaryOperator::Identity => "pos",
                UnaryOperator::Negate => "neg",
                UnaryOperator::Not => "not",
                UnaryOperator::BitNot => "bitnot",
                UnaryOperator::Abs => "abs",
            };
            format!("({name} {})", sexpr(arena, *operand))
        },
        Expr::BinaryOp { op, left, right } => {
            format!("({op} {} {})", sexpr(arena, *left), sexpr(arena, *right))
        },
    }
}

fn parse(src: &str) -> String {
    let mut arena = Arena::new();
    let id = parse_expression(src, &mut arena).unwrap_or_else(|e| panic!("{src:?} failed: {e}"));
    sexpr(&arena, id)
}

fn parse_err(src: &str) -> ParseError {
    let mut arena = Arena::new();
    match parse_expression(src, &mut arena) {
        Ok(id) => panic!("{src:?} parsed as {}", sexpr(&arena, id)),
        Err(e) => e,
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(parse("2 + 3 * 4"), "(+ 2.0 (* 3.0 4.0))");
    assert_eq!(parse("(2 + 3) * 4"), "(* (+ 2.0 3.0) 4.0)");
}

#[test]
fn power_is_right_associative() {
    assert_eq!(parse("2 ^ 3 ^ 2"), "(^ 2.0 (^ 3.0 2.0))");
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(parse("8 - 3 - 1"), "(- (- 8.0 3.0) 1.0)");
    assert_eq!(parse("8 / 4 / 2"), "(/ (/ 8.0 4.0) 2.0)");
}

#[test]
fn prefix_operators_nest() {
    assert_eq!(parse("- - 5"), "(neg (neg 5.0))");
    assert_eq!(parse("!~x"), "(not (bitnot x))");
    assert_eq!(parse("+x"), "(pos x)");
}

#[test]
fn infix_loop_continues_after_prefix() {
    assert_eq!(parse("-2^2"), "(^ (neg 2.0) 2.0)");
    assert_eq!(parse("-2 + 3"), "(+ (neg 2.0) 3.0)");
    assert_eq!(parse("2 * -3 + 1"), "(+ (* 2.0 (neg 3.0)) 1.0)");
}

#[test]
fn juxtaposition_is_multiplication() {
    assert_eq!(parse("2x"), "(* 2.0 x)");
    assert_eq!(parse("2 x y"), "(* (* 2.0 x) y)");
    assert_eq!(parse("(1+1)(2+2)"), "(* (+ 1.0 1.0) (+ 2.0 2.0))");
    assert_eq!(parse("2 [1]"), "(* 2.0 [1.0])");
    assert_eq!(parse("2 ^ 3 x"), "(* (^ 2.0 3.0) x)");
}

#[test]
fn calls_collect_arguments() {
    assert_eq!(parse("f(1, x + 2)"), "(() f [1.0 (+ x 2.0)])");
    assert_eq!(parse("f()"), "(() f [])");
    assert_eq!(parse("f(g(x))"), "(() f [(() g [x])])");
}

#[test]
fn absolute_value_blocks() {
    assert_eq!(parse("|x - 1|"), "(abs (- x 1.0))");
    assert_eq!(parse("|a| |b|"), "(* (abs a) (abs b))");
    assert_eq!(parse("|(|x|)|"), "(abs (abs x))");
    assert_eq!(parse("2|x|"), "(* 2.0 (abs x))");
}

#[test]
fn empty_absolute_value_block_is_rejected() {
    assert_eq!(parse_err("||"), ParseError::EmptyPipeBlock { offset: 0 });
}

#[test]
fn vector_literals() {
    assert_eq!(parse("[1, 2, 3]"), "[1.0 2.0 3.0]");
    assert_eq!(parse("[1, 2,]"), "[1.0 2.0]");
    assert_eq!(parse("[]"), "[]");
    assert_eq!(parse("[[1], 2]"), "[[1.0] 2.0]");
}

#[test]
fn malformed_vectors_are_rejected() {
    let mut arena = Arena::new();
    let statements = parse_statements("[1; 2]", &mut arena);
    assert_eq!(statements[0],
               Err(ParseError::MalformedVector { found:  ";".to_string(),
                                                 offset: 2, }));

    assert_eq!(parse_err("[1, 2"),
               ParseError::MalformedVector { found:  "end of input".to_string(),
                                             offset: 5, });
}

#[test]
fn index_operand_is_an_integer() {
    assert_eq!(parse("v.1"), "(. v 1)");
    assert_eq!(parse("[10, 20].1 + 1"), "(+ (. [10.0 20.0] 1) 1.0)");
    assert_eq!(parse("[1,2].1.5"), "(. (. [1.0 2.0] 1) 5)");
}

#[test]
fn dot_product_and_root() {
    assert_eq!(parse("a @ b + 1"), "(+ (@ a b) 1.0)");
    assert_eq!(parse("8 root 3"), "(root 8.0 3.0)");
}

#[test]
fn comparison_and_assertion_precedence() {
    assert_eq!(parse("1 + 1 < 3 == true"), "(== (< (+ 1.0 1.0) 3.0) true)");
    assert_eq!(parse("a == b = true"), "(= (== a b) true)");
    assert_eq!(parse("a === b"), "(=== a b)");
    assert_eq!(parse("a !== b"), "(!== a b)");
}

#[test]
fn missing_operand_names_the_operator() {
    assert_eq!(parse_err("2 +"),
               ParseError::MissingOperand { operator: "+".to_string(),
                                            offset:   2, });
    assert_eq!(parse_err("2 * )"),
               ParseError::MissingOperand { operator: "*".to_string(),
                                            offset:   2, });
}

#[test]
fn empty_and_unexpected_input() {
    assert_eq!(parse_err(""), ParseError::UnexpectedEndOfInput { offset: 0 });
    assert_eq!(parse_err("* 2"),
               ParseError::ExpectedExpression { found:  "*".to_string(),
                                                offset: 0, });
    assert_eq!(parse_err("1 )"),
               ParseError::UnexpectedTrailingToken { token:  ")".to_string(),
                                                     offset: 2, });
}

#[test]
fn oversized_index_literal() {
    assert!(matches!(parse_err("v.99999999999999999999"), ParseError::LiteralTooLarge { .. }));
}

#[test]
fn exponent_literals() {
    assert_eq!(parse("1.234e-05"), "1.234e-5");
    assert_eq!(parse("1e+20"), "1e20");
    assert_eq!(parse("2e"), "(* 2.0 e)");
    assert_eq!(parse("2e+3"), "2000.0");
    assert!(matches!(parse_err("1e999"), ParseError::LiteralTooLarge { .. }));
}

#[test]
fn deep_nesting_is_rejected() {
    let groups = format!("{}1", "(".repeat(5_000));
    assert!(matches!(parse_err(&groups), ParseError::NestingTooDeep { limit: MAX_NESTING, .. }));

    let negations = format!("{}1", "-".repeat(200_000));
    assert!(matches!(parse_err(&negations), ParseError::NestingTooDeep { .. }));

    let sum = format!("1{}", "+1".repeat(1_000));
    assert!(matches!(parse_err(&sum), ParseError::NestingTooDeep { .. }));
}

#[test]
fn moderate_nesting_is_accepted() {
    let depth = MAX_NESTING / 2;
    let groups = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse(&groups), "1.0");

    let sum = format!("1{}", "+1".repeat(100));
    let mut arena = Arena::new();
    assert!(parse_expression(&sum, &mut arena).is_ok());
}

#[test]
fn parser_recovers_after_deep_nesting() {
    let mut arena = Arena::new();
    let source = format!("{}1; 2", "(".repeat(5_000));
    let statements = parse_statements(&source, &mut arena);
    assert_eq!(statements.len(), 2);
    assert!(matches!(statements[0], Err(ParseError::NestingTooDeep { .. })));
    assert_eq!(sexpr(&arena, statements[1].clone().unwrap()), "2.0");
}

#[test]
fn unterminated_group_is_accepted() {
    assert_eq!(parse("(1 + 2"), "(+ 1.0 2.0)");
}

#[test]
fn statements_are_split_on_semicolons() {
    let mut arena = Arena::new();
    let statements = parse_statements("1 + 2; ; 3;", &mut arena);
    assert_eq!(statements.len(), 2);

    let rendered: Vec<String> = statements.into_iter().map(|s| sexpr(&arena, s.unwrap())).collect();
    assert_eq!(rendered, vec!["(+ 1.0 2.0)", "3.0"]);
}

#[test]
fn empty_statements_leave_no_entry() {
    let mut arena = Arena::new();
    let statements = parse_statements("1;;2", &mut arena);
    let rendered: Vec<String> = statements.into_iter().map(|s| sexpr(&arena, s.unwrap())).collect();
    assert_eq!(rendered, vec!["1.0", "2.0"]);

    assert!(parse_statements(";;", &mut arena).is_empty());
}

#[test]
fn failed_statement_does_not_stop_the_rest() {
    let mut arena = Arena::new();
    let statements = parse_statements("1 +; 2", &mut arena);
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0],
               Err(ParseError::MissingOperand { operator: "+".to_string(),
                                                offset:   2, }));
    assert_eq!(sexpr(&arena, statements[1].clone().unwrap()), "2.0");
}

#[test]
fn unknown_characters_are_reported_and_skipped() {
    let mut arena = Arena::new();
    let id = {
        let mut parser = Parser::new("2 $ 3", &mut arena);
        let id = parser.parse_expression().unwrap();
        assert_eq!(parser.lex_errors().len(), 1);
        id
    };
    assert_eq!(sexpr(&arena, id), "(* 2.0 3.0)");
}

#[test]
fn released_handles_do_not_resolve() {
    let mut arena = Arena::new();
    let id = parse_expression("1 + 2", &mut arena).unwrap();
    assert!(!arena.is_empty());

    arena.release();
    assert!(arena.get(id).is_none());
    assert!(arena.is_empty());

    let fresh = parse_expression("1 + 2", &mut arena).unwrap();
    assert_eq!(fresh.index(), id.index());
    assert_ne!(fresh, id);
    assert_eq!(sexpr(&arena, fresh), "(+ 1.0 2.0)");
}
