use assert_float_eq::assert_float_absolute_eq;
use pretty_assertions::assert_eq;
use sym_compute::symbolic::{derivative, integrate, simplify, Error, Expr};
use sym_parser::parser::{ast::Expr as AstExpr, Parser};

fn parse(source: &str) -> Expr {
    let ast = Parser::new(source).try_parse_full::<AstExpr>().unwrap();
    Expr::try_from(ast).unwrap()
}

fn simplified(source: &str) -> Expr {
    simplify(&parse(source)).unwrap()
}

#[test]
fn like_terms_are_confluent() {
    let a = simplified("3*x+2*x");
    let b = simplified("x*2+x*3");
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "5 * x");
}

#[test]
fn trigonometric_identities() {
    assert_eq!(simplified("sin(x)^2 + cos(x)^2").to_string(), "1");
    assert_eq!(simplified("cos(x)^2 - sin(x)^2").to_string(), "cos(2 * x)");
}

#[test]
fn polynomial_derivative() {
    let expr = parse("x^2 + 2*x + 1");
    assert_eq!(derivative(&expr, "x").unwrap().to_string(), "2 + 2 * x");
}

#[test]
fn product_of_functions() {
    let expr = parse("sin(x) * cos(x) * 2");
    assert_eq!(simplify(&expr).unwrap().to_string(), "2 * (cos(x) * sin(x))");
    assert_eq!(derivative(&expr, "x").unwrap().to_string(), "2 * cos(2 * x)");
}

#[test]
fn substitution_integral() {
    let expr = parse("x * exp(x^2 + 1)");
    assert_eq!(integrate(&expr, "x").unwrap().to_string(), "0.5 * exp(1 + x^2)");
}

#[test]
fn one_third() {
    assert_eq!(simplified("x / (3*x)").to_string(), "1/3");
}

#[test]
fn division_cancels_constant_multiples() {
    assert_eq!(simplified("(2*x + 2)/(x + 1)").to_string(), "2");
    assert_eq!(simplified("(x - y)/(3*y - 3*x)").to_string(), "-1/3");
}

#[test]
fn printed_form_parses_back() {
    let sources = [
        "x - (y + z)",
        "1 - (x + 2*y)",
        "2*x - 3*(y + z)",
        "sin(x) * cos(x) * 2",
        "x / (3*x)",
        "cos(x)^2 - sin(x)^2",
        "(2*x + 1)^3 / 8",
    ];
    let mut trees = sources.iter().map(|source| simplified(source)).collect::<Vec<_>>();
    trees.push(integrate(&parse("x * ln(x^2 + 1)"), "x").unwrap());
    trees.push(integrate(&parse("2^x"), "x").unwrap());
    trees.push(derivative(&parse("1/x"), "x").unwrap());

    for tree in trees {
        let printed = tree.to_string();
        assert_eq!(simplified(&printed), tree, "`{}` does not parse back to the same tree", printed);
    }

    assert_eq!(simplified("x - (y + z)").to_string(), "x - (y + z)");
    assert_eq!(
        integrate(&parse("x * ln(x^2 + 1)"), "x").unwrap().to_string(),
        "0.5 * ((1 + x^2) * ln(1 + x^2) - (1 + x^2))",
    );
}

#[test]
fn simplify_is_idempotent() {
    let sources = [
        "x^2 + 2*x + 1",
        "sin(x) * cos(x) * 2",
        "(x + 1)^2 / (x + 1)",
        "2*(-sin(x)*cos(x)) + 2*(cos(x)*sin(x))",
        "exp(ln(x)) * y^0.5 * y^0.5",
        "(2*x*y)^-2 + 1/(4*x^2*y^2)",
        "cos(x)^2 - sin(x)^2 + 3*sin(y)^2 + 3*cos(y)^2",
        "ln(exp(2*x + 1)) - x",
        "2^x * 2^(x + 1)",
    ];

    for source in sources {
        let once = simplified(source);
        let twice = simplify(&once).unwrap();
        assert_eq!(once, twice, "simplify is not idempotent on `{}`", source);
    }
}

#[test]
fn derivative_is_linear() {
    let pairs = [
        ("x^3", "sin(2*x)"),
        ("x * exp(x)", "ln(x) / x"),
        ("3*x + 1", "-3*x"),
        ("cos(x)^2", "sin(x)^2"),
    ];

    for (a, b) in pairs {
        let lhs = derivative(&simplified(&format!("({}) + ({})", a, b)), "x").unwrap();
        let sum = Expr::sum([
            derivative(&parse(a), "x").unwrap(),
            derivative(&parse(b), "x").unwrap(),
        ]);
        let rhs = simplify(&sum).unwrap();
        assert_eq!(lhs, rhs, "derivative is not linear on `{}` and `{}`", a, b);
    }
}

#[test]
fn derivative_of_integral_matches_integrand() {
    // checked structurally
    for source in ["x * exp(x^2 + 1)", "x^2 + 2*x + 1", "sin(x) * cos(x)", "3", "1/x"] {
        let expr = parse(source);
        let antiderivative = integrate(&expr, "x").unwrap();
        let back = derivative(&antiderivative, "x").unwrap();
        assert_eq!(back, simplify(&expr).unwrap(), "round trip failed for `{}`", source);
    }

    // checked numerically, where the canonical forms differ
    let sources = [
        "2*x / (x^2 + 1)",
        "sin(x) / cos(x)",
        "sin(2*x + 1)",
        "(2*x + 1)^3",
        "2^x",
        "ln(x)",
        "exp(3*x) + 4*cos(x)",
        "cos(x) * exp(sin(x))",
    ];
    for source in sources {
        let expr = parse(source);
        let back = derivative(&integrate(&expr, "x").unwrap(), "x").unwrap();
        for x in [0.25, 0.5, 1.0, 1.25] {
            let expected = expr.eval(&[("x", x)]).unwrap();
            let actual = back.eval(&[("x", x)]).unwrap();
            assert_float_absolute_eq!(expected, actual, 1e-9);
        }
    }
}

#[test]
fn integration_can_fail() {
    for source in ["x * exp(x)", "sin(x)^2", "exp(x^2)", "x + ln(ln(x))"] {
        let result = integrate(&parse(source), "x");
        assert!(
            matches!(result, Err(Error::IntegrationFailed(_))),
            "expected `{}` to fail, got {:?}",
            source,
            result,
        );
    }
}

#[test]
fn division_by_zero() {
    for source in ["1/0", "x/(x - x)", "2^(1 - 1) / (3 - 3)"] {
        let expr = parse(source);
        assert!(matches!(simplify(&expr), Err(Error::DivisionByZero(_))), "`{}`", source);
        assert!(matches!(derivative(&expr, "x"), Err(Error::DivisionByZero(_))), "`{}`", source);
        assert!(matches!(integrate(&expr, "x"), Err(Error::DivisionByZero(_))), "`{}`", source);
    }
}

#[test]
fn unsupported_functions() {
    let ast = Parser::new("tan(x)").try_parse_full::<AstExpr>().unwrap();
    assert!(matches!(Expr::try_from(ast), Err(Error::UnsupportedOperation(_))));
}
