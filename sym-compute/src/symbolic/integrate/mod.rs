//! Heuristic symbolic integration.
//!
//! Finding an antiderivative is not always possible in closed form, and deciding whether one
//! exists is much harder than differentiating. Instead, [`integrate`] tries a fixed list of
//! heuristics, in order, on the simplified integrand:
//!
//! 1. structural rules for constants, the variable, sums, constant multiples, powers of the
//!    variable, and the supported functions applied to the variable;
//! 2. substitution of an inner expression that is linear in the variable;
//! 3. the reverse chain rule, for products containing a power `u^n` and a constant multiple of
//!    `u'`;
//! 4. generalized substitution, for products containing a call `f(u)` and a constant multiple of
//!    `u'`.
//!
//! The first heuristic to succeed wins. If none succeeds, [`Error::IntegrationFailed`] is
//! returned; this only means that the integrand was not recognized, not that it has no
//! antiderivative. No constant of integration is added.

mod linear;
mod structural;
mod substitution;
mod table;

use tracing::debug;
use crate::symbolic::{
    error::{kind, Error},
    expr::{is_valid_variable_name, Expr},
    simplify::simplify,
};

/// A heuristic returns `Ok(None)` if it does not apply to the integrand.
type Heuristic = fn(&Expr, &str) -> Result<Option<Expr>, Error>;

/// The heuristics to try, in order of priority.
const HEURISTICS: [(&str, Heuristic); 4] = [
    ("structural", structural::structural),
    ("linear substitution", linear::linear_substitution),
    ("reverse chain rule", substitution::reverse_chain_rule),
    ("generalized substitution", substitution::generalized_substitution),
];

/// Integrates an expression that is already simplified. The result is not simplified.
fn integrate_simplified(expr: &Expr, var: &str) -> Result<Expr, Error> {
    for (name, heuristic) in HEURISTICS {
        if let Some(antiderivative) = heuristic(expr, var)? {
            debug!(heuristic = name, integrand = %expr, %antiderivative, "integration heuristic matched");
            return Ok(antiderivative);
        }
    }

    debug!(integrand = %expr, var, "no integration heuristic matched");
    Err(kind::IntegrationFailed {
        expr: expr.to_string(),
        var: var.to_string(),
    }.into())
}

/// Computes an antiderivative of the given expression with respect to the variable `var`.
///
/// The result is simplified. Returns [`Error::IntegrationFailed`] if no heuristic could integrate
/// the expression, [`Error::UnsupportedOperation`] if `var` is not a valid variable name, and
/// [`Error::DivisionByZero`] if the expression divides by zero.
pub fn integrate(f: &Expr, var: &str) -> Result<Expr, Error> {
    if !is_valid_variable_name(var) {
        return Err(Error::unsupported(format!("cannot integrate with respect to `{}`", var)));
    }

    let f = simplify(f)?;
    let antiderivative = integrate_simplified(&f, var)?;
    simplify(&antiderivative)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sym_parser::parser::{ast::Expr as AstExpr, Parser};
    use super::*;

    fn parse(source: &str) -> Expr {
        let ast = Parser::new(source).try_parse_full::<AstExpr>().unwrap();
        Expr::try_from(ast).unwrap()
    }

    fn integral_of(source: &str) -> String {
        integrate(&parse(source), "x").unwrap().to_string()
    }

    #[test]
    fn structural_rules() {
        assert_eq!(integral_of("3"), "3 * x");
        assert_eq!(integral_of("y"), "x * y");
        assert_eq!(integral_of("x"), "0.5 * x^2");
        assert_eq!(integral_of("1/x"), "ln(x)");
        assert_eq!(integral_of("x^2 + 2*x + 1"), "x + x^2 + 1/3 * x^3");
        assert_eq!(integral_of("ln(x)"), "ln(x) * x - x");
        assert_eq!(integral_of("4*cos(x)"), "4 * sin(x)");
    }

    #[test]
    fn linear_substitution() {
        assert_eq!(integral_of("sin(2*x + 1)"), "-0.5 * cos(1 + 2 * x)");
        assert_eq!(integral_of("exp(3*x)"), "1/3 * exp(3 * x)");
        assert_eq!(integral_of("(2*x + 1)^3"), "0.125 * (1 + 2 * x)^4");
        assert_eq!(integral_of("2^x"), "2^x * ln(2)^(-1)");
    }

    #[test]
    fn reverse_chain_rule() {
        assert_eq!(integral_of("2*x/(x^2 + 1)"), "ln(1 + x^2)");
        assert_eq!(integral_of("sin(x)/cos(x)"), "-ln(cos(x))");
        assert_eq!(integral_of("sin(x)*cos(x)"), "-0.5 * cos(x)^2");
    }

    #[test]
    fn generalized_substitution() {
        assert_eq!(integral_of("x * exp(x^2 + 1)"), "0.5 * exp(1 + x^2)");
    }

    #[test]
    fn failures() {
        match integrate(&parse("exp(x^2)"), "x") {
            Err(Error::IntegrationFailed(kind)) => {
                assert_eq!(kind.expr, "exp(x^2)");
                assert_eq!(kind.var, "x");
            },
            other => panic!("expected integration to fail, got {:?}", other),
        }

        assert!(matches!(integrate(&parse("x * exp(x)"), "x"), Err(Error::IntegrationFailed(_))));
        assert!(matches!(integrate(&parse("sin(x)^2"), "x"), Err(Error::IntegrationFailed(_))));
        assert!(matches!(integrate(&parse("x + x*exp(x)"), "x"), Err(Error::IntegrationFailed(_))));
    }

    #[test]
    fn invalid_input() {
        assert!(matches!(integrate(&parse("x"), "1x"), Err(Error::UnsupportedOperation(_))));
        assert!(matches!(integrate(&parse("x/0"), "x"), Err(Error::DivisionByZero(_))));
    }
}
