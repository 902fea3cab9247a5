//! Symbolic differentiation.
//!
//! The derivative is computed by structural recursion over the expression, with one rule per kind
//! of node. The raw result is then passed through the simplifier, so [`derivative`] always returns
//! an expression in canonical form.

mod function;

use crate::symbolic::{
    error::Error,
    expr::{is_valid_variable_name, Expr, Func},
    simplify::simplify,
};

/// `(f + g)' = f' + g'`
fn sum_rule(terms: &[Expr], with: &str) -> Expr {
    Expr::sum(terms.iter().map(|term| differentiate(term, with)))
}

/// `(f * g * h)' = f' * g * h + f * g' * h + f * g * h'`
fn product_rule(factors: &[Expr], with: &str) -> Expr {
    Expr::sum((0..factors.len()).filter_map(|derivative_index| {
        let derivative = differentiate(&factors[derivative_index], with);
        if derivative.is_zero() {
            return None;
        }

        let rest = factors.iter()
            .enumerate()
            .filter(|(term_index, _)| *term_index != derivative_index)
            .map(|(_, factor)| factor.clone());
        Some(Expr::product(rest.chain(std::iter::once(derivative))))
    }))
}

/// Differentiates `base^exponent`.
///
/// - `(f^n)' = n * f^(n-1) * f'` if `n` does not depend on the variable
/// - `(a^g)' = a^g * ln(a) * g'` if `a` does not depend on the variable
/// - `(f^g)' = f^g * (g' * ln(f) + g * f' / f)` otherwise
fn power_rule(base: &Expr, exponent: &Expr, with: &str) -> Expr {
    let power = || Expr::power(base.clone(), exponent.clone());

    match (base.depends_on(with), exponent.depends_on(with)) {
        (_, false) => Expr::product([
            exponent.clone(),
            Expr::power(base.clone(), Expr::sum([exponent.clone(), Expr::constant(-1)])),
            differentiate(base, with),
        ]),
        (false, true) => Expr::product([
            power(),
            Expr::call(Func::Ln, base.clone()),
            differentiate(exponent, with),
        ]),
        (true, true) => Expr::product([
            power(),
            Expr::sum([
                Expr::product([differentiate(exponent, with), Expr::call(Func::Ln, base.clone())]),
                Expr::product([
                    exponent.clone(),
                    differentiate(base, with),
                    Expr::recip(base.clone()),
                ]),
            ]),
        ]),
    }
}

/// Computes the unsimplified derivative of the given expression.
fn differentiate(f: &Expr, with: &str) -> Expr {
    if !f.depends_on(with) {
        return Expr::zero();
    }

    match f {
        Expr::Constant(_) => Expr::zero(),
        Expr::Variable(name) => if &**name == with { Expr::one() } else { Expr::zero() },
        Expr::Sum(terms) => sum_rule(terms, with),
        Expr::Product(factors) => product_rule(factors, with),
        Expr::Power(base, exponent) => power_rule(base, exponent, with),
        Expr::Call(func, arg) => function::function_derivative(*func, arg, with),
    }
}

/// Computes the derivative of the given expression with respect to the variable `with`.
///
/// The expression is simplified before and after differentiation. Returns
/// [`Error::UnsupportedOperation`] if `with` is not a valid variable name, and
/// [`Error::DivisionByZero`] if the expression divides by zero.
pub fn derivative(f: &Expr, with: &str) -> Result<Expr, Error> {
    if !is_valid_variable_name(with) {
        return Err(Error::unsupported(format!("cannot differentiate with respect to `{}`", with)));
    }

    let f = simplify(f)?;
    simplify(&differentiate(&f, with))
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use pretty_assertions::assert_eq;
    use sym_parser::parser::{ast::Expr as AstExpr, Parser};
    use super::*;

    fn parse(source: &str) -> Expr {
        let ast = Parser::new(source).try_parse_full::<AstExpr>().unwrap();
        Expr::try_from(ast).unwrap()
    }

    /// Approximates the derivative of the expression at `x` with a central difference.
    fn finite_difference(e: &Expr, x: f64) -> f64 {
        const DX: f64 = 0.00001;
        let eval_x = |x: f64| e.eval(&[("x", x)]).unwrap();
        (eval_x(x + DX) - eval_x(x - DX)) / (2.0 * DX)
    }

    /// Checks the symbolic derivative of `function` against a numeric approximation at each of
    /// the given points.
    fn test_for_function(function: &str, points: impl IntoIterator<Item = f64>) {
        let expr = parse(function);
        let symbolic = derivative(&expr, "x").unwrap();

        for point in points {
            let symbolically_computed = symbolic.eval(&[("x", point)]).unwrap();
            let numerically_computed = finite_difference(&expr, point);
            assert_float_absolute_eq!(symbolically_computed, numerically_computed, 0.0001);
        }
    }

    fn derivative_of(source: &str) -> String {
        derivative(&parse(source), "x").unwrap().to_string()
    }

    #[test]
    fn power_rule() {
        test_for_function("x^2 + x + 1", [0., 1., 2., 5., 8.]);
        assert_eq!(derivative_of("x^2 + 2*x + 1"), "2 + 2 * x");
    }

    #[test]
    fn negative_and_fractional_powers() {
        test_for_function("1/x + x^0.5", [0.5, 1., 3.]);
        assert_eq!(derivative_of("1/x"), "-x^(-2)");
    }

    #[test]
    fn product_rule() {
        test_for_function("x * sin(x) * exp(x)", [-1., 0., 0.5, 2.]);
        assert_eq!(derivative_of("sin(x) * cos(x) * 2"), "2 * cos(2 * x)");
    }

    #[test]
    fn chain_rule() {
        test_for_function("sin(x^2 + 1)", [-1., 0., 0.3, 1.5]);
        test_for_function("ln(cos(x))", [-1., 0., 0.5, 1.]);
        assert_eq!(derivative_of("exp(3*x)"), "3 * exp(3 * x)");
        assert_eq!(derivative_of("ln(x)"), "x^(-1)");
    }

    #[test]
    fn variable_exponent() {
        test_for_function("2^x", [-1., 0., 1., 2.]);
        test_for_function("x^x", [0.5, 1., 2.]);
        assert_eq!(derivative_of("2^x"), "2^x * ln(2)");
    }

    #[test]
    fn other_variables_are_constant() {
        assert_eq!(derivative_of("y^2 + sin(y)"), "0");
        assert_eq!(derivative_of("x * y"), "y");
        assert_eq!(derivative(&parse("x * y"), "y").unwrap().to_string(), "x");
    }

    #[test]
    fn invalid_variable() {
        assert!(matches!(derivative(&parse("x"), "2"), Err(Error::UnsupportedOperation(_))));
        assert!(matches!(derivative(&parse("x/0"), "x"), Err(Error::DivisionByZero(_))));
    }
}
