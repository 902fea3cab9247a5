//! Integration of basic forms whose inner expression is linear in the variable.

use crate::symbolic::{error::Error, expr::{Expr, Func}};
use super::table::{function_antiderivative, power_antiderivative};

/// If the expression is `a*x + b`, where `a` and `b` do not depend on `x`, returns `(a, b)`.
fn linear_coefficients(expr: &Expr, var: &str) -> Option<(Expr, Expr)> {
    if !expr.depends_on(var) {
        return Some((Expr::zero(), expr.clone()));
    }

    match expr {
        Expr::Variable(_) => Some((Expr::one(), Expr::zero())),
        Expr::Product(factors) => {
            let mut coefficient = Vec::with_capacity(factors.len());
            let mut found = false;
            for factor in factors.iter() {
                if !factor.depends_on(var) {
                    coefficient.push(factor.clone());
                } else if found || !matches!(factor, Expr::Variable(_)) {
                    return None;
                } else {
                    found = true;
                }
            }
            Some((Expr::product(coefficient), Expr::zero()))
        },
        Expr::Sum(terms) => {
            let (mut slopes, mut intercepts) = (Vec::new(), Vec::new());
            for term in terms.iter() {
                let (slope, intercept) = linear_coefficients(term, var)?;
                slopes.push(slope);
                intercepts.push(intercept);
            }
            Some((Expr::sum(slopes), Expr::sum(intercepts)))
        },
        _ => None,
    }
}

/// - `∫ f(a*x + b) dx = F(a*x + b)/a`
/// - `∫ (a*x + b)^n dx = (a*x + b)^(n+1)/((n+1)*a)`, or `ln(a*x + b)/a` for `n = -1`
/// - `∫ c^(a*x + b) dx = c^(a*x + b)/(a*ln(c))`
///
/// `a`, `b`, `c` and `n` must not depend on `x`, and `a` must not be zero.
pub(super) fn linear_substitution(expr: &Expr, var: &str) -> Result<Option<Expr>, Error> {
    let slope = |inner: &Expr| {
        linear_coefficients(inner, var)
            .map(|(slope, _)| slope)
            .filter(|slope| !slope.is_zero())
    };

    let antiderivative = match expr {
        Expr::Call(func, arg) => slope(&**arg).map(|a| {
            Expr::product([Expr::recip(a), function_antiderivative(*func, arg)])
        }),
        Expr::Power(base, exponent) if !exponent.depends_on(var) => slope(&**base).map(|a| {
            Expr::product([Expr::recip(a), power_antiderivative(base, exponent)])
        }),
        Expr::Power(base, exponent) if !base.depends_on(var) => slope(&**exponent).map(|a| {
            let ln = Expr::call(Func::Ln, Expr::clone(base));
            Expr::product([expr.clone(), Expr::recip(Expr::product([a, ln]))])
        }),
        _ => None,
    };

    Ok(antiderivative)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn coefficients() {
        let x = Expr::variable("x");
        let expr = Expr::sum([
            Expr::product([Expr::constant(3), x.clone()]),
            Expr::product([Expr::variable("y"), x.clone()]),
            Expr::constant(2),
        ]);
        assert_eq!(
            linear_coefficients(&expr, "x"),
            Some((Expr::sum([Expr::constant(3), Expr::variable("y")]), Expr::constant(2))),
        );

        let square = Expr::power(x, Expr::constant(2));
        assert_eq!(linear_coefficients(&square, "x"), None);
    }
}
