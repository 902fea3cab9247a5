//! Direct integration rules, applied to the shape of the integrand.

use std::iter::once;
use crate::symbolic::{error::Error, expr::Expr};
use super::{integrate_simplified, table::{function_antiderivative, power_antiderivative}};

/// Returns true if the expression is exactly the given variable.
fn is_var(expr: &Expr, var: &str) -> bool {
    matches!(expr, Expr::Variable(name) if &**name == var)
}

/// - `∫ c dx = c*x`, for any `c` that does not depend on `x`
/// - `∫ x dx = x^2/2`
/// - `∫ (f + g) dx = ∫ f dx + ∫ g dx`
/// - `∫ c*f dx = c * ∫ f dx`
/// - `∫ x^n dx = x^(n+1)/(n+1)`, or `ln(x)` for `n = -1`
/// - `∫ f(x) dx = F(x)`, for each supported function `f`
///
/// Linearity fails the whole integral if any term or the non-constant part fails.
pub(super) fn structural(expr: &Expr, var: &str) -> Result<Option<Expr>, Error> {
    if !expr.depends_on(var) {
        return Ok(Some(Expr::product([expr.clone(), Expr::variable(var)])));
    }

    let antiderivative = match expr {
        Expr::Variable(_) => power_antiderivative(expr, &Expr::one()),
        Expr::Sum(terms) => Expr::sum(
            terms.iter()
                .map(|term| integrate_simplified(term, var))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Expr::Product(factors) => {
            let (free, rest): (Vec<_>, Vec<_>) = factors.iter()
                .cloned()
                .partition(|factor| !factor.depends_on(var));
            if free.is_empty() {
                return Ok(None);
            }

            let integrated = integrate_simplified(&Expr::product(rest), var)?;
            Expr::product(free.into_iter().chain(once(integrated)))
        },
        Expr::Power(base, exponent) if is_var(base, var) && !exponent.depends_on(var) => {
            power_antiderivative(base, exponent)
        },
        Expr::Call(func, arg) if is_var(arg, var) => function_antiderivative(*func, arg),
        _ => return Ok(None),
    };

    Ok(Some(antiderivative))
}
