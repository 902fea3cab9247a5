//! Integration by substitution, recognizing `u'` as a cofactor of the integrand.

use std::iter::once;
use crate::symbolic::{
    derivative::derivative,
    error::Error,
    expr::Expr,
    simplify::simplify,
};
use super::table::{function_antiderivative, power_antiderivative};

/// Returns every factor except the one at `index`.
fn other_factors(factors: &[Expr], index: usize) -> impl Iterator<Item = Expr> + '_ {
    factors.iter()
        .enumerate()
        .filter(move |(i, _)| *i != index)
        .map(|(_, factor)| factor.clone())
}

/// Returns `k` if the product of `cofactors` equals `k * du` for some `k` that does not depend on
/// the variable.
fn constant_ratio(
    cofactors: impl Iterator<Item = Expr>,
    du: &Expr,
    var: &str,
) -> Result<Option<Expr>, Error> {
    let ratio = simplify(&Expr::product(cofactors.chain(once(Expr::recip(du.clone())))))?;
    Ok((!ratio.depends_on(var)).then_some(ratio))
}

/// `∫ k * u^n * u' dx = k * u^(n+1)/(n+1)`, or `k * ln(u)` for `n = -1`
///
/// Candidates for `u` are first the bases of power factors with an exponent that does not depend
/// on `x`, then every factor that depends on `x`, raised to `1`.
pub(super) fn reverse_chain_rule(expr: &Expr, var: &str) -> Result<Option<Expr>, Error> {
    let factors = expr.factors();
    let powers = factors.iter()
        .enumerate()
        .filter_map(|(index, factor)| match factor {
            Expr::Power(base, exponent) if base.depends_on(var) && !exponent.depends_on(var) => {
                Some((index, Expr::clone(base), Expr::clone(exponent)))
            },
            _ => None,
        });
    let bare = factors.iter()
        .enumerate()
        .filter(|(_, factor)| factor.depends_on(var))
        .map(|(index, factor)| (index, factor.clone(), Expr::one()));

    for (index, u, n) in powers.chain(bare) {
        let du = derivative(&u, var)?;
        if du.is_zero() {
            continue;
        }

        if let Some(k) = constant_ratio(other_factors(factors, index), &du, var)? {
            return Ok(Some(Expr::product([k, power_antiderivative(&u, &n)])));
        }
    }

    Ok(None)
}

/// `∫ k * f(u) * u' dx = k * F(u)`, for each supported function `f`
pub(super) fn generalized_substitution(expr: &Expr, var: &str) -> Result<Option<Expr>, Error> {
    let factors = expr.factors();
    for (index, factor) in factors.iter().enumerate() {
        let Expr::Call(func, u) = factor else {
            continue;
        };
        if !u.depends_on(var) {
            continue;
        }

        let du = derivative(u, var)?;
        if du.is_zero() {
            continue;
        }

        if let Some(k) = constant_ratio(other_factors(factors, index), &du, var)? {
            return Ok(Some(Expr::product([k, function_antiderivative(*func, u)])));
        }
    }

    Ok(None)
}
