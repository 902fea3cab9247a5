//! Simplification rules for products.

use rug::Rational;
use crate::symbolic::{
    expr::Expr,
    simplify::{rules::do_product, step::Step},
    step_collector::StepCollector,
};

/// If `lhs` is `k*rhs` for some constant `k`, where both are sums, returns `k`.
///
/// Both sums are in canonical order, so matching terms are at the same positions.
fn sum_ratio(lhs: &Expr, rhs: &Expr) -> Option<Rational> {
    let (Expr::Sum(lhs), Expr::Sum(rhs)) = (lhs, rhs) else {
        return None;
    };
    if lhs.len() != rhs.len() {
        return None;
    }

    let mut ratio = None;
    for (a, b) in lhs.iter().zip(rhs.iter()) {
        let (a_coefficient, a_unit) = a.split_coefficient();
        let (b_coefficient, b_unit) = b.split_coefficient();
        if a_unit != b_unit || b_coefficient == 0 {
            return None;
        }

        let k = a_coefficient / b_coefficient;
        match &ratio {
            Some(existing) if *existing != k => return None,
            Some(_) => (),
            None => ratio = Some(k),
        }
    }
    ratio
}

/// `a*a = a^2`
/// `a^2*a^3 = a^5`
/// `a*a^(-1) = 1`
///
/// `(2+2*a)*(1+a)^(-1) = 2`
///
/// Factors are grouped by their base, with a factor that is not a power treated as its own base
/// raised to `1`. This also cancels a divisor against a matching factor in the numerator.
///
/// A sum base raised to an integer power also joins the group of a sum base it is a constant
/// multiple of; the constant is moved into the coefficient.
pub fn combine_like_factors(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_product(expr, |factors| {
        let mut coefficient = None;
        let mut scale = Vec::new();
        let mut groups: Vec<(Expr, Vec<Expr>)> = Vec::with_capacity(factors.len());
        for factor in factors {
            if let Expr::Constant(_) = factor {
                coefficient = Some(factor.clone());
                continue;
            }

            let (base, exponent) = factor.split_power();
            if let Some((_, exponents)) = groups.iter_mut().find(|(other, _)| *other == base) {
                exponents.push(exponent);
                continue;
            }

            if exponent.is_integer() {
                let multiple = groups.iter_mut()
                    .find_map(|(other, exponents)| {
                        sum_ratio(&base, other).map(|ratio| (ratio, exponents))
                    });
                if let Some((ratio, exponents)) = multiple {
                    scale.push(Expr::power(Expr::Constant(ratio), exponent.clone()));
                    exponents.push(exponent);
                    continue;
                }
            }

            groups.push((base, vec![exponent]));
        }

        if groups.iter().all(|(_, exponents)| exponents.len() == 1) {
            return None;
        }

        let merged = groups.into_iter()
            .map(|(base, exponents)| Expr::power(base, Expr::sum(exponents)));
        Some(Expr::product(coefficient.into_iter().chain(scale).chain(merged)))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::CombineLikeFactors);
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    combine_like_factors(expr, step_collector)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn adds_exponents() {
        let x = Expr::variable("x");
        let expr = Expr::product([
            Expr::constant(3),
            x.clone(),
            Expr::power(x.clone(), Expr::variable("n")),
        ]);

        let expected = Expr::product([
            Expr::constant(3),
            Expr::power(x, Expr::sum([Expr::one(), Expr::variable("n")])),
        ]);
        assert_eq!(combine_like_factors(&expr, &mut ()), Some(expected));
    }

    #[test]
    fn cancels_constant_multiple_of_divisor() {
        let x = Expr::variable("x");
        let base = Expr::sum([Expr::one(), x.clone()]);
        let scaled = Expr::sum([Expr::constant(2), Expr::product([Expr::constant(2), x.clone()])]);
        let expr = Expr::product([scaled.clone(), Expr::recip(base.clone())]);
        assert_eq!(combine_like_factors(&expr, &mut ()), Some(Expr::constant(2)));

        let expr = Expr::product([scaled, base.clone()]);
        let expected = Expr::product([Expr::constant(2), Expr::power(base.clone(), Expr::constant(2))]);
        assert_eq!(combine_like_factors(&expr, &mut ()), Some(expected));

        // not a constant multiple
        let other = Expr::sum([Expr::constant(2), x]);
        let expr = Expr::product([other, Expr::recip(base)]);
        assert_eq!(combine_like_factors(&expr, &mut ()), None);
    }

    #[test]
    fn cancels_divisor() {
        let x = Expr::variable("x");
        let expr = Expr::product([Expr::constant((1, 3)), x.clone(), Expr::recip(x)]);
        assert_eq!(combine_like_factors(&expr, &mut ()), Some(Expr::constant((1, 3))));
    }
}
