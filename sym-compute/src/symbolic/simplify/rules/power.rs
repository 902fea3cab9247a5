//! Simplification rules for powers.
//!
//! Most power identities, such as `a^0 = 1` or `a^1 = a`, are applied when the power is
//! constructed. The rules here restructure a power whose base is itself a product or a power.

use crate::symbolic::{
    expr::Expr,
    simplify::{rules::do_power, step::Step},
    step_collector::StepCollector,
};

/// `(a*b)^n = a^n*b^n`, for integer `n`
pub fn distribute_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exponent| {
        if !exponent.is_integer() {
            return None;
        }

        match base {
            Expr::Product(factors) => Some(Expr::product(
                factors.iter().map(|factor| Expr::power(factor.clone(), exponent.clone())),
            )),
            _ => None,
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::DistributePower);
    Some(opt)
}

/// `(a^b)^n = a^(b*n)`, for integer `n`
pub fn power_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exponent| {
        if !exponent.is_integer() {
            return None;
        }

        match base {
            Expr::Power(inner_base, inner_exponent) => Some(Expr::power(
                Expr::clone(inner_base),
                Expr::product([Expr::clone(inner_exponent), exponent.clone()]),
            )),
            _ => None,
        }
    })?;

    step_collector.push(Step::PowerPower);
    Some(opt)
}

/// Applies all power rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    distribute_power(expr, step_collector)
        .or_else(|| power_power(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn distribute_integer_power() {
        let expr = Expr::power(
            Expr::product([Expr::constant(3), Expr::variable("x")]),
            Expr::constant(-1),
        );
        let expected = Expr::product([
            Expr::constant((1, 3)),
            Expr::recip(Expr::variable("x")),
        ]);
        assert_eq!(distribute_power(&expr, &mut ()), Some(expected));
    }

    #[test]
    fn fractional_power_is_kept() {
        let expr = Expr::power(
            Expr::product([Expr::variable("x"), Expr::variable("y")]),
            Expr::constant((1, 2)),
        );
        assert_eq!(all(&expr, &mut ()), None);
    }

    #[test]
    fn nested_power() {
        let x = Expr::variable("x");
        let expr = Expr::power(Expr::power(x.clone(), Expr::variable("a")), Expr::constant(2));
        let expected = Expr::power(x, Expr::product([Expr::constant(2), Expr::variable("a")]));

        let mut steps = Vec::new();
        assert_eq!(power_power(&expr, &mut steps), Some(expected));
        assert_eq!(steps, vec![Step::PowerPower]);
    }
}
