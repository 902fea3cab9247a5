//! Simplification rules for trigonometric identities.
//!
//! Both identities look for a `sin(u)^2` term and a `cos(u)^2` term with structurally equal
//! arguments in the same sum, each with any numeric coefficient.

use rug::Rational;
use crate::symbolic::{
    expr::{Expr, Func},
    simplify::{rules::do_sum, step::Step},
    step_collector::StepCollector,
};

/// A matching pair of `c1*sin(u)^2` and `c2*cos(u)^2` terms in a sum.
struct SquarePair {
    sin_index: usize,
    cos_index: usize,
    sin_coefficient: Rational,
    cos_coefficient: Rational,
    arg: Expr,
}

/// If the term is `c*func(u)^2`, returns `c` and `u`.
fn square_of(term: &Expr, func: Func) -> Option<(Rational, Expr)> {
    let (coefficient, unit) = term.split_coefficient();
    let Expr::Power(base, exponent) = unit else {
        return None;
    };
    if exponent.as_constant().map_or(true, |e| *e != 2) {
        return None;
    }

    match &*base {
        Expr::Call(target, arg) if *target == func => Some((coefficient, Expr::clone(arg))),
        _ => None,
    }
}

/// Finds a `sin(u)^2` term and a `cos(u)^2` term whose coefficients satisfy `accept`.
fn find_pair(terms: &[Expr], accept: impl Fn(&Rational, &Rational) -> bool) -> Option<SquarePair> {
    terms.iter().enumerate().find_map(|(sin_index, term)| {
        let (sin_coefficient, arg) = square_of(term, Func::Sin)?;
        terms.iter().enumerate().find_map(|(cos_index, other)| {
            let (cos_coefficient, other_arg) = square_of(other, Func::Cos)?;
            (other_arg == arg && accept(&sin_coefficient, &cos_coefficient)).then(|| SquarePair {
                sin_index,
                cos_index,
                sin_coefficient: sin_coefficient.clone(),
                cos_coefficient,
                arg: arg.clone(),
            })
        })
    })
}

/// Replaces the two terms of the pair with the given term.
fn replace_pair(terms: &[Expr], pair: &SquarePair, replacement: Expr) -> Expr {
    let rest = terms.iter()
        .enumerate()
        .filter(|(i, _)| *i != pair.sin_index && *i != pair.cos_index)
        .map(|(_, term)| term.clone());
    Expr::sum(rest.chain(std::iter::once(replacement)))
}

/// `sin(u)^2 + cos(u)^2 = 1`
/// `c*sin(u)^2 + c*cos(u)^2 = c`
pub fn pythagorean(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_sum(expr, |terms| {
        let pair = find_pair(terms, |sin, cos| sin == cos)?;
        let replacement = Expr::Constant(pair.sin_coefficient.clone());
        Some(replace_pair(terms, &pair, replacement))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::Pythagorean);
    Some(opt)
}

/// `cos(u)^2 - sin(u)^2 = cos(2u)`
/// `c*cos(u)^2 - c*sin(u)^2 = c*cos(2u)`
pub fn double_angle(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_sum(expr, |terms| {
        let pair = find_pair(terms, |sin, cos| *sin == -cos.clone())?;
        let doubled = Expr::product([Expr::constant(2), pair.arg.clone()]);
        let replacement = Expr::product([
            Expr::Constant(pair.cos_coefficient.clone()),
            Expr::call(Func::Cos, doubled),
        ]);
        Some(replace_pair(terms, &pair, replacement))
    })?;

    step_collector.push(Step::DoubleAngle);
    Some(opt)
}

/// Applies all trigonometric rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    pythagorean(expr, step_collector)
        .or_else(|| double_angle(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn squared(func: Func, arg: Expr) -> Expr {
        Expr::power(Expr::call(func, arg), Expr::constant(2))
    }

    #[test]
    fn pythagorean_keeps_other_terms() {
        let x = Expr::variable("x");
        let expr = Expr::sum([
            squared(Func::Sin, x.clone()),
            Expr::variable("y"),
            squared(Func::Cos, x),
        ]);
        let expected = Expr::sum([Expr::one(), Expr::variable("y")]);
        assert_eq!(pythagorean(&expr, &mut ()), Some(expected));
    }

    #[test]
    fn double_angle_with_coefficient() {
        let x = Expr::variable("x");
        let expr = Expr::sum([
            Expr::product([Expr::constant(-3), squared(Func::Sin, x.clone())]),
            Expr::product([Expr::constant(3), squared(Func::Cos, x.clone())]),
        ]);
        let expected = Expr::product([
            Expr::constant(3),
            Expr::call(Func::Cos, Expr::product([Expr::constant(2), x])),
        ]);

        let mut steps = Vec::new();
        assert_eq!(all(&expr, &mut steps), Some(expected));
        assert_eq!(steps, vec![Step::DoubleAngle]);
    }

    #[test]
    fn different_arguments_do_not_match() {
        let expr = Expr::sum([
            squared(Func::Sin, Expr::variable("x")),
            squared(Func::Cos, Expr::variable("y")),
        ]);
        assert_eq!(all(&expr, &mut ()), None);
    }
}
