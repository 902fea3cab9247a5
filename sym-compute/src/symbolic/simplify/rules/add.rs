//! Simplification rules for sums.

use rug::Rational;
use crate::symbolic::{
    expr::Expr,
    simplify::{rules::do_sum, step::Step},
    step_collector::StepCollector,
};

/// `a+a = 2a`
/// `2a+3a = 5a`
/// `2a-2a = 0`
///
/// Terms are grouped by their unit part, the term with its numeric coefficient removed. Since the
/// sign of a term is carried by its coefficient, terms that only differ in sign cancel out.
pub fn combine_like_terms(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_sum(expr, |terms| {
        let mut groups: Vec<(Expr, Rational)> = Vec::with_capacity(terms.len());
        for term in terms {
            let (coefficient, unit) = term.split_coefficient();
            match groups.iter_mut().find(|(other, _)| *other == unit) {
                Some((_, total)) => *total += coefficient,
                None => groups.push((unit, coefficient)),
            }
        }

        if groups.len() == terms.len() {
            return None;
        }

        // zero coefficients fold the whole term to zero, which the sum then drops
        Some(Expr::sum(groups.into_iter().map(|(unit, coefficient)| {
            Expr::product([Expr::Constant(coefficient), unit])
        })))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::CombineLikeTerms);
    Some(opt)
}

/// Applies all addition rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    combine_like_terms(expr, step_collector)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn cancels_opposite_terms() {
        let x = Expr::variable("x");
        let y = Expr::variable("y");
        let expr = Expr::sum([
            Expr::product([Expr::constant(2), x.clone(), y.clone()]),
            Expr::product([Expr::constant(-2), y.clone(), x.clone()]),
            x.clone(),
        ]);

        let mut steps = Vec::new();
        assert_eq!(combine_like_terms(&expr, &mut steps), Some(x));
        assert_eq!(steps, vec![Step::CombineLikeTerms]);
    }

    #[test]
    fn unlike_terms_are_left_alone() {
        let expr = Expr::sum([Expr::variable("x"), Expr::variable("y"), Expr::one()]);
        assert_eq!(combine_like_terms(&expr, &mut ()), None);
    }
}
