//! Simplification rules for calls with a known result.

use crate::symbolic::{
    expr::{Expr, Func},
    simplify::{rules::do_call, step::Step},
    step_collector::StepCollector,
};

/// `sin(0) = 0`
/// `cos(0) = 1`
/// `exp(0) = 1`
/// `ln(1) = 0`
/// `ln(exp(u)) = u`
pub fn evaluate_function(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_call(expr, Func::Sin, |arg| arg.is_zero().then(Expr::zero))
        .or_else(|| do_call(expr, Func::Cos, |arg| arg.is_zero().then(Expr::one)))
        .or_else(|| do_call(expr, Func::Exp, |arg| arg.is_zero().then(Expr::one)))
        .or_else(|| do_call(expr, Func::Ln, |arg| match arg {
            Expr::Call(Func::Exp, inner) => Some(Expr::clone(inner)),
            arg => arg.is_one().then(Expr::zero),
        }))?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::EvaluateFunction);
    Some(opt)
}

/// Applies all function rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    evaluate_function(expr, step_collector)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(all(&Expr::call(Func::Sin, Expr::zero()), &mut ()), Some(Expr::zero()));
        assert_eq!(all(&Expr::call(Func::Cos, Expr::zero()), &mut ()), Some(Expr::one()));
        assert_eq!(all(&Expr::call(Func::Exp, Expr::zero()), &mut ()), Some(Expr::one()));
        assert_eq!(all(&Expr::call(Func::Ln, Expr::one()), &mut ()), Some(Expr::zero()));
        assert_eq!(all(&Expr::call(Func::Sin, Expr::one()), &mut ()), None);
    }

    #[test]
    fn log_of_exp() {
        let u = Expr::sum([Expr::variable("x"), Expr::one()]);
        let expr = Expr::call(Func::Ln, Expr::call(Func::Exp, u.clone()));
        assert_eq!(all(&expr, &mut ()), Some(u));
    }
}
