//! Antiderivatives of the basic forms every heuristic reduces to.

use crate::symbolic::expr::{Expr, Func};

/// `∫ func(u) du`
pub(super) fn function_antiderivative(func: Func, u: &Expr) -> Expr {
    match func {
        Func::Sin => Expr::neg(Expr::call(Func::Cos, u.clone())),
        Func::Cos => Expr::call(Func::Sin, u.clone()),
        Func::Exp => Expr::call(Func::Exp, u.clone()),
        Func::Ln => Expr::difference(
            Expr::product([u.clone(), Expr::call(Func::Ln, u.clone())]),
            u.clone(),
        ),
    }
}

/// `∫ u^n du`, which is `ln(u)` for `n = -1`.
pub(super) fn power_antiderivative(u: &Expr, n: &Expr) -> Expr {
    if n.as_constant().is_some_and(|n| *n == -1) {
        return Expr::call(Func::Ln, u.clone());
    }

    let raised = Expr::sum([n.clone(), Expr::one()]);
    Expr::product([
        Expr::power(u.clone(), raised.clone()),
        Expr::recip(raised),
    ])
}
