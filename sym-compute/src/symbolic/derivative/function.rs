//! Symbolic derivatives of the supported functions.

use crate::symbolic::expr::{Expr, Func};
use super::differentiate;

/// Computes the derivative of `func(arg)` and applies the chain rule.
pub(super) fn function_derivative(func: Func, arg: &Expr, with: &str) -> Expr {
    let outer = match func {
        Func::Sin => Expr::call(Func::Cos, arg.clone()),
        Func::Cos => Expr::neg(Expr::call(Func::Sin, arg.clone())),
        Func::Exp => Expr::call(Func::Exp, arg.clone()),
        Func::Ln => Expr::recip(arg.clone()),
    };

    Expr::product([outer, differentiate(arg, with)])
}
