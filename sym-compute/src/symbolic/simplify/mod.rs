//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which reduces an expression to its canonical
//! form. Much of the work is already done by the smart constructors of [`Expr`], which flatten
//! sums and products, fold constants and sort children. The remaining rewrites are rules in
//! [`rules`], applied to every node of the tree, bottom-up, in multiple passes, until a pass no
//! longer changes the tree.
//!
//! The number of passes is capped at [`MAX_PASSES`], or at a custom limit with [`simplify_with`].
//! If the cap is reached, the last tree is returned as-is; it is still a valid expression, just
//! possibly not fully simplified.

pub mod rules;
pub mod step;

use std::rc::Rc;
use tracing::{trace, warn};
use crate::symbolic::{
    error::{kind, Error},
    expr::Expr,
    step_collector::StepCollector,
};
use step::Step;

/// The maximum number of passes the simplifier makes over an expression.
pub const MAX_PASSES: usize = 64;

/// Returns [`Error::DivisionByZero`] if the node is zero raised to a negative power.
fn check_division(expr: &Expr) -> Result<(), Error> {
    if expr.is_division_by_zero() {
        Err(kind::DivisionByZero.into())
    } else {
        Ok(())
    }
}

/// Simplifies each child in the slice, returning [`None`] if none of them changed.
fn simplify_children(
    children: &Rc<[Expr]>,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Option<Vec<Expr>>, Error> {
    let simplified = children.iter()
        .map(|child| simplify_pass(child, step_collector))
        .collect::<Result<Vec<_>, _>>()?;

    if simplified[..] == children[..] {
        Ok(None)
    } else {
        Ok(Some(simplified))
    }
}

/// Makes one bottom-up pass over the expression, simplifying the children of each node before
/// trying the rules on the node itself.
fn simplify_pass(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Expr, Error> {
    let expr = match expr {
        Expr::Constant(_) | Expr::Variable(_) => expr.clone(),
        Expr::Sum(terms) => match simplify_children(terms, step_collector)? {
            Some(terms) => Expr::sum(terms),
            None => expr.clone(),
        },
        Expr::Product(factors) => match simplify_children(factors, step_collector)? {
            Some(factors) => Expr::product(factors),
            None => expr.clone(),
        },
        Expr::Power(base, exponent) => {
            let new_base = simplify_pass(base, step_collector)?;
            let new_exponent = simplify_pass(exponent, step_collector)?;
            if new_base == **base && new_exponent == **exponent {
                expr.clone()
            } else {
                Expr::power(new_base, new_exponent)
            }
        },
        Expr::Call(func, arg) => {
            let new_arg = simplify_pass(arg, step_collector)?;
            if new_arg == **arg {
                expr.clone()
            } else {
                Expr::call(*func, new_arg)
            }
        },
    };
    check_division(&expr)?;

    match rules::all(&expr, step_collector) {
        Some(rewritten) => {
            trace!(from = %expr, to = %rewritten, "applied simplification rule");
            check_division(&rewritten)?;
            Ok(rewritten)
        },
        None => Ok(expr),
    }
}

/// Base implementation of the simplification algorithm. At least one pass is always made.
fn inner_simplify_with(
    expr: &Expr,
    max_passes: usize,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    let mut current = simplify_pass(expr, step_collector)?;

    for _ in 1..max_passes {
        let next = simplify_pass(&current, step_collector)?;
        if next == current {
            return Ok(current);
        }
        current = next;
    }

    warn!(passes = max_passes, expr = %current, "simplifier reached the pass cap");
    Ok(current)
}

/// Simplifies the given expression.
///
/// Returns [`Error::DivisionByZero`] if any part of the expression divides by zero.
pub fn simplify(expr: &Expr) -> Result<Expr, Error> {
    inner_simplify_with(expr, MAX_PASSES, &mut ())
}

/// Simplifies the given expression, making at most `max_passes` passes over it instead of
/// [`MAX_PASSES`].
pub fn simplify_with(expr: &Expr, max_passes: usize) -> Result<Expr, Error> {
    inner_simplify_with(expr, max_passes, &mut ())
}

/// Simplifies the given expression. The steps taken by the simplifier will also be collected and
/// returned, in the order they were applied.
pub fn simplify_with_steps(expr: &Expr) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let expr = inner_simplify_with(expr, MAX_PASSES, &mut steps)?;
    Ok((expr, steps))
}
