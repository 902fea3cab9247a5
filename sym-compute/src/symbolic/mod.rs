//! Algebraic manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions in this module are represented as a tree of [`Expr`] nodes. It's similar to the
//! [`sym_parser::parser::ast::Expr`] nodes produced by [`sym_parser`], with the main difference
//! being that [`Expr`] nodes **flatten** out the tree structure and are always kept in a canonical
//! form.
//!
//! For example, the expression `x + (y + z)` is represented as a single [`Expr::Sum`] node with
//! _three_ children, `x`, `y`, and `z`, where as the [`sym_parser::parser::ast::Expr`] node would
//! have two children, `x` and `(y + z)`. This makes it much easier to combine like terms.
//!
//! Conversion from a [`sym_parser::parser::ast::Expr`] is done with [`TryFrom`]. It is lossy:
//! span information is dropped and terms may be reordered, but the result is semantically
//! equivalent to the source.
//!
//! # Operations
//!
//! - [`simplify()`] reduces an expression to its canonical form.
//! - [`derivative()`] differentiates an expression with respect to a variable.
//! - [`integrate()`] tries to find an antiderivative of an expression.
//!
//! Every operation is a pure function of its input and returns a fresh tree, sharing unchanged
//! subtrees with the input. All of them recurse over the tree, so the nesting depth of an
//! expression is limited by the size of the call stack; on the order of a thousand levels of
//! nesting are supported on the default main thread stack.

pub mod derivative;
pub mod error;
pub mod expr;
pub mod integrate;
pub mod simplify;
pub mod step_collector;

pub use derivative::derivative;
pub use error::Error;
pub use expr::{Expr, Func};
pub use integrate::integrate;
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;
