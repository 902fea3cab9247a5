//! Symbolic computation over elementary real-valued expressions.
//!
//! Expressions are parsed with [`sym_parser`], converted into a [`symbolic::Expr`], and then
//! simplified, differentiated, or integrated with the functions in [`symbolic`].
//!
//! ```
//! use sym_compute::symbolic::{derivative, simplify, Expr};
//! use sym_parser::parser::{ast::Expr as AstExpr, Parser};
//!
//! let ast = Parser::new("x^2 + 2*x + 1").try_parse_full::<AstExpr>().unwrap();
//! let expr = Expr::try_from(ast).unwrap();
//!
//! assert_eq!(simplify(&expr).unwrap().to_string(), "1 + 2 * x + x^2");
//! assert_eq!(derivative(&expr, "x").unwrap().to_string(), "2 + 2 * x");
//! ```

pub mod symbolic;
