//! Tokenizer and parser for the infix expression language accepted by the symbolic engine.
//!
//! The grammar is small: numbers, variable names, the binary operators `+ - * / ^`, unary minus,
//! parentheses, and calls of the form `name(expr)`. `^` binds tightest and is right-associative,
//! and unary minus binds looser than `^`, so `-x^2` is `-(x^2)`.
//!
//! ```
//! use sym_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("x^2 + 2*x + 1");
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.span(), 0..13);
//! ```

pub mod parser;
pub mod tokenizer;
