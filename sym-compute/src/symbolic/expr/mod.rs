//! A representation of mathematical expressions that is easier to manipulate than an AST.
//!
//! The [`Expr`](sym_parser::parser::ast::expr::Expr) type from `sym_parser` is a recursive `enum`
//! that mirrors the source text, including its parentheses and its binary subtraction and
//! division. It's convenient for parsing, but not so much for algebraic manipulation.
//!
//! This module defines a separate [`Expr`] that flattens sums and products into n-ary nodes and
//! expresses every other operator in terms of them:
//!
//! - `a - b` is `a + (-1)*b`
//! - `a / b` is `a * b^(-1)`
//! - `-a` is `(-1)*a`
//!
//! All submodules that deal with symbolic manipulation use [`Expr`], and any occurrences of the
//! word `expression` will refer to this type.
//!
//! # Canonical form
//!
//! Expressions are only ever built through the smart constructors ([`Expr::sum`],
//! [`Expr::product`], [`Expr::power`], and friends). They guarantee that:
//!
//! - sums never directly contain sums, and products never directly contain products;
//! - a sum or product holds at most one [`Expr::Constant`], and it is always the first child;
//! - no sum or product has fewer than two children;
//! - `a + 0 = a`, `a * 1 = a`, `a * 0 = 0`, `a^0 = 1`, `a^1 = a`, and `1^a = 1`;
//! - the children of sums and products are sorted in a fixed order (see below).
//!
//! Sum terms are ordered by ascending total degree of their non-numeric part, then by its printed
//! form, then by coefficient. Product factors are ordered by their printed form, after the numeric
//! coefficient. Two expressions that only differ by the order of their terms / factors therefore
//! build into identical trees, and [`PartialEq`] can be a plain structural comparison.
//!
//! Nodes are reference-counted, so cloning an expression or rebuilding a node around an unchanged
//! child shares the child instead of copying it.

mod convert;
mod eval;
mod fmt;

use rug::{ops::Pow, Rational};
use std::rc::Rc;

/// Integer powers of constants with a larger exponent than this are left unevaluated.
const MAX_FOLDED_EXPONENT: u32 = 1024;

/// A supported elementary function of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Func {
    Sin,
    Cos,
    Exp,
    Ln,
}

impl Func {
    /// All supported functions.
    pub const ALL: [Func; 4] = [Func::Sin, Func::Cos, Func::Exp, Func::Ln];

    /// Returns the name of the function, as written in source code.
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Exp => "exp",
            Func::Ln => "ln",
        }
    }

    /// Returns the function with the given name, if it is supported.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|func| func.name() == name)
    }
}

/// A symbolic expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// An exact rational number, such as `2`, `-1`, or `1/3`.
    Constant(Rational),

    /// A variable, such as `x` or `y`.
    Variable(Rc<str>),

    /// Multiple terms added together.
    Sum(Rc<[Expr]>),

    /// Multiple factors multiplied together.
    Product(Rc<[Expr]>),

    /// An expression raised to a power.
    Power(Rc<Expr>, Rc<Expr>),

    /// A call to one of the supported functions.
    Call(Func, Rc<Expr>),
}

impl Expr {
    /// Creates a constant.
    pub fn constant(value: impl Into<Rational>) -> Self {
        Self::Constant(value.into())
    }

    /// The constant `0`.
    pub fn zero() -> Self {
        Self::Constant(Rational::new())
    }

    /// The constant `1`.
    pub fn one() -> Self {
        Self::constant(1)
    }

    /// Creates a variable.
    pub fn variable(name: &str) -> Self {
        Self::Variable(Rc::from(name))
    }

    /// Adds the given terms together, flattening nested sums and folding constants.
    pub fn sum(terms: impl IntoIterator<Item = Expr>) -> Self {
        let mut constant = Rational::new();
        let mut rest = Vec::new();

        let mut add = |term: Expr| match term {
            Self::Constant(value) => constant += value,
            term => rest.push(term),
        };
        for term in terms {
            match term {
                Self::Sum(inner) => inner.iter().cloned().for_each(&mut add),
                term => add(term),
            }
        }

        if rest.is_empty() {
            return Self::Constant(constant);
        }
        if constant == 0 && rest.len() == 1 {
            return rest.swap_remove(0);
        }

        rest.sort_by_cached_key(|term| {
            let (coefficient, unit) = term.split_coefficient();
            (unit.degree(), unit.to_string(), coefficient)
        });
        if constant != 0 {
            rest.insert(0, Self::Constant(constant));
        }

        Self::Sum(Rc::from(rest))
    }

    /// Multiplies the given factors together, flattening nested products and folding constants.
    ///
    /// A zero coefficient makes the whole product zero, unless one of the factors divides by zero;
    /// that factor is kept so that the simplifier can report it.
    pub fn product(factors: impl IntoIterator<Item = Expr>) -> Self {
        let mut coefficient = Rational::from(1);
        let mut rest = Vec::new();

        let mut mul = |factor: Expr| match factor {
            Self::Constant(value) => coefficient *= value,
            factor => rest.push(factor),
        };
        for factor in factors {
            match factor {
                Self::Product(inner) => inner.iter().cloned().for_each(&mut mul),
                factor => mul(factor),
            }
        }

        if coefficient == 0 && !rest.iter().any(Self::is_division_by_zero) {
            return Self::zero();
        }
        if rest.is_empty() {
            return Self::Constant(coefficient);
        }
        if coefficient == 1 && rest.len() == 1 {
            return rest.swap_remove(0);
        }

        rest.sort_by_cached_key(ToString::to_string);
        if coefficient != 1 {
            rest.insert(0, Self::Constant(coefficient));
        }

        Self::Product(Rc::from(rest))
    }

    /// Raises `base` to the power of `exponent`.
    ///
    /// Integer powers of constants are evaluated exactly, except for negative powers of zero,
    /// which are kept as-is so that the simplifier can report them.
    pub fn power(base: Expr, exponent: Expr) -> Self {
        if exponent.is_zero() || base.is_one() {
            return Self::one();
        }
        if exponent.is_one() {
            return base;
        }

        if let (Self::Constant(b), Self::Constant(e)) = (&base, &exponent) {
            if let Some(value) = fold_power(b, e) {
                return Self::Constant(value);
            }
        }

        if base.is_zero() && exponent.as_constant().is_some_and(|e| *e > 0) {
            return Self::zero();
        }

        Self::Power(Rc::new(base), Rc::new(exponent))
    }

    /// Applies the given function to the argument.
    pub fn call(func: Func, arg: Expr) -> Self {
        Self::Call(func, Rc::new(arg))
    }

    /// `-expr`, represented as `(-1)*expr`.
    pub fn neg(expr: Expr) -> Self {
        Self::product([Self::constant(-1), expr])
    }

    /// `1/expr`, represented as `expr^(-1)`.
    pub fn recip(expr: Expr) -> Self {
        Self::power(expr, Self::constant(-1))
    }

    /// `lhs - rhs`, represented as `lhs + (-1)*rhs`.
    pub fn difference(lhs: Expr, rhs: Expr) -> Self {
        Self::sum([lhs, Self::neg(rhs)])
    }

    /// `numerator / denominator`, represented as `numerator * denominator^(-1)`.
    pub fn quotient(numerator: Expr, denominator: Expr) -> Self {
        Self::product([numerator, Self::recip(denominator)])
    }

    /// If the expression is a [`Expr::Constant`], returns a reference to its value.
    pub fn as_constant(&self) -> Option<&Rational> {
        match self {
            Self::Constant(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true if the expression is the constant `0`.
    pub fn is_zero(&self) -> bool {
        self.as_constant().is_some_and(|value| *value == 0)
    }

    /// Returns true if the expression is the constant `1`.
    pub fn is_one(&self) -> bool {
        self.as_constant().is_some_and(|value| *value == 1)
    }

    /// Returns true if the expression is an integer constant.
    pub fn is_integer(&self) -> bool {
        self.as_constant().is_some_and(Rational::is_integer)
    }

    /// Returns the terms of the expression: the children of a [`Expr::Sum`], or the expression
    /// itself otherwise.
    pub fn terms(&self) -> &[Expr] {
        match self {
            Self::Sum(terms) => terms,
            _ => std::slice::from_ref(self),
        }
    }

    /// Returns the factors of the expression: the children of a [`Expr::Product`], or the
    /// expression itself otherwise.
    pub fn factors(&self) -> &[Expr] {
        match self {
            Self::Product(factors) => factors,
            _ => std::slice::from_ref(self),
        }
    }

    /// Returns true if the given variable appears anywhere in the expression.
    pub fn depends_on(&self, var: &str) -> bool {
        match self {
            Self::Constant(_) => false,
            Self::Variable(name) => &**name == var,
            Self::Sum(children) | Self::Product(children) => {
                children.iter().any(|child| child.depends_on(var))
            },
            Self::Power(base, exponent) => base.depends_on(var) || exponent.depends_on(var),
            Self::Call(_, arg) => arg.depends_on(var),
        }
    }

    /// Splits the expression into its numeric coefficient and the remaining "unit" part.
    ///
    /// - `5` -> `(5, 1)`
    /// - `3*a` -> `(3, a)`
    /// - `-1/4*a*b` -> `(-1/4, a*b)`
    /// - `a` -> `(1, a)`
    pub fn split_coefficient(&self) -> (Rational, Expr) {
        match self {
            Self::Constant(value) => (value.clone(), Self::one()),
            Self::Product(factors) => match factors.split_first() {
                Some((Self::Constant(value), rest)) => {
                    (value.clone(), Self::product(rest.iter().cloned()))
                },
                _ => (Rational::from(1), self.clone()),
            },
            _ => (Rational::from(1), self.clone()),
        }
    }

    /// Splits the expression into a base and an exponent. Anything that is not a
    /// [`Expr::Power`] is its own base, raised to `1`.
    pub fn split_power(&self) -> (Expr, Expr) {
        match self {
            Self::Power(base, exponent) => (Expr::clone(base), Expr::clone(exponent)),
            _ => (self.clone(), Self::one()),
        }
    }

    /// Returns true if the expression is zero raised to a negative constant power.
    pub fn is_division_by_zero(&self) -> bool {
        match self {
            Self::Power(base, exponent) => {
                base.is_zero() && exponent.as_constant().is_some_and(|e| *e < 0)
            },
            _ => false,
        }
    }

    /// Total degree of the expression over all variables, used to order the terms of a sum.
    fn degree(&self) -> Rational {
        match self {
            Self::Constant(_) | Self::Call(..) => Rational::new(),
            Self::Variable(_) => Rational::from(1),
            Self::Sum(terms) => terms.iter().map(Self::degree).max().unwrap_or_default(),
            Self::Product(factors) => factors.iter()
                .map(Self::degree)
                .fold(Rational::new(), |total, degree| total + degree),
            Self::Power(base, exponent) => match exponent.as_constant() {
                Some(n) => base.degree() * n,
                None => base.degree(),
            },
        }
    }
}

/// Returns true if `name` can be used as a variable: a letter followed by letters or digits.
pub fn is_valid_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Computes `base^exponent` exactly, if the exponent is a reasonably small integer and the result
/// is defined.
fn fold_power(base: &Rational, exponent: &Rational) -> Option<Rational> {
    if !exponent.is_integer() {
        return None;
    }

    let n = exponent.numer().to_i32()?;
    if n.unsigned_abs() > MAX_FOLDED_EXPONENT || (*base == 0 && n < 0) {
        return None;
    }

    Some(base.clone().pow(n))
}
