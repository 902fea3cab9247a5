//! Canonical rendering of expressions.
//!
//! Numbers are printed exactly: integers without a decimal point, rationals whose denominator
//! only has the prime factors 2 and 5 as a terminating decimal (`0.5`, `1.25`), and every other
//! rational as a fraction (`1/3`).
//!
//! A product whose numeric coefficient is followed by more than one factor groups those factors
//! in parentheses, as in `2 * (cos(x) * sin(x))`, and a coefficient of `-1` is printed as a
//! leading minus sign. Terms of a sum with a negative coefficient are printed with `-` instead of
//! `+`.

use rug::{Integer, Rational};
use std::fmt;
use sym_parser::parser::Precedence;
use super::{Expr, Func};

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => fmt_constant(value, f),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Sum(terms) => {
                let mut iter = terms.iter();
                if let Some(term) = iter.next() {
                    write!(f, "{}", term)?;
                    for term in iter {
                        if term.split_coefficient().0 < 0 {
                            // a negated sum collapses to the bare sum, which needs parentheses
                            write!(f, " - ")?;
                            fmt_operand(&Expr::neg(term.clone()), Precedence::Factor, f)?;
                        } else {
                            write!(f, " + {}", term)?;
                        }
                    }
                }
                Ok(())
            },
            Self::Product(factors) => {
                let (coefficient, rest) = match factors.split_first() {
                    Some((Self::Constant(value), rest)) => (Some(value), rest),
                    _ => (None, &factors[..]),
                };

                match coefficient {
                    Some(value) if *value == -1 => write!(f, "-")?,
                    Some(value) => {
                        fmt_constant(value, f)?;
                        write!(f, " * ")?;
                    },
                    None => (),
                }

                let grouped = coefficient.is_some() && rest.len() > 1;
                if grouped {
                    write!(f, "(")?;
                }
                let mut iter = rest.iter();
                if let Some(factor) = iter.next() {
                    fmt_operand(factor, Precedence::Factor, f)?;
                    for factor in iter {
                        write!(f, " * ")?;
                        fmt_operand(factor, Precedence::Factor, f)?;
                    }
                }
                if grouped {
                    write!(f, ")")?;
                }
                Ok(())
            },
            Self::Power(base, exponent) => {
                fmt_atom(base, f)?;
                write!(f, "^")?;
                fmt_atom(exponent, f)
            },
            Self::Call(func, arg) => write!(f, "{}({})", func, arg),
        }
    }
}

impl Expr {
    /// Returns the precedence of the expression when it is printed, or [`None`] if it prints as a
    /// single, self-contained token or call.
    fn precedence(&self) -> Option<Precedence> {
        match self {
            Self::Constant(value) if *value < 0 => Some(Precedence::Neg),
            Self::Constant(value) if decimal_places(value.denom()).is_none() => {
                Some(Precedence::Factor)
            },
            Self::Constant(_) | Self::Variable(_) | Self::Call(..) => None,
            Self::Sum(_) => Some(Precedence::Term),
            Self::Product(factors) => match factors.first() {
                Some(Self::Constant(value)) if *value < 0 => Some(Precedence::Neg),
                _ => Some(Precedence::Factor),
            },
            Self::Power(..) => Some(Precedence::Exp),
        }
    }
}

/// Writes the expression, wrapping it in parentheses if it binds looser than `min`.
fn fmt_operand(expr: &Expr, min: Precedence, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match expr.precedence() {
        Some(precedence) if precedence < min => write!(f, "({})", expr),
        _ => write!(f, "{}", expr),
    }
}

/// Writes the expression, wrapping it in parentheses unless it prints as a single token or call.
fn fmt_atom(expr: &Expr, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match expr.precedence() {
        Some(_) => write!(f, "({})", expr),
        None => write!(f, "{}", expr),
    }
}

/// Returns the number of decimal places needed to print `1 / denom` exactly, or [`None`] if the
/// decimal expansion does not terminate.
fn decimal_places(denom: &Integer) -> Option<u32> {
    let mut rest = denom.clone();
    let (mut twos, mut fives) = (0, 0);
    while rest.is_even() {
        rest /= 2u32;
        twos += 1;
    }
    while rest.is_divisible_u(5) {
        rest /= 5u32;
        fives += 1;
    }

    (rest == 1).then(|| u32::max(twos, fives))
}

/// Writes a constant using the exact formatting policy described in the module documentation.
fn fmt_constant(value: &Rational, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if value.is_integer() {
        return write!(f, "{}", value.numer());
    }

    let Some(places) = decimal_places(value.denom()) else {
        return write!(f, "{}/{}", value.numer(), value.denom());
    };

    let scale = Integer::from(Integer::u_pow_u(10, places));
    let scaled = Integer::from(value.numer() * &scale) / value.denom();
    let digits = format!("{:0>width$}", scaled.abs().to_string(), width = places as usize + 1);
    let (whole, fraction) = digits.split_at(digits.len() - places as usize);
    let sign = if *value < 0 { "-" } else { "" };
    write!(f, "{}{}.{}", sign, whole, fraction)
}
