use rug::{Integer, Rational};
use sym_parser::parser::{
    ast::{Expr as AstExpr, Literal},
    token::op::{BinOpKind, UnaryOpKind},
};
use crate::symbolic::error::Error;
use super::{Expr, Func};

/// Parses the digits of a decimal literal, such as `12`, `0.25`, or `3.`, into an exact rational.
fn rational_from_str(value: &str) -> Option<Rational> {
    let (whole, fraction) = value.split_once('.').unwrap_or((value, ""));
    let digits = format!("{}{}", whole, fraction);
    let numer = digits.parse::<Integer>().ok()?;
    let places = u32::try_from(fraction.len()).ok()?;
    let denom = Integer::from(Integer::u_pow_u(10, places));
    Some(Rational::from((numer, denom)))
}

impl TryFrom<AstExpr> for Expr {
    type Error = Error;

    /// Converts a parsed expression into a symbolic expression.
    ///
    /// Subtraction, division and negation are rewritten in terms of sums, products and powers.
    /// Fails with [`Error::UnsupportedOperation`] if the expression calls an unknown function, or
    /// calls a known function with the wrong number of arguments.
    fn try_from(expr: AstExpr) -> Result<Self, Self::Error> {
        match expr {
            AstExpr::Literal(literal) => match literal {
                Literal::Integer(int) => rational_from_str(&int.value)
                    .map(Self::Constant)
                    .ok_or_else(|| Error::unsupported(format!("invalid number `{}`", int.value))),
                Literal::Float(float) => rational_from_str(&float.value)
                    .map(Self::Constant)
                    .ok_or_else(|| Error::unsupported(format!("invalid number `{}`", float.value))),
                Literal::Symbol(sym) => Ok(Self::variable(&sym.name)),
            },
            AstExpr::Paren(paren) => Self::try_from(*paren.expr),
            AstExpr::Call(call) => {
                let func = Func::from_name(&call.name.name).ok_or_else(|| {
                    Error::unsupported(format!("unknown function `{}`", call.name.name))
                })?;
                let count = call.args.len();
                let [arg]: [AstExpr; 1] = call.args.try_into().map_err(|_| {
                    Error::unsupported(format!(
                        "`{}` takes 1 argument, but {} were given",
                        func,
                        count,
                    ))
                })?;
                Ok(Self::call(func, Self::try_from(arg)?))
            },
            AstExpr::Unary(unary) => match unary.op.kind {
                UnaryOpKind::Neg => Ok(Self::neg(Self::try_from(*unary.operand)?)),
            },
            AstExpr::Binary(bin) => {
                let lhs = Self::try_from(*bin.lhs)?;
                let rhs = Self::try_from(*bin.rhs)?;
                Ok(match bin.op.kind {
                    BinOpKind::Exp => Self::power(lhs, rhs),
                    BinOpKind::Mul => Self::product([lhs, rhs]),
                    BinOpKind::Div => Self::quotient(lhs, rhs),
                    BinOpKind::Add => Self::sum([lhs, rhs]),
                    BinOpKind::Sub => Self::difference(lhs, rhs),
                })
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sym_parser::parser::Parser;
    use super::*;

    fn convert(source: &str) -> Result<Expr, Error> {
        let ast = Parser::new(source).try_parse_full::<AstExpr>().unwrap();
        Expr::try_from(ast)
    }

    #[test]
    fn decimals_are_exact() {
        assert_eq!(convert("0.1").unwrap(), Expr::constant((1, 10)));
        assert_eq!(convert("2.").unwrap(), Expr::constant(2));
        assert_eq!(convert("1.25").unwrap().to_string(), "1.25");
    }

    #[test]
    fn operators_are_rewritten() {
        assert_eq!(convert("x - y").unwrap().to_string(), "x - y");
        assert_eq!(convert("x / y").unwrap().to_string(), "x * y^(-1)");
        assert_eq!(convert("-x").unwrap(), Expr::neg(Expr::variable("x")));
        assert_eq!(convert("((x))").unwrap(), Expr::variable("x"));
    }

    #[test]
    fn constructors_fold_during_conversion() {
        assert_eq!(convert("2 * 3 + 4").unwrap(), Expr::constant(10));
        assert_eq!(convert("x * 1 + 0").unwrap(), Expr::variable("x"));
        assert_eq!(convert("2^-2").unwrap(), Expr::constant((1, 4)));
    }

    #[test]
    fn calls() {
        assert_eq!(
            convert("sin(x)").unwrap(),
            Expr::call(Func::Sin, Expr::variable("x")),
        );
        assert!(matches!(convert("tan(x)"), Err(Error::UnsupportedOperation(_))));
        assert!(matches!(convert("sin(x, y)"), Err(Error::UnsupportedOperation(_))));
        assert!(matches!(convert("cos()"), Err(Error::UnsupportedOperation(_))));
    }
}
