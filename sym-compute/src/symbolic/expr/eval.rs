use super::{Expr, Func};

impl Func {
    /// Evaluates the function at the given point.
    pub fn eval(self, x: f64) -> f64 {
        match self {
            Func::Sin => x.sin(),
            Func::Cos => x.cos(),
            Func::Exp => x.exp(),
            Func::Ln => x.ln(),
        }
    }
}

impl Expr {
    /// Evaluates the expression numerically, substituting each variable with its bound value.
    ///
    /// Returns [`None`] if the expression contains a variable that has no binding. Operations that
    /// are undefined for the given values (such as `ln(-1)`) produce `NaN` or an infinity, following
    /// the usual floating-point rules.
    pub fn eval(&self, bindings: &[(&str, f64)]) -> Option<f64> {
        match self {
            Self::Constant(value) => Some(value.to_f64()),
            Self::Variable(name) => bindings.iter()
                .find(|(var, _)| *var == &**name)
                .map(|(_, value)| *value),
            Self::Sum(terms) => terms.iter()
                .map(|term| term.eval(bindings))
                .sum(),
            Self::Product(factors) => factors.iter()
                .map(|factor| factor.eval(bindings))
                .product(),
            Self::Power(base, exponent) => {
                Some(base.eval(bindings)?.powf(exponent.eval(bindings)?))
            },
            Self::Call(func, arg) => Some(func.eval(arg.eval(bindings)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use super::*;

    #[test]
    fn polynomial() {
        let x = Expr::variable("x");
        let expr = Expr::sum([
            Expr::power(x.clone(), Expr::constant(2)),
            Expr::product([Expr::constant(2), x]),
            Expr::one(),
        ]);
        assert_float_absolute_eq!(expr.eval(&[("x", 3.0)]).unwrap(), 16.0);
    }

    #[test]
    fn functions() {
        let x = Expr::variable("x");
        let expr = Expr::call(Func::Ln, Expr::call(Func::Exp, x));
        assert_float_absolute_eq!(expr.eval(&[("x", 0.75)]).unwrap(), 0.75);
    }

    #[test]
    fn unbound_variable() {
        let expr = Expr::sum([Expr::variable("x"), Expr::variable("y")]);
        assert_eq!(expr.eval(&[("x", 1.0)]), None);
    }
}
