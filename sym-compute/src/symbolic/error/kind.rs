use ariadne::Fmt;
use sym_attrs::ErrorKind;
use sym_error::EXPR;

/// The expression divides by zero, such as `1/0` or `x/(x - x)`.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = "division by zero",
    labels = [format!("this {} divides by zero", "expression".fg(EXPR))],
)]
pub struct DivisionByZero;

/// The expression uses something the engine does not support.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = "unsupported operation",
    labels = [self.description.clone()],
    help = "supported functions are `sin`, `cos`, `exp`, and `ln`, each taking one argument",
)]
pub struct UnsupportedOperation {
    /// What was not supported.
    pub description: String,
}

/// None of the integration heuristics could find an antiderivative.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = "could not integrate expression",
    labels = [format!("no antiderivative found for `{}` with respect to `{}`", self.expr, self.var)],
    note = "integration is heuristic; some integrable expressions are not recognized",
)]
pub struct IntegrationFailed {
    /// The simplified integrand.
    pub expr: String,

    /// The variable of integration.
    pub var: String,
}
