pub mod kind;

use ariadne::Report;
use std::{fmt, ops::Range};
use sym_error::ErrorKind;

/// An error that can occur while simplifying, differentiating, or integrating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The expression divides by zero.
    DivisionByZero(kind::DivisionByZero),

    /// The expression contains something that is not supported.
    UnsupportedOperation(kind::UnsupportedOperation),

    /// The integrator could not find an antiderivative.
    IntegrationFailed(kind::IntegrationFailed),
}

impl Error {
    /// Creates an [`Error::UnsupportedOperation`] with the given description.
    pub(crate) fn unsupported(description: impl Into<String>) -> Self {
        Self::UnsupportedOperation(kind::UnsupportedOperation {
            description: description.into(),
        })
    }

    /// Returns the kind of error, which knows how to build its own report.
    pub fn kind(&self) -> &dyn ErrorKind {
        match self {
            Self::DivisionByZero(kind) => kind,
            Self::UnsupportedOperation(kind) => kind,
            Self::IntegrationFailed(kind) => kind,
        }
    }

    /// Builds a report for this error, highlighting the given spans of the source code.
    ///
    /// Symbolic expressions do not keep track of where they came from, so the caller decides
    /// which part of the source to point at, usually the entire input expression.
    pub fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        self.kind().build_report(src_id, spans)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero(_) => write!(f, "division by zero"),
            Self::UnsupportedOperation(kind) => {
                write!(f, "unsupported operation: {}", kind.description)
            },
            Self::IntegrationFailed(kind) => write!(
                f,
                "could not integrate `{}` with respect to `{}`",
                kind.expr,
                kind.var,
            ),
        }
    }
}

impl std::error::Error for Error {}

impl From<kind::DivisionByZero> for Error {
    fn from(kind: kind::DivisionByZero) -> Self {
        Self::DivisionByZero(kind)
    }
}

impl From<kind::UnsupportedOperation> for Error {
    fn from(kind: kind::UnsupportedOperation) -> Self {
        Self::UnsupportedOperation(kind)
    }
}

impl From<kind::IntegrationFailed> for Error {
    fn from(kind: kind::IntegrationFailed) -> Self {
        Self::IntegrationFailed(kind)
    }
}

#[cfg(test)]
mod tests {
    use ariadne::Source;
    use super::*;

    #[test]
    fn report_points_at_given_span() {
        let error = Error::from(kind::IntegrationFailed {
            expr: "exp(x) * x".to_string(),
            var: "x".to_string(),
        });

        let mut buf = Vec::new();
        error.build_report("input", &[0..8])
            .write(("input", Source::from("x*exp(x)")), &mut buf)
            .unwrap();
        let out = String::from_utf8_lossy(&buf);

        assert!(out.contains("could not integrate expression"));
        assert!(out.contains("integration is heuristic"));
    }

    #[test]
    fn display() {
        assert_eq!(Error::unsupported("unknown function `tan`").to_string(), "unsupported operation: unknown function `tan`");
        assert_eq!(Error::from(kind::DivisionByZero).to_string(), "division by zero");
    }
}
