use ariadne::Source;
use std::io;
use sym_compute::symbolic;
use sym_parser::parser::error::Error as ParseError;

/// Utility enum to package errors that can occur while running a command.
#[derive(Debug)]
pub enum Error {
    /// The command was malformed.
    Usage(&'static str),

    /// Errors that occurred while parsing.
    ParseError(ParseError),

    /// An error that occurred while converting or operating on the expression.
    ComputeError(symbolic::Error),
}

impl Error {
    /// Report the error to stderr, highlighting it in the given source of the expression.
    ///
    /// Symbolic expressions do not keep track of spans, so errors from `sym_compute` highlight the
    /// entire expression.
    pub fn report_to_stderr(&self, input: &str) -> io::Result<()> {
        match self {
            Self::Usage(usage) => {
                eprintln!("usage: {}", usage);
                Ok(())
            },
            Self::ParseError(err) => {
                let report = err.build_report("input");
                report.eprint(("input", Source::from(input)))
            },
            Self::ComputeError(err) => {
                let report = err.build_report("input", &[0..input.len()]);
                report.eprint(("input", Source::from(input)))
            },
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::ParseError(err)
    }
}

impl From<symbolic::Error> for Error {
    fn from(err: symbolic::Error) -> Self {
        Self::ComputeError(err)
    }
}
