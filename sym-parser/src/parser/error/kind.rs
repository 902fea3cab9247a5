use ariadne::Fmt;
use sym_attrs::ErrorKind;
use sym_error::EXPR;
use crate::tokenizer::TokenKind;

/// How a token kind is named in error messages.
fn describe(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Whitespace => "whitespace",
        TokenKind::Add => "`+`",
        TokenKind::Sub => "`-`",
        TokenKind::Mul => "`*`",
        TokenKind::Div => "`/`",
        TokenKind::Exp => "`^`",
        TokenKind::Comma => "`,`",
        TokenKind::OpenParen => "`(`",
        TokenKind::CloseParen => "`)`",
        TokenKind::Name => "a name",
        TokenKind::Int => "a number",
        TokenKind::Float => "a decimal number",
        TokenKind::Symbol => "an unknown symbol",
    }
}

/// Joins the descriptions of the given kinds, as in "`+`, `-` or `*`".
fn describe_all(kinds: &[TokenKind]) -> String {
    match kinds.split_last() {
        None => String::new(),
        Some((last, [])) => describe(*last).to_string(),
        Some((last, rest)) => {
            let rest = rest.iter().map(|kind| describe(*kind)).collect::<Vec<_>>();
            format!("{} or {}", rest.join(", "), describe(*last))
        },
    }
}

/// The input ended in the middle of an expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the expression ends too early",
    labels = [format!("an {} is missing here", "operand".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// A complete expression was parsed, but input remains after it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "leftover input after the expression",
    labels = [format!("this is not part of the {}", "expression".fg(EXPR))],
    help = "implicit multiplication is not supported; write `2*x` instead of `2x`",
)]
pub struct ExpectedEof;

/// A token appeared where it cannot start or continue an expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("{} is not allowed here", describe(self.found)),
    labels = [format!("expected {}", describe_all(self.expected))],
)]
pub struct UnexpectedToken {
    /// The kinds that would have been accepted at this position.
    pub expected: &'static [TokenKind],

    pub found: TokenKind,
}

/// A parenthesis has no partner.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unbalanced parenthesis",
    labels = ["no matching parenthesis for this one"],
    help = if self.opening {
        "close it with `)` after the grouped expression"
    } else {
        "open it with `(` before the grouped expression, or remove it"
    },
)]
pub struct UnclosedParenthesis {
    /// True for an unclosed `(`, false for an unopened `)`.
    pub opening: bool,
}

/// `()` with nothing inside.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty parentheses",
    labels = ["put an expression between these"],
)]
pub struct EmptyParenthesis;

#[cfg(test)]
mod tests {
    use ariadne::Source;
    use pretty_assertions::assert_eq;
    use sym_error::Error;
    use super::*;

    #[test]
    fn descriptions() {
        assert_eq!(describe_all(&[TokenKind::Sub]), "`-`");
        assert_eq!(
            describe_all(&[TokenKind::Int, TokenKind::Name, TokenKind::OpenParen]),
            "a number, a name or `(`",
        );
    }

    #[test]
    fn report_names_found_token() {
        let error = Error::new(vec![2..3], UnexpectedToken {
            expected: &[TokenKind::Int, TokenKind::Name],
            found: TokenKind::Symbol,
        });

        let mut buf = Vec::new();
        error.build_report("input")
            .write(("input", Source::from("x $")), &mut buf)
            .unwrap();
        let out = String::from_utf8_lossy(&buf);
        assert!(out.contains("an unknown symbol is not allowed here"));
        assert!(out.contains("expected a number or a name"));
    }
}
