use crate::{
    parser::{
        ast::expr::Expr,
        error::{kind, Error},
        token::{CloseParen, OpenParen},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parenthesized expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Paren {
    /// The inner expression.
    pub expr: Box<Expr>,

    /// The region of the source code that this parenthesized expression was parsed from.
    pub span: Range<usize>,
}

impl Paren {
    /// Returns the span of the parenthesized expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Paren {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open_paren = input.try_parse::<OpenParen>()?;
        if let Some(token) = input.peek_token() {
            if token.kind == TokenKind::CloseParen {
                return Err(Error::new(
                    vec![open_paren.span.start..token.span.end],
                    kind::EmptyParenthesis,
                ));
            }
        }

        let expr = input.try_parse::<Expr>()?;
        let close_paren = close_paren_for(input, &open_paren)?;
        Ok(Self {
            expr: Box::new(expr),
            span: open_paren.span.start..close_paren.span.end,
        })
    }
}

/// Parses the closing parenthesis matching the given opening parenthesis. If the input ends
/// before it is found, the error points at the opening parenthesis.
pub(crate) fn close_paren_for(input: &mut Parser, open_paren: &OpenParen) -> Result<CloseParen, Error> {
    input.try_parse::<CloseParen>().map_err(|err| {
        if input.peek_token().is_none() {
            Error::new(vec![open_paren.span.clone()], kind::UnclosedParenthesis { opening: true })
        } else {
            err
        }
    })
}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.expr)
    }
}
