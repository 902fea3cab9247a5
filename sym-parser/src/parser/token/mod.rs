pub mod op;

use crate::{
    parser::{error::{kind, Error}, Parser, Parse},
    tokenizer::TokenKind,
};
use std::ops::Range;

/// Consumes the next token, failing unless it has the given kind. Returns its text and span.
fn expect_kind(input: &mut Parser, expected: &'static [TokenKind]) -> Result<(String, Range<usize>), Error> {
    let token = input.next_token()?;
    if expected.contains(&token.kind) {
        Ok((token.lexeme.to_owned(), token.span))
    } else {
        Err(Error::new(vec![token.span], kind::UnexpectedToken {
            expected,
            found: token.kind,
        }))
    }
}

/// Declares a struct for each listed [`TokenKind`] that only parses from a token of that kind, so
/// that AST nodes can ask for punctuation and literals by type.
macro_rules! single_tokens {
    ($($name:ident)*) => {
        $(
            #[derive(Clone, Debug, PartialEq)]
            pub(crate) struct $name {
                pub(crate) text: String,
                pub(crate) span: Range<usize>,
            }

            impl Parse for $name {
                fn parse(input: &mut Parser) -> Result<Self, Error> {
                    let (text, span) = expect_kind(input, &[TokenKind::$name])?;
                    Ok(Self { text, span })
                }
            }
        )*
    };
}

single_tokens!(Comma OpenParen CloseParen Name Int Float);
