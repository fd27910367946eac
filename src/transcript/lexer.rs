//! Lexer for line-oriented plain-text transcripts using logos

use logos::Logos;

use crate::error::Span;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    #[token("\n")]
    Newline,

    // Timestamps win over words of the same length; "3rd" still lexes as a word
    #[regex(r"-?[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok(), priority = 10)]
    Number(f64),

    #[regex(r"[^ \t\r\n\f]+", |lex| lex.slice().to_string(), priority = 1)]
    Word(String),
}

/// Lex input string into tokens with spans
///
/// Unrecognized input is yielded as `Err(span)` so the parser can report it.
pub fn lex(input: &str) -> impl Iterator<Item = Result<(Token, Span), Span>> + '_ {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| tok.map(|t| (t, span.clone())).map_err(|_| span))
}
