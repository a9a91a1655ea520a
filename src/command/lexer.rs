//! Lexer for the command language using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    // Command keywords
    #[token("reserve")]
    Reserve,
    #[token("vacate")]
    Vacate,
    #[token("status")]
    Status,
    #[token("spaces")]
    Spaces,
    #[token("vehicles")]
    Vehicles,
    #[token("help")]
    Help,
    #[token("quit")]
    #[token("exit")]
    Quit,

    // Optional separator between commands on one line
    #[token(";")]
    Semicolon,

    #[regex(r#""([^"\\]|\\.)*""#, |lex| unescape(lex.slice()))]
    String(String),

    // Bare argument: anything up to whitespace, a quote, `;` or `#`.
    // Keywords win over words of the same length.
    #[regex(r#"[^ \t\n\r";#]+"#, |lex| lex.slice().to_string(), priority = 1)]
    Word(String),

    #[regex(r"#[^\n]*", logos::skip)]
    Comment,
}

/// Strip the quotes from a string literal and resolve `\"` and `\\`
fn unescape(literal: &str) -> String {
    let inner = &literal[1..literal.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Lex input into tokens with spans
///
/// Input that matches no token (an unterminated string) is yielded as
/// `Err(span)`.
pub fn lex(input: &str) -> impl Iterator<Item = Result<(Token, Span), Span>> + '_ {
    Token::lexer(input).spanned().map(|(tok, span)| match tok {
        Ok(t) => Ok((t, span)),
        Err(_) => Err(span),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        lex(input).filter_map(Result::ok).map(|(t, _)| t).collect()
    }

    #[test]
    fn test_command_keywords() {
        assert_eq!(
            tokens("reserve vacate status spaces vehicles help quit exit"),
            vec![
                Token::Reserve,
                Token::Vacate,
                Token::Status,
                Token::Spaces,
                Token::Vehicles,
                Token::Help,
                Token::Quit,
                Token::Quit,
            ]
        );
    }

    #[test]
    fn test_words_and_strings() {
        assert_eq!(
            tokens(r#"reserve "Space 3" 2024-01-01 10:00-11:00 Two-Wheeler"#),
            vec![
                Token::Reserve,
                Token::String("Space 3".to_string()),
                Token::Word("2024-01-01".to_string()),
                Token::Word("10:00-11:00".to_string()),
                Token::Word("Two-Wheeler".to_string()),
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_a_word() {
        assert_eq!(tokens("reserved"), vec![Token::Word("reserved".to_string())]);
    }

    #[test]
    fn test_escaped_quotes() {
        assert_eq!(
            tokens(r#""say \"hi\"""#),
            vec![Token::String(r#"say "hi""#.to_string())]
        );
    }

    #[test]
    fn test_comments_and_separators() {
        assert_eq!(
            tokens("status # show everything\nspaces; vehicles"),
            vec![Token::Status, Token::Spaces, Token::Semicolon, Token::Vehicles]
        );
    }

    #[test]
    fn test_unterminated_string_is_an_error() {
        let errors: Vec<_> = lex(r#"vacate "Space 1"#).filter_map(Result::err).collect();
        assert!(!errors.is_empty());
    }
}
