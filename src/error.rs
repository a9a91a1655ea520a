//! Error types for command scripts

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::command::lexer::Token;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Parse error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },
}

impl ParseError {
    /// Input the lexer could not turn into a token
    pub fn unrecognized(text: &str, span: Span) -> Self {
        let message = if text.starts_with('"') {
            "Unterminated string".to_string()
        } else {
            format!("Unrecognized input '{}'", text)
        };
        ParseError::Syntax {
            span,
            message,
            expected: Vec::new(),
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            ParseError::Syntax { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            ParseError::Syntax {
                span,
                message,
                expected,
            } => {
                let expected_str = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };

                let written = Report::build(ReportKind::Error, filename, span.start)
                    .with_message(message)
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(format!("{}{}", message, expected_str))
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf);
                if written.is_err() {
                    return self.to_string();
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl<'a> From<chumsky::error::Rich<'a, Token>> for ParseError {
    fn from(err: chumsky::error::Rich<'a, Token>) -> Self {
        use chumsky::error::RichReason;

        let message = match err.reason() {
            RichReason::ExpectedFound { found, .. } => {
                let found_str = match found {
                    Some(tok) => format_token(tok),
                    None => "end of input".to_string(),
                };
                format!("Unexpected {}", found_str)
            }
            RichReason::Custom(msg) => msg.to_string(),
        };

        // Word and String are reported together as "argument"
        let mut expected: Vec<String> = Vec::new();
        for pattern in err.expected() {
            let formatted = match pattern {
                chumsky::error::RichPattern::Token(tok) => format_expected(tok),
                chumsky::error::RichPattern::Label(label) => label.to_string(),
                chumsky::error::RichPattern::EndOfInput => "end of input".to_string(),
                chumsky::error::RichPattern::Identifier(s) => format!("identifier '{}'", s),
                chumsky::error::RichPattern::Any => "any token".to_string(),
                chumsky::error::RichPattern::SomethingElse => continue,
            };
            if !expected.contains(&formatted) {
                expected.push(formatted);
            }
        }

        ParseError::Syntax {
            span: err.span().into_range(),
            message,
            expected,
        }
    }
}

/// Format a token for human-readable error messages
fn format_token(tok: &Token) -> String {
    match tok {
        Token::Word(s) => format!("argument '{}'", s),
        Token::String(s) => format!("string \"{}\"", s),
        other => format_expected(other),
    }
}

fn format_expected(tok: &Token) -> String {
    match tok {
        Token::Reserve => "'reserve'".to_string(),
        Token::Vacate => "'vacate'".to_string(),
        Token::Status => "'status'".to_string(),
        Token::Spaces => "'spaces'".to_string(),
        Token::Vehicles => "'vehicles'".to_string(),
        Token::Help => "'help'".to_string(),
        Token::Quit => "'quit'".to_string(),
        Token::Semicolon => "';'".to_string(),
        Token::Word(_) | Token::String(_) => "argument".to_string(),
        Token::Comment => "comment".to_string(),
    }
}
