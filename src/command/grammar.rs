//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::command::ast::*;
use crate::command::lexer::{self, Token};
use crate::error::ParseError;

/// Parse a command script
pub fn parse(input: &str) -> Result<Script, Vec<ParseError>> {
    let len = input.len();

    let tokens = lexer::lex(input)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|span| vec![ParseError::unrecognized(&input[span.clone()], span)])?;

    let token_iter = tokens.into_iter().map(|(tok, span)| (tok, span.into()));

    // Turn the token iterator into a stream that chumsky can use
    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    script_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn script_parser<'a, I>() -> impl Parser<'a, I, Script, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    // Bare words and quoted strings are interchangeable as arguments
    let argument = select! {
        Token::Word(s) => s,
        Token::String(s) => s,
    }
    .labelled("argument")
    .map_with(|s, e| Spanned::new(s, span_range(&e.span())));

    let reserve = just(Token::Reserve)
        .ignore_then(argument.clone())
        .then(argument.clone())
        .then(argument.clone())
        .then(argument.clone())
        .map(|(((space, date), time_slot), vehicle)| {
            Command::Reserve(ReserveCommand {
                space,
                date,
                time_slot,
                vehicle,
            })
        });

    let vacate = just(Token::Vacate)
        .ignore_then(argument.clone())
        .map(|space| Command::Vacate { space });

    let command = choice((
        reserve,
        vacate,
        just(Token::Status).to(Command::Status),
        just(Token::Spaces).to(Command::Spaces),
        just(Token::Vehicles).to(Command::Vehicles),
        just(Token::Help).to(Command::Help),
        just(Token::Quit).to(Command::Quit),
    ))
    .map_with(|c, e| Spanned::new(c, span_range(&e.span())))
    .then_ignore(just(Token::Semicolon).or_not());

    command
        .repeated()
        .collect()
        .then_ignore(end())
        .map(|commands| Script { commands })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reserve() {
        let script = parse(r#"reserve "Space 1" 2024-01-01 10:00-11:00 Bus"#).expect("Should parse");
        assert_eq!(script.commands.len(), 1);
        match &script.commands[0].node {
            Command::Reserve(r) => {
                assert_eq!(r.space.node, "Space 1");
                assert_eq!(r.date.node, "2024-01-01");
                assert_eq!(r.time_slot.node, "10:00-11:00");
                assert_eq!(r.vehicle.node, "Bus");
                assert_eq!(r.space.span, 8..17);
            }
            other => panic!("Expected reserve, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_vacate_keeps_raw_text() {
        let script = parse(r#"vacate "  Space 4 ""#).expect("Should parse");
        match &script.commands[0].node {
            Command::Vacate { space } => assert_eq!(space.node, "  Space 4 "),
            other => panic!("Expected vacate, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty_string_argument() {
        let script = parse(r#"reserve "Space 1" "" 10:00 Car"#).expect("Should parse");
        match &script.commands[0].node {
            Command::Reserve(r) => assert_eq!(r.date.node, ""),
            other => panic!("Expected reserve, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_multiple_commands() {
        let script = parse(
            r#"
            # morning shift
            reserve "Space 2" 2024-01-01 09:00-10:00 Car
            status; spaces
            vehicles
            vacate "Space 2"
            help
            quit
        "#,
        )
        .expect("Should parse");
        assert_eq!(script.commands.len(), 7);
        assert!(matches!(script.commands[1].node, Command::Status));
        assert!(matches!(script.commands[6].node, Command::Quit));
    }

    #[test]
    fn test_parse_empty_script() {
        let script = parse("  # nothing here\n").expect("Should parse");
        assert!(script.commands.is_empty());
    }

    #[test]
    fn test_missing_argument_is_error() {
        let errors = parse(r#"reserve "Space 1" 2024-01-01 10:00"#).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("end of input"));
    }

    #[test]
    fn test_unknown_command_is_error() {
        let errors = parse("book Space1").unwrap_err();
        assert!(errors[0].to_string().contains("'book'"));
    }

    #[test]
    fn test_unterminated_string_is_error() {
        let errors = parse(r#"vacate "Space 1"#).unwrap_err();
        assert!(matches!(errors[0], ParseError::Syntax { .. }));
        assert_eq!(errors[0].span().start, 7);
    }
}
