//! Command parser: one raw script line in, exactly one typed `Command` out,
//! or a `ParseError` describing why the line was rejected.
//!
//! The grammar is deliberately strict: command names are case-sensitive,
//! the payload must be a single A–Z character immediately followed by the
//! end of the line, and any extra token invalidates the whole command.
use thiserror::Error;

use crate::types::{Command, Letter};

/// Why a line failed to parse. Externally every variant surfaces as the
/// same single diagnostic; the distinction exists for logging and for
/// embedders that want to react to specific shapes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command line")]
    EmptyLine,

    #[error("unknown command: {0:?}")]
    UnknownCommand(String),

    #[error("command {0:?} requires a letter payload")]
    MissingPayload(String),

    #[error("payload must be a single letter A-Z, got {0:?}")]
    MalformedPayload(String),

    #[error("command {0:?} takes no payload")]
    UnexpectedPayload(String),

    #[error("trailing tokens after payload")]
    TrailingTokens,
}

/// Parse one raw line into a command.
///
/// Trailing `\n`/`\r` are trimmed before name comparison, so the parser
/// accepts both `BufRead::lines` output and lines carrying their original
/// terminators.
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.is_empty() {
        return Err(ParseError::EmptyLine);
    }

    let mut tokens = line.split(' ');
    let name = tokens.next().unwrap_or_default();
    let payload = tokens.next();
    if tokens.next().is_some() {
        return Err(ParseError::TrailingTokens);
    }

    match payload {
        None => match name {
            "Head" => Ok(Command::Head),
            "Tail" => Ok(Command::Tail),
            "Length" => Ok(Command::Length),
            "PrintList" => Ok(Command::PrintList),
            "Push" | "Remove" => Err(ParseError::MissingPayload(name.to_string())),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        },
        Some(arg) => {
            // A malformed payload invalidates the whole command, even with
            // a well-formed name.
            let letter = parse_payload(arg)?;
            match name {
                "Push" => Ok(Command::Push(letter)),
                "Remove" => Ok(Command::Remove(letter)),
                other => Err(ParseError::UnexpectedPayload(other.to_string())),
            }
        }
    }
}

fn parse_payload(arg: &str) -> Result<Letter, ParseError> {
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            Letter::try_from(c).map_err(|_| ParseError::MalformedPayload(arg.to_string()))
        }
        _ => Err(ParseError::MalformedPayload(arg.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::try_from(c).unwrap()
    }

    #[test]
    fn parses_bare_query_commands() {
        assert_eq!(parse_line("Head"), Ok(Command::Head));
        assert_eq!(parse_line("Tail"), Ok(Command::Tail));
        assert_eq!(parse_line("Length"), Ok(Command::Length));
        assert_eq!(parse_line("PrintList"), Ok(Command::PrintList));
    }

    #[test]
    fn parses_push_and_remove_with_payload() {
        assert_eq!(parse_line("Push A"), Ok(Command::Push(letter('A'))));
        assert_eq!(parse_line("Remove Z"), Ok(Command::Remove(letter('Z'))));
    }

    #[test]
    fn tolerates_trailing_line_terminators() {
        assert_eq!(parse_line("Head\n"), Ok(Command::Head));
        assert_eq!(parse_line("PrintList\r\n"), Ok(Command::PrintList));
        assert_eq!(parse_line("Push A\n"), Ok(Command::Push(letter('A'))));
    }

    #[test]
    fn command_names_are_case_sensitive() {
        assert_eq!(
            parse_line("push A"),
            Err(ParseError::UnexpectedPayload("push".to_string()))
        );
        assert_eq!(
            parse_line("HEAD"),
            Err(ParseError::UnknownCommand("HEAD".to_string()))
        );
    }

    #[test]
    fn push_without_payload_is_rejected() {
        assert_eq!(
            parse_line("Push"),
            Err(ParseError::MissingPayload("Push".to_string()))
        );
        assert_eq!(
            parse_line("Remove"),
            Err(ParseError::MissingPayload("Remove".to_string()))
        );
    }

    #[test]
    fn payload_must_be_one_uppercase_letter() {
        assert_eq!(
            parse_line("Push 1"),
            Err(ParseError::MalformedPayload("1".to_string()))
        );
        assert_eq!(
            parse_line("Push AB"),
            Err(ParseError::MalformedPayload("AB".to_string()))
        );
        assert_eq!(
            parse_line("Push a"),
            Err(ParseError::MalformedPayload("a".to_string()))
        );
        // Neighbours of the A-Z range are out
        assert_eq!(
            parse_line("Push @"),
            Err(ParseError::MalformedPayload("@".to_string()))
        );
        assert_eq!(
            parse_line("Push ["),
            Err(ParseError::MalformedPayload("[".to_string()))
        );
    }

    #[test]
    fn query_command_with_payload_is_rejected() {
        assert_eq!(
            parse_line("Head A"),
            Err(ParseError::UnexpectedPayload("Head".to_string()))
        );
    }

    #[test]
    fn blank_and_overlong_lines_are_rejected() {
        assert_eq!(parse_line(""), Err(ParseError::EmptyLine));
        assert_eq!(parse_line("\n"), Err(ParseError::EmptyLine));
        assert_eq!(parse_line("Push A B"), Err(ParseError::TrailingTokens));
    }

    #[test]
    fn empty_payload_token_is_malformed() {
        // "Push " splits into a name and an empty second token
        assert_eq!(
            parse_line("Push "),
            Err(ParseError::MalformedPayload(String::new()))
        );
    }
}
