//! Shared types used across listrun.
//! Includes `Letter` (a validated A–Z payload), `Command` (one parsed
//! instruction), and `Output` (the printable result of a successful query).
use serde::{Deserialize, Serialize};

/// A single ASCII uppercase letter, the only payload the grammar accepts.
///
/// Construction is fallible; once built, the value is guaranteed in range,
/// so the list engine never re-validates.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct Letter(char);

impl Letter {
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = char;

    fn try_from(c: char) -> Result<Self, char> {
        if c.is_ascii_uppercase() {
            Ok(Letter(c))
        } else {
            Err(c)
        }
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One parsed instruction for the list engine.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Command {
    Push(Letter),
    Remove(Letter),
    Head,
    Tail,
    Length,
    PrintList,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Push(letter) => write!(f, "Push {}", letter),
            Command::Remove(letter) => write!(f, "Remove {}", letter),
            Command::Head => write!(f, "Head"),
            Command::Tail => write!(f, "Tail"),
            Command::Length => write!(f, "Length"),
            Command::PrintList => write!(f, "PrintList"),
        }
    }
}

/// The printable result of a successful query command.
///
/// `Push`/`Remove` produce no output; the interpreter models that as the
/// absence of an `Output`, not as a variant here.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Output {
    /// `Head`/`Tail`: the letter at the addressed end.
    Letter(Letter),
    /// `Length`: the current size, 0 included.
    Length(usize),
    /// `PrintList`: the hyphen-joined listing, `-` when the list is empty.
    Listing(String),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Letter(letter) => write!(f, "{}", letter),
            Output::Length(n) => write!(f, "{}", n),
            Output::Listing(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_accepts_only_ascii_uppercase() {
        assert!(Letter::try_from('A').is_ok());
        assert!(Letter::try_from('Z').is_ok());
        assert_eq!(Letter::try_from('@'), Err('@'));
        assert_eq!(Letter::try_from('['), Err('['));
        assert_eq!(Letter::try_from('a'), Err('a'));
        assert_eq!(Letter::try_from('1'), Err('1'));
    }

    #[test]
    fn output_display_matches_wire_format() {
        let a = Letter::try_from('A').unwrap();
        assert_eq!(Output::Letter(a).to_string(), "A");
        assert_eq!(Output::Length(0).to_string(), "0");
        assert_eq!(Output::Listing("B-A".to_string()).to_string(), "B-A");
    }
}
