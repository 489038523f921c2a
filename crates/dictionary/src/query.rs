use std::fmt;
use std::str::FromStr;

use crate::DictionaryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Define,
    Etymology,
    Pronounce,
    Thesaurus,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::Define,
        Command::Etymology,
        Command::Pronounce,
        Command::Thesaurus,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Define => "define",
            Command::Etymology => "etymology",
            Command::Pronounce => "pronounce",
            Command::Thesaurus => "thesaurus",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command {0}")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// A command together with its already normalized word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    command: Command,
    word: String,
}

impl LookupRequest {
    pub fn new<S: AsRef<str>>(command: Command, tokens: &[S]) -> Result<Self, DictionaryError> {
        let word = normalize(tokens)?;
        Ok(Self { command, word })
    }

    pub fn command(&self) -> Command {
        self.command
    }

    pub fn word(&self) -> &str {
        &self.word
    }
}

/// Joins the word tokens with single spaces and trims the result.
pub fn normalize<S: AsRef<str>>(tokens: &[S]) -> Result<String, DictionaryError> {
    let word = tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ");
    let word = word.trim();
    if word.is_empty() {
        return Err(DictionaryError::EmptyWord);
    }
    Ok(word.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn empty_and_blank_tokens_are_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(normalize(&empty).unwrap_err().kind(), ErrorKind::EmptyWord);
        assert_eq!(normalize(&["", " ", "\t"]).unwrap_err().kind(), ErrorKind::EmptyWord);
    }

    #[test]
    fn tokens_are_joined_and_trimmed() {
        assert_eq!(normalize(&["hot", "dog"]).unwrap(), "hot dog");
        assert_eq!(normalize(&[" fish "]).unwrap(), "fish");
        assert_eq!(normalize(&["", "fish", ""]).unwrap(), "fish");
    }

    #[test]
    fn command_names_round_trip() {
        for command in Command::ALL {
            assert_eq!(command.name().parse::<Command>(), Ok(command));
        }
        let error = "definee".parse::<Command>().unwrap_err();
        assert_eq!(error, UnknownCommand("definee".into()));
        assert_eq!(error.to_string(), "unknown command definee");
    }

    #[test]
    fn lookup_request_keeps_the_normalized_word() {
        let request = LookupRequest::new(Command::Thesaurus, &["  big", "cat "]).unwrap();
        assert_eq!(request.command(), Command::Thesaurus);
        assert_eq!(request.word(), "big cat");
        assert!(LookupRequest::new(Command::Define, &["   "]).is_err());
    }
}
