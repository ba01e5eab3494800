use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error as ThisError;

use crate::token::{self, TokenizeError};

/// A parsed request line: the upper-cased verb followed by its parameters, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub params: Vec<String>,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut tokens = token::tokenize(line)?.into_iter();
        let name = tokens.next().ok_or(ParseError::Empty)?.to_uppercase();

        Ok(Self {
            name,
            params: tokens.collect(),
        })
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Command::parse(line)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            return write!(f, "{}", self.name);
        }
        write!(f, "{} {}", self.name, self.params.iter().format(" "))
    }
}

#[derive(Debug, ThisError, PartialEq)]
pub enum ParseError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    #[error("parse error; empty request line")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_is_upper_cased() {
        let command = Command::parse("show server").unwrap();

        assert_eq!(
            command,
            Command {
                name: String::from("SHOW"),
                params: vec![String::from("server")],
            }
        );
    }

    #[test]
    fn params_keep_their_case_and_order() {
        let command: Command = "define WN 'Hello World' x".parse().unwrap();

        assert_eq!(command.name, "DEFINE");
        assert_eq!(command.params, vec!["WN", "Hello World", "x"]);
    }

    #[test]
    fn no_params() {
        let command = Command::parse("quit").unwrap();

        assert_eq!(command.name, "QUIT");
        assert!(command.params.is_empty());
    }

    #[test]
    fn tokenize_error_is_propagated() {
        let err = Command::parse("DEFINE * \"it's\"").unwrap_err();

        assert_eq!(
            err,
            ParseError::Tokenize(TokenizeError::UnexpectedQuote {
                quote: '"',
                found: '\''
            })
        );
    }

    #[test]
    fn empty_line() {
        assert_eq!(Command::parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn display() {
        let command = Command::parse("client 'my client'").unwrap();
        assert_eq!(command.to_string(), "CLIENT my client");

        let command = Command::parse("help").unwrap();
        assert_eq!(command.to_string(), "HELP");
    }
}
