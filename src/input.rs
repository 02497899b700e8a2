use crate::morse::{MorseSymbol, ParseError};
use std::io::BufRead;

/// Errors that can occur while reading a puzzle
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("Missing message line")]
    MissingMessage,
    #[error("Invalid message: {0}")]
    Message(#[from] ParseError),
    #[error("Missing dictionary size line")]
    MissingWordCount,
    #[error("Invalid dictionary size {0:?}")]
    InvalidWordCount(String),
    #[error("Expected {expected} dictionary words, found {found}")]
    MissingWords { expected: usize, found: usize },
    #[error("Invalid dictionary word {0:?}")]
    InvalidWord(String),
}

/// An encoded message and the dictionary it should decode into.
#[derive(Debug, Clone, PartialEq)]
pub struct Puzzle {
    pub message: Vec<MorseSymbol>,
    pub words: Vec<String>,
}

impl Puzzle {
    /// Read a puzzle in line format: the message, the number of words `W`,
    /// then `W` words. Words are upper-cased; anything after the last word is
    /// ignored.
    pub fn parse<R: BufRead>(input: R) -> Result<Self, InputError> {
        let mut lines = input.lines();

        let message = lines.next().ok_or(InputError::MissingMessage)??;
        let message = MorseSymbol::parse_message(message.trim())?;

        let count = lines.next().ok_or(InputError::MissingWordCount)??;
        let count = count.trim();
        let expected: usize = count
            .parse()
            .map_err(|_| InputError::InvalidWordCount(count.to_string()))?;

        let mut words = Vec::new();
        for line in lines.take(expected) {
            let word = line?.trim().to_ascii_uppercase();
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(InputError::InvalidWord(word));
            }
            words.push(word);
        }
        if words.len() < expected {
            return Err(InputError::MissingWords {
                expected,
                found: words.len(),
            });
        }

        log::debug!(
            "read message of {} symbols and {} words",
            message.len(),
            words.len()
        );
        Ok(Puzzle { message, words })
    }
}
