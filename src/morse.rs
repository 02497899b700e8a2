use crate::alphabet::{CodeTable, Symbol};
use MorseSymbol::{Dash, Dot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorseSymbol {
    Dot,
    Dash,
}

impl Symbol for MorseSymbol {}

/// Errors that can occur while converting between text and Morse symbols
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Unknown code symbol {found:?} at position {position}")]
    UnknownSymbol { position: usize, found: char },
    #[error("Letter {0:?} has no Morse code")]
    UnknownLetter(char),
}

impl MorseSymbol {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Dot),
            '-' => Some(Dash),
            _ => None,
        }
    }

    /// Parse a message written with `.` and `-` into symbols.
    pub fn parse_message(text: &str) -> Result<Vec<Self>, ParseError> {
        text.chars()
            .enumerate()
            .map(|(position, found)| {
                Self::from_char(found).ok_or(ParseError::UnknownSymbol { position, found })
            })
            .collect()
    }
}

/// International Morse code for the 26 Latin letters.
static CODES: [(char, &[MorseSymbol]); 26] = [
    ('A', &[Dot, Dash]),
    ('B', &[Dash, Dot, Dot, Dot]),
    ('C', &[Dash, Dot, Dash, Dot]),
    ('D', &[Dash, Dot, Dot]),
    ('E', &[Dot]),
    ('F', &[Dot, Dot, Dash, Dot]),
    ('G', &[Dash, Dash, Dot]),
    ('H', &[Dot, Dot, Dot, Dot]),
    ('I', &[Dot, Dot]),
    ('J', &[Dot, Dash, Dash, Dash]),
    ('K', &[Dash, Dot, Dash]),
    ('L', &[Dot, Dash, Dot, Dot]),
    ('M', &[Dash, Dash]),
    ('N', &[Dash, Dot]),
    ('O', &[Dash, Dash, Dash]),
    ('P', &[Dot, Dash, Dash, Dot]),
    ('Q', &[Dash, Dash, Dot, Dash]),
    ('R', &[Dot, Dash, Dot]),
    ('S', &[Dot, Dot, Dot]),
    ('T', &[Dash]),
    ('U', &[Dot, Dot, Dash]),
    ('V', &[Dot, Dot, Dot, Dash]),
    ('W', &[Dot, Dash, Dash]),
    ('X', &[Dash, Dot, Dot, Dash]),
    ('Y', &[Dash, Dot, Dash, Dash]),
    ('Z', &[Dash, Dash, Dot, Dot]),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct MorseTable;

impl MorseTable {
    pub fn new() -> Self {
        Self
    }

    /// Encode a word as the concatenation of its letters' codes.
    pub fn encode(&self, word: &str) -> Result<Vec<MorseSymbol>, ParseError> {
        let mut symbols = Vec::new();
        for letter in word.chars() {
            let code = self
                .code_for(letter)
                .ok_or(ParseError::UnknownLetter(letter))?;
            symbols.extend_from_slice(code);
        }
        Ok(symbols)
    }
}

impl CodeTable for MorseTable {
    type S = MorseSymbol;

    fn codes(&self) -> impl Iterator<Item = (&[MorseSymbol], char)> {
        CODES.iter().map(|&(letter, code)| (code, letter))
    }

    fn code_for(&self, letter: char) -> Option<&[MorseSymbol]> {
        let offset = (letter as u32).checked_sub('A' as u32)?;
        CODES.get(offset as usize).map(|&(_, code)| code)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::alphabet::LetterMatch;
    use std::collections::HashSet;

    #[test]
    fn table_is_a_bijection() {
        let table = MorseTable::new();
        let letters: HashSet<char> = table.codes().map(|(_, letter)| letter).collect();
        let codes: HashSet<&[MorseSymbol]> = table.codes().map(|(code, _)| code).collect();
        assert_eq!(letters.len(), 26);
        assert_eq!(codes.len(), 26);
        assert!(letters.iter().all(char::is_ascii_uppercase));
    }

    #[test]
    fn codes_are_short() {
        let table = MorseTable::new();
        assert!(table.codes().all(|(code, _)| (1..=4).contains(&code.len())));
    }

    #[test]
    fn code_for_matches_table_order() {
        let table = MorseTable::new();
        for (code, letter) in table.codes() {
            assert_eq!(table.code_for(letter), Some(code));
        }
        assert_eq!(table.code_for('a'), None);
        assert_eq!(table.code_for('0'), None);
    }

    #[test]
    fn parse_message() {
        assert_eq!(
            MorseSymbol::parse_message(".-."),
            Ok(vec![Dot, Dash, Dot])
        );
        assert_eq!(MorseSymbol::parse_message(""), Ok(vec![]));
    }

    #[test]
    fn parse_message_rejects_unknown_symbol() {
        assert_eq!(
            MorseSymbol::parse_message("..x-"),
            Err(ParseError::UnknownSymbol {
                position: 2,
                found: 'x'
            })
        );
    }

    #[test]
    fn encode_sos() {
        let table = MorseTable::new();
        let symbols = table.encode("SOS").unwrap();
        assert_eq!(symbols, MorseSymbol::parse_message("...---...").unwrap());
    }

    #[test]
    fn encode_rejects_unknown_letter() {
        assert_eq!(
            MorseTable::new().encode("HI!"),
            Err(ParseError::UnknownLetter('!'))
        );
    }

    #[test]
    fn several_letters_match_at_one_index() {
        // Morse codes are not prefix-free: `...` begins E, I and S.
        let message = MorseSymbol::parse_message("...").unwrap();
        let matches: Vec<LetterMatch> = MorseTable::new()
            .letters_matching_at(&message, 0)
            .collect();
        let letters: Vec<char> = matches.iter().map(|m| m.letter).collect();
        assert_eq!(letters, vec!['E', 'I', 'S']);
        assert_eq!(
            matches.iter().map(|m| m.consumed).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }
}
