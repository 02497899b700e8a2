pub trait Symbol: PartialEq + Copy {}

/// A letter decoded at some position of a message, together with the number
/// of code symbols its code occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterMatch {
    pub letter: char,
    pub consumed: usize,
}

pub trait CodeTable {
    type S: Symbol;

    /// An iterator over every (code, letter) entry in the table.
    ///
    /// Each code must be non-empty and each letter must appear at most once.
    fn codes(&self) -> impl Iterator<Item = (&[Self::S], char)>;

    /// Every letter whose code occurs in `message` starting exactly at
    /// `index`.
    ///
    /// Codes are checked independently of each other, so a table that is not
    /// prefix-free may yield several matches at the same index. An index at or
    /// past the end of the message yields nothing.
    fn letters_matching_at(
        &self,
        message: &[Self::S],
        index: usize,
    ) -> impl Iterator<Item = LetterMatch> {
        let rest = message.get(index..).unwrap_or_default();
        self.codes()
            .filter(move |(code, _)| !code.is_empty() && rest.starts_with(code))
            .map(|(code, letter)| LetterMatch {
                letter,
                consumed: code.len(),
            })
    }

    /// The code for `letter`, if the table has one.
    fn code_for(&self, letter: char) -> Option<&[Self::S]> {
        self.codes()
            .find(|&(_, l)| l == letter)
            .map(|(code, _)| code)
    }
}
