//! Token definitions and the word splitter
//!
//!     Normalized phrases only contain lowercase letters, digits, spaces, colons and plus
//!     signs, so the logos lexer has a single word rule and skips the spaces between words.
//!     Each word is then mapped through the [lexicon](crate::cron::lexicon) into a [Token].

use crate::cron::lexicon;
use logos::Logos;
use std::fmt;

/// Raw words as cut by logos, before synonym resolution.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum RawWord {
    #[regex(r"[a-z0-9:+]+", |lex| lex.slice().to_owned())]
    Word(String),
}

/// Whether the clause following a marker is a clock time or a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Time,
    Date,
}

/// One position in the token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Word(String),
    Marker(Marker),
    /// Filler word or a position already consumed by a stage. Kept in place so
    /// look-ahead pairs stay aligned; renders as the empty string.
    Blank,
}

impl Token {
    pub fn word(text: impl Into<String>) -> Self {
        Token::Word(text.into())
    }

    pub fn is_marker(&self) -> bool {
        matches!(self, Token::Marker(_))
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Token::Blank)
    }

    /// The word text, if this is a word.
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Token::Word(w) => Some(w),
            _ => None,
        }
    }

    /// True if this is exactly the word `text`.
    pub fn is(&self, text: &str) -> bool {
        self.as_word() == Some(text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(w) => f.write_str(w),
            Token::Marker(Marker::Time) => f.write_str("[TIME-CONTEXT]"),
            Token::Marker(Marker::Date) => f.write_str("[DATE-CONTEXT]"),
            Token::Blank => Ok(()),
        }
    }
}

/// Split normalized text into raw words, discarding empty fragments.
pub fn split_words(source: &str) -> Vec<String> {
    let mut lexer = RawWord::lexer(source);
    let mut words = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(RawWord::Word(word)) = result {
            words.push(word);
        }
    }

    words
}

/// Split normalized text and map every word through the synonym table.
pub fn tokenize(source: &str) -> Vec<Token> {
    split_words(source)
        .iter()
        .map(|word| lexicon::resolve(word))
        .collect()
}
