//! Lexing
//!
//!     Turns a raw phrase into the token sequence the field stages work on. Two steps:
//!
//!         1. Normalization, a string to string pass. See [normalize](normalize).
//!         2. Tokenization, splitting into words and resolving every word through the
//!            synonym table. See [tokens](tokens).
//!
//!     After lexing the sequence only holds canonical words (`minute`, `mon`, `jun`, `5`,
//!     `+01:00`, `-`), context markers, and blanks left by filler words.

pub mod normalize;
pub mod tokens;

pub use normalize::normalize;
pub use tokens::{tokenize, Marker, Token};

/// Normalize and tokenize a phrase in one go.
pub fn lex(phrase: &str) -> Vec<Token> {
    tokenize(&normalize(phrase))
}
