//! Phrase to cron compilation
//!
//!     A phrase is compiled by a fixed sequence of stages threading two pieces of state: the
//!     token sequence and the field accumulator. See [transforms](transforms) for the stages.
//!
//! The Pipeline
//!
//!     1. Normalization. See [normalize](lexing::normalize).
//!        Lowercases, strips punctuation, expands frequency words and holidays.
//!
//!     2. Tokenization and synonym resolution. See [tokens](lexing::tokens).
//!        Splits on whitespace and maps every word through the [lexicon](lexicon).
//!
//!     3. Marker disambiguation, then the field extractors (every, calendar, odd/even,
//!        never, residual time/day) in that order. Later stages may overwrite fields
//!        written by earlier ones.
//!
//!     4. Assembly. Unset fields default to `*` and leftover words become the unparsed
//!        remainder of the resulting [Schedule](schedule::Schedule).

pub(crate) mod builder;
pub mod clock;
pub mod compiler;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod lexing;
pub mod schedule;
pub mod transforms;

pub use compiler::{compile, CompileOptions, Compiler};
pub use schedule::Schedule;
