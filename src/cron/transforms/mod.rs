//! Transform pipeline infrastructure
//!
//! Compilation is a fixed chain of stages. Each stage implements [`Runnable<I, O>`] and
//! stages are chained with [`Transform::then`], which only compiles when the output type
//! of one stage is the input type of the next:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(|s: String| s)
//!     .then(Normalization::new())      // String → String
//!     .then(Tokenization::new())       // String → Compilation
//!     .then(NeverOverride::new())      // Compilation → Compilation
//!     .then(Assembly::new());          // Compilation → Schedule
//! ```
//!
//! Unlike most pipelines, nothing here can fail: words a stage does not understand are
//! left in the token sequence for later stages, and whatever survives to the end is
//! reported as the unparsed remainder. Stages therefore return their output directly.
//!
//! # Module Organization
//!
//! - [`stages`]: the individual stages, in pipeline order
//! - [`standard`]: the pre-built compile pipeline
//!
//! # Working State
//!
//! Between tokenization and assembly the stages pass a [`Compilation`] along: the token
//! sequence plus the field accumulator. Stages narrow the tokens and write fields; a
//! later stage may overwrite a field an earlier one wrote.

pub mod stages;
pub mod standard;

use crate::cron::builder::ScheduleBuilder;
use crate::cron::lexing::Token;
use std::fmt;

/// Trait for anything that can transform an input to an output
///
/// Implemented by every pipeline stage. The [`Transform`] struct composes them.
pub trait Runnable<I, O> {
    /// Execute this transformation on the input
    fn run(&self, input: I) -> O;
}

/// A composable transformation pipeline
///
/// `Transform<I, O>` represents a transformation from `I` to `O` built out of stages.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> O + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> O + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Add a stage to this transform, returning a new transform with the stage's output
    /// type.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| stage.run(prev_run(input))),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> O {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> O {
        Transform::run(self, input)
    }
}

/// Working state threaded through the field stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compilation {
    pub tokens: Vec<Token>,
    pub(crate) fields: ScheduleBuilder,
}

impl Compilation {
    pub fn new(tokens: Vec<Token>) -> Self {
        Compilation {
            tokens,
            fields: ScheduleBuilder::new(),
        }
    }

    /// Index of the first token that is exactly `word`.
    pub fn find(&self, word: &str) -> Option<usize> {
        self.tokens.iter().position(|t| t.is(word))
    }

    pub fn contains(&self, token: &Token) -> bool {
        self.tokens.contains(token)
    }

    /// The words still in the sequence, in order, skipping markers and blanks.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(Token::as_word)
    }
}

impl fmt::Display for Compilation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.tokens.iter().map(|t| t.to_string()).collect();
        f.write_str(&rendered.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cron::lexing::Marker;

    use crate::cron::transforms::stages::{MarkerDisambiguation, Normalization, Tokenization};

    #[test]
    fn test_transform_from_fn() {
        let transform = Transform::from_fn(|phrase: String| phrase.len());
        assert_eq!(transform.run("daily".to_string()), 5);
    }

    #[test]
    fn test_stages_run_in_order() {
        let transform = Transform::from_fn(|phrase: String| phrase)
            .then(Normalization::new())
            .then(Tokenization::new())
            .then(MarkerDisambiguation::new());

        // "daily" expands to "every day"; the date marker is inserted ahead of it
        let result = transform.run("Daily at 02:00".to_string());
        assert_eq!(
            result.tokens,
            vec![
                Token::Marker(Marker::Date),
                Token::word("every"),
                Token::word("day"),
                Token::Marker(Marker::Time),
                Token::word("02:00"),
            ]
        );
        assert_eq!(result.fields, ScheduleBuilder::new());
    }

    #[test]
    fn test_transform_as_stage() {
        let lexing = Transform::from_fn(|phrase: String| phrase)
            .then(Normalization::new())
            .then(Tokenization::new());
        let transform = Transform::from_fn(|phrase: String| phrase)
            .then(lexing)
            .then(MarkerDisambiguation::new());

        let result = transform.run("Mondays at 5pm".to_string());
        assert_eq!(result.tokens[0], Token::Marker(Marker::Date));
        assert_eq!(result.find("mon"), Some(1));
        assert_eq!(result.find("5pm"), Some(3));
    }

    #[test]
    fn test_compilation_words_skip_markers_and_blanks() {
        let compilation = Compilation::new(vec![
            Token::Marker(Marker::Time),
            Token::word("5pm"),
            Token::Blank,
            Token::word("week"),
        ]);

        assert_eq!(compilation.words().collect::<Vec<_>>(), vec!["5pm", "week"]);
        assert_eq!(compilation.find("week"), Some(3));
        assert_eq!(compilation.to_string(), "[TIME-CONTEXT] 5pm  week");
    }
}
