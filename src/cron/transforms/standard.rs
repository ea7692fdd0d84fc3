//! Standard transform definitions
//!
//! The compile pipeline, defined once as a static reference using
//! `once_cell::sync::Lazy`, plus a constructor for pipelines with non-default options.

use crate::cron::compiler::CompileOptions;
use crate::cron::schedule::Schedule;
use crate::cron::transforms::stages::{
    Assembly, CalendarExtraction, FrequencyExtraction, MarkerDisambiguation, NeverOverride,
    Normalization, ParityOverride, ResidualTimeAndDay, Tokenization,
};
use crate::cron::transforms::{Compilation, Transform};
use once_cell::sync::Lazy;

/// Type alias for the lexing transform
pub type LexingTransform = Transform<String, Compilation>;

/// Type alias for the full compile transform
pub type CompileTransform = Transform<String, Schedule>;

/// Lexing transform: String → Compilation
///
/// 1. Normalization
/// 2. Tokenization and synonym resolution
pub static LEXING: Lazy<LexingTransform> = Lazy::new(|| {
    Transform::from_fn(|phrase: String| phrase)
        .then(Normalization::new())
        .then(Tokenization::new())
});

/// Build the compile transform: String → Schedule
///
/// 1. Normalization
/// 2. Tokenization and synonym resolution
/// 3. Marker disambiguation
/// 4. Frequency ("every") extraction
/// 5. Calendar (weekday/month) extraction
/// 6. Odd/even override
/// 7. Never override
/// 8. Residual time/day parsing
/// 9. Assembly
pub fn compile_pipeline(options: &CompileOptions) -> CompileTransform {
    Transform::from_fn(|phrase: String| phrase)
        .then(Normalization::new())
        .then(Tokenization::new())
        .then(MarkerDisambiguation::new())
        .then(FrequencyExtraction::new())
        .then(CalendarExtraction::new())
        .then(ParityOverride::new())
        .then(NeverOverride::new())
        .then(ResidualTimeAndDay::with_offset(options.default_offset))
        .then(Assembly::new())
}

/// Compile transform with default options (offset-less times are UTC).
pub static COMPILE: Lazy<CompileTransform> =
    Lazy::new(|| compile_pipeline(&CompileOptions::default()));
