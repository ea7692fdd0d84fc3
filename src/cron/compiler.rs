//! Public entry points
//!
//! [`compile`] runs the shared static pipeline and covers the common case. A [`Compiler`]
//! owns a pipeline built for specific [`CompileOptions`], e.g. a default offset taken
//! from configuration.

use crate::cron::clock::parse_offset;
use crate::cron::config::CronConfig;
use crate::cron::error::{CronError, Result};
use crate::cron::schedule::Schedule;
use crate::cron::transforms::standard::{compile_pipeline, CompileTransform, COMPILE};
use chrono::{FixedOffset, Offset, Utc};
use tracing::debug;

/// Knobs that change how a phrase is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// Offset assumed for clock times that carry none.
    pub default_offset: FixedOffset,
}

impl CompileOptions {
    /// Options with an offset given as `±HH:MM`.
    pub fn with_offset(offset: &str) -> Result<Self> {
        let default_offset =
            parse_offset(offset).ok_or_else(|| CronError::InvalidOffset(offset.to_string()))?;
        Ok(CompileOptions { default_offset })
    }

    pub fn from_config(config: &CronConfig) -> Result<Self> {
        Self::with_offset(&config.compile.default_offset)
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            default_offset: Utc.fix(),
        }
    }
}

/// Compile a phrase into a schedule. Never fails: anything not understood is reported
/// in [`Schedule::unparsed`].
pub fn compile(phrase: &str) -> Schedule {
    let schedule = COMPILE.run(phrase.to_string());
    debug!(phrase, expression = %schedule, "compiled");
    schedule
}

/// A compile pipeline bound to a set of options.
pub struct Compiler {
    options: CompileOptions,
    pipeline: CompileTransform,
}

impl Compiler {
    pub fn new(options: CompileOptions) -> Self {
        Compiler {
            options,
            pipeline: compile_pipeline(&options),
        }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn compile(&self, phrase: &str) -> Schedule {
        let schedule = self.pipeline.run(phrase.to_string());
        debug!(phrase, expression = %schedule, offset = %self.options.default_offset, "compiled");
        schedule
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(CompileOptions::default())
    }
}
