//! Configuration loader
//!
//! `defaults/cronphrase.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Callers layer user files and flag overrides on top of
//! those defaults via [`Loader`] before deserializing into [`CronConfig`].

use crate::cron::error::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/cronphrase.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CronConfig {
    pub compile: CompileConfig,
    pub output: OutputConfig,
}

/// How phrases are read.
#[derive(Debug, Clone, Deserialize)]
pub struct CompileConfig {
    /// `±HH:MM` offset for clock times without a timezone.
    pub default_offset: String,
}

/// How results are reported by the command-line tool.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_unparsed: bool,
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Bare five-field expression
    Expression,
    Json,
    Yaml,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<CronConfig> {
        Ok(self.builder.build()?.try_deserialize()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CronConfig> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cron::error::CronError;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.compile.default_offset, "+00:00");
        assert_eq!(config.output.format, OutputFormat::Expression);
        assert!(config.output.show_unparsed);
        assert!(!config.output.strict);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "json")
            .expect("override to apply")
            .set_override("output.strict", true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.strict);
    }

    #[test]
    fn rejects_unknown_format() {
        let result = Loader::new()
            .set_override("output.format", "xml")
            .expect("override to apply")
            .build();
        assert!(matches!(result, Err(CronError::Config(_))));
    }

    #[test]
    fn layers_user_file() {
        let path =
            std::env::temp_dir().join(format!("cronphrase-config-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).expect("temp file");
        writeln!(file, "[compile]\ndefault_offset = \"+01:00\"").expect("write config");

        let config = Loader::new().with_file(&path).build().expect("config to build");
        std::fs::remove_file(&path).ok();

        assert_eq!(config.compile.default_offset, "+01:00");
        assert_eq!(config.output.format, OutputFormat::Expression);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/cronphrase.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.compile.default_offset, "+00:00");
    }
}
