//! Individual transformation stages
//!
//! This module contains the stages composed into the compile pipeline, listed here in
//! the order they run. Each stage implements the `Runnable` trait.

pub mod assembly;
pub mod calendar;
pub mod frequency;
pub mod markers;
pub mod never;
pub mod normalization;
pub mod parity;
pub mod residual;
pub mod tokenization;

pub use assembly::Assembly;
pub use calendar::CalendarExtraction;
pub use frequency::FrequencyExtraction;
pub use markers::MarkerDisambiguation;
pub use never::NeverOverride;
pub use normalization::Normalization;
pub use parity::ParityOverride;
pub use residual::ResidualTimeAndDay;
pub use tokenization::Tokenization;
