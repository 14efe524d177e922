//! Temporal value parsing and evaluation.
//!
//! This crate turns raw attribute inputs into normalized temporal values:
//! - a strict built-in parser for a fixed set of ISO-8601 textual patterns
//! - a pluggable external parser strategy, injected at construction
//! - timezone identifier resolution with alias and Windows-name mapping
//! - the [`Evaluator`], the single entry point hosts call per assignment

pub mod canonical;
pub mod evaluate;
pub mod strategy;
pub mod strict;
pub mod zone;

pub use canonical::canonical_string;
pub use evaluate::{Evaluator, EvaluatorError};
pub use strategy::{PluginParser, Strategy};
pub use zone::ZoneError;
