//! Core types and configuration for the timeguard workspace.
//!
//! This crate defines the data model shared by the parser and record layers:
//! temporal kinds, normalized temporal values, raw inputs, evaluation
//! outcomes, and the process-wide settings surface.

pub mod config;
pub mod constants;
pub mod error;
pub mod kind;
pub mod value;

pub use config::{Settings, load_config};
pub use error::{CoreError, CoreResult};
pub use kind::TemporalKind;
pub use value::{Evaluation, RawInput, TemporalValue};
