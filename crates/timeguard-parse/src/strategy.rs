//! Parsing strategy selection.
//!
//! The strategy is injected when the evaluator is constructed; there is no
//! process-wide mutable selection, so tests can substitute a plugin parser
//! without global state leakage.

use std::fmt;
use std::sync::Arc;

use timeguard_core::{TemporalKind, TemporalValue};

/// An externally supplied, swappable parsing routine used in place of the
/// built-in strict parser.
///
/// Implementations are invoked exactly once per string evaluation with the
/// raw text and the target kind, and return the normalized value, or `None`
/// when the text is unparseable. Whatever the implementation returns becomes
/// the evaluation outcome verbatim.
pub trait PluginParser: Send + Sync {
    fn parse(&self, raw: &str, kind: TemporalKind) -> Option<TemporalValue>;
}

/// The parsing strategy string inputs are dispatched to.
#[derive(Clone)]
pub enum Strategy {
    /// The built-in fixed-pattern parser.
    Strict,
    /// A delegated external parser.
    Plugin(Arc<dyn PluginParser>),
}

impl Strategy {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Plugin(_) => "plugin",
        }
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
