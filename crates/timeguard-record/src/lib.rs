//! Host-side integration layer for temporal validation.
//!
//! A host record framework registers its temporal fields explicitly, keeps
//! per-record assignment state here (the typed value and the raw
//! before-type-cast slot), and asks for the validation faults when the
//! record's validity is checked. Persistence and error-message rendering
//! stay with the host.

pub mod record;
pub mod schema;
pub mod validate;

pub use record::{RecordError, TemporalRecord};
pub use schema::{FieldOptions, TemporalSchema};
pub use validate::{ValidationErrors, ValidationFault};
