//! Provide some tools for parsing token stream.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod record_def;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use record_def::{FieldDef, RecordDef};
