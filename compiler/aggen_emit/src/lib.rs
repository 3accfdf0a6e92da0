//! Aggen Emit - Code Emission
//!
//! Renders an `AggregateInfo` as a C# compilation unit:
//! - `ScopedWriter`: indentation and brace-scope bookkeeping
//! - `key_attribute`: how keyed parameters are annotated
//! - `CodeEmitter`: the emission steps
//! - `unit_name`: deterministic output file names

mod emitter;
pub mod key_attribute;
mod unit_name;
mod writer;

pub use emitter::{CodeEmitter, GeneratedUnit, DEFAULT_TOOL_NAME, DEFAULT_TOOL_VERSION};
pub use key_attribute::{FromKeyedServices, KeyAttribute, KeyAttributeSyntax};
pub use unit_name::{unit_name, UNIT_EXTENSION};
pub use writer::ScopedWriter;
