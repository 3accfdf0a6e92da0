//! Aggen Build - Model Builder
//!
//! Turns the raw declaration facts handed over by a host compiler into the
//! structural model of `aggen_ir`:
//! - `facts`: the host boundary types (serde-deserializable)
//! - `policy`: key markers, optional marker, key literal rendering
//! - `build`: the builder itself
//!
//! The builder performs no name resolution and reports no diagnostics.
//! Declarations it cannot model yield `None`.

mod builder;
pub mod facts;
pub mod policy;

pub use builder::build;
pub use facts::RawFacts;
pub use policy::{BuildPolicy, CSharpLiterals, KeyLiteralRenderer, KeyMarkers, ObliviousOptionality};
