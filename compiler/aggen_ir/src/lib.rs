//! Aggen IR - Structural Model Types
//!
//! This crate contains the core data structures of the aggregate generator:
//! - Naming utilities (identifier casing, `global::` stripping)
//! - `MemoSeq`, the equality-carrying sequence used by every model collection
//! - The structural model (`AggregateInfo` and its parts)
//!
//! # Salsa Compatibility
//!
//! Every model type has the required traits for Salsa:
//! - Clone: Required for Salsa storage
//! - Eq + `PartialEq`: Required for early cutoff
//! - Hash: Required for memoization keys
//! - Debug: Required for error messages
//!
//! Equality is purely structural. Two models built from different raw facts
//! compare equal whenever they would emit the same text, which is what lets
//! the orchestrator skip re-emission after irrelevant edits.

mod memo_seq;
mod model;
pub mod naming;

pub use memo_seq::{AsciiCaseInsensitive, ItemEq, MemoSeq, NaturalEq};
pub use model::{
    Accessibility, AggregateInfo, ContainingType, ContainingTypeKind, DependencyInfo,
    GeneratedTypeKind, GeneratedTypeLocation, GenerationOptions, TypeParameter,
};
