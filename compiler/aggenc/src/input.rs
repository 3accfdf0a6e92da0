//! Salsa Inputs - declarations handed over by the host.
//!
//! Inputs are the leaves of the query graph. Replacing a declaration's facts
//! invalidates its `aggregate_info`; whether emission re-runs depends on
//! whether the rebuilt model actually changed.

use aggen_build::RawFacts;

/// One aggregate declaration.
#[salsa::input]
pub struct Declaration {
    /// Stable identity chosen by the host (file path plus position, for
    /// example). Orders output deterministically.
    #[return_ref]
    pub key: String,

    /// Everything the host resolved about the declaration.
    #[return_ref]
    pub facts: RawFacts,
}
