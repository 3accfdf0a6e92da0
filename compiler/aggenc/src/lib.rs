//! Aggen Driver - Salsa-First Incremental Generation
//!
//! Hosts hand declarations over as `RawFacts`; every derived value is a
//! tracked query with Clone, Eq, Hash, Debug.
//!
//! # Architecture
//!
//! ```text
//! Declaration (input)
//!     │
//!     ▼
//! aggregate_info() ──► Option<AggregateInfo>
//!     │
//!     ▼
//! AggregateModel (interned by value)
//!     │
//!     ▼
//! generated_unit() ──► GeneratedUnit
//! ```
//!
//! `Generator` keeps a declaration registry over the database for hosts that
//! edit incrementally. `batch::generate_all` is the one-shot parallel path.

use std::sync::Once;

pub mod batch;
pub mod commands;
pub mod db;
pub mod generator;
pub mod input;
pub mod profile;
pub mod query;

pub use batch::generate_all;
pub use db::{AggenDb, Db};
pub use generator::{Generator, GeneratorRun, RunStats};
pub use input::Declaration;
pub use profile::{GeneratorProfile, DEPENDENCY_INJECTION_ATTRIBUTE};
pub use query::{aggregate_info, aggregate_model, declaration_unit, generated_unit, AggregateModel};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set. With `AGGEN_LOG_TREE` also set,
/// spans render as an indented tree instead of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let tree = std::env::var_os("AGGEN_LOG_TREE").is_some();

        let flat = (!tree).then(|| {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
        });
        let hierarchical = tree.then(|| {
            tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_writer(std::io::stderr)
        });

        tracing_subscriber::registry()
            .with(flat)
            .with(hierarchical)
            .with(filter)
            .init();
    });
}
