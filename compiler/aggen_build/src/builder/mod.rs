//! Model builder: raw facts to `AggregateInfo`.
//!
//! Building never fails loudly. A declaration that cannot be modelled (an
//! error symbol mid-edit, a missing name, an attribute of the wrong type) is
//! simply excluded and the reason logged at `debug`.
//!
//! ```text
//! RawFacts ──┬── options::derive        (attribute named arguments)
//!            ├── containing::chain      (reverse to outermost-first)
//!            ├── constraints::*         (kind, types, new())
//!            └── dependencies::collect  (select, key, stable sort)
//!                        │
//!                        ▼
//!                  AggregateInfo
//! ```

mod constraints;
mod containing;
mod dependencies;
mod options;

use aggen_ir::AggregateInfo;

use crate::facts::{RawFacts, SymbolKind};
use crate::policy::BuildPolicy;

/// Build the structural model for one declaration.
///
/// Deterministic: equal facts under the same policy give equal models.
#[tracing::instrument(level = "debug", skip_all, fields(interface = %raw.interface_name))]
pub fn build(raw: &RawFacts, policy: &BuildPolicy) -> Option<AggregateInfo> {
    if raw.symbol != SymbolKind::NamedType {
        tracing::debug!(symbol = ?raw.symbol, "excluded: unresolved symbol");
        return None;
    }

    let interface_name = raw.interface_name.trim();
    if interface_name.is_empty() {
        tracing::debug!("excluded: empty interface name");
        return None;
    }

    if !policy.accepts_attribute(&raw.attribute.type_name) {
        tracing::debug!(
            attribute = %raw.attribute.type_name,
            "excluded: not the aggregate attribute"
        );
        return None;
    }

    let info = AggregateInfo {
        namespace: raw.namespace.clone(),
        interface_name: interface_name.to_string(),
        containing_types: containing::chain(&raw.containing_types).into(),
        type_parameters: constraints::type_parameters(&raw.type_parameters).into(),
        dependencies: dependencies::collect(&raw.properties, policy).into(),
        options: options::derive(&raw.attribute),
    };

    tracing::debug!(
        dependencies = info.dependencies.len(),
        containing = info.containing_types.len(),
        "built aggregate model"
    );
    Some(info)
}
