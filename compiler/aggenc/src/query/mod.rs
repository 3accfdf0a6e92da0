//! Salsa Queries - models and emitted units, cached.
//!
//! ```text
//! Declaration (input) ──▶ aggregate_info ──▶ AggregateModel (interned) ──▶ generated_unit
//! ```
//!
//! # Emission Is Keyed By Value
//!
//! `generated_unit` takes an interned `AggregateModel`, not a declaration.
//! Structurally equal models intern to the same id, so a model is emitted at
//! most once per database: an edit that leaves the model equal, a second
//! declaration with an equal model, or a declaration moved to a new key all
//! hit the cached unit.
//!
//! Interned models are never freed; the store grows with the number of
//! distinct models seen.

use aggen_emit::GeneratedUnit;
use aggen_ir::AggregateInfo;

use crate::db::Db;
use crate::input::Declaration;

#[cfg(test)]
mod tests;

/// A structural model, interned by value.
#[salsa::interned]
pub struct AggregateModel<'db> {
    #[return_ref]
    pub info: AggregateInfo,
}

/// Build the structural model of a declaration.
///
/// `None` when the declaration cannot be modelled (see `aggen_build::build`).
#[salsa::tracked]
pub fn aggregate_info(db: &dyn Db, decl: Declaration) -> Option<AggregateInfo> {
    aggen_build::build(decl.facts(db), &db.profile().policy)
}

/// Interned model of a declaration.
pub fn aggregate_model(db: &dyn Db, decl: Declaration) -> Option<AggregateModel<'_>> {
    let info = aggregate_info(db, decl)?;
    Some(AggregateModel::new(db, info))
}

/// Emit the companion type of a model.
#[salsa::tracked]
pub fn generated_unit<'db>(db: &'db dyn Db, model: AggregateModel<'db>) -> GeneratedUnit {
    db.profile().emitter.emit(model.info(db))
}

/// Emit the companion type of a declaration, through the model cache.
pub fn declaration_unit(db: &dyn Db, decl: Declaration) -> Option<GeneratedUnit> {
    let model = aggregate_model(db, decl)?;
    Some(generated_unit(db, model))
}
