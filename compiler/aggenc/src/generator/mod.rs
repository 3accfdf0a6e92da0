//! Incremental generator: a registry of declarations over an `AggenDb`.
//!
//! The host upserts and removes declarations as sources change, then calls
//! [`Generator::run`]. Each run walks every declaration in key order through
//! the tracked queries, so unchanged declarations cost a cache lookup.
//!
//! Within a run, exactly one unit is produced per distinct `AggregateInfo`:
//! a second declaration with an equal model is skipped, and a distinct model
//! whose unit name is already taken is dropped with a warning. Across runs,
//! emission is cached per model value (see `query`), so re-keying a
//! declaration or adding one with an already-seen model emits nothing new.
//!
//! `remove` only forgets the key. The salsa input stays allocated and is
//! handed to the next newly added key, so the number of inputs is bounded by
//! the peak number of registered declarations.

use std::collections::BTreeMap;

use aggen_build::RawFacts;
use aggen_emit::GeneratedUnit;
use aggen_ir::AggregateInfo;
use rustc_hash::{FxHashMap, FxHashSet};
use salsa::Setter;

use crate::db::AggenDb;
use crate::input::Declaration;
use crate::profile::GeneratorProfile;
use crate::query::{aggregate_info, aggregate_model, generated_unit};

/// Counters for one [`Generator::run`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Declarations visited.
    pub declarations: usize,
    /// Declarations that did not build.
    pub excluded: usize,
    /// Declarations whose model equalled an earlier one.
    pub duplicates: usize,
    /// Distinct models dropped because their unit name was taken.
    pub collisions: usize,
    /// Units produced.
    pub emitted: usize,
}

/// Result of one run: units in declaration-key order.
#[derive(Clone, Debug, Default)]
pub struct GeneratorRun {
    pub units: Vec<GeneratedUnit>,
    pub stats: RunStats,
}

/// Declaration registry plus the incremental database.
pub struct Generator {
    db: AggenDb,
    declarations: BTreeMap<String, Declaration>,
    /// Inputs released by `remove`, reused before allocating new ones.
    free: Vec<Declaration>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GeneratorProfile::default())
    }
}

impl Generator {
    pub fn new(profile: GeneratorProfile) -> Self {
        Self {
            db: AggenDb::with_profile(profile),
            declarations: BTreeMap::new(),
            free: Vec::new(),
        }
    }

    /// The underlying database.
    pub fn db(&self) -> &AggenDb {
        &self.db
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Insert or replace a declaration's facts.
    ///
    /// Replacing with identical facts is a no-op and keeps every cached
    /// result valid.
    pub fn upsert(&mut self, key: impl Into<String>, facts: RawFacts) {
        let key = key.into();
        if let Some(&decl) = self.declarations.get(&key) {
            if decl.facts(&self.db) != &facts {
                tracing::debug!(%key, "declaration changed");
                decl.set_facts(&mut self.db).to(facts);
            }
            return;
        }
        tracing::debug!(%key, "declaration added");
        let decl = if let Some(decl) = self.free.pop() {
            decl.set_key(&mut self.db).to(key.clone());
            if decl.facts(&self.db) != &facts {
                decl.set_facts(&mut self.db).to(facts);
            }
            decl
        } else {
            Declaration::new(&self.db, key.clone(), facts)
        };
        self.declarations.insert(key, decl);
    }

    /// Forget a declaration. Returns `false` if it was not registered.
    pub fn remove(&mut self, key: &str) -> bool {
        let Some(decl) = self.declarations.remove(key) else {
            return false;
        };
        tracing::debug!(%key, "declaration removed");
        self.free.push(decl);
        true
    }

    /// Model of one registered declaration.
    pub fn model(&self, key: &str) -> Option<AggregateInfo> {
        let decl = *self.declarations.get(key)?;
        aggregate_info(&self.db, decl)
    }

    /// Produce the units for every registered declaration.
    #[tracing::instrument(level = "debug", skip_all, fields(declarations = self.declarations.len()))]
    pub fn run(&self) -> GeneratorRun {
        let mut run = GeneratorRun::default();
        let mut seen_models = FxHashSet::default();
        let mut claimed_names: FxHashMap<String, &str> = FxHashMap::default();

        for (key, &decl) in &self.declarations {
            run.stats.declarations += 1;

            let Some(model) = aggregate_model(&self.db, decl) else {
                run.stats.excluded += 1;
                continue;
            };
            if !seen_models.insert(model) {
                tracing::debug!(%key, "skipped: equal model already emitted");
                run.stats.duplicates += 1;
                continue;
            }
            let unit = generated_unit(&self.db, model);

            if let Some(owner) = claimed_names.get(&unit.unit_name) {
                tracing::warn!(
                    unit = %unit.unit_name,
                    %key,
                    first = %owner,
                    "unit name collision between distinct models; keeping the first"
                );
                run.stats.collisions += 1;
                continue;
            }

            claimed_names.insert(unit.unit_name.clone(), key.as_str());
            run.units.push(unit);
        }

        run.stats.emitted = run.units.len();
        tracing::debug!(stats = ?run.stats, "generator run finished");
        run
    }
}
