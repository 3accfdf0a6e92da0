//! Salsa Database - the incremental core of the driver.
//!
//! Declarations are inputs; models and emitted units are tracked queries on
//! top of them. The active `GeneratorProfile` is fixed for the lifetime of a
//! database: it is configuration, not an input, so switching profiles means
//! starting a new database.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::profile::GeneratorProfile;

/// Main database trait that extends Salsa's Database.
///
/// All queries take `&dyn Db`.
#[salsa::db]
pub trait Db: salsa::Database {
    /// The profile every query builds and emits with.
    fn profile(&self) -> &GeneratorProfile;
}

/// Concrete database.
///
/// MUST implement Clone for Salsa to work; clones share the profile and the
/// event log.
#[salsa::db]
#[derive(Clone)]
pub struct AggenDb {
    /// Salsa's internal storage for all queries.
    storage: salsa::Storage<Self>,

    profile: Arc<GeneratorProfile>,

    /// Event logs for testing/debugging (optional).
    logs: Arc<Mutex<Option<Vec<String>>>>,
}

impl Default for AggenDb {
    fn default() -> Self {
        Self::with_profile(GeneratorProfile::default())
    }
}

impl AggenDb {
    /// Database using the default dependency-injection profile.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: GeneratorProfile) -> Self {
        Self {
            storage: salsa::Storage::default(),
            profile: Arc::new(profile),
            logs: Arc::default(),
        }
    }

    /// Start recording query executions.
    pub fn enable_logging(&self) {
        let mut logs = self.logs.lock();
        if logs.is_none() {
            *logs = Some(vec![]);
        }
    }

    /// Take the accumulated logs.
    pub fn take_logs(&self) -> Vec<String> {
        let mut logs = self.logs.lock();
        if let Some(logs) = &mut *logs {
            std::mem::take(logs)
        } else {
            vec![]
        }
    }
}

#[salsa::db]
impl Db for AggenDb {
    fn profile(&self) -> &GeneratorProfile {
        &self.profile
    }
}

/// Implement `salsa::Database` for `AggenDb`.
///
/// Only `salsa_event` needs a body: it records query executions when logging
/// is enabled.
#[salsa::db]
impl salsa::Database for AggenDb {
    fn salsa_event(&self, event: &dyn Fn() -> salsa::Event) {
        if let Some(logs) = &mut *self.logs.lock() {
            let event = event();
            // Only execution events: they show what was recomputed.
            if let salsa::EventKind::WillExecute { .. } = event.kind {
                logs.push(format!("{event:?}"));
            }
        }
    }
}
