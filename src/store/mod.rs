//! Alarm record store: CRUD over persisted alarms.

mod memory;
mod sqlite;

pub use memory::InMemoryAlarmStore;
pub use sqlite::SqliteAlarmStore;

use crate::errors::{AppError, AppResult};
use crate::models::{Alarm, AlarmDraft, AlarmId};

pub trait AlarmStore {
    /// Every alarm, ordered by time of day then creation.
    fn list(&self) -> AppResult<Vec<Alarm>>;

    fn get(&self, id: &AlarmId) -> AppResult<Option<Alarm>>;

    fn add(&mut self, draft: AlarmDraft) -> AppResult<Alarm>;

    /// Add several alarms; either all of them are stored or none.
    fn add_all(&mut self, drafts: Vec<AlarmDraft>) -> AppResult<Vec<Alarm>> {
        drafts.into_iter().map(|d| self.add(d)).collect()
    }

    /// Replace all editable fields of an existing alarm.
    fn update(&mut self, id: &AlarmId, draft: AlarmDraft) -> AppResult<Alarm>;

    fn delete(&mut self, id: &AlarmId) -> AppResult<()>;

    /// Remove every alarm, returning how many were removed.
    fn delete_all(&mut self) -> AppResult<usize>;

    /// Ids starting with `prefix` (hyphens ignored).
    fn ids_with_prefix(&self, prefix: &str) -> AppResult<Vec<AlarmId>>;

    fn set_active(&mut self, id: &AlarmId, active: bool) -> AppResult<Alarm> {
        let current = self
            .get(id)?
            .ok_or_else(|| AppError::AlarmNotFound(id.to_string()))?;
        self.update(id, current.to_draft().with_active(active))
    }
}

/// Normalized form of an id prefix used for matching.
pub(crate) fn normalize_prefix(prefix: &str) -> String {
    prefix.trim().replace('-', "").to_lowercase()
}
