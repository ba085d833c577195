use std::collections::HashMap;

use super::{AlarmStore, normalize_prefix};
use crate::errors::{AppError, AppResult};
use crate::models::{Alarm, AlarmDraft, AlarmId};

/// Store that lives only as long as the value; used by tests and dry runs.
#[derive(Debug, Default)]
pub struct InMemoryAlarmStore {
    alarms: HashMap<AlarmId, Alarm>,
}

impl InMemoryAlarmStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AlarmStore for InMemoryAlarmStore {
    fn list(&self) -> AppResult<Vec<Alarm>> {
        let mut all: Vec<Alarm> = self.alarms.values().cloned().collect();
        all.sort_by(Alarm::list_order);
        Ok(all)
    }

    fn get(&self, id: &AlarmId) -> AppResult<Option<Alarm>> {
        Ok(self.alarms.get(id).cloned())
    }

    fn add(&mut self, draft: AlarmDraft) -> AppResult<Alarm> {
        let alarm = Alarm::from_draft(draft);
        self.alarms.insert(alarm.id, alarm.clone());
        log::debug!("stored alarm {} in memory", alarm.id);
        Ok(alarm)
    }

    fn update(&mut self, id: &AlarmId, draft: AlarmDraft) -> AppResult<Alarm> {
        let alarm = self
            .alarms
            .get_mut(id)
            .ok_or_else(|| AppError::AlarmNotFound(id.to_string()))?;
        alarm.apply(draft);
        Ok(alarm.clone())
    }

    fn delete(&mut self, id: &AlarmId) -> AppResult<()> {
        self.alarms
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::AlarmNotFound(id.to_string()))
    }

    fn delete_all(&mut self) -> AppResult<usize> {
        let removed = self.alarms.len();
        self.alarms.clear();
        Ok(removed)
    }

    fn ids_with_prefix(&self, prefix: &str) -> AppResult<Vec<AlarmId>> {
        let prefix = normalize_prefix(prefix);
        let mut ids: Vec<AlarmId> = self
            .alarms
            .keys()
            .filter(|id| id.to_string().replace('-', "").starts_with(&prefix))
            .copied()
            .collect();
        ids.sort_by_key(|id| id.to_string());
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::contract;

    #[test]
    fn add_then_list() {
        contract::add_then_list(&mut InMemoryAlarmStore::new());
    }

    #[test]
    fn add_all_stores_every_draft() {
        contract::add_all_stores_every_draft(&mut InMemoryAlarmStore::new());
    }

    #[test]
    fn update_replaces_fields() {
        contract::update_replaces_fields(&mut InMemoryAlarmStore::new());
    }

    #[test]
    fn unknown_ids_are_reported() {
        contract::unknown_ids_are_reported(&mut InMemoryAlarmStore::new());
    }

    #[test]
    fn toggle_is_visible_on_next_list() {
        contract::toggle_is_visible_on_next_list(&mut InMemoryAlarmStore::new());
    }

    #[test]
    fn delete_one_and_all() {
        contract::delete_one_and_all(&mut InMemoryAlarmStore::new());
    }

    #[test]
    fn prefix_lookup() {
        contract::prefix_lookup(&mut InMemoryAlarmStore::new());
    }
}
