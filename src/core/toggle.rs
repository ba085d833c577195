use crate::errors::{AppError, AppResult};
use crate::models::{Alarm, AlarmId};
use crate::store::AlarmStore;

pub struct ToggleLogic;

impl ToggleLogic {
    /// Flip the active flag, or force it when `state` is given.
    /// The change is persisted immediately.
    pub fn apply<S: AlarmStore + ?Sized>(
        store: &mut S,
        id: &AlarmId,
        state: Option<bool>,
    ) -> AppResult<Alarm> {
        let current = store
            .get(id)?
            .ok_or_else(|| AppError::AlarmNotFound(id.to_string()))?;

        let active = state.unwrap_or(!current.active);
        if active == current.active {
            return Ok(current);
        }

        log::info!(
            "alarm {} switched {}",
            id,
            if active { "on" } else { "off" }
        );
        store.set_active(id, active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlarmDraft, TimeOfDay};
    use crate::store::InMemoryAlarmStore;

    #[test]
    fn flips_and_forces() {
        let mut store = InMemoryAlarmStore::new();
        let alarm = store
            .add(AlarmDraft::new(TimeOfDay::new(5, 0).unwrap()))
            .unwrap();

        assert!(!ToggleLogic::apply(&mut store, &alarm.id, None).unwrap().active);
        assert!(!store.list().unwrap()[0].active);

        assert!(ToggleLogic::apply(&mut store, &alarm.id, None).unwrap().active);

        assert!(ToggleLogic::apply(&mut store, &alarm.id, Some(true)).unwrap().active);
        assert!(!ToggleLogic::apply(&mut store, &alarm.id, Some(false)).unwrap().active);
    }
}
