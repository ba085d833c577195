use crate::core::add::normalize_label;
use crate::errors::{AppError, AppResult};
use crate::models::{Alarm, AlarmId, Schedule, TimeOfDay};
use crate::store::AlarmStore;

/// Fields to change on an existing alarm; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct AlarmChanges {
    pub time: Option<TimeOfDay>,
    pub label: Option<String>,
    pub active: Option<bool>,
    /// `Some(None)` clears the schedule.
    pub schedule: Option<Option<Schedule>>,
}

impl AlarmChanges {
    pub fn is_empty(&self) -> bool {
        self.time.is_none()
            && self.label.is_none()
            && self.active.is_none()
            && self.schedule.is_none()
    }
}

pub struct EditLogic;

impl EditLogic {
    pub fn apply<S: AlarmStore + ?Sized>(
        store: &mut S,
        id: &AlarmId,
        changes: AlarmChanges,
    ) -> AppResult<Alarm> {
        let current = store
            .get(id)?
            .ok_or_else(|| AppError::AlarmNotFound(id.to_string()))?;

        if changes.is_empty() {
            return Ok(current);
        }

        let mut draft = current.to_draft();
        if let Some(time) = changes.time {
            draft.time = time;
        }
        if let Some(label) = changes.label {
            draft.label = normalize_label(&label);
        }
        if let Some(active) = changes.active {
            draft.active = active;
        }
        if let Some(schedule) = changes.schedule {
            draft.schedule = schedule;
        }

        store.update(id, draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AlarmDraft;
    use crate::store::InMemoryAlarmStore;
    use chrono::NaiveDate;

    fn seeded() -> (InMemoryAlarmStore, Alarm) {
        let mut store = InMemoryAlarmStore::new();
        let alarm = store
            .add(
                AlarmDraft::new(TimeOfDay::new(6, 45).unwrap())
                    .with_label("Run")
                    .with_schedule(Some(Schedule::OneShot(
                        NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
                    ))),
            )
            .unwrap();
        (store, alarm)
    }

    #[test]
    fn only_requested_fields_change() {
        let (mut store, alarm) = seeded();

        let edited = EditLogic::apply(
            &mut store,
            &alarm.id,
            AlarmChanges {
                time: Some(TimeOfDay::new(7, 0).unwrap()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(edited.time, TimeOfDay::new(7, 0).unwrap());
        assert_eq!(edited.label, "Run");
        assert_eq!(edited.schedule, alarm.schedule);
    }

    #[test]
    fn schedule_can_be_switched_or_cleared() {
        let (mut store, alarm) = seeded();

        let recurring = Schedule::from_parts(None, Some("Weekdays")).unwrap();
        let edited = EditLogic::apply(
            &mut store,
            &alarm.id,
            AlarmChanges {
                schedule: Some(recurring.clone()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(edited.schedule, recurring);

        let cleared = EditLogic::apply(
            &mut store,
            &alarm.id,
            AlarmChanges {
                schedule: Some(None),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(cleared.schedule.is_none());
    }

    #[test]
    fn missing_alarm_is_an_error() {
        let mut store = InMemoryAlarmStore::new();
        let res = EditLogic::apply(&mut store, &AlarmId::new(), AlarmChanges::default());
        assert!(matches!(res, Err(AppError::AlarmNotFound(_))));
    }
}
