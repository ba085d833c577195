use crate::core::picker::TimePicker;
use crate::errors::AppResult;
use crate::models::{Alarm, AlarmDraft, DEFAULT_LABEL, Schedule, TimeOfDay};
use crate::store::AlarmStore;
use crate::utils::time::parse_time_string;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Store a new alarm from a time string such as "14:05" or "2:05 PM".
    pub fn apply<S: AlarmStore + ?Sized>(
        store: &mut S,
        time: &str,
        label: &str,
        active: bool,
        schedule: Option<Schedule>,
    ) -> AppResult<Alarm> {
        let time = parse_time_string(time)?;
        Self::store(store, time, label, active, schedule)
    }

    /// Store the time currently shown by a picker. This is where the dial's
    /// 12-hour value and AM/PM selector become a 24-hour time.
    pub fn from_picker<S: AlarmStore + ?Sized>(
        store: &mut S,
        picker: &TimePicker,
        label: &str,
        schedule: Option<Schedule>,
    ) -> AppResult<Alarm> {
        let time = picker.commit()?;
        Self::store(store, time, label, true, schedule)
    }

    fn store<S: AlarmStore + ?Sized>(
        store: &mut S,
        time: TimeOfDay,
        label: &str,
        active: bool,
        schedule: Option<Schedule>,
    ) -> AppResult<Alarm> {
        let draft = AlarmDraft::new(time)
            .with_label(normalize_label(label))
            .with_active(active)
            .with_schedule(schedule);

        store.add(draft)
    }
}

/// Blank labels fall back to the default one.
pub fn normalize_label(label: &str) -> String {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        DEFAULT_LABEL.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dial::{Dial, DialComponent, DialPoint};
    use crate::models::Meridiem;
    use crate::store::InMemoryAlarmStore;

    #[test]
    fn time_string_is_stored_as_24_hour() {
        let mut store = InMemoryAlarmStore::new();
        let alarm = AddLogic::apply(&mut store, "14:05", "Meeting", true, None).unwrap();

        let stored = store.get(&alarm.id).unwrap().unwrap();
        assert_eq!(stored.time.hours(), 14);
        assert_eq!(stored.time.minutes(), 5);
        assert_eq!(stored.label, "Meeting");
    }

    #[test]
    fn blank_label_becomes_default() {
        let mut store = InMemoryAlarmStore::new();
        let alarm = AddLogic::apply(&mut store, "7:00", "  ", false, None).unwrap();
        assert_eq!(alarm.label, DEFAULT_LABEL);
        assert!(!alarm.active);
    }

    #[test]
    fn picker_value_is_folded_on_commit() {
        let mut store = InMemoryAlarmStore::new();
        let mut picker = TimePicker::new(Dial::default(), TimeOfDay::new(8, 0).unwrap());
        picker.drag_ended(DialPoint::new(270.0, 150.0));
        picker.select(DialComponent::Minute);
        picker.drag_ended(DialPoint::new(150.0, 270.0));
        picker.set_meridiem(Meridiem::Pm);

        let alarm = AddLogic::from_picker(&mut store, &picker, "", None).unwrap();
        assert_eq!(alarm.time, TimeOfDay::new(15, 30).unwrap());
    }
}
