pub mod alarm;
pub mod schedule;
pub mod time_of_day;

pub use alarm::{Alarm, AlarmDraft, AlarmId, DEFAULT_LABEL};
pub use schedule::{RepeatDays, Schedule};
pub use time_of_day::{Meridiem, TimeOfDay};
