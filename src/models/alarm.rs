use super::{schedule::Schedule, time_of_day::TimeOfDay};
use chrono::Local;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Label given to alarms created without one.
pub const DEFAULT_LABEL: &str = "New Alarm";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AlarmId(Uuid);

impl AlarmId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s.trim()).ok().map(Self)
    }

    /// First 8 hex digits, enough to address an alarm from the CLI.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for AlarmId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AlarmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// A persisted alarm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alarm {
    pub id: AlarmId,        // ⇔ alarms.id (TEXT, uuid)
    pub time: TimeOfDay,    // ⇔ alarms.hours / alarms.minutes
    pub label: String,      // ⇔ alarms.label
    pub active: bool,       // ⇔ alarms.active (0/1)
    pub schedule: Option<Schedule>, // ⇔ alarms.date | alarms.repeat_days
    pub created_at: String, // ⇔ alarms.created_at (ISO8601)
}

impl Alarm {
    /// Materialize a draft under a freshly generated id.
    pub fn from_draft(draft: AlarmDraft) -> Self {
        Self {
            id: AlarmId::new(),
            time: draft.time,
            label: draft.label,
            active: draft.active,
            schedule: draft.schedule,
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Replace every user-editable field, keeping id and creation time.
    pub fn apply(&mut self, draft: AlarmDraft) {
        self.time = draft.time;
        self.label = draft.label;
        self.active = draft.active;
        self.schedule = draft.schedule;
    }

    pub fn to_draft(&self) -> AlarmDraft {
        AlarmDraft {
            time: self.time,
            label: self.label.clone(),
            active: self.active,
            schedule: self.schedule.clone(),
        }
    }

    /// Ordering used by every listing: time of day, then creation.
    pub fn list_order(a: &Alarm, b: &Alarm) -> std::cmp::Ordering {
        a.time
            .cmp(&b.time)
            .then_with(|| a.created_at.cmp(&b.created_at))
    }
}

/// User-editable fields of an alarm, used for both add and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmDraft {
    pub time: TimeOfDay,
    pub label: String,
    pub active: bool,
    pub schedule: Option<Schedule>,
}

impl AlarmDraft {
    pub fn new(time: TimeOfDay) -> Self {
        Self {
            time,
            label: DEFAULT_LABEL.to_string(),
            active: true,
            schedule: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn with_schedule(mut self, schedule: Option<Schedule>) -> Self {
        self.schedule = schedule;
        self
    }
}
