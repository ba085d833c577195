use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-text description of the days a recurring alarm rings on
/// (e.g. "Mon, Wed, Fri" or "Weekdays").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatDays(String);

impl RepeatDays {
    pub fn new(text: &str) -> AppResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidSchedule(
                "repeat days must not be empty".into(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// When an alarm rings: once on a date, or on recurring days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Schedule {
    OneShot(NaiveDate),
    Recurring(RepeatDays),
}

impl Schedule {
    /// Build from the optional `date` / `days` pair used by the CLI, the
    /// database and the import files. Both present is rejected.
    pub fn from_parts(date: Option<NaiveDate>, days: Option<&str>) -> AppResult<Option<Self>> {
        match (date, days) {
            (Some(_), Some(_)) => Err(AppError::InvalidSchedule(
                "an alarm is either one-shot (date) or recurring (days), not both".into(),
            )),
            (Some(d), None) => Ok(Some(Schedule::OneShot(d))),
            (None, Some(text)) => Ok(Some(Schedule::Recurring(RepeatDays::new(text)?))),
            (None, None) => Ok(None),
        }
    }

    /// Column values for `alarms.date` / `alarms.repeat_days`.
    pub fn to_columns(schedule: Option<&Schedule>) -> (Option<String>, Option<String>) {
        match schedule {
            Some(Schedule::OneShot(d)) => (Some(d.format("%Y-%m-%d").to_string()), None),
            Some(Schedule::Recurring(days)) => (None, Some(days.as_str().to_string())),
            None => (None, None),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Schedule::OneShot(d) => Some(*d),
            Schedule::Recurring(_) => None,
        }
    }

    pub fn days(&self) -> Option<&str> {
        match self {
            Schedule::OneShot(_) => None,
            Schedule::Recurring(days) => Some(days.as_str()),
        }
    }

    /// Caption shown under the alarm label in the list.
    pub fn describe(schedule: Option<&Schedule>) -> String {
        match schedule {
            Some(s) => s.to_string(),
            None => "No Days".to_string(),
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schedule::OneShot(d) => write!(f, "Date: {}", d.format("%b %-d, %Y")),
            Schedule::Recurring(days) => f.write_str(days.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn date_and_days_are_mutually_exclusive() {
        let err = Schedule::from_parts(Some(date("2026-10-20")), Some("Mon"));
        assert!(matches!(err, Err(AppError::InvalidSchedule(_))));
    }

    #[test]
    fn builds_each_variant() {
        assert_eq!(
            Schedule::from_parts(Some(date("2026-10-20")), None).unwrap(),
            Some(Schedule::OneShot(date("2026-10-20")))
        );
        let recurring = Schedule::from_parts(None, Some("  Mon, Wed ")).unwrap().unwrap();
        assert_eq!(recurring.days(), Some("Mon, Wed"));
        assert_eq!(Schedule::from_parts(None, None).unwrap(), None);
    }

    #[test]
    fn blank_days_are_rejected() {
        assert!(Schedule::from_parts(None, Some("   ")).is_err());
    }

    #[test]
    fn describes_like_the_list_cell() {
        let one_shot = Schedule::OneShot(date("2026-10-06"));
        assert_eq!(Schedule::describe(Some(&one_shot)), "Date: Oct 6, 2026");
        assert_eq!(Schedule::describe(None), "No Days");
    }

    #[test]
    fn column_round_trip_shape() {
        let one_shot = Schedule::OneShot(date("2026-10-06"));
        assert_eq!(
            Schedule::to_columns(Some(&one_shot)),
            (Some("2026-10-06".to_string()), None)
        );
        assert_eq!(Schedule::to_columns(None), (None, None));
    }
}
