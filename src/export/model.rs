// src/export/model.rs

use crate::core::add::normalize_label;
use crate::errors::{AppError, AppResult};
use crate::models::{Alarm, AlarmDraft, Schedule};
use crate::utils::date::parse_date;
use crate::utils::time::parse_time_string;
use serde::{Deserialize, Serialize};

/// Flat shape of an alarm in export / import files.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AlarmRow {
    #[serde(default)]
    pub id: String,
    pub time: String,
    #[serde(default)]
    pub label: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub days: Option<String>,
}

fn default_active() -> bool {
    true
}

impl From<&Alarm> for AlarmRow {
    fn from(a: &Alarm) -> Self {
        Self {
            id: a.id.to_string(),
            time: a.time.to_string(),
            label: a.label.clone(),
            active: a.active,
            date: a
                .schedule
                .as_ref()
                .and_then(Schedule::date)
                .map(|d| d.format("%Y-%m-%d").to_string()),
            days: a
                .schedule
                .as_ref()
                .and_then(Schedule::days)
                .map(str::to_string),
        }
    }
}

impl AlarmRow {
    /// Turn an imported row into a draft. Time strings are parsed leniently;
    /// blank `date` / `days` cells count as absent.
    pub fn to_draft(&self) -> AppResult<AlarmDraft> {
        let time = parse_time_string(&self.time)?;

        let date = match non_blank(self.date.as_deref()) {
            Some(d) => Some(parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?),
            None => None,
        };
        let schedule = Schedule::from_parts(date, non_blank(self.days.as_deref()))?;

        Ok(AlarmDraft::new(time)
            .with_label(normalize_label(&self.label))
            .with_active(self.active)
            .with_schedule(schedule))
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
