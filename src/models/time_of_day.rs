use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// AM/PM selector shown next to the dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Meridiem of a 24-hour value.
    pub fn of(hours: u8) -> Self {
        if hours < 12 { Meridiem::Am } else { Meridiem::Pm }
    }

    /// Fold a 12-hour clock value into 24-hour form.
    ///
    /// PM adds 12 except at 12 o'clock, AM turns 12 into 0.
    pub fn fold(self, hour: u8) -> u8 {
        match self {
            Meridiem::Pm if hour != 12 => hour + 12,
            Meridiem::Am if hour == 12 => 0,
            _ => hour,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }

    pub fn from_suffix(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "AM" => Some(Meridiem::Am),
            "PM" => Some(Meridiem::Pm),
            _ => None,
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hour and minute of an alarm, always in 24-hour form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hours: u8,
    minutes: u8,
}

impl TimeOfDay {
    pub fn new(hours: u8, minutes: u8) -> AppResult<Self> {
        if hours > 23 || minutes > 59 {
            return Err(AppError::InvalidTime(format!("{hours}:{minutes:02}")));
        }
        Ok(Self { hours, minutes })
    }

    /// Current wall-clock hour and minute.
    pub fn now() -> Self {
        Self::from(Local::now().time())
    }

    /// Build from a 12-hour dial value (1-12) and its meridiem.
    pub fn from_12h(hour: u8, minutes: u8, meridiem: Meridiem) -> AppResult<Self> {
        if !(1..=12).contains(&hour) {
            return Err(AppError::InvalidTime(format!(
                "{hour}:{minutes:02} {meridiem}"
            )));
        }
        Self::new(meridiem.fold(hour), minutes)
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Hour as shown on a 12-hour clock face (1-12).
    pub fn hour12(&self) -> u8 {
        match self.hours % 12 {
            0 => 12,
            h => h,
        }
    }

    pub fn meridiem(&self) -> Meridiem {
        Meridiem::of(self.hours)
    }

    /// "h:MM AM" rendering.
    pub fn to_12h_string(&self) -> String {
        format!("{}:{:02} {}", self.hour12(), self.minutes, self.meridiem())
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hours.into(), self.minutes.into(), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        // chrono guarantees hour < 24 and minute < 60
        Self {
            hours: t.hour() as u8,
            minutes: t.minute() as u8,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}
