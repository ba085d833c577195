//! Clock-dial geometry: pointer position ⇄ hour/minute value.
//!
//! Angles are in degrees, measured clockwise from 12 o'clock. Screen
//! coordinates grow rightwards and downwards, so `atan2(dy, dx)` already
//! turns clockwise; only the 90° offset from 3 o'clock needs correcting.

use crate::errors::AppError;
use serde::Serialize;
use std::str::FromStr;

/// Hours on the dial (12 positions, shown as 1-12).
pub const HOUR_UNITS: u8 = 12;
/// Minutes on the dial (60 positions, 0-59).
pub const MINUTE_UNITS: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DialPoint {
    pub x: f64,
    pub y: f64,
}

impl DialPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Parses `"X,Y"` as typed on the command line.
impl FromStr for DialPoint {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| AppError::InvalidPoint(s.to_string()))?;

        let coord = |v: &str| {
            v.trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| AppError::InvalidPoint(s.to_string()))
        };

        Ok(Self::new(coord(x)?, coord(y)?))
    }
}

/// Which part of the time the dial is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DialComponent {
    Hour,
    Minute,
}

impl DialComponent {
    pub fn unit_count(&self) -> u8 {
        match self {
            DialComponent::Hour => HOUR_UNITS,
            DialComponent::Minute => MINUTE_UNITS,
        }
    }

    pub fn degrees_per_unit(&self) -> f64 {
        360.0 / f64::from(self.unit_count())
    }
}

/// Angle of `pointer` around `center`, in `[0, 360)` with 0 at 12 o'clock.
pub fn dial_angle(center: DialPoint, pointer: DialPoint) -> f64 {
    let raw = (pointer.y - center.y).atan2(pointer.x - center.x).to_degrees();
    let normalized = if raw < 0.0 { raw + 360.0 } else { raw };
    (normalized + 90.0) % 360.0
}

/// Snap a dial angle to the nearest unit of `component`.
///
/// Hours come back as 1-12 (the top of the dial is 12, never 0), minutes as
/// 0-59. Halfway angles round away from zero.
pub fn value_for_angle(component: DialComponent, angle: f64) -> u8 {
    let units = u32::from(component.unit_count());
    // `as` saturates, so NaN lands on 0 and stays in range
    let snapped = (angle / component.degrees_per_unit()).round() as u32 % units;

    match component {
        DialComponent::Hour if snapped == 0 => HOUR_UNITS,
        _ => snapped as u8,
    }
}

/// Angle of the indicator hand for a value of `component`.
///
/// The hour hand accepts 24-hour values and folds them onto the face.
pub fn hand_angle(component: DialComponent, value: u8) -> f64 {
    let position = match component {
        DialComponent::Hour => value % HOUR_UNITS,
        DialComponent::Minute => value % MINUTE_UNITS,
    };
    f64::from(position) * component.degrees_per_unit()
}

/// A number drawn on the dial and where it sits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DialLabel {
    pub value: u8,
    pub text: String,
    pub position: DialPoint,
}

/// A circular dial of fixed size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dial {
    pub center: DialPoint,
    pub radius: f64,
}

impl Default for Dial {
    /// 300×300 surface with labels on a 120pt circle.
    fn default() -> Self {
        Self {
            center: DialPoint::new(150.0, 150.0),
            radius: 120.0,
        }
    }
}

impl Dial {
    pub fn new(center: DialPoint, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Value under `pointer` while editing `component`.
    pub fn value_at(&self, component: DialComponent, pointer: DialPoint) -> u8 {
        value_for_angle(component, dial_angle(self.center, pointer))
    }

    /// Point on the label circle for `value`.
    pub fn position_of(&self, component: DialComponent, value: u8) -> DialPoint {
        let degrees = f64::from(value) * component.degrees_per_unit() - 90.0;
        let radians = degrees.to_radians();
        DialPoint {
            x: self.radius * radians.cos() + self.center.x,
            y: self.radius * radians.sin() + self.center.y,
        }
    }

    /// Labels drawn around the face: 1…12 for hours, 00, 05 … 55 for minutes.
    pub fn labels(&self, component: DialComponent) -> Vec<DialLabel> {
        let values: Vec<u8> = match component {
            DialComponent::Hour => (1..=HOUR_UNITS).collect(),
            DialComponent::Minute => (0..MINUTE_UNITS).step_by(5).collect(),
        };

        values
            .into_iter()
            .map(|value| DialLabel {
                value,
                text: match component {
                    DialComponent::Hour => value.to_string(),
                    DialComponent::Minute => format!("{value:02}"),
                },
                position: self.position_of(component, value),
            })
            .collect()
    }
}
