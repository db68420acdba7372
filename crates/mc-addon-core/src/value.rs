//! Numeric helpers shared by the builders.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

/// Clamp `value` into `min..=max`.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamp a named field, warning when the input had to be adjusted.
pub fn clamp_field<T>(field: &str, value: T, min: T, max: T) -> T
where
    T: PartialOrd + Copy + Display,
{
    let clamped = clamp(value, min, max);
    if clamped != value {
        warn!("{field} = {value} is outside {min}..={max}, clamped to {clamped}");
    }
    clamped
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Inclusive range, written as `{ "min": .., "max": .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Range<T> {
    /// Build a range; reversed bounds are swapped.
    pub fn new(min: T, max: T) -> Self {
        if min > max {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    /// A range where both ends are the same value.
    pub fn fixed(value: T) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

impl<T: Into<Value> + Copy> Range<T> {
    /// `[min, max]` array form used by a few components.
    pub fn as_pair(&self) -> Value {
        Value::Array(vec![self.min.into(), self.max.into()])
    }
}

impl<T: Into<Value>> From<Range<T>> for Value {
    fn from(r: Range<T>) -> Self {
        let min: Value = r.min.into();
        let max: Value = r.max.into();
        json!({ "min": min, "max": max })
    }
}
