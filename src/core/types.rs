use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Logical time unit used throughout the crate: unix seconds with
/// millisecond precision.
#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

fn decimal_close_to_f64(value: Decimal) -> ChartResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| ChartError::InvalidData("close cannot be represented as f64".to_owned()))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One close-price sample.
///
/// `x` is the sample time in unix seconds; `close` is the close price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockPoint {
    pub x: f64,
    pub close: f64,
}

impl StockPoint {
    #[must_use]
    pub fn new(x: f64, close: f64) -> Self {
        Self { x, close }
    }

    #[must_use]
    pub fn from_datetime_close(time: DateTime<Utc>, close: f64) -> Self {
        Self {
            x: datetime_to_unix_seconds(time),
            close,
        }
    }

    pub fn from_decimal_close(time: DateTime<Utc>, close: Decimal) -> ChartResult<Self> {
        Ok(Self {
            x: datetime_to_unix_seconds(time),
            close: decimal_close_to_f64(close)?,
        })
    }
}

/// Pixel insets around a plot region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Margin {
    #[must_use]
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        let sides = [self.top, self.bottom, self.left, self.right];
        if sides.iter().any(|side| !side.is_finite() || *side < 0.0) {
            return Err(ChartError::InvalidData(
                "margin insets must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Validates that a series is well formed for scale fitting and filtering:
/// finite coordinates and chronological (non-decreasing) sample times.
///
/// The series is never re-sorted; ordering is a load-time contract.
pub fn validate_series(points: &[StockPoint]) -> ChartResult<()> {
    let mut previous_x = f64::NEG_INFINITY;
    for point in points {
        if !point.x.is_finite() || !point.close.is_finite() {
            return Err(ChartError::InvalidData(
                "series samples must be finite".to_owned(),
            ));
        }
        if point.x < previous_x {
            return Err(ChartError::InvalidData(
                "series must be chronologically ordered".to_owned(),
            ));
        }
        previous_x = point.x;
    }
    Ok(())
}
