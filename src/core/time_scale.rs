use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::core::types::StockPoint;
use crate::error::{ChartError, ChartResult};

/// Minimal domain span substituted when a series collapses to one instant.
const MIN_TIME_SPAN_SECONDS: f64 = 1.0;

/// Time axis fitted to the extent of a series.
///
/// The domain is `[min x, max x]` over the fitted points and maps linearly
/// onto `[0, range_px]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    domain_start: f64,
    domain_end: f64,
}

impl TimeScale {
    pub fn new(time_start: f64, time_end: f64) -> ChartResult<Self> {
        let (domain_start, domain_end) =
            normalize_domain(time_start, time_end, MIN_TIME_SPAN_SECONDS)?;
        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Fits the domain from a series.
    ///
    /// An empty series has no extent; it is reported as `EmptySeries` rather
    /// than producing a degenerate mapping.
    pub fn from_series(points: &[StockPoint]) -> ChartResult<Self> {
        if points.is_empty() {
            return Err(ChartError::EmptySeries);
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in points {
            if !point.x.is_finite() {
                return Err(ChartError::InvalidData(
                    "time values must be finite".to_owned(),
                ));
            }
            min = min.min(point.x);
            max = max.max(point.x);
        }

        Self::new(min, max)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn time_to_pixel(self, time: f64, range_px: f64) -> ChartResult<f64> {
        self.linear()?.domain_to_pixel(time, range_px)
    }

    pub fn pixel_to_time(self, pixel: f64, range_px: f64) -> ChartResult<f64> {
        self.linear()?.pixel_to_domain(pixel, range_px)
    }

    fn linear(self) -> ChartResult<LinearScale> {
        LinearScale::new(self.domain_start, self.domain_end)
    }
}

fn normalize_domain(start: f64, end: f64, min_span: f64) -> ChartResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(ChartError::InvalidData(
            "scale domain must be finite".to_owned(),
        ));
    }

    if start == end {
        let half = min_span / 2.0;
        return Ok((start - half, end + half));
    }

    Ok((start.min(end), start.max(end)))
}
