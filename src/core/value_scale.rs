use serde::{Deserialize, Serialize};

use crate::core::scale::validate_range_px;
use crate::core::types::StockPoint;
use crate::error::{ChartError, ChartResult};

/// The value-domain headroom above the series peak is one third of the pixel
/// span, so the area never touches the top edge of its plot.
const HEADROOM_DIVISOR: f64 = 3.0;

/// Tick count driving the nice-rounding step of the overview axis.
const NICE_TICK_COUNT: f64 = 10.0;

/// Value axis mapped to an inverted Y pixel axis.
///
/// The domain is `[0, max(close) + range_px / 3]` and maps onto
/// `[range_px, 0]`: value 0 sits on the plot baseline, larger values sit
/// higher. The pixel span is fixed at fit time because the headroom couples
/// the domain to it. A series negative enough to pull the upper bound below
/// zero still fits; the mapping is then a linear bijection over an inverted
/// domain, the same way a d3 scale treats `[0, negative]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    domain_max: f64,
    range_px: f64,
}

impl ValueScale {
    /// Fits the domain from a series with exact one-third headroom.
    pub fn from_series(points: &[StockPoint], range_px: f64) -> ChartResult<Self> {
        let domain_max = fitted_domain_max(points, range_px)?;
        Self::new(domain_max, range_px)
    }

    /// Fits like [`ValueScale::from_series`], then rounds the domain upper
    /// bound up to a 1-2-5 step boundary. Used by the overview axis.
    pub fn from_series_nice(points: &[StockPoint], range_px: f64) -> ChartResult<Self> {
        let domain_max = fitted_domain_max(points, range_px)?;
        Self::new(nice_domain_end(domain_max), range_px)
    }

    fn new(domain_max: f64, range_px: f64) -> ChartResult<Self> {
        if !domain_max.is_finite() || domain_max == 0.0 {
            return Err(ChartError::InvalidData(
                "value scale upper bound must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_max,
            range_px,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (0.0, self.domain_max)
    }

    #[must_use]
    pub fn range_px(self) -> f64 {
        self.range_px
    }

    pub fn value_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = value / self.domain_max;
        Ok(self.range_px * (1.0 - normalized))
    }

    pub fn pixel_to_value(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        Ok(self.domain_max * (1.0 - pixel / self.range_px))
    }
}

fn fitted_domain_max(points: &[StockPoint], range_px: f64) -> ChartResult<f64> {
    validate_range_px(range_px)?;

    if points.is_empty() {
        return Err(ChartError::EmptySeries);
    }

    let mut max_close = f64::NEG_INFINITY;
    for point in points {
        if !point.close.is_finite() {
            return Err(ChartError::InvalidData(
                "close values must be finite".to_owned(),
            ));
        }
        max_close = max_close.max(point.close);
    }

    Ok(max_close + range_px / HEADROOM_DIVISOR)
}

/// Rounds a positive domain end up to the next 1-2-5 step boundary.
/// Non-positive domain ends keep their fitted value.
fn nice_domain_end(domain_end: f64) -> f64 {
    if domain_end <= 0.0 {
        return domain_end;
    }

    let step = nice_step(domain_end / NICE_TICK_COUNT);
    (domain_end / step).ceil() * step
}

/// 1-2-5 scheme scaled by power of 10.
fn nice_step(raw: f64) -> f64 {
    let power = raw.abs().log10().floor();
    let base = 10f64.powf(power);
    let n = raw / base;
    let nice = if n <= 1.0 {
        1.0
    } else if n <= 2.0 {
        2.0
    } else if n <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}
