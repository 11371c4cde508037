use crate::error::{ChartError, ChartResult};

/// Linear mapping between a finite domain and a pixel span `[0, range_px]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, range_px: f64) -> ChartResult<f64> {
        validate_range_px(range_px)?;
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(normalized * range_px)
    }

    pub fn pixel_to_domain(self, pixel: f64, range_px: f64) -> ChartResult<f64> {
        validate_range_px(range_px)?;
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = pixel / range_px;
        Ok(self.domain_start + normalized * span)
    }
}

pub(crate) fn validate_range_px(range_px: f64) -> ChartResult<()> {
    if !range_px.is_finite() || range_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "pixel range must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
