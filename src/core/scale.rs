use crate::core::types::Viewport;
use crate::error::{DashboardError, DashboardResult};

/// Linear mapping from dataset values to vertical pixel positions.
///
/// Pixel `0` is the top of the surface; larger values map closer to the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    min: f64,
    max: f64,
}

impl ValueScale {
    pub fn new(min: f64, max: f64) -> DashboardResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(DashboardError::InvalidData(
                "value scale domain must be finite with min < max".to_owned(),
            ));
        }
        if !(max - min).is_finite() {
            return Err(DashboardError::InvalidData(
                "value scale span overflows f64".to_owned(),
            ));
        }
        Ok(Self { min, max })
    }

    /// Fits a domain around `values`.
    ///
    /// With `begin_at_zero` the domain always contains `0`. A degenerate
    /// domain (all values equal) is widened by one unit on each side, except
    /// that a zero lower bound stays pinned when `begin_at_zero` is set.
    pub fn fit(values: &[f64], begin_at_zero: bool) -> DashboardResult<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &value in values {
            if !value.is_finite() {
                return Err(DashboardError::InvalidData(
                    "series values must be finite".to_owned(),
                ));
            }
            min = min.min(value);
            max = max.max(value);
        }

        if values.is_empty() {
            return Self::new(0.0, 1.0);
        }

        if begin_at_zero {
            min = min.min(0.0);
            max = max.max(0.0);
        }

        if min == max {
            if !(begin_at_zero && min == 0.0) {
                min -= 1.0;
            }
            max += 1.0;
        }

        Self::new(min, max)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Value the fill and bars grow from: zero when it is inside the domain,
    /// otherwise the domain edge nearest to zero.
    #[must_use]
    pub fn baseline(self) -> f64 {
        0.0_f64.clamp(self.min, self.max)
    }

    pub fn value_to_pixel(self, value: f64, viewport: Viewport) -> DashboardResult<f64> {
        if !viewport.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        if !value.is_finite() {
            return Err(DashboardError::InvalidData(
                "value must be finite".to_owned(),
            ));
        }

        let normalized = (value - self.min) / (self.max - self.min);
        let height = f64::from(viewport.height);
        Ok(height - normalized * height)
    }
}

/// Maps category indices to horizontal pixel positions.
///
/// With `offset` every category owns an equal band and is centered in it (bar
/// charts). Without it the first and last categories sit on the surface edges
/// (line charts).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryScale {
    count: usize,
    offset: bool,
}

impl CategoryScale {
    #[must_use]
    pub fn new(count: usize, offset: bool) -> Self {
        Self { count, offset }
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    pub fn band_width(self, viewport: Viewport) -> DashboardResult<f64> {
        if !viewport.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if self.count == 0 {
            return Ok(0.0);
        }
        Ok(f64::from(viewport.width) / self.count as f64)
    }

    pub fn index_to_pixel(self, index: usize, viewport: Viewport) -> DashboardResult<f64> {
        if index >= self.count {
            return Err(DashboardError::InvalidData(format!(
                "category index {index} out of range for {} categories",
                self.count
            )));
        }

        let width = f64::from(viewport.width);
        if self.offset {
            let band = self.band_width(viewport)?;
            return Ok((index as f64 + 0.5) * band);
        }

        self.band_width(viewport)?;
        if self.count == 1 {
            return Ok(width * 0.5);
        }
        Ok(index as f64 / (self.count - 1) as f64 * width)
    }
}
