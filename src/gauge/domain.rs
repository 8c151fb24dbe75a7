//! Value domain and the 270° needle sweep.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Needle angle for the domain minimum (lower-left), in degrees.
pub const SWEEP_START_DEG: f64 = 225.0;

/// Total clockwise sweep from minimum to maximum, in degrees.
pub const SWEEP_DEG: f64 = 270.0;

/// Needle angle for the domain maximum (lower-right), in degrees.
pub const SWEEP_END_DEG: f64 = SWEEP_START_DEG - SWEEP_DEG;

/// A `[min, max]` range of gauge readings.
///
/// `min` may exceed `max` for a reversed dial; only equal or non-finite
/// bounds are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDomain", into = "RawDomain")]
pub struct GaugeDomain {
    min: f64,
    max: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawDomain {
    min: f64,
    max: f64,
}

impl TryFrom<RawDomain> for GaugeDomain {
    type Error = Error;

    fn try_from(raw: RawDomain) -> Result<Self> {
        Self::new(raw.min, raw.max)
    }
}

impl From<GaugeDomain> for RawDomain {
    fn from(d: GaugeDomain) -> Self {
        Self { min: d.min, max: d.max }
    }
}

impl GaugeDomain {
    /// Create a domain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDomain`] if the bounds are equal or not finite.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min == max {
            return Err(Error::InvalidDomain { min, max });
        }
        Ok(Self { min, max })
    }

    /// Domain from bounds known to be valid at compile time.
    pub(crate) const fn fixed(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Lower bound (the value at 225°).
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound (the value at -45°).
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Position of `value` in the domain, clamped to `[0, 1]`.
    #[must_use]
    pub fn normalize(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Clamp `value` into the domain.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        self.min + self.normalize(value) * (self.max - self.min)
    }

    /// Whether `value` lies inside the domain (inclusive).
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        (lo..=hi).contains(&value)
    }

    /// Needle direction in degrees for `value`; never beyond the sweep.
    #[must_use]
    pub fn angle_for(&self, value: f64) -> f64 {
        SWEEP_START_DEG - self.normalize(value) * SWEEP_DEG
    }
}

/// Needle direction in degrees for `value` on `domain`.
///
/// `min` maps to 225°, `max` to -45°, sweeping clockwise over the top.
/// Out-of-domain values clamp to those ends.
#[must_use]
pub fn needle_angle(value: f64, domain: &GaugeDomain) -> f64 {
    domain.angle_for(value)
}
