//! Builder utilities for configuring density scans.
//!
//! Validates the neighbourhood radius and minimum population up front so a
//! constructed [`Detector`] always holds usable parameters.

use std::num::NonZeroUsize;

use crate::{Result, detector::Detector, error::CumuloError};

/// Configures and constructs [`Detector`] instances.
///
/// # Examples
/// ```
/// use cumulo_core::DetectorBuilder;
///
/// let detector = DetectorBuilder::new()
///     .with_radius(0.5)
///     .with_min_points(4)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(detector.radius(), 0.5);
/// assert_eq!(detector.min_points().get(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct DetectorBuilder {
    radius: f64,
    min_points: usize,
}

impl Default for DetectorBuilder {
    fn default() -> Self {
        Self {
            radius: 1.0,
            min_points: 1,
        }
    }
}

impl DetectorBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the neighbourhood radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Returns the configured neighbourhood radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Overrides the minimum neighbourhood population, counting the point
    /// itself.
    #[must_use]
    pub fn with_min_points(mut self, min_points: usize) -> Self {
        self.min_points = min_points;
        self
    }

    /// Returns the configured minimum neighbourhood population.
    #[must_use]
    pub fn min_points(&self) -> usize {
        self.min_points
    }

    /// Validates the configuration and constructs a [`Detector`].
    ///
    /// # Errors
    /// Returns [`CumuloError::InvalidRadius`] when the radius is NaN,
    /// infinite, zero, or negative, and [`CumuloError::InvalidMinPoints`]
    /// when the minimum population is zero.
    ///
    /// # Examples
    /// ```
    /// use cumulo_core::{CumuloError, DetectorBuilder};
    ///
    /// let err = DetectorBuilder::new().with_radius(-1.0).build();
    /// assert!(matches!(err, Err(CumuloError::InvalidRadius { .. })));
    /// ```
    pub fn build(self) -> Result<Detector> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(CumuloError::InvalidRadius { got: self.radius });
        }
        let min_points = NonZeroUsize::new(self.min_points)
            .ok_or(CumuloError::InvalidMinPoints {
                got: self.min_points,
            })?;

        Ok(Detector::new(self.radius, min_points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::zero(0.0)]
    #[case::negative(-2.5)]
    #[case::nan(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    fn build_rejects_unusable_radius(#[case] radius: f64) {
        let err = DetectorBuilder::new()
            .with_radius(radius)
            .build()
            .expect_err("radius must be rejected");
        assert!(matches!(err, CumuloError::InvalidRadius { .. }));
    }

    #[test]
    fn build_rejects_zero_min_points() {
        let err = DetectorBuilder::new()
            .with_min_points(0)
            .build()
            .expect_err("zero min_points must be rejected");
        assert_eq!(err, CumuloError::InvalidMinPoints { got: 0 });
    }

    #[test]
    fn build_accepts_valid_parameters() {
        let detector = DetectorBuilder::new()
            .with_radius(2.0)
            .with_min_points(3)
            .build()
            .expect("valid parameters must build");
        assert_eq!(detector.radius(), 2.0);
        assert_eq!(detector.min_points().get(), 3);
    }
}
