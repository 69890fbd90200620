//! Point cloud model for the Cumulo core runtime.
//!
//! A [`PointCloud`] is a named, ordered sequence of [`Point3`] values.
//! Insertion order is load-bearing: cluster labels are reported positionally,
//! one per point, in the order the points were supplied.

/// A single point in 3D Euclidean space. Immutable once constructed.
///
/// # Examples
/// ```
/// use cumulo_core::Point3;
///
/// let p = Point3::new(1.0, 2.0, 3.0);
/// assert_eq!(p.coords(), [1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point3 {
    /// Creates a point from its three coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the coordinates as an array in `[x, y, z]` order.
    #[must_use]
    pub const fn coords(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns whether every coordinate is finite (neither NaN nor infinite).
    ///
    /// # Examples
    /// ```
    /// use cumulo_core::Point3;
    ///
    /// assert!(Point3::new(0.0, 0.0, 0.0).is_finite());
    /// assert!(!Point3::new(f64::NAN, 0.0, 0.0).is_finite());
    /// ```
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// An ordered collection of points with a human-readable name.
///
/// The name identifies the cloud in diagnostics and log events; callers
/// typically derive it from the input file stem.
///
/// # Examples
/// ```
/// use cumulo_core::{Point3, PointCloud};
///
/// let cloud = PointCloud::new("demo", vec![Point3::new(0.0, 0.0, 0.0)]);
/// assert_eq!(cloud.name(), "demo");
/// assert_eq!(cloud.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    name: String,
    points: Vec<Point3>,
}

impl PointCloud {
    /// Creates a cloud from points in their final order.
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<Point3>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Returns the human-readable name of the cloud.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of points in the cloud.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the cloud contains no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }
}
