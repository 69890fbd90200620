//! Density scan orchestration for the Cumulo library.
//!
//! [`Detector`] wraps the `cogset` DBSCAN primitive: it converts a
//! [`PointCloud`] into Euclidean points, runs the scan, and folds the
//! discovered clusters back into a positionally aligned label vector.

use std::{num::NonZeroUsize, sync::Arc};

use cogset::{BruteScan, Dbscan, Euclid};
use tracing::{info, instrument, warn};

use crate::{
    Result,
    cloud::PointCloud,
    error::CumuloError,
    result::{ClusterId, ClusterLabel, ClusterLabels},
};

/// Entry point for running a density scan over a point cloud.
///
/// Two points are neighbours when their Euclidean distance is at most the
/// configured radius; a point is a core point when its neighbourhood,
/// counting the point itself, holds at least `min_points` points. Clusters
/// are the transitive closure of core neighbourhoods and everything else is
/// noise.
///
/// # Examples
/// ```
/// use cumulo_core::{DetectorBuilder, Point3, PointCloud};
///
/// let cloud = PointCloud::new("demo", vec![Point3::new(1.0, 2.0, 3.0)]);
/// let detector = DetectorBuilder::new()
///     .with_radius(10.0)
///     .with_min_points(1)
///     .build()
///     .expect("parameters are valid");
/// let labels = detector.run(&cloud).expect("run must succeed");
/// assert_eq!(labels.len(), 1);
/// assert_eq!(labels.labels()[0].as_i64(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Detector {
    radius: f64,
    min_points: NonZeroUsize,
}

impl Detector {
    pub(crate) fn new(radius: f64, min_points: NonZeroUsize) -> Self {
        Self { radius, min_points }
    }

    /// Returns the neighbourhood radius configured for this instance.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the minimum neighbourhood population, counting the point
    /// itself.
    #[must_use]
    pub fn min_points(&self) -> NonZeroUsize {
        self.min_points
    }

    /// Runs the density scan and returns one label per input point, in
    /// input order.
    ///
    /// An empty cloud yields an empty label vector. Cluster identifiers are
    /// assigned in discovery order starting at zero.
    ///
    /// # Errors
    /// Returns [`CumuloError::NonFiniteCoordinate`] when the cloud holds a
    /// NaN or infinite coordinate; the scan itself cannot fail.
    ///
    /// # Examples
    /// ```
    /// use cumulo_core::{ClusterLabel, DetectorBuilder, Point3, PointCloud};
    ///
    /// let cloud = PointCloud::new(
    ///     "pair",
    ///     vec![Point3::new(0.0, 0.0, 0.0), Point3::new(100.0, 0.0, 0.0)],
    /// );
    /// let detector = DetectorBuilder::new()
    ///     .with_radius(1.0)
    ///     .with_min_points(2)
    ///     .build()
    ///     .expect("parameters are valid");
    /// let labels = detector.run(&cloud).expect("run must succeed");
    /// assert!(labels.labels().iter().all(|label| label.is_noise()));
    /// ```
    #[instrument(
        name = "detector.run",
        err,
        skip(self, cloud),
        fields(
            cloud = %cloud.name(),
            points = cloud.len(),
            radius = self.radius,
            min_points = %self.min_points,
        ),
    )]
    pub fn run(&self, cloud: &PointCloud) -> Result<ClusterLabels> {
        self.ensure_finite(cloud)?;

        if cloud.is_empty() {
            warn!(cloud = cloud.name(), "point cloud is empty, emitting no labels");
            return Ok(ClusterLabels::empty());
        }

        let points: Vec<Euclid<[f64; 3]>> = cloud
            .points()
            .iter()
            .map(|point| Euclid(point.coords()))
            .collect();
        let scanner = BruteScan::new(&points);
        let mut dbscan = Dbscan::new(scanner, self.radius, self.min_points.get());

        let mut labels = vec![ClusterLabel::Noise; cloud.len()];
        for (index, cluster) in dbscan.by_ref().enumerate() {
            // There cannot be more clusters than points, so the identifier
            // space cannot overflow before memory does.
            let id = u32::try_from(index)
                .map(ClusterId::new)
                .expect("cluster index must fit in a u32");
            for member in cluster {
                labels[member] = ClusterLabel::Cluster(id);
            }
        }

        let labels = ClusterLabels::from_labels(labels);
        info!(
            clusters = labels.cluster_count(),
            noise = labels.noise_count(),
            "density scan completed"
        );
        Ok(labels)
    }

    fn ensure_finite(&self, cloud: &PointCloud) -> Result<()> {
        for (index, point) in cloud.points().iter().enumerate() {
            if !point.is_finite() {
                return Err(CumuloError::NonFiniteCoordinate {
                    cloud: Arc::from(cloud.name()),
                    index,
                });
            }
        }
        Ok(())
    }
}
