//! Result types for density scans.
//!
//! Provides the per-point label vector produced by a scan together with
//! validation of the cluster identifier invariant: identifiers are contiguous
//! starting at zero, with noise points carrying no identifier at all.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

/// Identifier assigned to a cluster.
///
/// # Examples
/// ```
/// use cumulo_core::ClusterId;
///
/// let id = ClusterId::new(4);
/// assert_eq!(id.get(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterId(u32);

impl ClusterId {
    /// Creates a new cluster identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying numeric identifier.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Label assigned to a single point by the density scan.
///
/// Serialises as `-1` for noise and as the cluster identifier otherwise,
/// matching the DBSCAN convention.
///
/// # Examples
/// ```
/// use cumulo_core::{ClusterId, ClusterLabel};
///
/// assert_eq!(ClusterLabel::Noise.as_i64(), -1);
/// assert_eq!(ClusterLabel::Cluster(ClusterId::new(3)).to_string(), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClusterLabel {
    /// The point is density-reachable from no core point.
    Noise,
    /// The point belongs to the identified cluster.
    Cluster(ClusterId),
}

impl ClusterLabel {
    /// Returns the conventional integer encoding of the label.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        match self {
            Self::Noise => -1,
            Self::Cluster(id) => id.get() as i64,
        }
    }

    /// Returns whether the label marks a noise point.
    #[must_use]
    pub const fn is_noise(self) -> bool {
        matches!(self, Self::Noise)
    }
}

impl fmt::Display for ClusterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

/// Error returned when cluster identifiers are not contiguous starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedLabels {
    /// Clustered labels exist but none carries identifier `0`.
    #[error("cluster identifiers must include 0")]
    MissingZero,
    /// The identifiers skip values between 0 and the maximum.
    #[error("cluster identifiers must be contiguous without gaps")]
    Gap,
}

/// Per-point labels produced by [`Detector::run`](crate::Detector::run).
///
/// Labels are positionally aligned with the scanned
/// [`PointCloud`](crate::PointCloud): the label at index `i` belongs to
/// point `i`.
///
/// # Examples
/// ```
/// use cumulo_core::{ClusterId, ClusterLabel, ClusterLabels};
///
/// let labels = ClusterLabels::from_labels(vec![
///     ClusterLabel::Cluster(ClusterId::new(0)),
///     ClusterLabel::Noise,
/// ]);
/// assert_eq!(labels.len(), 2);
/// assert_eq!(labels.cluster_count(), 1);
/// assert_eq!(labels.noise_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterLabels {
    labels: Vec<ClusterLabel>,
    cluster_count: usize,
    noise_count: usize,
}

impl ClusterLabels {
    /// Returns an empty label vector, as produced for an empty cloud.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            labels: Vec::new(),
            cluster_count: 0,
            noise_count: 0,
        }
    }

    /// Builds a label vector from explicit per-point labels.
    ///
    /// Cluster identifiers must start at zero and be contiguous. Use
    /// [`Self::try_from_labels`] to handle arbitrary identifiers.
    ///
    /// # Panics
    /// Panics when the contiguity invariant is violated.
    #[must_use]
    pub fn from_labels(labels: Vec<ClusterLabel>) -> Self {
        match Self::try_from_labels(labels) {
            Ok(result) => result,
            Err(err) => panic!("cluster identifiers must start at zero and be contiguous: {err}"),
        }
    }

    /// Attempts to build a label vector from per-point labels.
    ///
    /// Noise labels are always accepted; the identifiers carried by the
    /// remaining labels must form the contiguous range `0..cluster_count`.
    /// An empty vector is accepted and yields zero clusters.
    ///
    /// # Errors
    /// Returns [`MalformedLabels::MissingZero`] when clustered labels exist
    /// but identifier `0` is absent, and [`MalformedLabels::Gap`] when
    /// identifiers skip values.
    ///
    /// # Examples
    /// ```
    /// use cumulo_core::{ClusterId, ClusterLabel, ClusterLabels, MalformedLabels};
    ///
    /// let err = ClusterLabels::try_from_labels(vec![
    ///     ClusterLabel::Cluster(ClusterId::new(1)),
    /// ]);
    /// assert_eq!(err, Err(MalformedLabels::MissingZero));
    /// ```
    pub fn try_from_labels(labels: Vec<ClusterLabel>) -> Result<Self, MalformedLabels> {
        let mut seen = HashSet::new();
        let mut max_id = None;
        let mut noise_count = 0usize;

        for label in &labels {
            match label {
                ClusterLabel::Noise => noise_count += 1,
                ClusterLabel::Cluster(id) => {
                    seen.insert(id.get());
                    max_id = Some(max_id.map_or(id.get(), |max: u32| max.max(id.get())));
                }
            }
        }

        if let Some(max) = max_id {
            if !seen.contains(&0) {
                return Err(MalformedLabels::MissingZero);
            }
            if seen.len() != max as usize + 1 {
                return Err(MalformedLabels::Gap);
            }
        }

        Ok(Self {
            cluster_count: seen.len(),
            noise_count,
            labels,
        })
    }

    /// Returns the labels in point order.
    #[must_use]
    pub fn labels(&self) -> &[ClusterLabel] {
        &self.labels
    }

    /// Returns the number of labelled points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns whether no points were labelled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Counts the distinct clusters present in the labels.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// Counts the points labelled as noise.
    #[must_use]
    pub fn noise_count(&self) -> usize {
        self.noise_count
    }
}
