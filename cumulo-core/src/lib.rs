//! Cumulo core library.
//!
//! Models a 3D point cloud, validates density-scan parameters, and delegates
//! the clustering itself to the `cogset` DBSCAN implementation. Labels are
//! returned in point order so callers can serialise them positionally.

mod builder;
mod cloud;
mod detector;
mod error;
mod result;

pub use crate::{
    builder::DetectorBuilder,
    cloud::{Point3, PointCloud},
    detector::Detector,
    error::{CumuloError, CumuloErrorCode, Result},
    result::{ClusterId, ClusterLabel, ClusterLabels, MalformedLabels},
};
