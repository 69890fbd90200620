//! Property tests for the density-scan invariants.

use cumulo_core::{ClusterLabel, Detector, DetectorBuilder, Point3, PointCloud};
use proptest::prelude::*;

fn arb_cloud() -> impl Strategy<Value = PointCloud> {
    prop::collection::vec(
        (-50.0f64..50.0, -50.0f64..50.0, -50.0f64..50.0),
        0..32,
    )
    .prop_map(|triples| {
        let points = triples
            .into_iter()
            .map(|(x, y, z)| Point3::new(x, y, z))
            .collect();
        PointCloud::new("generated", points)
    })
}

fn arb_detector() -> impl Strategy<Value = Detector> {
    (0.1f64..20.0, 1usize..6).prop_map(|(radius, min_points)| {
        DetectorBuilder::new()
            .with_radius(radius)
            .with_min_points(min_points)
            .build()
            .expect("generated parameters are valid")
    })
}

proptest! {
    #[test]
    fn one_label_per_point(cloud in arb_cloud(), detector in arb_detector()) {
        let labels = detector.run(&cloud).expect("finite clouds must scan");
        prop_assert_eq!(labels.len(), cloud.len());
    }

    #[test]
    fn scans_are_deterministic(cloud in arb_cloud(), detector in arb_detector()) {
        let first = detector.run(&cloud).expect("first run");
        let second = detector.run(&cloud).expect("second run");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn cluster_ids_are_contiguous(cloud in arb_cloud(), detector in arb_detector()) {
        let labels = detector.run(&cloud).expect("finite clouds must scan");
        let count = labels.cluster_count();
        for label in labels.labels() {
            if let ClusterLabel::Cluster(id) = label {
                prop_assert!((id.get() as usize) < count);
            }
        }
    }

    #[test]
    fn noise_and_clustered_partition_the_cloud(
        cloud in arb_cloud(),
        detector in arb_detector(),
    ) {
        let labels = detector.run(&cloud).expect("finite clouds must scan");
        let clustered = labels
            .labels()
            .iter()
            .filter(|label| !label.is_noise())
            .count();
        prop_assert_eq!(clustered + labels.noise_count(), labels.len());
    }
}
