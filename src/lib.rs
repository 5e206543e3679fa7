//! K-means clustering.
//!
//! `lloyd` partitions fixed-dimensional `f32` observations into `k` clusters with
//! Lloyd iterations: nearest-centroid assignment, centroid recomputation, repeated until
//! no label changes or an iteration cap is reached.
//!
//! The public API lives under [`cluster`]:
//! - seeding (uniform without replacement, explicit indices, k-means++)
//! - a step-wise engine exposing every iteration
//! - fit results with final clusters, labels, inertia, and termination reason
//!
//! Enable the `parallel` feature to run the nearest-centroid search on `rayon`.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{
    ClusterState, Clustering, Init, Kmeans, KmeansEngine, KmeansFit, Observation, Termination,
    DEFAULT_MAX_ITER,
};
pub use error::{Error, Result};
