//! K-means clustering over dense vectors.
//!
//! ## Pieces
//!
//! - [`Observation`]: one data point plus its current cluster label.
//! - [`ClusterState`]: a cluster's id, centroid, and member observation ids.
//! - [`KmeansEngine`]: one run; initialization, then assign/update iterations until
//!   convergence or the iteration cap.
//! - [`Kmeans`]: configuration (k, iteration cap, RNG seed, [`Init`] strategy) and the
//!   usual entry point.
//!
//! ## Objective
//!
//! Minimize the within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! Lloyd iterations reach a local minimum of `J`; which one depends on the seeds.
//!
//! **Assumptions**:
//! - Clusters are roughly spherical
//! - Clusters have similar sizes
//! - You know k in advance
//!
//! ## Usage
//!
//! ```rust
//! use lloyd::cluster::{Clustering, Init, Kmeans, Termination};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![10.0, 0.0],
//!     vec![10.0, 1.0],
//! ];
//!
//! // Fixed seeds: observation 0 seeds cluster 0, observation 2 seeds cluster 1.
//! let fit = Kmeans::new(2)
//!     .with_init(Init::Indices(vec![0, 2]))
//!     .fit(&data)
//!     .unwrap();
//! assert_eq!(fit.termination(), Termination::Converged);
//! assert_eq!(fit.labels(), &[0, 0, 1, 1]);
//! assert_eq!(fit.clusters()[1].centroid(), &[10.0, 0.5]);
//!
//! // Random seeding, reproducible through the RNG seed.
//! let labels = Kmeans::new(2).with_seed(42).fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]);
//! assert_ne!(labels[0], labels[2]);
//! ```

mod init;
mod kmeans;
mod observation;
mod state;
mod traits;
mod util;

pub use init::Init;
pub use kmeans::{Kmeans, KmeansEngine, KmeansFit, Termination, DEFAULT_MAX_ITER};
pub use observation::Observation;
pub use state::ClusterState;
pub use traits::Clustering;
