//! K-means clustering with Lloyd iterations.
//!
//! # The Algorithm (Lloyd, 1982)
//!
//! 1. **Initialize**: pick `k` distinct observations as seed centroids (see [`Init`]).
//!    Each seed is labeled with its cluster before the first pass.
//! 2. **Assign**: move every observation to the cluster whose centroid is nearest
//!    (squared Euclidean distance, first cluster wins on ties).
//! 3. **Update**: move every non-empty cluster's centroid to the mean of its members.
//!    Empty clusters keep their previous centroid.
//! 4. Repeat 2-3 until an assignment pass changes no label ([`Termination::Converged`])
//!    or the iteration cap is hit ([`Termination::IterationCapReached`]).
//!
//! ## Complexity
//!
//! - **Time**: O(n·k·d) per iteration.
//! - **Space**: O(n + k·d) on top of the observations.
//!
//! ## Guarantees
//!
//! - Within-cluster sum of squares never increases from one iteration to the next.
//! - The loop always stops within `max_iter` iterations.
//! - Given the same seed indices, results are bit-for-bit reproducible, with or without
//!   the `parallel` feature.
//!
//! ## References
//!
//! Lloyd, S. (1982). "Least squares quantization in PCM." IEEE Trans. Inf. Theory 28(2).

use rand::prelude::*;
use tracing::{debug, trace};

use super::init::{self, Init};
use super::observation::Observation;
use super::state::ClusterState;
use super::traits::Clustering;
use super::util;
use crate::error::{Error, Result};

/// Default iteration cap.
pub const DEFAULT_MAX_ITER: usize = 100;

/// Why a run stopped. Both outcomes carry a usable result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// A full assignment pass changed no label.
    Converged,
    /// The iteration cap was reached before convergence.
    IterationCapReached,
}

/// K-means configuration.
#[derive(Debug, Clone)]
pub struct Kmeans {
    k: usize,
    max_iter: usize,
    seed: Option<u64>,
    init: Init,
}

impl Kmeans {
    /// Create a k-means clusterer for `k` clusters.
    ///
    /// Defaults: `max_iter = 100`, uniform random seeding, unseeded RNG.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: DEFAULT_MAX_ITER,
            seed: None,
            init: Init::default(),
        }
    }

    /// Set the iteration cap.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Seed the RNG used for initialization.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the initialization strategy.
    pub fn with_init(mut self, init: Init) -> Self {
        self.init = init;
        self
    }

    /// Configured number of clusters.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Configured iteration cap.
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    /// Cluster dense rows. Row `i` becomes observation `i`.
    pub fn fit(&self, data: &[Vec<f32>]) -> Result<KmeansFit> {
        let mut observations = Observation::from_rows(data.iter().cloned())?;
        self.fit_observations(&mut observations)
    }

    /// Cluster caller-owned observations, leaving the final label on each of them.
    pub fn fit_observations(&self, observations: &mut [Observation]) -> Result<KmeansFit> {
        Ok(self.engine(observations)?.run())
    }

    /// Validate the input, pick seeds, and return an engine ready to iterate.
    pub fn engine<'a>(&self, observations: &'a mut [Observation]) -> Result<KmeansEngine<'a>> {
        validate(observations, self.k, self.max_iter)?;

        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };
        let seeds = init::select_seeds(&self.init, observations, self.k, &mut rng)?;

        KmeansEngine::new(observations, &seeds, self.max_iter)
    }
}

impl Clustering for Kmeans {
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.into_labels())
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

/// Check everything the engine relies on and return the common dimensionality.
fn validate(observations: &[Observation], k: usize, max_iter: usize) -> Result<usize> {
    let n = observations.len();
    if k == 0 || k > n {
        return Err(Error::InvalidConfiguration {
            requested: k,
            n_items: n,
        });
    }

    if max_iter == 0 {
        return Err(Error::InvalidParameter {
            name: "max_iter",
            message: "must be at least 1",
        });
    }

    let dim = util::common_dimension(observations.iter().map(Observation::values))?;
    if dim == 0 {
        return Err(Error::InvalidParameter {
            name: "dimension",
            message: "must be at least 1",
        });
    }

    if observations.iter().enumerate().any(|(i, o)| o.id() != i) {
        return Err(Error::InvalidParameter {
            name: "observations",
            message: "identifiers must match input positions",
        });
    }

    Ok(dim)
}

/// One k-means run over a borrowed set of observations.
///
/// The engine owns the cluster states and is the only writer of observation labels
/// while it lives. Drive it with [`step`](Self::step) for per-iteration inspection, or
/// [`run`](Self::run) to completion.
#[derive(Debug)]
pub struct KmeansEngine<'a> {
    observations: &'a mut [Observation],
    clusters: Vec<ClusterState>,
    dim: usize,
    max_iter: usize,
    iterations: usize,
    termination: Option<Termination>,
}

impl<'a> KmeansEngine<'a> {
    /// Initialize from explicit seed indices: cluster `i` starts at `observations[seeds[i]]`.
    ///
    /// `k` is `seeds.len()`. Any previous labels on the observations are cleared.
    pub fn new(observations: &'a mut [Observation], seeds: &[usize], max_iter: usize) -> Result<Self> {
        let k = seeds.len();
        let dim = validate(observations, k, max_iter)?;
        init::validate_indices(seeds, observations.len(), k)?;

        for o in observations.iter_mut() {
            o.set_cluster(None);
        }

        let mut clusters = Vec::with_capacity(k);
        for (id, &idx) in seeds.iter().enumerate() {
            observations[idx].set_cluster(Some(id));
            clusters.push(ClusterState::seeded(id, &observations[idx]));
        }

        debug!(k, n = observations.len(), dim, ?seeds, "kmeans initialized");

        Ok(Self {
            observations,
            clusters,
            dim,
            max_iter,
            iterations: 0,
            termination: None,
        })
    }

    /// Number of clusters.
    pub fn k(&self) -> usize {
        self.clusters.len()
    }

    /// Dimensionality shared by all observations.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Completed iterations (assign + update passes).
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Termination reason, once the run has stopped.
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// Current cluster states.
    pub fn clusters(&self) -> &[ClusterState] {
        &self.clusters
    }

    /// Observations with their current labels.
    pub fn observations(&self) -> &[Observation] {
        &*self.observations
    }

    /// Identifier of the cluster whose centroid is nearest to `point`.
    ///
    /// Ties go to the lowest cluster id. A point of the wrong width yields
    /// [`Error::DimensionMismatch`] with `row` 0.
    pub fn nearest_cluster(&self, point: &[f32]) -> Result<usize> {
        check_point(point, self.dim)?;
        Ok(util::nearest_centroid(self.clusters.iter().map(ClusterState::centroid), point).0)
    }

    /// Within-cluster sum of squared distances for the current state.
    pub fn inertia(&self) -> f32 {
        self.clusters
            .iter()
            .map(|c| c.inertia(&*self.observations))
            .sum()
    }

    /// Run one assign + update iteration.
    ///
    /// Returns the termination reason once the run has stopped; calling `step` after
    /// that does nothing and returns the same reason.
    pub fn step(&mut self) -> Option<Termination> {
        if self.termination.is_some() {
            return self.termination;
        }

        self.iterations += 1;
        let changed = self.assign();
        let empty = self.update();
        trace!(iteration = self.iterations, changed, empty, "kmeans iteration");

        // With a single cluster, assignment does not depend on the centroid.
        let termination = if changed == 0 || self.clusters.len() == 1 {
            Some(Termination::Converged)
        } else if self.iterations >= self.max_iter {
            Some(Termination::IterationCapReached)
        } else {
            None
        };

        if let Some(reason) = termination {
            debug!(iterations = self.iterations, ?reason, "kmeans finished");
        }
        self.termination = termination;
        termination
    }

    /// Iterate until convergence or the iteration cap.
    pub fn run(mut self) -> KmeansFit {
        let termination = loop {
            if let Some(reason) = self.step() {
                break reason;
            }
        };

        let mut labels = vec![0; self.observations.len()];
        for c in &self.clusters {
            for id in c.members() {
                labels[id] = c.id();
            }
        }

        KmeansFit {
            inertia: self.inertia(),
            clusters: self.clusters,
            labels,
            dim: self.dim,
            iterations: self.iterations,
            termination,
        }
    }

    /// Assignment phase. Returns the number of observations whose label changed.
    fn assign(&mut self) -> usize {
        let nearest = self.nearest_all();

        let mut changed = 0;
        for (obs, &target) in self.observations.iter_mut().zip(&nearest) {
            let previous = obs.cluster();
            if previous == Some(target) {
                continue;
            }
            if let Some(old) = previous {
                self.clusters[old].remove(obs.id());
            }
            self.clusters[target].insert(obs.id());
            obs.set_cluster(Some(target));
            changed += 1;
        }
        changed
    }

    /// Nearest cluster for every observation, read-only over the centroids.
    ///
    /// Labels and memberships are written afterwards, in observation order.
    fn nearest_all(&self) -> Vec<usize> {
        let centroids: Vec<&[f32]> = self.clusters.iter().map(ClusterState::centroid).collect();
        let nearest = |o: &Observation| util::nearest_centroid(centroids.iter().copied(), o.values()).0;

        #[cfg(feature = "parallel")]
        let out: Vec<usize> = {
            use rayon::prelude::*;
            self.observations.par_iter().map(nearest).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let out: Vec<usize> = self.observations.iter().map(nearest).collect();

        out
    }

    /// Update phase. Returns the number of empty clusters (their centroids are kept).
    fn update(&mut self) -> usize {
        let observations = &*self.observations;
        self.clusters
            .iter_mut()
            .map(|c| c.recompute_centroid(observations))
            .filter(|&updated| !updated)
            .count()
    }
}

fn check_point(point: &[f32], dim: usize) -> Result<()> {
    if point.len() != dim {
        return Err(Error::DimensionMismatch {
            row: 0,
            expected: dim,
            found: point.len(),
        });
    }
    Ok(())
}

/// Result of a k-means run.
#[derive(Debug, Clone, PartialEq)]
pub struct KmeansFit {
    clusters: Vec<ClusterState>,
    labels: Vec<usize>,
    dim: usize,
    iterations: usize,
    termination: Termination,
    inertia: f32,
}

impl KmeansFit {
    /// Final clusters, indexed by cluster id.
    pub fn clusters(&self) -> &[ClusterState] {
        &self.clusters
    }

    /// Final cluster label per observation.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Consume the fit, keeping only the labels.
    pub fn into_labels(self) -> Vec<usize> {
        self.labels
    }

    /// Final centroids, indexed by cluster id.
    pub fn centroids(&self) -> impl ExactSizeIterator<Item = &[f32]> + '_ {
        self.clusters.iter().map(ClusterState::centroid)
    }

    /// Number of iterations performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Why the run stopped.
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Whether the run converged (as opposed to hitting the iteration cap).
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }

    /// Within-cluster sum of squared distances.
    pub fn inertia(&self) -> f32 {
        self.inertia
    }

    /// Assign a new point to the nearest final centroid.
    pub fn predict(&self, point: &[f32]) -> Result<usize> {
        check_point(point, self.dim)?;
        Ok(util::nearest_centroid(self.centroids(), point).0)
    }
}
