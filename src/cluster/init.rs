//! Initial centroid selection.
//!
//! Every strategy picks `k` *distinct* observations; their coordinates become the
//! starting centroids.

use rand::prelude::*;
use rand::seq::index;

use super::observation::Observation;
use super::util::squared_euclidean;
use crate::error::{Error, Result};

/// How the initial centroids are chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Init {
    /// `k` observations drawn uniformly at random without replacement.
    #[default]
    Random,

    /// Caller-chosen observation indices, in cluster order: `indices[i]` seeds cluster `i`.
    ///
    /// Must contain exactly `k` distinct, in-range indices.
    Indices(Vec<usize>),

    /// k-means++ (Arthur & Vassilvitskii, 2007): each further seed is drawn with
    /// probability proportional to its squared distance to the closest seed so far.
    KmeansPlusPlus,
}

/// Pick `k` distinct seed indices. The caller guarantees `1 <= k <= observations.len()`.
pub(crate) fn select_seeds<R: Rng + ?Sized>(
    init: &Init,
    observations: &[Observation],
    k: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let n = observations.len();
    debug_assert!(k >= 1 && k <= n);

    match init {
        // Partial Fisher-Yates / Floyd sampling: bounded cost even when k approaches n.
        Init::Random => Ok(index::sample(rng, n, k).into_vec()),
        Init::Indices(indices) => {
            validate_indices(indices, n, k)?;
            Ok(indices.clone())
        }
        Init::KmeansPlusPlus => Ok(kmeans_plus_plus(observations, k, rng)),
    }
}

pub(crate) fn validate_indices(indices: &[usize], n: usize, k: usize) -> Result<()> {
    if indices.len() != k {
        return Err(Error::InvalidParameter {
            name: "init",
            message: "seed indices must contain exactly k entries",
        });
    }

    let mut taken = vec![false; n];
    for &idx in indices {
        if idx >= n {
            return Err(Error::InvalidParameter {
                name: "init",
                message: "seed index out of range",
            });
        }
        if taken[idx] {
            return Err(Error::InvalidParameter {
                name: "init",
                message: "seed indices must be distinct",
            });
        }
        taken[idx] = true;
    }
    Ok(())
}

fn kmeans_plus_plus<R: Rng + ?Sized>(observations: &[Observation], k: usize, rng: &mut R) -> Vec<usize> {
    let n = observations.len();
    let mut seeds = Vec::with_capacity(k);
    let mut taken = vec![false; n];

    let first = rng.random_range(0..n);
    seeds.push(first);
    taken[first] = true;

    let mut closest: Vec<f32> = observations
        .iter()
        .map(|o| squared_euclidean(o.values(), observations[first].values()))
        .collect();

    while seeds.len() < k {
        let next = weighted_pick(&closest, &taken, rng).unwrap_or_else(|| {
            // Every remaining point coincides with a seed: fall back to a uniform pick.
            let free: Vec<usize> = (0..n).filter(|&i| !taken[i]).collect();
            free[rng.random_range(0..free.len())]
        });

        seeds.push(next);
        taken[next] = true;

        let seed = observations[next].values();
        for (d, o) in closest.iter_mut().zip(observations) {
            *d = d.min(squared_euclidean(o.values(), seed));
        }
    }

    seeds
}

/// Draw an untaken index with probability proportional to `weights[i]`.
///
/// Returns `None` when no untaken index has positive weight.
fn weighted_pick<R: Rng + ?Sized>(weights: &[f32], taken: &[bool], rng: &mut R) -> Option<usize> {
    let total: f32 = weights
        .iter()
        .zip(taken)
        .filter(|&(w, &t)| !t && *w > 0.0)
        .map(|(w, _)| *w)
        .sum();
    if !(total > 0.0 && total.is_finite()) {
        return None;
    }

    let mut target = rng.random::<f32>() * total;
    let mut last = None;
    for (i, (&w, &t)) in weights.iter().zip(taken).enumerate() {
        if t || w <= 0.0 {
            continue;
        }
        if target < w {
            return Some(i);
        }
        target -= w;
        // Rounding may leave `target` slightly above the last weight.
        last = Some(i);
    }
    last
}
