use std::collections::BTreeSet;

use super::observation::Observation;

/// Mutable state of one cluster: identifier, centroid, and member observation ids.
///
/// Members are identifiers into the caller's observation slice; a cluster never owns
/// observation data. A cluster may legally be empty, in which case its centroid is
/// left where it was.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterState {
    id: usize,
    centroid: Vec<f32>,
    members: BTreeSet<usize>,
}

impl ClusterState {
    /// Seed a cluster from one observation: its coordinates become the centroid and it
    /// becomes the first member.
    pub(crate) fn seeded(id: usize, seed: &Observation) -> Self {
        Self {
            id,
            centroid: seed.values().to_vec(),
            members: BTreeSet::from([seed.id()]),
        }
    }

    /// Cluster identifier in `[0, k)`.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Current centroid.
    pub fn centroid(&self) -> &[f32] {
        &self.centroid
    }

    /// Member observation ids, in ascending order.
    pub fn members(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.members.iter().copied()
    }

    /// Whether `observation` is a member.
    pub fn contains(&self, observation: usize) -> bool {
        self.members.contains(&observation)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the cluster currently has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub(crate) fn insert(&mut self, observation: usize) -> bool {
        self.members.insert(observation)
    }

    pub(crate) fn remove(&mut self, observation: usize) -> bool {
        self.members.remove(&observation)
    }

    /// Move the centroid to the coordinate-wise mean of the members.
    ///
    /// Returns `false` (and keeps the centroid) when the cluster is empty.
    pub(crate) fn recompute_centroid(&mut self, observations: &[Observation]) -> bool {
        if self.members.is_empty() {
            return false;
        }

        let mut sum = vec![0.0f32; self.centroid.len()];
        for &id in &self.members {
            for (acc, v) in sum.iter_mut().zip(observations[id].values()) {
                *acc += v;
            }
        }

        let count = self.members.len() as f32;
        for (c, s) in self.centroid.iter_mut().zip(sum) {
            *c = s / count;
        }
        true
    }

    /// Sum of squared distances from the members to the centroid.
    pub(crate) fn inertia(&self, observations: &[Observation]) -> f32 {
        self.members
            .iter()
            .map(|&id| super::util::squared_euclidean(observations[id].values(), &self.centroid))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<Observation> {
        Observation::from_rows(vec![vec![0.0, 0.0], vec![2.0, 4.0], vec![4.0, 2.0]]).unwrap()
    }

    #[test]
    fn seeded_cluster_holds_seed() {
        let obs = points();
        let c = ClusterState::seeded(3, &obs[1]);
        assert_eq!(c.id(), 3);
        assert_eq!(c.centroid(), &[2.0, 4.0]);
        assert_eq!(c.members().collect::<Vec<_>>(), vec![1]);
        assert!(c.contains(1));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn recompute_is_mean_of_members() {
        let obs = points();
        let mut c = ClusterState::seeded(0, &obs[0]);
        assert!(c.insert(1));
        assert!(c.insert(2));
        assert!(!c.insert(2));
        assert!(c.recompute_centroid(&obs));
        assert_eq!(c.centroid(), &[2.0, 2.0]);
        // (4 + 4) + (0 + 4) + (4 + 0)
        assert_eq!(c.inertia(&obs), 16.0);
    }

    #[test]
    fn empty_cluster_keeps_centroid() {
        let obs = points();
        let mut c = ClusterState::seeded(0, &obs[2]);
        assert!(c.remove(2));
        assert!(c.is_empty());
        assert!(!c.recompute_centroid(&obs));
        assert_eq!(c.centroid(), &[4.0, 2.0]);
        assert_eq!(c.inertia(&obs), 0.0);
    }
}
