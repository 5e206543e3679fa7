//! Observations: one dense vector plus its current cluster assignment.

use super::util;
use crate::error::Result;

/// A single data point to be clustered.
///
/// The coordinates are fixed at construction; only the cluster label changes, and
/// only the clustering engine changes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    id: usize,
    values: Vec<f32>,
    cluster: Option<usize>,
}

impl Observation {
    /// Create an unassigned observation.
    ///
    /// `id` must be the observation's position in the slice handed to the engine.
    pub fn new(id: usize, values: Vec<f32>) -> Self {
        Self {
            id,
            values,
            cluster: None,
        }
    }

    /// Build observations from rows, using each row's position as its identifier.
    ///
    /// Fails with [`Error::DimensionMismatch`](crate::Error::DimensionMismatch) on the
    /// first row whose width differs from the first row.
    pub fn from_rows<I>(rows: I) -> Result<Vec<Self>>
    where
        I: IntoIterator<Item = Vec<f32>>,
    {
        let observations: Vec<Self> = rows
            .into_iter()
            .enumerate()
            .map(|(id, values)| Self::new(id, values))
            .collect();
        util::common_dimension(observations.iter().map(Self::values))?;
        Ok(observations)
    }

    /// Identifier (position in the input order).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Coordinates.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Dimensionality.
    pub fn dim(&self) -> usize {
        self.values.len()
    }

    /// Current cluster, or `None` while unassigned.
    pub fn cluster(&self) -> Option<usize> {
        self.cluster
    }

    pub(crate) fn set_cluster(&mut self, cluster: Option<usize>) {
        self.cluster = cluster;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn from_rows_assigns_positional_ids() {
        let obs = Observation::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(obs.len(), 2);
        assert_eq!(obs[1].id(), 1);
        assert_eq!(obs[1].values(), &[3.0, 4.0]);
        assert_eq!(obs[0].dim(), 2);
        assert!(obs.iter().all(|o| o.cluster().is_none()));
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = Observation::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                row: 1,
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn from_rows_empty() {
        let obs = Observation::from_rows(Vec::<Vec<f32>>::new()).unwrap();
        assert!(obs.is_empty());
    }
}
