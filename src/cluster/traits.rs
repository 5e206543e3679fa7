use crate::error::Result;

/// Hard clustering over dense rows: exactly one label per row.
pub trait Clustering {
    /// Cluster `data` and return the label of each row, in input order.
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>>;

    /// Number of clusters the algorithm is configured to produce.
    fn n_clusters(&self) -> usize;
}
