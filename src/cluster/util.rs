use crate::error::{Error, Result};

#[inline]
pub(crate) fn squared_euclidean(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Index of the centroid closest to `point`, with its squared distance.
///
/// Strict `<` comparison: on ties the first centroid in iteration order wins.
/// Returns `(0, f32::INFINITY)` if `centroids` is empty.
pub(crate) fn nearest_centroid<'a, I>(centroids: I, point: &[f32]) -> (usize, f32)
where
    I: IntoIterator<Item = &'a [f32]>,
{
    let mut best = 0;
    let mut best_dist = f32::INFINITY;
    for (idx, centroid) in centroids.into_iter().enumerate() {
        let d = squared_euclidean(centroid, point);
        if d < best_dist {
            best_dist = d;
            best = idx;
        }
    }
    (best, best_dist)
}

/// Check that every row has the width of the first one and return that width.
///
/// Empty input yields `Ok(0)`; callers decide whether that is acceptable.
pub(crate) fn common_dimension<'a, I>(rows: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a [f32]>,
{
    let mut rows = rows.into_iter();
    let Some(first) = rows.next() else {
        return Ok(0);
    };
    let expected = first.len();
    for (offset, row) in rows.enumerate() {
        if row.len() != expected {
            return Err(Error::DimensionMismatch {
                row: offset + 1,
                expected,
                found: row.len(),
            });
        }
    }
    Ok(expected)
}
