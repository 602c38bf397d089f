use argminmax::ArgMinMax;
use serde::{Deserialize, Serialize};

/// `[start_range, end_range]` split into `n_chunks` equal-width chunks.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct RangeF64 {
    pub start_range: f64,
    pub end_range: f64,
    pub n_chunks: usize,
}

impl RangeF64 {
    pub fn new(start_range: f64, end_range: f64, n_chunks: usize) -> Self {
        debug_assert!(n_chunks > 0);
        Self {
            start_range,
            end_range,
            n_chunks,
        }
    }

    pub fn range_length(&self) -> f64 {
        self.end_range - self.start_range
    }

    pub fn chunk_size(&self) -> f64 {
        self.range_length() / (self.n_chunks as f64)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.start_range && value <= self.end_range
    }

    pub fn chunk_index(&self, value: f64) -> usize {
        let index = (value - self.start_range) / self.chunk_size();
        let chunk_index = index as usize;

        // Clamping puts `end_range` itself (and float noise just below it) in the last chunk.
        chunk_index.min(self.n_chunks - 1)
    }

    /// All `n_chunks + 1` boundaries, first and last pinned to the range ends.
    pub fn edges(&self) -> Vec<f64> {
        let mut edges: Vec<f64> = (0..=self.n_chunks)
            .map(|i| self.start_range + i as f64 * self.chunk_size())
            .collect();
        if let Some(last) = edges.last_mut() {
            *last = self.end_range;
        }
        edges
    }
}

/// Result of bucketing one series.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Bucketing {
    /// `bins + 1` ascending boundaries
    pub edges: Vec<f64>,
    /// One count per bucket
    pub counts: Vec<u64>,
}

impl Bucketing {
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Bucket midpoints, where bars are drawn.
    pub fn centers(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
    }

    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Equal-width histogram of `samples` over `[min, max]`.
///
/// Values outside the range (and non-finite values) are dropped; `max` itself
/// lands in the last bucket. Callers validate `bins >= 1` and `max > min`.
pub fn bucketize(samples: &[f64], bins: usize, min: f64, max: f64) -> Bucketing {
    let range = RangeF64::new(min, max, bins);
    let mut counts = vec![0u64; bins];

    samples
        .iter()
        .copied()
        .filter(|v| v.is_finite() && range.contains(*v))
        .for_each(|v| counts[range.chunk_index(v)] += 1);

    Bucketing {
        edges: range.edges(),
        counts,
    }
}

fn finite_values(vec: &[f64]) -> Vec<f64> {
    vec.iter().copied().filter(|v| v.is_finite()).collect()
}

/// Largest finite value, `None` if there is none.
pub fn get_max(vec: &[f64]) -> Option<f64> {
    let finite = finite_values(vec);
    if finite.is_empty() {
        return None;
    }
    let max_index: usize = finite.as_slice().argmax();
    Some(finite[max_index])
}

/// Smallest finite value, `None` if there is none.
pub fn get_min(vec: &[f64]) -> Option<f64> {
    let finite = finite_values(vec);
    if finite.is_empty() {
        return None;
    }
    let min_index: usize = finite.as_slice().argmin();
    Some(finite[min_index])
}

pub fn get_min_max(vec: &[f64]) -> Option<(f64, f64)> {
    Some((get_min(vec)?, get_max(vec)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn bucketize_counts_top_edge_in_last_bucket() {
        let data = [1.0, 2.0, 2.0, 3.0, 4.0, 5.0, 5.0, 5.0, 6.0];
        let buckets = bucketize(&data, 5, 1.0, 6.0);

        assert_eq!(buckets.bins(), 5);
        assert_eq!(buckets.edges, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(buckets.counts, vec![1, 2, 1, 1, 4]);
        assert_eq!(buckets.total(), 9);
        assert_eq!(buckets.max_count(), 4);
    }

    #[test]
    fn bucketize_drops_out_of_range_and_nan() {
        let data = [-1.0, 0.0, 0.5, 1.0, 1.5, f64::NAN, 10.0];
        let buckets = bucketize(&data, 2, 0.0, 1.0);
        assert_eq!(buckets.counts, vec![1, 2]);
    }

    #[test]
    fn centers_sit_between_edges() {
        let buckets = bucketize(&[0.0, 4.0], 4, 0.0, 4.0);
        let centers = buckets.centers();
        assert_eq!(centers.len(), 4);
        assert!(approx_eq(centers[0], 0.5));
        assert!(approx_eq(centers[3], 3.5));
    }

    #[test]
    fn chunks_cover_range() {
        let range = RangeF64::new(10.0, 20.0, 4);
        assert!(approx_eq(range.chunk_size(), 2.5));
        assert_eq!(range.edges(), vec![10.0, 12.5, 15.0, 17.5, 20.0]);
        assert_eq!(range.chunk_index(12.5), 1);
        assert_eq!(range.chunk_index(20.0), 3);
    }

    #[test]
    fn min_max_skip_non_finite() {
        assert_eq!(get_min_max(&[3.0, f64::NAN, -2.0, 7.5]), Some((-2.0, 7.5)));
        assert_eq!(get_min_max(&[f64::NAN]), None);
        assert_eq!(get_max(&[]), None);
    }
}
