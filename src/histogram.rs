//! Equal-width binning of a sample sequence.
//!
//! Bins are right-open, `[lo, hi)`, except the last which also includes the
//! maximum. With `density` set, heights are scaled so the bars have total
//! area 1. Ranges whose width overflows, or whose bins would share an edge,
//! are rejected rather than binned with degenerate edges.

use thiserror::Error;

/// Number of bins when none is requested.
pub const DEFAULT_BINS: usize = 10;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HistogramError {
    #[error("cannot bin an empty sample sequence")]
    EmptySamples,
    #[error("bin count must be a positive integer")]
    ZeroBins,
    #[error("sample {index} is not finite")]
    NonFiniteSample { index: usize },
    #[error("data range [{lo}, {hi}] is too wide to split into bins")]
    RangeTooWide { lo: f64, hi: f64 },
    #[error("{bins} bins are too narrow to separate values in [{lo}, {hi}]")]
    TooManyBins { bins: usize, lo: f64, hi: f64 },
}

/// Display configuration for one histogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramConfig {
    /// Number of equal-width intervals spanning the data range.
    pub bins: usize,
    /// Normalize heights to a probability density instead of raw counts.
    pub density: bool,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BINS,
            density: false,
        }
    }
}

impl HistogramConfig {
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    pub fn with_density(mut self, density: bool) -> Self {
        self.density = density;
        self
    }
}

/// Binned distribution of a sample sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `bins + 1` strictly increasing edges.
    pub edges: Vec<f64>,
    /// Samples falling in each bin.
    pub counts: Vec<usize>,
    /// Bar heights: counts, or densities when `density` is set.
    pub heights: Vec<f64>,
    pub total: usize,
    pub density: bool,
}

impl Histogram {
    /// Bin `samples` according to `config`.
    pub fn compute(samples: &[f64], config: &HistogramConfig) -> Result<Self, HistogramError> {
        if config.bins == 0 {
            return Err(HistogramError::ZeroBins);
        }
        if samples.is_empty() {
            return Err(HistogramError::EmptySamples);
        }
        if let Some(index) = samples.iter().position(|v| !v.is_finite()) {
            return Err(HistogramError::NonFiniteSample { index });
        }

        let mut lo = samples.iter().cloned().fold(f64::INFINITY, f64::min);
        let mut hi = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        // A single distinct value still gets a unit-wide range.
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let bins = config.bins;
        let width = (hi - lo) / bins as f64;
        if !width.is_finite() {
            return Err(HistogramError::RangeTooWide { lo, hi });
        }

        let mut edges: Vec<f64> = (0..bins).map(|i| lo + width * i as f64).collect();
        edges.push(hi);
        if edges.windows(2).any(|w| w[0] >= w[1]) {
            return Err(HistogramError::TooManyBins { bins, lo, hi });
        }

        let mut counts = vec![0usize; bins];
        for &v in samples {
            counts[bin_index(&edges, lo, width, v)] += 1;
        }

        let total = samples.len();
        let heights = if config.density {
            let scale = total as f64 * width;
            counts.iter().map(|&c| c as f64 / scale).collect()
        } else {
            counts.iter().map(|&c| c as f64).collect()
        };

        Ok(Histogram {
            edges,
            counts,
            heights,
            total,
            density: config.density,
        })
    }

    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    /// Width shared by every bin.
    pub fn bin_width(&self) -> f64 {
        (self.edges[self.edges.len() - 1] - self.edges[0]) / self.bin_count() as f64
    }

    /// Midpoint of each bin, in order.
    pub fn centers(&self) -> impl Iterator<Item = f64> + '_ {
        self.edges.windows(2).map(|w| 0.5 * (w[0] + w[1]))
    }

    /// Total bar area: `1` for densities, the sample count times the bin
    /// width otherwise.
    pub fn area(&self) -> f64 {
        self.heights.iter().sum::<f64>() * self.bin_width()
    }
}

/// Locate the bin for `v`, correcting the arithmetic guess against the
/// stored edges so rounding never moves a sample across a boundary.
fn bin_index(edges: &[f64], lo: f64, width: f64, v: f64) -> usize {
    let last = edges.len() - 2;
    let mut idx = (((v - lo) / width).floor() as usize).min(last);
    while idx > 0 && v < edges[idx] {
        idx -= 1;
    }
    while idx < last && v >= edges[idx + 1] {
        idx += 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_ten_raw_count_bins() {
        let cfg = HistogramConfig::default();
        assert_eq!(cfg.bins, 10);
        assert!(!cfg.density);
    }

    #[test]
    fn empty_samples_are_rejected() {
        let err = Histogram::compute(&[], &HistogramConfig::default()).unwrap_err();
        assert_eq!(err, HistogramError::EmptySamples);
    }

    #[test]
    fn zero_bins_are_rejected() {
        let cfg = HistogramConfig::default().with_bins(0);
        let err = Histogram::compute(&[1.0, 2.0], &cfg).unwrap_err();
        assert_eq!(err, HistogramError::ZeroBins);
    }

    #[test]
    fn non_finite_samples_are_rejected() {
        let err = Histogram::compute(&[1.0, f64::NAN], &HistogramConfig::default()).unwrap_err();
        assert_eq!(err, HistogramError::NonFiniteSample { index: 1 });
    }

    #[test]
    fn overflowing_range_is_rejected() {
        let cfg = HistogramConfig::default().with_density(true);
        let err = Histogram::compute(&[-1e308, 0.0, 1e308], &cfg).unwrap_err();
        assert_eq!(err, HistogramError::RangeTooWide { lo: -1e308, hi: 1e308 });
    }

    #[test]
    fn widest_representable_range_still_integrates_to_one() {
        let cfg = HistogramConfig::default().with_density(true);
        let h = Histogram::compute(&[-4e307, 0.0, 4e307], &cfg).unwrap();
        assert!(h.edges.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(h.counts.iter().sum::<usize>(), 3);
        assert!((h.area() - 1.0).abs() < 1e-9, "area {}", h.area());
    }

    #[test]
    fn range_narrower_than_the_bins_is_rejected() {
        let err = Histogram::compute(&[1.0, 1.0 + f64::EPSILON], &HistogramConfig::default())
            .unwrap_err();
        assert!(matches!(err, HistogramError::TooManyBins { bins: 10, .. }), "got {err:?}");
    }

    #[test]
    fn tiny_range_with_one_bin_keeps_the_minimum_in_it() {
        let cfg = HistogramConfig::default().with_bins(1);
        let h = Histogram::compute(&[1.0, 1.0 + f64::EPSILON], &cfg).unwrap();
        assert_eq!(h.counts, vec![2]);
    }

    #[test]
    fn minimum_lands_in_the_first_bin() {
        let samples = [0.1, 0.7, 0.2, 0.3000000000000001, 0.9];
        for bins in [3, 7, 10, 64] {
            let cfg = HistogramConfig::default().with_bins(bins);
            let h = Histogram::compute(&samples, &cfg).unwrap();
            assert!(h.edges.windows(2).all(|w| w[0] < w[1]), "bins={bins}");
            assert!(h.counts[0] >= 1, "bins={bins}: {:?}", h.counts);
            assert!(h.counts[bins - 1] >= 1, "bins={bins}: {:?}", h.counts);
        }
    }

    #[test]
    fn interior_boundaries_go_to_the_upper_bin() {
        let cfg = HistogramConfig::default().with_bins(4);
        let h = Histogram::compute(&[0.0, 1.0, 2.0, 3.0, 4.0], &cfg).unwrap();
        assert_eq!(h.edges, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        // The maximum lands in the closed last bin.
        assert_eq!(h.counts, vec![1, 1, 1, 2]);
        assert_eq!(h.heights, vec![1.0, 1.0, 1.0, 2.0]);
    }

    #[test]
    fn counts_add_up_to_sample_total() {
        let samples: Vec<f64> = (0..1000).map(|i| ((i * 7919) % 1000) as f64 / 999.0).collect();
        let h = Histogram::compute(&samples, &HistogramConfig::default()).unwrap();
        assert_eq!(h.bin_count(), 10);
        assert_eq!(h.counts.iter().sum::<usize>(), 1000);
        assert_eq!(h.total, 1000);
    }

    #[test]
    fn density_area_is_one() {
        let samples: Vec<f64> = (1..=257).map(|i| (i as f64 * 0.731).sin() * 3.0).collect();
        for bins in [1, 3, 17, 100] {
            let cfg = HistogramConfig::default().with_bins(bins).with_density(true);
            let h = Histogram::compute(&samples, &cfg).unwrap();
            assert!((h.area() - 1.0).abs() < 1e-9, "bins={bins}: area {}", h.area());
        }
    }

    #[test]
    fn single_value_gets_unit_range() {
        let cfg = HistogramConfig::default().with_density(true);
        let h = Histogram::compute(&[5.0, 5.0, 5.0], &cfg).unwrap();
        assert_eq!(h.edges[0], 4.5);
        assert_eq!(h.edges[10], 5.5);
        assert_eq!(h.counts.iter().sum::<usize>(), 3);
        assert!((h.area() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn centers_sit_between_edges() {
        let cfg = HistogramConfig::default().with_bins(2);
        let h = Histogram::compute(&[0.0, 4.0], &cfg).unwrap();
        assert_eq!(h.centers().collect::<Vec<_>>(), vec![1.0, 3.0]);
        assert_eq!(h.bin_width(), 2.0);
    }

    #[test]
    fn input_is_left_untouched() {
        let samples = vec![3.0, 1.0, 2.0];
        let before = samples.clone();
        Histogram::compute(&samples, &HistogramConfig::default()).unwrap();
        assert_eq!(samples, before);
    }
}
