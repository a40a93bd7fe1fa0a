use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// SampleSet – one row of a sample file
// ---------------------------------------------------------------------------

/// An ordered sequence of finite samples read from a single row.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    /// Where the samples were read from.
    pub source: PathBuf,
    /// Samples in the order they appeared in the row.
    pub values: Vec<f64>,
}

impl SampleSet {
    pub fn new(source: impl Into<PathBuf>, values: Vec<f64>) -> Self {
        SampleSet {
            source: source.into(),
            values,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set holds no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest and largest sample, `None` when empty.
    pub fn range(&self) -> Option<(f64, f64)> {
        if self.values.is_empty() {
            return None;
        }
        let min = self.values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = self.values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }
}

impl fmt::Display for SampleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.range() {
            Some((min, max)) => write!(
                f,
                "{}: {} samples in [{min:.4}, {max:.4}]",
                self.source.display(),
                self.len()
            ),
            None => write!(f, "{}: no samples", self.source.display()),
        }
    }
}
