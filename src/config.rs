//! Fixed run configuration: which files are plotted and how.

use crate::histogram::HistogramConfig;

pub const WINDOW_TITLE: &str = "Variate Viewer";
pub const WINDOW_SIZE: [f32; 2] = [1200.0, 800.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [600.0, 400.0];

/// Default size of each figure window inside the viewer.
pub const FIGURE_SIZE: [f32; 2] = [560.0, 380.0];

/// One load-and-render pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotJob {
    pub title: &'static str,
    /// File name, resolved against the data directory.
    pub file_name: &'static str,
    pub histogram: HistogramConfig,
}

/// The two sample files and their histogram settings.
pub fn plot_jobs() -> [PlotJob; 2] {
    [
        PlotJob {
            title: "Uniform samples",
            file_name: "uniforms",
            histogram: HistogramConfig::default(),
        },
        PlotJob {
            title: "Gaussian samples",
            file_name: "gaussians",
            histogram: HistogramConfig::default().with_bins(100).with_density(true),
        },
    ]
}
