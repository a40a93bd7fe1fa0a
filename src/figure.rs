//! Figures: owned rendering artifacts, one per render call.
//!
//! There is no implicit "current figure". A [`HistogramRenderer`] hands out a
//! new [`Figure`] each time it is asked and forgets about it; the caller keeps,
//! shows, or drops the handle.

use std::fmt;

use eframe::egui::Color32;

use crate::color::figure_color;
use crate::data::model::SampleSet;
use crate::histogram::{Histogram, HistogramConfig, HistogramError};

/// Identifies a figure among those produced by one renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FigureId(u32);

impl fmt::Display for FigureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Figure {}", self.0)
    }
}

/// A rendered histogram ready for display.
#[derive(Debug, Clone)]
pub struct Figure {
    id: FigureId,
    pub title: String,
    pub histogram: Histogram,
    pub color: Color32,
}

impl Figure {
    pub fn id(&self) -> FigureId {
        self.id
    }

    /// Label for the vertical axis.
    pub fn y_label(&self) -> &'static str {
        if self.histogram.density {
            "Density"
        } else {
            "Count"
        }
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Turns sample sets into figures. Ids are unique per renderer instance.
#[derive(Debug, Default)]
pub struct HistogramRenderer {
    next_id: u32,
}

impl HistogramRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bin `samples` and wrap the result in a new figure.
    ///
    /// Fails before allocating an id when the samples or the configuration
    /// cannot produce a histogram.
    pub fn render(
        &mut self,
        title: &str,
        samples: &SampleSet,
        config: &HistogramConfig,
    ) -> Result<Figure, HistogramError> {
        let histogram = Histogram::compute(&samples.values, config)?;

        let index = self.next_id;
        self.next_id += 1;

        log::debug!(
            "{title}: {} bins of width {:.4}, density={}, area {:.4}",
            histogram.bin_count(),
            histogram.bin_width(),
            histogram.density,
            histogram.area()
        );

        Ok(Figure {
            id: FigureId(index + 1),
            title: title.to_string(),
            histogram,
            color: figure_color(index as usize),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> SampleSet {
        SampleSet::new("gaussians", vec![-1.5, -0.2, 0.0, 0.3, 0.9, 2.1])
    }

    #[test]
    fn each_render_yields_a_new_figure() {
        let mut renderer = HistogramRenderer::new();
        let set = samples();
        let cfg = HistogramConfig::default();

        let a = renderer.render("first", &set, &cfg).unwrap();
        let b = renderer.render("second", &set, &cfg).unwrap();

        assert_ne!(a.id(), b.id());
        assert_ne!(a.color, b.color);
        assert_eq!(a.histogram, b.histogram);
    }

    #[test]
    fn figures_are_independent() {
        let mut renderer = HistogramRenderer::new();
        let set = samples();
        let cfg = HistogramConfig::default().with_bins(3);

        let mut a = renderer.render("a", &set, &cfg).unwrap();
        let b = renderer.render("b", &set, &cfg).unwrap();

        a.title.push_str(" (edited)");
        a.histogram.heights.iter_mut().for_each(|h| *h = 0.0);
        drop(a);

        assert_eq!(b.title, "b");
        assert_eq!(b.histogram.counts.iter().sum::<usize>(), set.len());
        assert!(b.histogram.heights.iter().any(|&h| h > 0.0));
    }

    #[test]
    fn failed_render_does_not_consume_an_id() {
        let mut renderer = HistogramRenderer::new();
        let empty = SampleSet::new("empty", Vec::new());

        let err = renderer
            .render("empty", &empty, &HistogramConfig::default())
            .unwrap_err();
        assert_eq!(err, HistogramError::EmptySamples);

        let fig = renderer
            .render("ok", &samples(), &HistogramConfig::default())
            .unwrap();
        assert_eq!(fig.id().to_string(), "Figure 1");
    }

    #[test]
    fn render_leaves_samples_unchanged() {
        let mut renderer = HistogramRenderer::new();
        let set = samples();
        let before = set.clone();
        renderer
            .render("g", &set, &HistogramConfig::default().with_density(true))
            .unwrap();
        assert_eq!(set, before);
    }

    #[test]
    fn axis_label_follows_normalization() {
        let mut renderer = HistogramRenderer::new();
        let set = samples();
        let counts = renderer.render("c", &set, &HistogramConfig::default()).unwrap();
        let density = renderer
            .render("d", &set, &HistogramConfig::default().with_density(true))
            .unwrap();
        assert_eq!(counts.y_label(), "Count");
        assert_eq!(density.y_label(), "Density");
    }
}
