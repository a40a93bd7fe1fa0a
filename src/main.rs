mod app;
mod color;
mod config;
mod data;
mod figure;
mod histogram;
mod state;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};
use app::VariateViewerApp;
use config::PlotJob;
use data::loader::load_samples;
use eframe::egui;
use figure::{Figure, HistogramRenderer};

fn main() -> Result<()> {
    env_logger::init();

    let figures = build_figures(Path::new("."), &config::plot_jobs()).inspect_err(|e| {
        log::error!("{e:#}");
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE)
            .with_min_inner_size(config::MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        config::WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(VariateViewerApp::new(figures)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}

/// Load and render every job, stopping at the first failure.
fn build_figures(data_dir: &Path, jobs: &[PlotJob]) -> Result<Vec<Figure>> {
    let mut renderer = HistogramRenderer::new();

    jobs.iter()
        .map(|job| {
            let path = data_dir.join(job.file_name);
            let samples = load_samples(&path)
                .with_context(|| format!("loading samples for '{}'", job.title))?;
            log::info!("Loaded {samples}");

            let figure = renderer
                .render(job.title, &samples, &job.histogram)
                .with_context(|| format!("rendering '{}'", job.title))?;
            log::info!("{} ready: {}", figure.id(), figure.title);
            Ok(figure)
        })
        .collect()
}
