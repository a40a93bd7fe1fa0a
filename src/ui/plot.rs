use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::figure::Figure;

// ---------------------------------------------------------------------------
// Histogram plot (inside a figure window)
// ---------------------------------------------------------------------------

/// Draw one figure's histogram as touching bars.
pub fn histogram_plot(ui: &mut Ui, figure: &Figure) {
    let hist = &figure.histogram;
    let width = hist.bin_width();

    let bars: Vec<Bar> = hist
        .centers()
        .zip(hist.heights.iter())
        .zip(hist.counts.iter())
        .map(|((center, &height), &count)| {
            Bar::new(center, height)
                .width(width)
                .name(format!("{count} samples"))
        })
        .collect();

    let chart = BarChart::new(bars)
        .name(format!("{} (n = {})", figure.title, hist.total))
        .color(figure.color);

    Plot::new(("histogram", figure.id()))
        .legend(Legend::default())
        .x_axis_label("Value")
        .y_axis_label(figure.y_label())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
