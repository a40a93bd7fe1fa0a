use eframe::egui;

use crate::config::FIGURE_SIZE;
use crate::figure::{Figure, FigureId};
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct VariateViewerApp {
    pub state: AppState,
}

impl VariateViewerApp {
    pub fn new(figures: Vec<Figure>) -> Self {
        Self {
            state: AppState::new(figures),
        }
    }
}

impl eframe::App for VariateViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: backdrop ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.open_count() == 0 {
                ui.centered_and_justified(|ui| {
                    ui.heading("All figures closed  (Figures → …)");
                });
            }
        });

        // ---- One floating window per figure ----
        let mut closed: Vec<FigureId> = Vec::new();
        for (i, window) in self.state.windows.iter().enumerate() {
            if !window.open {
                continue;
            }
            let figure = &window.figure;
            let offset = 40.0 * i as f32;
            let mut open = true;

            egui::Window::new(format!("{}: {}", figure.id(), figure.title))
                .id(egui::Id::new(figure.id()))
                .open(&mut open)
                .default_size(FIGURE_SIZE)
                .default_pos([24.0 + offset, 48.0 + offset])
                .show(ctx, |ui| {
                    plot::histogram_plot(ui, figure);
                });

            if !open {
                closed.push(figure.id());
            }
        }

        for id in closed {
            self.state.close(id);
        }
    }
}
