use eframe::egui::{self, Ui};

use crate::figure::FigureId;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu bar: figure visibility and a short summary.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Figures", |ui: &mut Ui| {
            let entries: Vec<(FigureId, String, bool)> = state
                .windows
                .iter()
                .map(|w| (w.figure.id(), format!("{}: {}", w.figure.id(), w.figure.title), w.open))
                .collect();

            for (id, label, open) in entries {
                let mut checked = open;
                if ui.checkbox(&mut checked, label).changed() {
                    if checked {
                        state.reopen(id);
                    } else {
                        state.close(id);
                    }
                }
            }
        });

        ui.separator();

        ui.label(format!(
            "{} of {} figures open",
            state.open_count(),
            state.windows.len()
        ));

        for window in &state.windows {
            ui.separator();
            ui.label(format!(
                "{}: {} samples, {} bins",
                window.figure.title,
                window.figure.histogram.total,
                window.figure.histogram.bin_count()
            ));
        }
    });
}
