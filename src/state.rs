use crate::figure::{Figure, FigureId};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// A figure plus whether its window is currently shown.
pub struct FigureWindow {
    pub figure: Figure,
    pub open: bool,
}

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Every figure handed to the viewer, in creation order.
    pub windows: Vec<FigureWindow>,
}

impl AppState {
    /// Take ownership of the figures; all start open.
    pub fn new(figures: Vec<Figure>) -> Self {
        Self {
            windows: figures
                .into_iter()
                .map(|figure| FigureWindow { figure, open: true })
                .collect(),
        }
    }

    /// Number of figures whose window is shown.
    pub fn open_count(&self) -> usize {
        self.windows.iter().filter(|w| w.open).count()
    }

    /// Hide a figure's window. The figure itself is kept for reopening.
    pub fn close(&mut self, id: FigureId) {
        if let Some(w) = self.window_mut(id) {
            w.open = false;
            log::debug!("{id} closed");
        }
    }

    pub fn reopen(&mut self, id: FigureId) {
        if let Some(w) = self.window_mut(id) {
            w.open = true;
        }
    }

    fn window_mut(&mut self, id: FigureId) -> Option<&mut FigureWindow> {
        self.windows.iter_mut().find(|w| w.figure.id() == id)
    }
}
