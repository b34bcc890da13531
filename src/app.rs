use eframe::egui;

use crate::state::{AppState, Selection};
use crate::ui::{panels, plot, trace};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct StreamExplorerApp {
    pub state: AppState,
}

impl StreamExplorerApp {
    /// Restore the last dataset and pipeline selection, if any.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = cc
            .storage
            .and_then(|storage| eframe::get_value::<Selection>(storage, eframe::APP_KEY))
            .map(|selection| {
                log::info!(
                    "Restored {} with {} operation(s)",
                    selection.dataset,
                    selection.pipeline.len()
                );
                AppState::from_selection(selection)
            })
            .unwrap_or_default();

        Self { state }
    }
}

impl eframe::App for StreamExplorerApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.state.selection());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: dataset + operations ----
        egui::SidePanel::left("playground_panel")
            .default_width(300.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: step sizes ----
        egui::TopBottomPanel::bottom("step_sizes")
            .resizable(true)
            .show(ctx, |ui| {
                plot::step_size_plot(ui, &self.state);
            });

        // ---- Central panel: trace + result ----
        egui::CentralPanel::default().show(ctx, |ui| {
            trace::result_line(ui, &self.state);
            ui.separator();
            trace::trace_table(ui, &self.state);
        });
    }
}
