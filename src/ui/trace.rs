use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const ROW_HEIGHT: f32 = 22.0;

// ---------------------------------------------------------------------------
// Pipeline trace (central panel, top)
// ---------------------------------------------------------------------------

/// Render the step-by-step trace table.
pub fn trace_table(ui: &mut Ui, state: &AppState) {
    ui.heading("Pipeline Trace");

    if state.result.trace.is_empty() {
        ui.label(RichText::new("Select operations to see how the stream evolves.").weak());
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::exact(28.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::remainder().at_least(160.0).clip(true))
        .column(Column::auto())
        .header(ROW_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            header.col(|ui| {
                ui.strong("Operation");
            });
            header.col(|ui| {
                ui.strong("Snapshot");
            });
            header.col(|ui| {
                ui.strong("Java");
            });
        })
        .body(|mut body| {
            for (i, entry) in state.result.trace.iter().enumerate() {
                let color = state.colors.color_for(entry.operation);
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label(format!("{}", i + 1));
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(entry.operation.label()).color(color).strong());
                    });
                    row.col(|ui| {
                        if entry.snapshot.is_empty() {
                            ui.label(RichText::new("[] (empty)").monospace().weak());
                        } else {
                            ui.monospace(entry.snapshot.to_string());
                        }
                    });
                    row.col(|ui| {
                        let lambda = entry.operation.lambda(state.dataset);
                        ui.label(RichText::new(lambda).small().weak());
                    });
                });
            }
        });
}

/// Render the final value of the simulation.
pub fn result_line(ui: &mut Ui, state: &AppState) {
    ui.label(RichText::new("RESULT").small().weak());
    ui.label(
        RichText::new(state.result.final_value.to_string())
            .monospace()
            .strong()
            .size(16.0),
    );
}
