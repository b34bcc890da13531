use anyhow::Context as _;
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::dataset::DatasetId;
use crate::data::operation::OperationKind;
use crate::export;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – dataset and operation selection
// ---------------------------------------------------------------------------

/// Render the left selection panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Stream Pipeline Playground");
    ui.label("Combine intermediate operations and observe how data flows through a Java Stream.");
    ui.separator();

    // ---- Dataset selector ----
    ui.strong("Dataset");
    let current = state.dataset;
    egui::ComboBox::from_id_salt("dataset")
        .selected_text(current.dataset().label)
        .show_ui(ui, |ui: &mut Ui| {
            for ds in DatasetId::ALL.map(DatasetId::dataset) {
                if ui.selectable_label(current == ds.id, ds.label).clicked() {
                    state.set_dataset(ds.id);
                }
            }
        });

    ui.add_space(4.0);
    ui.label(RichText::new("SOURCE").small().weak());
    ui.code(state.dataset.dataset().display_source);
    ui.separator();

    // ---- Operation toggles ----
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Operations");
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.clear_pipeline();
        }
    });

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for kind in OperationKind::ALL {
                operation_toggle(ui, state, kind);
            }
        });
}

fn operation_toggle(ui: &mut Ui, state: &mut AppState, kind: OperationKind) {
    let active = state.is_active(kind);
    let mut text = RichText::new(kind.label()).strong();
    if active {
        text = text.color(state.colors.color_for(kind));
    }

    ui.add_space(2.0);
    if ui
        .selectable_label(active, text)
        .on_hover_text(kind.lambda(state.dataset))
        .clicked()
    {
        state.toggle_operation(kind);
    }
    ui.label(RichText::new(kind.description()).small().weak());
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export trace…").clicked() {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} · {} operation(s)",
            state.dataset.dataset().label,
            state.pipeline.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Export dialog
// ---------------------------------------------------------------------------

pub fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export pipeline trace")
        .set_file_name(format!("{}-trace.json", state.dataset))
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .save_file();

    let Some(path) = file else {
        return;
    };

    let written = export::write_trace(&path, state.dataset, &state.pipeline, &state.result)
        .with_context(|| format!("exporting trace to {}", path.display()));

    match written {
        Ok(()) => {
            log::info!(
                "Exported {} trace step(s) to {}",
                state.result.trace.len(),
                path.display()
            );
            state.status_message = None;
        }
        Err(e) => {
            log::error!("Failed to export trace: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
