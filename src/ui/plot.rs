use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Collection size per step (central panel, bottom)
// ---------------------------------------------------------------------------

/// Bar chart of how many elements are left after each step. Bar 0 is the
/// untouched source.
pub fn step_size_plot(ui: &mut Ui, state: &AppState) {
    let source_len = state.dataset.dataset().elements().len();

    let mut bars = vec![Bar::new(0.0, source_len as f64)
        .name("source")
        .fill(Color32::GRAY)];

    for (i, entry) in state.result.trace.iter().enumerate() {
        bars.push(
            Bar::new((i + 1) as f64, entry.snapshot.len() as f64)
                .name(format!("{}. {}", i + 1, entry.operation.label()))
                .fill(state.colors.color_for(entry.operation)),
        );
    }

    let chart = BarChart::new(bars).width(0.6).name("Elements");

    Plot::new("step_size_plot")
        .height(180.0)
        .x_axis_label("Step")
        .y_axis_label("Elements")
        .include_y(0.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
