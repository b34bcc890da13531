use serde::{Deserialize, Serialize};

use crate::color::OperationColors;
use crate::data::dataset::DatasetId;
use crate::data::model::SimulationResult;
use crate::data::operation::OperationKind;
use crate::data::pipeline::{simulate, toggle, without_repeats};

/// The selection shown when the playground opens for the first time.
const DEFAULT_PIPELINE: [OperationKind; 5] = [
    OperationKind::Filter,
    OperationKind::Map,
    OperationKind::Peek,
    OperationKind::Distinct,
    OperationKind::Sorted,
];

// ---------------------------------------------------------------------------
// Persisted selection
// ---------------------------------------------------------------------------

/// The part of the state that survives a restart. The simulation result is
/// always recomputed, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    pub dataset: DatasetId,
    pub pipeline: Vec<OperationKind>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            dataset: DatasetId::default(),
            pipeline: DEFAULT_PIPELINE.to_vec(),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Dataset the pipeline runs against.
    pub dataset: DatasetId,

    /// Active operations, in the order they are applied.
    pub pipeline: Vec<OperationKind>,

    /// Result of the last simulation (recomputed on every change).
    pub result: SimulationResult,

    /// Colour per operation kind.
    pub colors: OperationColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_selection(Selection::default())
    }
}

impl AppState {
    /// Rebuild state from a restored selection. Repeated operations are
    /// dropped; the saved order is kept.
    pub fn from_selection(selection: Selection) -> Self {
        let pipeline = without_repeats(&selection.pipeline);
        let result = simulate(selection.dataset, &pipeline);
        Self {
            dataset: selection.dataset,
            pipeline,
            result,
            colors: OperationColors::default(),
            status_message: None,
        }
    }

    /// Snapshot of what should be persisted.
    pub fn selection(&self) -> Selection {
        Selection {
            dataset: self.dataset,
            pipeline: self.pipeline.clone(),
        }
    }

    /// Re-run the simulation for the current dataset and pipeline.
    pub fn recompute(&mut self) {
        self.result = simulate(self.dataset, &self.pipeline);
        log::debug!(
            "simulated {} over [{}]: {} step(s), result {}",
            self.dataset,
            self.pipeline
                .iter()
                .map(|k| k.label())
                .collect::<Vec<_>>()
                .join(", "),
            self.result.trace.len(),
            self.result.final_value
        );
    }

    /// Switch to another dataset, keeping the pipeline.
    pub fn set_dataset(&mut self, dataset: DatasetId) {
        if self.dataset == dataset {
            return;
        }
        log::info!("Switched dataset to {}", dataset.dataset().label);
        self.dataset = dataset;
        self.recompute();
    }

    /// Toggle a single operation in or out of the pipeline.
    pub fn toggle_operation(&mut self, kind: OperationKind) {
        self.pipeline = toggle(&self.pipeline, kind);
        self.recompute();
    }

    /// Whether `kind` is part of the active pipeline.
    pub fn is_active(&self, kind: OperationKind) -> bool {
        self.pipeline.contains(&kind)
    }

    /// Select every operation.
    pub fn select_all(&mut self) {
        self.pipeline = OperationKind::ALL.to_vec();
        self.recompute();
    }

    /// Deselect every operation.
    pub fn clear_pipeline(&mut self) {
        self.pipeline.clear();
        self.recompute();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Outcome, Scalar};

    #[test]
    fn default_state_runs_the_initial_pipeline() {
        let state = AppState::default();
        assert_eq!(state.dataset, DatasetId::Numbers);
        assert_eq!(state.pipeline, DEFAULT_PIPELINE.to_vec());
        assert_eq!(state.result.trace.len(), 5);
        assert_eq!(state.result.final_value.to_string(), "[14.4,21.6,27.6,36]");
    }

    #[test]
    fn toggling_recomputes_result() {
        let mut state = AppState::default();
        state.clear_pipeline();
        assert!(state.result.trace.is_empty());

        state.toggle_operation(OperationKind::Reduce);
        assert!(state.is_active(OperationKind::Reduce));
        assert_eq!(state.result.final_value, Outcome::Scalar(Scalar::Number(115.0)));

        state.toggle_operation(OperationKind::Reduce);
        assert!(!state.is_active(OperationKind::Reduce));
    }

    #[test]
    fn switching_dataset_keeps_pipeline() {
        let mut state = AppState::default();
        state.clear_pipeline();
        state.toggle_operation(OperationKind::Filter);
        state.set_dataset(DatasetId::Words);
        assert_eq!(state.pipeline, vec![OperationKind::Filter]);
        assert_eq!(state.result.final_value.to_string(), r#"["friendly","friendly","clean"]"#);
    }

    #[test]
    fn select_all_uses_canonical_order() {
        let mut state = AppState::default();
        state.select_all();
        assert_eq!(state.pipeline, OperationKind::ALL.to_vec());
        assert!(matches!(state.result.final_value, Outcome::Scalar(_)));
    }

    #[test]
    fn restored_selection_drops_repeats_in_saved_order() {
        let selection = Selection {
            dataset: DatasetId::Words,
            pipeline: vec![OperationKind::Limit, OperationKind::Filter, OperationKind::Limit],
        };
        let state = AppState::from_selection(selection);
        assert_eq!(state.pipeline, vec![OperationKind::Limit, OperationKind::Filter]);
        assert_eq!(state.result.trace.len(), 2);
        assert_eq!(state.result.final_value.to_string(), r#"["friendly","friendly"]"#);
    }

    #[test]
    fn default_selection_survives_restart_unchanged() {
        let first = AppState::default();
        let json = serde_json::to_string(&first.selection()).unwrap();
        let saved: Selection = serde_json::from_str(&json).unwrap();

        let restored = AppState::from_selection(saved);
        assert_eq!(restored.pipeline, DEFAULT_PIPELINE.to_vec());
        assert_eq!(restored.result, first.result);
    }

    #[test]
    fn selection_round_trips_through_json() {
        let mut state = AppState::default();
        state.set_dataset(DatasetId::Words);
        let json = serde_json::to_string(&state.selection()).unwrap();
        let back: Selection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state.selection());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let back: Selection = serde_json::from_str(r#"{"dataset":"words"}"#).unwrap();
        assert_eq!(back.dataset, DatasetId::Words);
        assert_eq!(back.pipeline, DEFAULT_PIPELINE.to_vec());
    }
}
