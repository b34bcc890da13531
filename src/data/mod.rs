/// Data layer: datasets, operations, and the pipeline simulator.
///
/// Architecture:
/// ```text
///   DatasetId ──► dataset   fixed registry → fresh Elements copy
///        │
///        ▼
///   ┌──────────┐
///   │ pipeline  │  toggle: selection → canonical Vec<OperationKind>
///   │           │  simulate: Elements × ops → SimulationResult
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  model    │  Elements, Scalar, Outcome, TraceEntry
///   └──────────┘
/// ```
///
/// Nothing in here knows about egui.

pub mod dataset;
pub mod model;
pub mod operation;
pub mod pipeline;
