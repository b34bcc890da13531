use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::data::dataset::DatasetId;
use crate::data::model::{Elements, Outcome, SimulationResult};
use crate::data::operation::OperationKind;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unsupported export extension: .{0}")]
    UnsupportedExtension(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type ExportResult<T> = std::result::Result<T, ExportError>;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Write a simulation trace to a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `{ dataset, pipeline, trace: [{ step, operation, snapshot }], result }`
/// * `.csv`  – `step,operation,size,snapshot`, one row per step plus a `result` row
pub fn write_trace(
    path: &Path,
    dataset: DatasetId,
    pipeline: &[OperationKind],
    result: &SimulationResult,
) -> ExportResult<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => write_json(path, dataset, pipeline, result),
        "csv" => write_csv(path, result),
        other => Err(ExportError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// JSON writer
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct TraceDocument<'a> {
    dataset: DatasetId,
    pipeline: &'a [OperationKind],
    trace: Vec<StepRecord<'a>>,
    result: &'a Outcome,
}

#[derive(Serialize)]
struct StepRecord<'a> {
    step: usize,
    operation: OperationKind,
    snapshot: &'a Elements,
}

fn write_json(
    path: &Path,
    dataset: DatasetId,
    pipeline: &[OperationKind],
    result: &SimulationResult,
) -> ExportResult<()> {
    let doc = TraceDocument {
        dataset,
        pipeline,
        trace: result
            .trace
            .iter()
            .enumerate()
            .map(|(i, entry)| StepRecord {
                step: i + 1,
                operation: entry.operation,
                snapshot: &entry.snapshot,
            })
            .collect(),
        result: &result.final_value,
    };
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

fn write_csv(path: &Path, result: &SimulationResult) -> ExportResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["step", "operation", "size", "snapshot"])?;

    for (i, entry) in result.trace.iter().enumerate() {
        writer.write_record([
            (i + 1).to_string(),
            entry.operation.label().to_string(),
            entry.snapshot.len().to_string(),
            entry.snapshot.to_string(),
        ])?;
    }

    let size = match &result.final_value {
        Outcome::Collection(elements) => elements.len(),
        Outcome::Scalar(_) => 1,
    };
    writer.write_record([
        String::new(),
        "result".to_string(),
        size.to_string(),
        result.final_value.to_string(),
    ])?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::pipeline::simulate;

    #[test]
    fn json_export_contains_trace_and_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let pipeline = [OperationKind::Filter, OperationKind::Reduce];
        let result = simulate(DatasetId::Numbers, &pipeline);

        write_trace(&path, DatasetId::Numbers, &pipeline, &result).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc["dataset"], "numbers");
        assert_eq!(doc["pipeline"], serde_json::json!(["filter", "reduce"]));
        assert_eq!(doc["trace"][0]["step"], 1);
        assert_eq!(
            doc["trace"][0]["snapshot"],
            serde_json::json!([12.0, 18.0, 23.0, 18.0, 30.0])
        );
        assert_eq!(doc["result"], serde_json::json!(101.0));
    }

    #[test]
    fn csv_export_has_one_row_per_step_plus_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.CSV");
        let pipeline = [OperationKind::Filter, OperationKind::Limit];
        let result = simulate(DatasetId::Words, &pipeline);

        write_trace(&path, DatasetId::Words, &pipeline, &result).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][1], "filter");
        assert_eq!(&rows[0][2], "3");
        assert_eq!(&rows[0][3], r#"["friendly","friendly","clean"]"#);
        assert_eq!(&rows[2][1], "result");
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.xml");
        let result = simulate(DatasetId::Numbers, &[]);

        let err = write_trace(&path, DatasetId::Numbers, &[], &result).unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedExtension(ref ext) if ext == "xml"));
        assert!(!path.exists());
    }
}
