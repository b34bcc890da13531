use std::fmt;

use serde::Serialize;

use super::operation::OperationKind;

// ---------------------------------------------------------------------------
// Elements – a homogeneous working collection
// ---------------------------------------------------------------------------

/// An ordered, homogeneous collection of stream elements.
///
/// The two variants mirror the two dataset flavours: every element of a
/// collection is either a number or a word, never a mix.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Elements {
    Numbers(Vec<f64>),
    Words(Vec<String>),
}

impl Elements {
    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            Elements::Numbers(v) => v.len(),
            Elements::Words(v) => v.len(),
        }
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Renders the collection the way the trace panel shows it: `[12,18.5]` or
/// `["FAST","CLEAN"]`.
impl fmt::Display for Elements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        match self {
            Elements::Numbers(values) => {
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write_number(f, *v)?;
                }
            }
            Elements::Words(words) => {
                for (i, w) in words.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write_quoted(f, w)?;
                }
            }
        }
        write!(f, "]")
    }
}

// ---------------------------------------------------------------------------
// Scalar – the single value produced by a reduction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Wrap the scalar as a one-element collection (used for the reduce snapshot).
    pub fn into_elements(self) -> Elements {
        match self {
            Scalar::Number(n) => Elements::Numbers(vec![n]),
            Scalar::Text(s) => Elements::Words(vec![s]),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write_number(f, *n),
            Scalar::Text(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Simulation output
// ---------------------------------------------------------------------------

/// The final value of a simulation: the last working collection, or the
/// reduced scalar when the pipeline reached `reduce`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Collection(Elements),
    Scalar(Scalar),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Collection(elements) => write!(f, "{elements}"),
            Outcome::Scalar(scalar) => write!(f, "{scalar}"),
        }
    }
}

/// Snapshot of the working collection right after one pipeline step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceEntry {
    pub operation: OperationKind,
    pub snapshot: Elements,
}

/// Result of replaying a pipeline against a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub final_value: Outcome,
    pub trace: Vec<TraceEntry>,
}

// -- formatting helpers --

/// Integral values print without a fraction (`115`, not `115.0`).
fn write_number(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        write!(f, "{}", v as i64)
    } else {
        write!(f, "{v}")
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    match serde_json::to_string(s) {
        Ok(quoted) => write!(f, "{quoted}"),
        Err(_) => write!(f, "\"{s}\""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_render_without_trailing_fraction() {
        let elements = Elements::Numbers(vec![14.4, 21.6, 36.0]);
        assert_eq!(elements.to_string(), "[14.4,21.6,36]");
    }

    #[test]
    fn words_render_quoted() {
        let elements = Elements::Words(vec!["FAST".to_string(), "say \"hi\"".to_string()]);
        assert_eq!(elements.to_string(), r#"["FAST","say \"hi\""]"#);
    }

    #[test]
    fn empty_collection_renders_brackets() {
        assert_eq!(Elements::Numbers(Vec::new()).to_string(), "[]");
        assert!(Elements::Words(Vec::new()).is_empty());
    }

    #[test]
    fn scalar_outcome_renders_bare() {
        let number = Outcome::Scalar(Scalar::Number(115.0));
        let text = Outcome::Scalar(Scalar::Text("fast, clean".to_string()));
        assert_eq!(number.to_string(), "115");
        assert_eq!(text.to_string(), "fast, clean");
    }

    #[test]
    fn scalar_wraps_into_single_element_snapshot() {
        let snapshot = Scalar::Number(115.0).into_elements();
        assert_eq!(snapshot, Elements::Numbers(vec![115.0]));
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn outcome_serializes_untagged() {
        let json = serde_json::to_string(&Outcome::Collection(Elements::Numbers(vec![1.5])))
            .unwrap();
        assert_eq!(json, "[1.5]");
    }
}
