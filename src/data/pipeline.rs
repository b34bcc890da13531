use std::collections::HashSet;

use super::dataset::DatasetId;
use super::model::{Elements, Outcome, Scalar, SimulationResult, TraceEntry};
use super::operation::OperationKind;

/// Numbers below this are dropped by `filter`.
const MIN_NUMBER: f64 = 10.0;
/// Words shorter than this (in characters) are dropped by `filter`.
const MIN_WORD_LEN: usize = 5;
const MAP_FACTOR: f64 = 1.2;
const LIMIT: usize = 3;
const JOIN_SEPARATOR: &str = ", ";

// ---------------------------------------------------------------------------
// Selection controller
// ---------------------------------------------------------------------------

/// Toggle `kind` in `current`: remove it if present, otherwise add it and
/// re-sort the whole selection by canonical rank.
pub fn toggle(current: &[OperationKind], kind: OperationKind) -> Vec<OperationKind> {
    if current.contains(&kind) {
        return current.iter().copied().filter(|k| *k != kind).collect();
    }
    let mut next = current.to_vec();
    next.push(kind);
    next.sort_by_key(|k| k.rank());
    next
}

/// Drop repeated operations, keeping the first occurrence of each and the
/// order they were given in.
pub fn without_repeats(selection: &[OperationKind]) -> Vec<OperationKind> {
    let mut seen = HashSet::new();
    selection
        .iter()
        .copied()
        .filter(|k| seen.insert(*k))
        .collect()
}

// ---------------------------------------------------------------------------
// Pipeline simulator
// ---------------------------------------------------------------------------

/// Replay `pipeline` against a fresh copy of the dataset, strictly in the
/// order given.
///
/// A snapshot is recorded after every step. `reduce` is terminal: once it has
/// run, any remaining operations are ignored and the reduced scalar becomes
/// the final value.
pub fn simulate(dataset: DatasetId, pipeline: &[OperationKind]) -> SimulationResult {
    let mut working = dataset.dataset().elements();
    let mut trace = Vec::with_capacity(pipeline.len());

    for (step, &op) in pipeline.iter().enumerate() {
        if op == OperationKind::Reduce {
            let reduced = reduce(&working);
            trace.push(TraceEntry {
                operation: op,
                snapshot: reduced.clone().into_elements(),
            });
            let skipped = pipeline.len() - step - 1;
            if skipped > 0 {
                log::debug!("reduce is terminal, ignoring {skipped} trailing operation(s)");
            }
            return SimulationResult {
                final_value: Outcome::Scalar(reduced),
                trace,
            };
        }

        working = apply(op, working);
        trace.push(TraceEntry {
            operation: op,
            snapshot: working.clone(),
        });
    }

    SimulationResult {
        final_value: Outcome::Collection(working),
        trace,
    }
}

/// Apply one collection-shaped operation. `Reduce` is handled by the caller.
fn apply(op: OperationKind, elements: Elements) -> Elements {
    match (op, elements) {
        (OperationKind::Filter, Elements::Numbers(mut v)) => {
            v.retain(|n| *n >= MIN_NUMBER);
            Elements::Numbers(v)
        }
        (OperationKind::Filter, Elements::Words(mut v)) => {
            v.retain(|w| w.chars().count() >= MIN_WORD_LEN);
            Elements::Words(v)
        }
        (OperationKind::Map, Elements::Numbers(v)) => {
            Elements::Numbers(v.into_iter().map(scale).collect())
        }
        (OperationKind::Map, Elements::Words(v)) => {
            Elements::Words(v.iter().map(|w| w.to_uppercase()).collect())
        }
        (OperationKind::Sorted, Elements::Numbers(mut v)) => {
            v.sort_by(f64::total_cmp);
            Elements::Numbers(v)
        }
        (OperationKind::Sorted, Elements::Words(mut v)) => {
            v.sort();
            Elements::Words(v)
        }
        (OperationKind::Distinct, Elements::Numbers(mut v)) => {
            let mut seen = HashSet::new();
            // -0.0 and 0.0 are the same value here.
            v.retain(|n| seen.insert(if *n == 0.0 { 0 } else { n.to_bits() }));
            Elements::Numbers(v)
        }
        (OperationKind::Distinct, Elements::Words(mut v)) => {
            let mut seen = HashSet::new();
            v.retain(|w| seen.insert(w.clone()));
            Elements::Words(v)
        }
        (OperationKind::Limit, Elements::Numbers(mut v)) => {
            v.truncate(LIMIT);
            Elements::Numbers(v)
        }
        (OperationKind::Limit, Elements::Words(mut v)) => {
            v.truncate(LIMIT);
            Elements::Words(v)
        }
        (OperationKind::Peek | OperationKind::Reduce, elements) => elements,
    }
}

/// `v * 1.2`, rounded to one decimal with halves going up.
fn scale(v: f64) -> f64 {
    (v * MAP_FACTOR * 10.0 + 0.5).floor() / 10.0
}

/// Sum numbers or join words. An empty collection reduces to `0` / `""`.
fn reduce(elements: &Elements) -> Scalar {
    match elements {
        Elements::Numbers(v) => Scalar::Number(v.iter().sum()),
        Elements::Words(v) => Scalar::Text(v.join(JOIN_SEPARATOR)),
    }
}
