use std::fmt;

use serde::{Deserialize, Serialize};

use super::dataset::DatasetId;

// ---------------------------------------------------------------------------
// OperationKind – the closed set of stream operations the playground offers
// ---------------------------------------------------------------------------

/// A stream operation the user can toggle into the pipeline.
///
/// Each kind carries a fixed canonical [`rank`](OperationKind::rank) which the
/// selection controller uses to keep the pipeline in a single deterministic
/// order regardless of the order the user clicked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Filter,
    Map,
    Peek,
    Sorted,
    Distinct,
    Limit,
    Reduce,
}

impl OperationKind {
    /// All kinds, in canonical order.
    pub const ALL: [OperationKind; 7] = [
        OperationKind::Filter,
        OperationKind::Map,
        OperationKind::Peek,
        OperationKind::Sorted,
        OperationKind::Distinct,
        OperationKind::Limit,
        OperationKind::Reduce,
    ];

    /// Canonical position inside a pipeline.
    pub fn rank(self) -> u8 {
        match self {
            OperationKind::Filter => 0,
            OperationKind::Map => 1,
            OperationKind::Peek => 2,
            OperationKind::Sorted => 3,
            OperationKind::Distinct => 4,
            OperationKind::Limit => 5,
            OperationKind::Reduce => 6,
        }
    }

    /// The Java method name.
    pub fn label(self) -> &'static str {
        match self {
            OperationKind::Filter => "filter",
            OperationKind::Map => "map",
            OperationKind::Peek => "peek",
            OperationKind::Sorted => "sorted",
            OperationKind::Distinct => "distinct",
            OperationKind::Limit => "limit",
            OperationKind::Reduce => "reduce",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OperationKind::Filter => "Keep elements that match a predicate",
            OperationKind::Map => "Transform each element",
            OperationKind::Peek => "Log intermediate values without changing them",
            OperationKind::Sorted => "Sort elements using their natural order",
            OperationKind::Distinct => "Remove duplicates",
            OperationKind::Limit => "Take the first n elements",
            OperationKind::Reduce => "Collapse elements into a single result",
        }
    }

    /// Java argument shown under a trace step, phrased for the dataset the
    /// step ran against.
    pub fn lambda(self, dataset: DatasetId) -> &'static str {
        match (self, dataset) {
            (OperationKind::Filter, DatasetId::Numbers) => "sales -> sales >= 10",
            (OperationKind::Filter, DatasetId::Words) => "comment -> comment.length() >= 5",
            (OperationKind::Map, DatasetId::Numbers) => "sales -> sales * 1.2",
            (OperationKind::Map, DatasetId::Words) => "String::toUpperCase",
            (OperationKind::Peek, _) => "System.out::println",
            (OperationKind::Sorted, _) => "natural order",
            (OperationKind::Distinct, _) => "remove duplicates",
            (OperationKind::Limit, _) => "take first 3",
            (OperationKind::Reduce, DatasetId::Numbers) => "Integer::sum",
            (OperationKind::Reduce, DatasetId::Words) => "(a, b) -> a + \", \" + b",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_listed_in_rank_order() {
        let ranks: Vec<u8> = OperationKind::ALL.iter().map(|k| k.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn serde_uses_method_names() {
        let json = serde_json::to_string(&OperationKind::Distinct).unwrap();
        assert_eq!(json, "\"distinct\"");
        let back: OperationKind = serde_json::from_str("\"reduce\"").unwrap();
        assert_eq!(back, OperationKind::Reduce);
    }

    #[test]
    fn lambda_follows_dataset() {
        assert_eq!(OperationKind::Filter.lambda(DatasetId::Numbers), "sales -> sales >= 10");
        assert_eq!(OperationKind::Map.lambda(DatasetId::Words), "String::toUpperCase");
        assert_eq!(OperationKind::Limit.lambda(DatasetId::Words), "take first 3");
    }

    #[test]
    fn display_matches_label() {
        for kind in OperationKind::ALL {
            assert_eq!(kind.to_string(), kind.label());
        }
    }
}
