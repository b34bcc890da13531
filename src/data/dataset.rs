use std::fmt;

use serde::{Deserialize, Serialize};

use super::model::Elements;

// ---------------------------------------------------------------------------
// Dataset registry – two fixed, read-only sources
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetId {
    #[default]
    Numbers,
    Words,
}

/// Borrowed view of a dataset's elements as stored in the registry.
#[derive(Debug, Clone, Copy)]
enum Source {
    Numbers(&'static [f64]),
    Words(&'static [&'static str]),
}

/// A fixed, immutable dataset the playground streams over.
#[derive(Debug)]
pub struct Dataset {
    pub id: DatasetId,
    /// Human-readable name for the selector.
    pub label: &'static str,
    /// Java declaration shown above the operation toggles.
    pub display_source: &'static str,
    source: Source,
}

const NUMBERS: Dataset = Dataset {
    id: DatasetId::Numbers,
    label: "Sales per Day",
    display_source: "List<Integer> sales = List.of(12, 5, 18, 23, 18, 9, 30);",
    source: Source::Numbers(&[12.0, 5.0, 18.0, 23.0, 18.0, 9.0, 30.0]),
};

const WORDS: Dataset = Dataset {
    id: DatasetId::Words,
    label: "Customer Feedback",
    display_source:
        "List<String> comments = List.of(\"fast\", \"friendly\", \"friendly\", \"clean\", \"fast\");",
    source: Source::Words(&["fast", "friendly", "friendly", "clean", "fast"]),
};

impl DatasetId {
    pub const ALL: [DatasetId; 2] = [DatasetId::Numbers, DatasetId::Words];

    /// Look up the registry entry for this id.
    pub fn dataset(self) -> &'static Dataset {
        match self {
            DatasetId::Numbers => &NUMBERS,
            DatasetId::Words => &WORDS,
        }
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetId::Numbers => f.write_str("numbers"),
            DatasetId::Words => f.write_str("words"),
        }
    }
}

impl Dataset {
    /// A fresh owned copy of the elements. The registry itself is never touched.
    pub fn elements(&self) -> Elements {
        match self.source {
            Source::Numbers(values) => Elements::Numbers(values.to_vec()),
            Source::Words(words) => Elements::Words(words.iter().map(|w| w.to_string()).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_ids_match_entries() {
        for id in DatasetId::ALL {
            assert_eq!(id.dataset().id, id);
        }
    }

    #[test]
    fn numbers_dataset_contents() {
        let ds = DatasetId::Numbers.dataset();
        assert_eq!(ds.label, "Sales per Day");
        assert_eq!(
            ds.elements(),
            Elements::Numbers(vec![12.0, 5.0, 18.0, 23.0, 18.0, 9.0, 30.0])
        );
    }

    #[test]
    fn words_dataset_contents() {
        let ds = DatasetId::Words.dataset();
        assert_eq!(ds.label, "Customer Feedback");
        assert_eq!(ds.elements().to_string(), r#"["fast","friendly","friendly","clean","fast"]"#);
        assert!(matches!(ds.source, Source::Words(w) if w.len() == 5));
    }

    #[test]
    fn elements_are_independent_copies() {
        let ds = DatasetId::Numbers.dataset();
        let mut first = ds.elements();
        if let Elements::Numbers(v) = &mut first {
            v.clear();
        }
        assert_eq!(ds.elements().len(), 7);
    }
}
