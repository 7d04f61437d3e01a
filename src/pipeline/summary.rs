//! # Summary Assembly
//!
//! Combines object extraction and density calculation into the structured
//! record that downstream consumers (the JSON summarizer, the CLI display)
//! work with.

use serde::{Deserialize, Serialize};

use crate::pipeline::density::density;
use crate::pipeline::extract::ObjectExtractor;

/// Structured result of analyzing one image description.
///
/// `object_count` always equals `objects.len()`; the record is built in a
/// single synchronous pass, so the two cannot drift apart. `odd` is the
/// Object Density Descriptor computed from the count and the area supplied
/// at build time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// The original free-text description, unmodified.
    pub description: String,
    /// Number of distinct lexicon terms detected.
    pub object_count: usize,
    /// Object Density Descriptor: `object_count / area`, 0 when area is
    /// not positive.
    pub odd: f64,
    /// The detected terms, in canonical lowercase form.
    pub objects: Vec<String>,
}

/// Builds [`SummaryRecord`]s from description text.
///
/// Composes the extractor and the density calculation; the input text is
/// never mutated, only scanned.
#[derive(Debug, Clone, Default)]
pub struct SummaryBuilder {
    extractor: ObjectExtractor,
}

impl SummaryBuilder {
    /// Create a builder using the given extractor (and its lexicon).
    pub fn new(extractor: ObjectExtractor) -> Self {
        Self { extractor }
    }

    /// Analyze `description` against `area` square units.
    ///
    /// Empty or malformed text is a valid zero-match input, not an error:
    /// the result has `object_count == 0` and `odd == 0.0`.
    pub fn build(&self, description: &str, area: f64) -> SummaryRecord {
        let objects = self.extractor.extract(description);
        let object_count = objects.len();
        let odd = density(object_count, area);

        SummaryRecord {
            description: description.to_string(),
            object_count,
            odd,
            objects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_counts_match_objects() {
        let builder = SummaryBuilder::default();
        let record = builder.build("A dog sits near a car under a tree.", 100.0);
        assert_eq!(record.object_count, record.objects.len());
        assert_eq!(record.object_count, 3);
        assert_eq!(record.odd, 0.03);
        assert_eq!(record.objects, vec!["dog", "car", "tree"]);
    }

    #[test]
    fn test_build_preserves_description() {
        let builder = SummaryBuilder::default();
        let text = "Two PEOPLE near a Building!";
        let record = builder.build(text, 100.0);
        assert_eq!(record.description, text);
    }

    #[test]
    fn test_build_empty_description() {
        let builder = SummaryBuilder::default();
        let record = builder.build("", 100.0);
        assert_eq!(record.object_count, 0);
        assert_eq!(record.odd, 0.0);
        assert!(record.objects.is_empty());
    }

    #[test]
    fn test_build_zero_area_guard() {
        let builder = SummaryBuilder::default();
        let record = builder.build("A dog and a cat.", 0.0);
        assert_eq!(record.object_count, 2);
        assert_eq!(record.odd, 0.0);
    }

    #[test]
    fn test_record_serializes_with_expected_keys() {
        let builder = SummaryBuilder::default();
        let record = builder.build("A boat on the ocean.", 100.0);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["object_count"], 2);
        assert_eq!(value["odd"], 0.02);
        assert!(value["objects"].is_array());
        assert!(value["description"].is_string());
    }
}
