//! # Object Lexicon
//!
//! The fixed vocabulary of object terms recognized in image descriptions.
//! Membership is static for the lifetime of a lexicon; detection never
//! learns or updates terms at runtime.

use std::collections::HashSet;

/// Default object vocabulary, spanning broad everyday categories:
/// people, vehicles, aircraft, animals, nature, structures, sky
/// phenomena, watercraft, food, and devices.
const DEFAULT_TERMS: &[&str] = &[
    // People
    "people", "person", "man", "woman", "child", "boy", "girl",
    // Ground vehicles
    "car", "vehicle", "truck", "bus", "bicycle", "motorcycle",
    // Aircraft
    "plane", "airplane", "jet", "helicopter",
    // Animals
    "dog", "cat", "animal", "bird", "horse", "cow", "sheep", "elephant",
    // Nature
    "tree", "flower", "grass", "forest", "mountain", "beach", "ocean",
    // Structures
    "building", "house", "skyscraper", "bridge", "road", "street",
    // Sky
    "sky", "cloud", "sun", "moon", "star",
    // Watercraft and rail
    "boat", "ship", "train",
    // Food
    "food", "fruit", "vegetable", "drink",
    // Devices
    "computer", "phone", "camera",
];

/// Canonical set of recognized object terms.
///
/// Terms are stored in lowercase; lookups are expected to be performed on
/// already-lowercased tokens (see [`crate::pipeline::ObjectExtractor`]).
/// The lexicon is read-only after construction and safe to share across
/// any number of concurrent pipeline invocations.
#[derive(Debug, Clone)]
pub struct ObjectLexicon {
    terms: HashSet<String>,
}

impl ObjectLexicon {
    /// Build a lexicon from an explicit term list.
    ///
    /// Terms are canonicalized to lowercase, so callers may pass
    /// mixed-case vocabulary.
    pub fn with_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Whether `token` (already lowercased) is a recognized object term.
    pub fn contains(&self, token: &str) -> bool {
        self.terms.contains(token)
    }

    /// Number of terms in the vocabulary.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over the canonical terms (unordered).
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

impl Default for ObjectLexicon {
    /// The built-in common-object vocabulary.
    fn default() -> Self {
        Self::with_terms(DEFAULT_TERMS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lexicon_contains_common_objects() {
        let lexicon = ObjectLexicon::default();
        assert!(lexicon.contains("dog"));
        assert!(lexicon.contains("car"));
        assert!(lexicon.contains("skyscraper"));
        assert!(!lexicon.contains("quasar"));
        assert!(!lexicon.is_empty());
    }

    #[test]
    fn test_terms_are_canonical_lowercase() {
        let lexicon = ObjectLexicon::with_terms(["Dog", "CAR"]);
        assert!(lexicon.contains("dog"));
        assert!(lexicon.contains("car"));
        // Lookups are on lowercased tokens only.
        assert!(!lexicon.contains("Dog"));
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn test_duplicate_terms_collapse() {
        let lexicon = ObjectLexicon::with_terms(["tree", "Tree", "TREE"]);
        assert_eq!(lexicon.len(), 1);
    }
}
