//! # Object Extraction
//!
//! Case-insensitive whole-word matching of description text against the
//! object lexicon. The matcher tokenizes on standard word-character
//! boundaries (alphanumerics and `_`), so `"car"` matches in `"a car."`
//! but not in `"carpet"`.

use std::collections::HashSet;

use crate::pipeline::lexicon::ObjectLexicon;

/// Scans free-form description text for known object terms.
///
/// Matching is case-insensitive and whole-word; each lexicon term is
/// reported at most once regardless of how often it occurs. Extraction is
/// a pure function of the input text: no state is mutated and repeated
/// calls yield identical results.
#[derive(Debug, Clone)]
pub struct ObjectExtractor {
    lexicon: ObjectLexicon,
}

impl ObjectExtractor {
    /// Create an extractor over the given vocabulary.
    pub fn new(lexicon: ObjectLexicon) -> Self {
        Self { lexicon }
    }

    /// The vocabulary this extractor matches against.
    pub fn lexicon(&self) -> &ObjectLexicon {
        &self.lexicon
    }

    /// Extract the distinct set of lexicon terms mentioned in `text`.
    ///
    /// Returns terms in canonical lowercase form, ordered by first
    /// appearance in the text (order carries no meaning; it is kept
    /// deterministic for display and testing). Empty or match-free text
    /// yields an empty vector, never an error.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut found = Vec::new();

        for word in text.split(|c: char| !is_word_char(c)) {
            if word.is_empty() {
                continue;
            }
            let token = word.to_lowercase();
            if self.lexicon.contains(&token) && seen.insert(token.clone()) {
                found.push(token);
            }
        }

        found
    }
}

impl Default for ObjectExtractor {
    fn default() -> Self {
        Self::new(ObjectLexicon::default())
    }
}

/// Word characters follow the usual `\w` definition: letters, digits, `_`.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_basic_sentence() {
        let extractor = ObjectExtractor::default();
        let objects = extractor.extract("A dog sits near a car under a tree.");
        assert_eq!(objects, vec!["dog", "car", "tree"]);
    }

    #[test]
    fn test_extract_is_case_insensitive() {
        let extractor = ObjectExtractor::default();
        let objects = extractor.extract("A DOG and a Cat watched the SKY.");
        assert_eq!(objects, vec!["dog", "cat", "sky"]);
    }

    #[test]
    fn test_extract_requires_whole_words() {
        let extractor = ObjectExtractor::default();
        // "carpet" must not match "car"; "doghouse" must not match "dog".
        let objects = extractor.extract("A carpet in the doghouse, scattered stardust.");
        assert!(objects.is_empty());
    }

    #[test]
    fn test_extract_reports_each_term_once() {
        let extractor = ObjectExtractor::default();
        let objects = extractor.extract("A dog chased a dog past another dog and a tree.");
        assert_eq!(objects, vec!["dog", "tree"]);
    }

    #[test]
    fn test_extract_empty_text_yields_empty_set() {
        let extractor = ObjectExtractor::default();
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("   \n\t  ").is_empty());
    }

    #[test]
    fn test_extract_handles_punctuation_boundaries() {
        let extractor = ObjectExtractor::default();
        let objects = extractor.extract("Clouds? No: one cloud, a sun (bright), and the moon!");
        assert_eq!(objects, vec!["cloud", "sun", "moon"]);
    }

    #[test]
    fn test_extract_invariant_under_sentence_reordering() {
        let extractor = ObjectExtractor::default();
        let a = extractor.extract("A boat on the ocean. A bird in the sky.");
        let b = extractor.extract("A bird in the sky. A boat on the ocean.");
        let set_a: std::collections::HashSet<_> = a.iter().collect();
        let set_b: std::collections::HashSet<_> = b.iter().collect();
        assert_eq!(set_a, set_b);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let extractor = ObjectExtractor::default();
        let text = "A man and a woman walk past a building.";
        assert_eq!(extractor.extract(text), extractor.extract(text));
    }

    #[test]
    fn test_extract_with_custom_lexicon() {
        let extractor =
            ObjectExtractor::new(ObjectLexicon::with_terms(["boardwalk", "field", "grass"]));
        let objects = extractor.extract("A boardwalk crosses a field of tall grass.");
        assert_eq!(objects, vec!["boardwalk", "field", "grass"]);
    }
}
