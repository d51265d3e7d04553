//! Analysis result model

use std::collections::BTreeMap;

/// Issue categories reported by an analysis run.
///
/// The set is closed and the declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Grammar,
    Clarity,
    Tone,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 3] = [Category::Grammar, Category::Clarity, Category::Tone];

    /// Capitalized display name for section headers.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Grammar => "Grammar",
            Category::Clarity => "Clarity",
            Category::Tone => "Tone",
        }
    }
}

/// Issues found in a document, grouped per category.
///
/// Every category is always present; an empty list means no issues.
/// The whole value is replaced on each analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    issues: BTreeMap<Category, Vec<String>>,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisResult {
    /// Create an empty result with all categories present.
    pub fn new() -> Self {
        let mut issues = BTreeMap::new();
        for category in Category::ALL {
            issues.insert(category, Vec::new());
        }
        Self { issues }
    }

    /// Replace the issue list for one category.
    pub fn set(&mut self, category: Category, issues: Vec<String>) {
        self.issues.insert(category, issues);
    }

    /// Issues for one category, in the order they were reported.
    pub fn issues(&self, category: Category) -> &[String] {
        self.issues.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate categories with their issues, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.issues(category)))
    }

    /// Placeholder results; the analysis pipeline is not wired in yet.
    pub fn placeholder() -> Self {
        let mut result = Self::new();
        result.set(
            Category::Grammar,
            vec![
                "Missing comma in sentence 2".to_string(),
                "Possible run-on sentence".to_string(),
            ],
        );
        result.set(
            Category::Tone,
            vec!["Sentence 4 may sound overly formal".to_string()],
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_all_categories_empty() {
        let result = AnalysisResult::new();
        for category in Category::ALL {
            assert!(result.issues(category).is_empty());
        }
    }

    #[test]
    fn test_placeholder_fixture() {
        let result = AnalysisResult::placeholder();
        assert_eq!(
            result.issues(Category::Grammar),
            [
                "Missing comma in sentence 2".to_string(),
                "Possible run-on sentence".to_string(),
            ]
        );
        assert!(result.issues(Category::Clarity).is_empty());
        assert_eq!(
            result.issues(Category::Tone),
            ["Sentence 4 may sound overly formal".to_string()]
        );
    }

    #[test]
    fn test_iter_order() {
        let result = AnalysisResult::placeholder();
        let order: Vec<Category> = result.iter().map(|(category, _)| category).collect();
        assert_eq!(order, [Category::Grammar, Category::Clarity, Category::Tone]);
    }

    #[test]
    fn test_set_replaces_wholesale() {
        let mut result = AnalysisResult::placeholder();
        result.set(Category::Grammar, vec!["Other issue".to_string()]);
        assert_eq!(result.issues(Category::Grammar), ["Other issue".to_string()]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::Grammar.label(), "Grammar");
        assert_eq!(Category::Clarity.label(), "Clarity");
        assert_eq!(Category::Tone.label(), "Tone");
    }
}
