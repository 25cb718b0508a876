use super::models::{
    Category,
    Document,
    Notion,
};

pub const REVISION_BADGE: &str = "Révision";

/// One rendered category heading and its items.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    pub category: Category,
    pub label: &'static str,
    pub notions: &'a [Notion],
}

impl Document {
    pub fn heading(&self) -> String {
        format!("Notions du jour — {}", self.title)
    }

    /// Categories in fixed order; absent or empty ones are skipped.
    pub fn sections(&self) -> Vec<Section<'_>> {
        Category::ALL
            .into_iter()
            .filter_map(|category| {
                let notions = self.notions_for(category);
                if notions.is_empty() {
                    None
                } else {
                    Some(Section { category, label: category.label(), notions })
                }
            })
            .collect()
    }

    pub fn notion_count(&self) -> usize {
        self.sections().iter().map(|s| s.notions.len()).sum()
    }

    pub fn revision_count(&self) -> usize {
        self.sections()
            .iter()
            .flat_map(|s| s.notions.iter())
            .filter(|n| n.is_revision)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(json: &str) -> Document {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_single_vocab_item() {
        let doc = document(
            r#"{"title": "Leçon 1", "notions": {"vocab": [{"title": "Hello", "is_revision": false}]}}"#,
        );

        let sections = doc.sections();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].label, "Vocabulaire");
        assert_eq!(sections[0].notions.len(), 1);
        assert_eq!(sections[0].notions[0].title, "Hello");
        assert_eq!(doc.heading(), "Notions du jour — Leçon 1");
    }

    #[test]
    fn test_empty_and_missing_categories_are_omitted() {
        let doc = document(
            r#"{"title": "t", "notions": {
                "grammaire": [],
                "culture": [{"title": "Dragobete", "is_revision": false}]
            }}"#,
        );

        let labels: Vec<&str> = doc.sections().iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Culture"]);
    }

    #[test]
    fn test_order_ignores_server_key_order() {
        let doc = document(
            r#"{"title": "t", "notions": {
                "culture": [{"title": "c"}],
                "orthographe": [{"title": "o"}],
                "vocab": [{"title": "v"}],
                "conjugaison": [{"title": "k"}]
            }}"#,
        );

        let order: Vec<Category> = doc.sections().iter().map(|s| s.category).collect();
        assert_eq!(
            order,
            vec![Category::Vocab, Category::Conjugaison, Category::Orthographe, Category::Culture]
        );
    }

    #[test]
    fn test_unknown_categories_are_not_rendered_or_counted() {
        let doc = document(
            r#"{"title": "t", "notions": {
                "lexique": [{"title": "x", "is_revision": true}],
                "vocab": [{"title": "a", "is_revision": true}, {"title": "b"}]
            }}"#,
        );

        assert_eq!(doc.sections().len(), 1);
        assert_eq!(doc.notion_count(), 2);
        assert_eq!(doc.revision_count(), 1);
    }

    #[test]
    fn test_no_notions_renders_nothing() {
        let doc = document(r#"{"title": "vide"}"#);
        assert!(doc.sections().is_empty());
        assert_eq!(doc.notion_count(), 0);
    }
}
