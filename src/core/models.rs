use std::collections::HashMap;

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
};
use serde_json::Value;
use tracing::warn;

/// Fixed buckets the analysis service sorts notions into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vocab,
    Conjugaison,
    Prononciation,
    Grammaire,
    Expression,
    Orthographe,
    Culture,
}

impl Category {
    /// Display order. Independent of the order the server sends keys in.
    pub const ALL: [Category; 7] = [
        Category::Vocab,
        Category::Conjugaison,
        Category::Prononciation,
        Category::Grammaire,
        Category::Expression,
        Category::Orthographe,
        Category::Culture,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Vocab => "vocab",
            Category::Conjugaison => "conjugaison",
            Category::Prononciation => "prononciation",
            Category::Grammaire => "grammaire",
            Category::Expression => "expression",
            Category::Orthographe => "orthographe",
            Category::Culture => "culture",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Vocab => "Vocabulaire",
            Category::Conjugaison => "Conjugaison",
            Category::Prononciation => "Prononciation",
            Category::Grammaire => "Grammaire",
            Category::Expression => "Expressions",
            Category::Orthographe => "Orthographe",
            Category::Culture => "Culture",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notion {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_revision: bool, // Seen in an earlier lesson, now reviewed
}

/// Keyed by category wire key. Only the known categories are ever present.
pub type NotionMap = HashMap<String, Vec<Notion>>;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A `null` or malformed category reads as empty; unknown keys are dropped.
fn known_categories<'de, D>(deserializer: D) -> Result<NotionMap, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(raw) = Value::deserialize(deserializer)? else {
        return Ok(NotionMap::new());
    };

    let mut notions = NotionMap::new();
    for (key, value) in raw {
        let Some(category) = Category::from_key(&key) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        match serde_json::from_value::<Vec<Notion>>(value) {
            Ok(items) => {
                notions.insert(category.key().to_string(), items);
            }
            Err(e) => warn!("Ignoring malformed '{}' notions: {}", key, e),
        }
    }

    Ok(notions)
}

/// Result of analysing one uploaded course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub lesson_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "known_categories")]
    pub notions: NotionMap,
}

impl Document {
    pub fn notions_for(&self, category: Category) -> &[Notion] {
        self.notions.get(category.key()).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonSummary {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
}

impl LessonSummary {
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) if !title.trim().is_empty() => title.clone(),
            _ => format!("Leçon #{}", self.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonNotions {
    pub lesson_id: i64,
    #[serde(default, deserialize_with = "known_categories")]
    pub notions: NotionMap,
}

impl LessonNotions {
    /// The notions endpoint carries no title; it comes from the lesson list.
    pub fn into_document(self, summary: &LessonSummary) -> Document {
        Document {
            lesson_id: Some(self.lesson_id),
            title: summary.display_title(),
            notions: self.notions,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Health {
    #[serde(default)]
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_and_labels() {
        let keys: Vec<&str> = Category::ALL.iter().map(Category::key).collect();
        assert_eq!(
            keys,
            vec![
                "vocab",
                "conjugaison",
                "prononciation",
                "grammaire",
                "expression",
                "orthographe",
                "culture"
            ]
        );

        assert_eq!(Category::Vocab.label(), "Vocabulaire");
        assert_eq!(Category::Expression.label(), "Expressions");
        assert_eq!(Category::from_key("grammaire"), Some(Category::Grammaire));
        assert_eq!(Category::from_key("Grammaire"), None);
        assert_eq!(Category::from_key("lexique"), None);
    }

    #[test]
    fn test_category_serde_uses_wire_keys() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.key()));
        }
    }

    #[test]
    fn test_document_deserialises_upload_response() {
        let json = r#"{
            "lesson_id": 7,
            "title": "lecon-3",
            "notions": {
                "vocab": [{"title": "casă — maison", "is_revision": false}],
                "culture": [{"title": "Mărțișor", "is_revision": true}]
            }
        }"#;

        let document: Document = serde_json::from_str(json).unwrap();
        assert_eq!(document.lesson_id, Some(7));
        assert_eq!(document.title, "lecon-3");
        assert_eq!(document.notions_for(Category::Vocab).len(), 1);
        assert!(document.notions_for(Category::Culture)[0].is_revision);
        assert!(document.notions_for(Category::Grammaire).is_empty());
    }

    #[test]
    fn test_document_tolerates_missing_fields() {
        let document: Document = serde_json::from_str(r#"{"title": "t"}"#).unwrap();
        assert!(document.notions.is_empty());
        assert_eq!(document.lesson_id, None);

        let notion: Notion = serde_json::from_str(r#"{"title": "x"}"#).unwrap();
        assert!(!notion.is_revision);
    }

    #[test]
    fn test_null_notions_read_as_empty() {
        let document: Document =
            serde_json::from_str(r#"{"title": "t", "notions": null}"#).unwrap();
        assert!(document.notions.is_empty());
    }

    #[test]
    fn test_null_category_is_omitted_next_to_valid_one() {
        let document: Document = serde_json::from_str(
            r#"{"title": "t", "notions": {"grammaire": null, "vocab": [{"title": "a"}]}}"#,
        )
        .unwrap();
        assert_eq!(document.notions_for(Category::Vocab).len(), 1);
        assert!(document.notions_for(Category::Grammaire).is_empty());
        assert!(!document.notions.contains_key("grammaire"));
    }

    #[test]
    fn test_unknown_keys_of_any_shape_are_dropped() {
        let document: Document = serde_json::from_str(
            r#"{"title": "t", "notions": {
                "lexique": {"x": 1},
                "autre": [{"title": "y"}],
                "culture": "pas une liste",
                "vocab": [{"title": "a"}]
            }}"#,
        )
        .unwrap();
        assert_eq!(document.notions.len(), 1);
        assert_eq!(document.notions_for(Category::Vocab)[0].title, "a");
        assert!(document.notions_for(Category::Culture).is_empty());
    }

    #[test]
    fn test_null_notion_fields_use_defaults() {
        let document: Document = serde_json::from_str(
            r#"{"title": null, "notions": {"vocab": [
                {"title": "a", "is_revision": null},
                {"title": null, "is_revision": true}
            ]}}"#,
        )
        .unwrap();
        assert_eq!(document.title, "");
        let vocab = document.notions_for(Category::Vocab);
        assert!(!vocab[0].is_revision);
        assert_eq!(vocab[1].title, "");
        assert!(vocab[1].is_revision);
    }

    #[test]
    fn test_lesson_notions_into_document() {
        let summary = LessonSummary { id: 4, title: None };
        let notions: LessonNotions = serde_json::from_str(
            r#"{"lesson_id": 4, "notions": {"vocab": [{"title": "apă", "is_revision": true}]}}"#,
        )
        .unwrap();

        let document = notions.into_document(&summary);
        assert_eq!(document.title, "Leçon #4");
        assert_eq!(document.lesson_id, Some(4));
        assert_eq!(document.notions_for(Category::Vocab)[0].title, "apă");
    }
}
