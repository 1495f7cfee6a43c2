#[cfg(feature = "network")]
pub mod http;

use serde::Deserialize;

use crate::game::error::Result;

/// Pool entry from `GET {base}/categories?count=N`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CategorySummary {
    pub id: u64,
    pub title: String,
    pub clues_count: usize,
}

/// Full category from `GET {base}/category?id=ID`.
#[derive(Clone, Debug, Deserialize)]
pub struct CategoryData {
    pub id: u64,
    pub title: String,
    pub clues: Vec<ClueData>,
}

/// Clue payloads carry more fields than we use; serde drops the rest.
#[derive(Clone, Debug, Deserialize)]
pub struct ClueData {
    pub question: String,
    pub answer: String,
}

/// Seam over the remote trivia API so game logic can be driven by fixtures
/// in tests.
pub trait TriviaProvider: Send {
    fn fetch_pool(&self, count: usize) -> Result<Vec<CategorySummary>>;
    fn fetch_category(&self, id: u64) -> Result<CategoryData>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_pool() {
        let json = r#"[
            {"id": 11496, "title": "presidents", "clues_count": 10},
            {"id": 306, "title": "pop music", "clues_count": 85}
        ]"#;
        let pool: Vec<CategorySummary> = serde_json::from_str(json).unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool[0].title, "presidents");
        assert_eq!(pool[1].clues_count, 85);
    }

    #[test]
    fn test_parse_category_ignores_extra_clue_fields() {
        let json = r#"{
            "id": 306,
            "title": "pop music",
            "clues_count": 2,
            "clues": [
                {"id": 1, "question": "q1", "answer": "a1", "value": 100, "airdate": "2004-01-01"},
                {"id": 2, "question": "q2", "answer": "a2", "value": null}
            ]
        }"#;
        let data: CategoryData = serde_json::from_str(json).unwrap();
        assert_eq!(data.clues.len(), 2);
        assert_eq!(data.clues[0].question, "q1");
        assert_eq!(data.clues[1].answer, "a2");
    }

    #[test]
    fn test_parse_missing_field_fails() {
        let json = r#"{"id": 306, "clues": []}"#;
        assert!(serde_json::from_str::<CategoryData>(json).is_err());
    }
}
