use serde::{Deserialize, Serialize};

/// A minimal movie record as returned by `/api/search_suggest`.
///
/// The backend caps the result count and already trims each entry down to
/// the fields the dropdown needs. Every field except `id` may be absent or
/// null upstream, so everything optional is an `Option` and `title`
/// defaults to empty rather than failing deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SuggestionItem {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
}

impl SuggestionItem {
    /// Release year: the first four bytes of the ISO date.
    /// None when the date is absent, too short to hold a year, or doesn't
    /// split cleanly at byte 4 — the field is untrusted backend data, and
    /// a malformed date must degrade to omission, not a panic.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date.as_deref().and_then(|d| d.get(..4))
    }

    /// Rating formatted to one decimal place.
    ///
    /// Presence check, not truthiness: a legitimate score of 0.0 still
    /// renders as "0.0".
    pub fn score_label(&self) -> Option<String> {
        self.vote_average.map(|v| format!("{v:.1}"))
    }
}

/// Response envelope for `/api/search_suggest`.
/// A missing `results` key is treated as an empty list.
#[derive(Deserialize, Debug, Clone)]
pub struct SuggestResponse {
    #[serde(default)]
    pub results: Vec<SuggestionItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_year_slices_iso_date() {
        let item: SuggestionItem =
            serde_json::from_str(r#"{"id": 1, "title": "Batman", "release_date": "2022-03-01"}"#)
                .unwrap();
        assert_eq!(item.release_year(), Some("2022"));
    }

    #[test]
    fn test_release_year_absent_or_short() {
        let mut item = SuggestionItem {
            id: 1,
            title: "Batman".to_string(),
            poster_path: None,
            release_date: None,
            vote_average: None,
        };
        assert_eq!(item.release_year(), None);

        item.release_date = Some("22".to_string());
        assert_eq!(item.release_year(), None);
    }

    #[test]
    fn test_release_year_multibyte_date_is_omitted() {
        // Byte 4 falls inside the second fullwidth digit; slicing must
        // not panic, just drop the unusable year.
        let item: SuggestionItem =
            serde_json::from_str(r#"{"id": 1, "release_date": "２２22-03"}"#).unwrap();
        assert_eq!(item.release_year(), None);
    }

    #[test]
    fn test_score_label_keeps_zero() {
        let item: SuggestionItem =
            serde_json::from_str(r#"{"id": 1, "vote_average": 0.0}"#).unwrap();
        assert_eq!(item.score_label(), Some("0.0".to_string()));
    }

    #[test]
    fn test_score_label_rounds_to_one_decimal() {
        let item: SuggestionItem =
            serde_json::from_str(r#"{"id": 1, "vote_average": 7.84}"#).unwrap();
        assert_eq!(item.score_label(), Some("7.8".to_string()));
    }

    #[test]
    fn test_missing_fields_deserialize_to_none() {
        let item: SuggestionItem = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(item.title, "");
        assert_eq!(item.poster_path, None);
        assert_eq!(item.release_date, None);
        assert_eq!(item.vote_average, None);
    }

    #[test]
    fn test_missing_results_key_is_empty() {
        let resp: SuggestResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.results.is_empty());
    }
}
