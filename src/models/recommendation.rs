use serde::{Deserialize, Serialize};

/// A recommendation returned by either engine of the backend
///
/// Content-based results are keyed by movie, collaborative results by user;
/// the shape is shared. Neither collection is cached across navigations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationEntry {
    pub movie_id: String,
    pub movie_name: String,
    pub year: i32,
    pub genre: String,
    pub language: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub cast: String,
    #[serde(default)]
    pub director: String,
    pub sr_no: i64,
}

/// Write-only rating payload for the backend's rate endpoint
///
/// Not retained client-side after submission; there is no read-back of prior
/// ratings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatingSubmission {
    pub user_id: u32,
    pub movie_id: String,
    /// 1-5 scale at half-star granularity
    pub rating: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_entry_deserialization() {
        let json = r#"{
            "movie_id": "tt0133093",
            "movie_name": "The Matrix",
            "year": 1999,
            "genre": "Sci-Fi",
            "language": "English",
            "overview": "A computer hacker learns the truth.",
            "cast": "Keanu Reeves, Laurence Fishburne",
            "director": "Lana Wachowski",
            "sr_no": 42
        }"#;

        let entry: RecommendationEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.movie_id, "tt0133093");
        assert_eq!(entry.movie_name, "The Matrix");
        assert_eq!(entry.sr_no, 42);
        assert_eq!(entry.director, "Lana Wachowski");
    }

    #[test]
    fn test_recommendation_entry_tolerates_missing_prose_fields() {
        let json = r#"{
            "movie_id": "tt0133093",
            "movie_name": "The Matrix",
            "year": 1999,
            "genre": "Sci-Fi",
            "language": "English",
            "sr_no": 1
        }"#;

        let entry: RecommendationEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.overview, "");
        assert_eq!(entry.cast, "");
        assert_eq!(entry.director, "");
    }

    #[test]
    fn test_rating_submission_serialization() {
        let submission = RatingSubmission {
            user_id: 5,
            movie_id: "603".to_string(),
            rating: 4.0,
        };

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["user_id"], 5);
        assert_eq!(json["movie_id"], "603");
        assert_eq!(json["rating"], 4.0);
    }
}
