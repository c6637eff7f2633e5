use serde::{Deserialize, Serialize};

/// One entry of the browsable movie catalog as served by the recommendation
/// backend. Immutable once fetched; the full catalog is fetched once per
/// browse-session mount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    /// External (IMDb-style) identifier, also used in routes
    pub movie_id: String,
    pub movie_name: String,
    pub year: i32,
    pub genre: String,
    pub language: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entry_deserialization() {
        let json = r#"{
            "movie_id": "tt1375666",
            "movie_name": "Inception",
            "year": 2010,
            "genre": "Sci-Fi",
            "language": "English"
        }"#;

        let entry: CatalogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.movie_id, "tt1375666");
        assert_eq!(entry.movie_name, "Inception");
        assert_eq!(entry.year, 2010);
        assert_eq!(entry.genre, "Sci-Fi");
        assert_eq!(entry.language, "English");
    }
}
