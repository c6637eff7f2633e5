use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A genre tag attached to a movie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// One cast credit, in billing order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: String,
}

impl Display for CastMember {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} as {}", self.name, self.character)
    }
}

/// Full metadata for a single movie
///
/// Keyed externally by an IMDb-style identifier and replaced wholesale on
/// every identifier change; never merged or patched.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    /// The metadata provider's own numeric identifier
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub overview: String,
    pub genres: Vec<Genre>,
    pub cast: Vec<CastMember>,
}

impl MovieDetail {
    /// The top of the cast list, as shown on the detail screen
    pub fn top_billed(&self, count: usize) -> &[CastMember] {
        &self.cast[..self.cast.len().min(count)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cast_member(name: &str, character: &str) -> CastMember {
        CastMember {
            id: 1,
            name: name.to_string(),
            character: character.to_string(),
        }
    }

    #[test]
    fn test_cast_member_display() {
        let member = cast_member("Keanu Reeves", "Neo");
        assert_eq!(format!("{}", member), "Keanu Reeves as Neo");
    }

    #[test]
    fn test_top_billed_truncates() {
        let detail = MovieDetail {
            id: 603,
            title: "The Matrix".to_string(),
            poster_path: None,
            overview: String::new(),
            genres: vec![],
            cast: (0..8).map(|i| cast_member(&format!("Actor {}", i), "")).collect(),
        };

        assert_eq!(detail.top_billed(5).len(), 5);
        assert_eq!(detail.top_billed(20).len(), 8);
    }
}
