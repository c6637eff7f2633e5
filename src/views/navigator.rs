use std::fmt::Display;

/// A navigable location: the catalog at "/" or a movie detail at "/{id}"
///
/// The detail identifier is an external (IMDb-style) movie id taken from the
/// path as-is; no format validation happens before use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Catalog,
    Detail(String),
}

impl Route {
    /// Parse a route path, binding the first path segment as the identifier
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_start_matches('/');
        if trimmed.is_empty() {
            return Route::Catalog;
        }

        let id = trimmed.split('/').next().unwrap_or(trimmed);
        Route::Detail(id.to_string())
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Catalog => write!(f, "/"),
            Route::Detail(id) => write!(f, "/{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root() {
        assert_eq!(Route::parse("/"), Route::Catalog);
        assert_eq!(Route::parse(""), Route::Catalog);
        assert_eq!(Route::parse("  /  "), Route::Catalog);
    }

    #[test]
    fn test_parse_detail() {
        assert_eq!(
            Route::parse("/tt0111161"),
            Route::Detail("tt0111161".to_string())
        );
        assert_eq!(
            Route::parse("tt0111161"),
            Route::Detail("tt0111161".to_string())
        );
    }

    #[test]
    fn test_parse_takes_first_segment() {
        assert_eq!(
            Route::parse("/tt0111161/extra"),
            Route::Detail("tt0111161".to_string())
        );
    }

    #[test]
    fn test_identifier_format_is_not_validated() {
        assert_eq!(
            Route::parse("/not-an-imdb-id"),
            Route::Detail("not-an-imdb-id".to_string())
        );
    }

    #[test]
    fn test_display_round_trip() {
        for path in ["/", "/tt1375666"] {
            assert_eq!(format!("{}", Route::parse(path)), path);
        }
    }
}
