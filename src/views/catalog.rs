use crate::error::AppResult;
use crate::models::CatalogEntry;

/// Display state of the browse screen
///
/// The fetch is dispatched on mount, so `Loading` is the initial phase; a
/// failed fetch lands in `Failed` with a user-presentable message rather than
/// masquerading as an empty catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogPhase {
    Loading,
    Ready(Vec<CatalogEntry>),
    Failed(String),
}

/// View state backing the catalog browse screen
///
/// Holds the fetched catalog, the current search text, and the selected
/// language filters. Filtering is a pure predicate scan over the `Ready`
/// data, recomputed on demand.
#[derive(Debug)]
pub struct CatalogViewState {
    phase: CatalogPhase,
    search: String,
    selected_languages: Vec<String>,
}

impl CatalogViewState {
    pub fn new() -> Self {
        Self {
            phase: CatalogPhase::Loading,
            search: String::new(),
            selected_languages: Vec::new(),
        }
    }

    pub fn phase(&self) -> &CatalogPhase {
        &self.phase
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn selected_languages(&self) -> &[String] {
        &self.selected_languages
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, CatalogPhase::Loading)
    }

    /// Re-enter `Loading` ahead of a retry fetch
    pub fn begin_reload(&mut self) {
        self.phase = CatalogPhase::Loading;
    }

    /// Apply the catalog fetch outcome
    pub fn apply_catalog(&mut self, result: AppResult<Vec<CatalogEntry>>) {
        self.phase = match result {
            Ok(entries) => CatalogPhase::Ready(entries),
            Err(e) => {
                tracing::warn!(error = %e, "Catalog fetch failed");
                CatalogPhase::Failed("Could not load the movie catalog.".to_string())
            }
        };
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Toggle a language filter on or off
    pub fn toggle_language(&mut self, language: &str) {
        let position = self
            .selected_languages
            .iter()
            .position(|selected| selected.to_lowercase() == language.to_lowercase());

        match position {
            Some(index) => {
                self.selected_languages.remove(index);
            }
            None => self.selected_languages.push(language.to_string()),
        }
    }

    /// Distinct languages present in the fetched catalog, in first-seen order
    pub fn available_languages(&self) -> Vec<&str> {
        let CatalogPhase::Ready(entries) = &self.phase else {
            return Vec::new();
        };

        let mut languages: Vec<&str> = Vec::new();
        for entry in entries {
            if !languages
                .iter()
                .any(|known| known.to_lowercase() == entry.language.to_lowercase())
            {
                languages.push(&entry.language);
            }
        }
        languages
    }

    /// Entries matching the current search text and language selection
    ///
    /// An entry matches when the search text is empty or the movie name
    /// contains it case-insensitively, AND no languages are selected or the
    /// entry's language case-insensitively equals one of them.
    pub fn filtered(&self) -> Vec<&CatalogEntry> {
        let CatalogPhase::Ready(entries) = &self.phase else {
            return Vec::new();
        };

        let needle = self.search.to_lowercase();

        entries
            .iter()
            .filter(|entry| {
                let matches_search =
                    needle.is_empty() || entry.movie_name.to_lowercase().contains(&needle);

                let matches_language = self.selected_languages.is_empty()
                    || self
                        .selected_languages
                        .iter()
                        .any(|lang| entry.language.to_lowercase() == lang.to_lowercase());

                matches_search && matches_language
            })
            .collect()
    }
}

impl Default for CatalogViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn entry(name: &str, language: &str) -> CatalogEntry {
        CatalogEntry {
            movie_id: format!("tt-{}", name.to_lowercase()),
            movie_name: name.to_string(),
            year: 2010,
            genre: "Drama".to_string(),
            language: language.to_string(),
        }
    }

    fn ready_state(entries: Vec<CatalogEntry>) -> CatalogViewState {
        let mut state = CatalogViewState::new();
        state.apply_catalog(Ok(entries));
        state
    }

    #[test]
    fn test_initial_phase_is_loading() {
        assert!(CatalogViewState::new().is_loading());
    }

    #[test]
    fn test_search_matches_case_insensitive_substring() {
        let mut state = ready_state(vec![
            entry("Inception", "English"),
            entry("Interstellar", "English"),
        ]);

        state.set_search("incep");
        let names: Vec<&str> = state
            .filtered()
            .iter()
            .map(|e| e.movie_name.as_str())
            .collect();
        assert_eq!(names, vec!["Inception"]);

        state.set_search("INTER");
        let names: Vec<&str> = state
            .filtered()
            .iter()
            .map(|e| e.movie_name.as_str())
            .collect();
        assert_eq!(names, vec!["Interstellar"]);
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let state = ready_state(vec![entry("Inception", "English"), entry("Dangal", "Hindi")]);
        assert_eq!(state.filtered().len(), 2);
    }

    #[test]
    fn test_unmatched_search_yields_empty_result() {
        let mut state = ready_state(vec![CatalogEntry {
            movie_id: "1".to_string(),
            movie_name: "Inception".to_string(),
            year: 2010,
            genre: "Sci-Fi".to_string(),
            language: "English".to_string(),
        }]);

        state.set_search("zzz");
        assert!(state.filtered().is_empty());
    }

    #[test]
    fn test_language_filters_union_within_group() {
        let mut state = ready_state(vec![
            entry("Inception", "English"),
            entry("Dangal", "Hindi"),
            entry("Sairat", "Marathi"),
        ]);

        state.toggle_language("Hindi");
        state.toggle_language("Marathi");

        let languages: Vec<&str> = state
            .filtered()
            .iter()
            .map(|e| e.language.as_str())
            .collect();
        assert_eq!(languages, vec!["Hindi", "Marathi"]);
    }

    #[test]
    fn test_language_match_is_case_insensitive() {
        let mut state = ready_state(vec![entry("Dangal", "Hindi")]);

        state.toggle_language("hindi");
        assert_eq!(state.filtered().len(), 1);
    }

    #[test]
    fn test_search_and_language_combine_with_and() {
        let mut state = ready_state(vec![
            entry("Dangal", "Hindi"),
            entry("Dhoom", "Hindi"),
            entry("Dunkirk", "English"),
        ]);

        state.set_search("d");
        state.toggle_language("Hindi");

        let names: Vec<&str> = state
            .filtered()
            .iter()
            .map(|e| e.movie_name.as_str())
            .collect();
        assert_eq!(names, vec!["Dangal", "Dhoom"]);
    }

    #[test]
    fn test_toggle_language_twice_deselects() {
        let mut state = ready_state(vec![entry("Inception", "English"), entry("Dangal", "Hindi")]);

        state.toggle_language("Hindi");
        assert_eq!(state.filtered().len(), 1);

        state.toggle_language("Hindi");
        assert_eq!(state.filtered().len(), 2);
    }

    #[test]
    fn test_available_languages_distinct_first_seen_order() {
        let state = ready_state(vec![
            entry("Inception", "English"),
            entry("Dangal", "Hindi"),
            entry("Dunkirk", "english"),
            entry("Sairat", "Marathi"),
        ]);

        assert_eq!(
            state.available_languages(),
            vec!["English", "Hindi", "Marathi"]
        );
    }

    #[test]
    fn test_fetch_failure_lands_in_failed_with_message() {
        let mut state = CatalogViewState::new();
        state.apply_catalog(Err(AppError::ExternalApi("status 500".to_string())));

        match state.phase() {
            CatalogPhase::Failed(message) => {
                assert_eq!(message, "Could not load the movie catalog.")
            }
            other => panic!("expected Failed, got {:?}", other),
        }
        assert!(state.filtered().is_empty());
    }

    #[test]
    fn test_retry_re_enters_loading() {
        let mut state = CatalogViewState::new();
        state.apply_catalog(Err(AppError::ExternalApi("status 500".to_string())));

        state.begin_reload();
        assert!(state.is_loading());

        state.apply_catalog(Ok(vec![entry("Inception", "English")]));
        assert_eq!(state.filtered().len(), 1);
    }

    #[test]
    fn test_empty_catalog_is_ready_not_failed() {
        let state = ready_state(vec![]);
        assert_eq!(state.phase(), &CatalogPhase::Ready(vec![]));
        assert!(state.filtered().is_empty());
    }
}
