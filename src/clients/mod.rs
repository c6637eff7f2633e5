/// Remote API client abstractions
///
/// The two upstream HTTP JSON APIs — the third-party movie-metadata provider
/// and the first-party recommendation backend — sit behind these traits so the
/// view flows can be exercised against mocks. Both are consumed as opaque
/// collaborators: no retry, no pagination, no response caching.
use crate::{
    error::AppResult,
    models::{CatalogEntry, MovieDetail, RatingSubmission, RecommendationEntry},
};

pub mod recommender;
pub mod tmdb;

pub use recommender::RecommenderClient;
pub use tmdb::TmdbMetadataProvider;

/// Trait for movie-metadata providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Resolve an external (IMDb-style) identifier and fetch full details
    ///
    /// Fails with `AppError::NotFound` when the identifier resolves to
    /// nothing; any transport, status, or parse failure maps to the generic
    /// error arms.
    async fn resolve_and_fetch(&self, external_id: &str) -> AppResult<MovieDetail>;

    /// Absolute image URL for a poster path returned by the provider
    fn poster_url(&self, poster_path: &str) -> String;
}

/// Trait for the recommendation backend
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationBackend: Send + Sync {
    /// Fetch the full browsable catalog
    async fn fetch_catalog(&self) -> AppResult<Vec<CatalogEntry>>;

    /// Recommendations derived from the movie's own attributes
    async fn content_based(&self, movie_id: &str) -> AppResult<Vec<RecommendationEntry>>;

    /// Recommendations derived from other users' rating patterns
    async fn collaborative(&self, user_id: u32) -> AppResult<Vec<RecommendationEntry>>;

    /// Submit a rating; the acknowledgement payload is logged, not surfaced
    async fn submit_rating(&self, submission: &RatingSubmission) -> AppResult<()>;
}
