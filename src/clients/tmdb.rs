/// TMDB metadata provider
///
/// Resolves the external identifiers used in routes and the catalog to TMDB's
/// own numeric ids, then fetches full details with the cast embedded.
///
/// API flow:
/// 1. Resolve: /find/{external_id}?external_source=imdb_id → movie_results[0].id
/// 2. Details: /movie/{internal_id}?append_to_response=credits → details + credits.cast
///
/// Both steps share one API credential passed as a query parameter.
use crate::{
    clients::MetadataProvider,
    config::Config,
    error::{AppError, AppResult},
    models::{CastMember, Genre, MovieDetail},
};
use reqwest::Client as HttpClient;
use serde::Deserialize;

const LANGUAGE: &str = "en-US";

#[derive(Clone)]
pub struct TmdbMetadataProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    image_cdn_url: String,
}

#[derive(Debug, Deserialize)]
struct FindResponse {
    movie_results: Vec<FoundMovie>,
}

#[derive(Debug, Deserialize)]
struct FoundMovie {
    id: u64,
}

/// Raw details payload, with the credits sub-resource appended
#[derive(Debug, Deserialize)]
pub struct TmdbMovieDetails {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub credits: TmdbCredits,
}

#[derive(Debug, Default, Deserialize)]
pub struct TmdbCredits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

impl From<TmdbMovieDetails> for MovieDetail {
    fn from(details: TmdbMovieDetails) -> Self {
        Self {
            id: details.id,
            title: details.title,
            poster_path: details.poster_path,
            overview: details.overview,
            genres: details.genres,
            cast: details.credits.cast,
        }
    }
}

impl TmdbMetadataProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key: config.metadata_api_key.clone(),
            api_url: config.metadata_api_url.clone(),
            image_cdn_url: config.image_cdn_url.clone(),
        }
    }

    /// Resolve an external identifier to TMDB's numeric movie id
    async fn resolve_external_id(&self, external_id: &str) -> AppResult<u64> {
        let url = format!("{}/find/{}", self.api_url, external_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", LANGUAGE),
                ("external_source", "imdb_id"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Metadata API returned status {}: {}",
                status, body
            )));
        }

        let find_response: FindResponse = response.json().await?;

        find_response
            .movie_results
            .first()
            .map(|movie| movie.id)
            .ok_or_else(|| {
                AppError::NotFound(format!("No movie matches external id {}", external_id))
            })
    }

    /// Fetch full details plus cast in one combined request
    async fn fetch_details(&self, internal_id: u64) -> AppResult<MovieDetail> {
        let url = format!("{}/movie/{}", self.api_url, internal_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", LANGUAGE),
                ("append_to_response", "credits"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Metadata API returned status {}: {}",
                status, body
            )));
        }

        let details: TmdbMovieDetails = response.json().await?;

        tracing::info!(
            internal_id = internal_id,
            cast = details.credits.cast.len(),
            provider = "tmdb",
            "Movie details fetched"
        );

        Ok(details.into())
    }
}

#[async_trait::async_trait]
impl MetadataProvider for TmdbMetadataProvider {
    async fn resolve_and_fetch(&self, external_id: &str) -> AppResult<MovieDetail> {
        let internal_id = self.resolve_external_id(external_id).await?;
        self.fetch_details(internal_id).await
    }

    fn poster_url(&self, poster_path: &str) -> String {
        format!("{}{}", self.image_cdn_url, poster_path)
    }
}
