/// Recommendation backend client
///
/// Catalog listing, both recommendation engines, and rating submission
/// against the first-party recommendation service:
///
///   GET  /movies                                  → catalog
///   GET  /recommendations/content/{movie_id}      → content-based list
///   GET  /recommendations/collaborative/{user_id} → collaborative list
///   POST /rate                                    → acknowledgement
use crate::{
    clients::RecommendationBackend,
    config::Config,
    error::{AppError, AppResult},
    models::{CatalogEntry, RatingSubmission, RecommendationEntry},
};
use reqwest::Client as HttpClient;
use serde::Deserialize;

#[derive(Clone)]
pub struct RecommenderClient {
    http_client: HttpClient,
    api_url: String,
}

impl RecommenderClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url: config.recommender_api_url.clone(),
        }
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: String) -> AppResult<T> {
        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Recommendation backend returned status {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl RecommendationBackend for RecommenderClient {
    async fn fetch_catalog(&self) -> AppResult<Vec<CatalogEntry>> {
        let catalog: Vec<CatalogEntry> =
            self.get_json(format!("{}/movies", self.api_url)).await?;

        tracing::info!(entries = catalog.len(), "Catalog fetched");

        Ok(catalog)
    }

    async fn content_based(&self, movie_id: &str) -> AppResult<Vec<RecommendationEntry>> {
        let recommendations: Vec<RecommendationEntry> = self
            .get_json(format!(
                "{}/recommendations/content/{}",
                self.api_url, movie_id
            ))
            .await?;

        tracing::info!(
            movie_id = %movie_id,
            results = recommendations.len(),
            engine = "content",
            "Recommendations fetched"
        );

        Ok(recommendations)
    }

    async fn collaborative(&self, user_id: u32) -> AppResult<Vec<RecommendationEntry>> {
        // The backend keys collaborative results by user alone; the rating the
        // caller validated stays client-side.
        let recommendations: Vec<RecommendationEntry> = self
            .get_json(format!(
                "{}/recommendations/collaborative/{}",
                self.api_url, user_id
            ))
            .await?;

        tracing::info!(
            user_id = user_id,
            results = recommendations.len(),
            engine = "collaborative",
            "Recommendations fetched"
        );

        Ok(recommendations)
    }

    async fn submit_rating(&self, submission: &RatingSubmission) -> AppResult<()> {
        let url = format!("{}/rate", self.api_url);

        let response = self
            .http_client
            .post(&url)
            .json(submission)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Recommendation backend returned status {}: {}",
                status, body
            )));
        }

        let ack: serde_json::Value = response.json().await?;

        tracing::info!(
            user_id = submission.user_id,
            movie_id = %submission.movie_id,
            rating = submission.rating,
            ack = %ack,
            "Rating submitted"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_response_deserialization() {
        let json = r#"[
            { "movie_id": "tt1375666", "movie_name": "Inception", "year": 2010,
              "genre": "Sci-Fi", "language": "English" },
            { "movie_id": "tt0111161", "movie_name": "The Shawshank Redemption",
              "year": 1994, "genre": "Drama", "language": "English" }
        ]"#;

        let catalog: Vec<CatalogEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].movie_name, "Inception");
        assert_eq!(catalog[1].year, 1994);
    }
}
