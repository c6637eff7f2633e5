use serde::Deserialize;

/// Application configuration loaded from environment variables
///
/// Loaded once at startup and immutable afterwards; the metadata API
/// credential has no default and must be provided.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Metadata provider API key
    pub metadata_api_key: String,

    /// Metadata provider base URL
    #[serde(default = "default_metadata_api_url")]
    pub metadata_api_url: String,

    /// Image CDN base URL poster paths are appended to
    #[serde(default = "default_image_cdn_url")]
    pub image_cdn_url: String,

    /// Recommendation backend base URL
    #[serde(default = "default_recommender_api_url")]
    pub recommender_api_url: String,
}

fn default_metadata_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_cdn_url() -> String {
    "https://image.tmdb.org/t/p/original".to_string()
}

fn default_recommender_api_url() -> String {
    "https://movie-recommendation-flask.onrender.com".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
