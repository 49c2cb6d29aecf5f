//! API endpoint configuration.

use reqwest::Url;

use crate::ApiError;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Validate and normalise a base URL such as `https://example.org/api/`.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ApiError> {
        let raw = base_url.as_ref().trim();
        let url = Url::parse(raw).map_err(|e| ApiError::InvalidConfig(format!("{raw}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidConfig(format!(
                "{raw}: expected an http or https URL"
            )));
        }
        Ok(Self {
            base_url: raw.trim_end_matches('/').to_string(),
        })
    }

    /// Build a config from the environment.
    ///
    /// `API_URL` is read at runtime first, then as baked in at compile time
    /// (the only option in the browser), then [`DEFAULT_API_URL`].
    pub fn from_env() -> Result<Self, ApiError> {
        let runtime = std::env::var("API_URL").ok().filter(|v| !v.trim().is_empty());
        match runtime.as_deref().or(option_env!("API_URL")) {
            Some(url) => Self::new(url),
            None => Ok(Self::default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path like `/admin/pending-jobs`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
