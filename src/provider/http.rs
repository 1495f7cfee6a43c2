use std::time::Duration;

use crate::game::error::{GameError, Result};
use crate::provider::{CategoryData, CategorySummary, TriviaProvider};

/// Blocking HTTP client for the trivia API. Cheap to clone; each game start
/// hands a clone to the loader worker thread.
#[derive(Clone)]
pub struct HttpProvider {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpProvider {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| GameError::ProviderUnavailable(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| GameError::ProviderUnavailable(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(GameError::ProviderUnavailable(format!(
                "{url} returned {status}"
            )));
        }
        let body = response
            .text()
            .map_err(|e| GameError::ProviderUnavailable(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| GameError::MalformedResponse(e.to_string()))
    }
}

impl TriviaProvider for HttpProvider {
    fn fetch_pool(&self, count: usize) -> Result<Vec<CategorySummary>> {
        let url = format!("{}/categories?count={count}", self.base_url);
        self.get_json(&url)
    }

    fn fetch_category(&self, id: u64) -> Result<CategoryData> {
        let url = format!("{}/category?id={id}", self.base_url);
        self.get_json(&url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let provider = HttpProvider::new("http://jservice.io/api/").unwrap();
        assert_eq!(provider.base_url, "http://jservice.io/api");
    }
}
