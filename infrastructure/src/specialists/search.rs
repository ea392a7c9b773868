//! Web search client for specialist providers
//!
//! A thin wrapper over the Brave Search JSON API. The migration and
//! sentiment providers consume it through the [`SearchClient`] trait so
//! tests can substitute canned results.

use async_trait::async_trait;
use council_application::ProviderError;
use serde::Deserialize;
use std::time::Duration;

/// Brave web search endpoint
const BRAVE_API_URL: &str = "https://api.search.brave.com/res/v1/web/search";

/// Results returned per query
const RESULT_COUNT: usize = 10;

/// One search result
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
}

/// Web search capability consumed by specialist providers
#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, ProviderError>;
}

/// Brave Search API client
pub struct BraveSearchClient {
    client: reqwest::Client,
    api_key: String,
}

impl BraveSearchClient {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Other(format!("HTTP client init failed: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl SearchClient for BraveSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, ProviderError> {
        let count = RESULT_COUNT.to_string();
        let response = self
            .client
            .get(BRAVE_API_URL)
            .query(&[("q", query), ("count", count.as_str())])
            .header("X-Subscription-Token", &self.api_key)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ProviderError::Fetch(format!("Search request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ProviderError::Fetch(format!(
                "Search API returned {}",
                response.status()
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(format!("Search response not JSON: {}", e)))?;

        parse_results(&body)
    }
}

/// Extract hits from the API's `web.results` array
fn parse_results(body: &serde_json::Value) -> Result<Vec<SearchHit>, ProviderError> {
    let results = body["web"]["results"]
        .as_array()
        .ok_or_else(|| ProviderError::Malformed("missing web.results".to_string()))?;

    Ok(results
        .iter()
        .filter_map(|r| {
            let title = r["title"].as_str()?.to_string();
            let url = r["url"].as_str()?.to_string();
            let description = r["description"].as_str().unwrap_or_default().to_string();
            Some(SearchHit {
                title,
                url,
                description,
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_results() {
        let body = serde_json::json!({
            "web": {
                "results": [
                    {
                        "title": "Moving to Seattle",
                        "url": "https://example.com/1",
                        "description": "I moved last year and love it"
                    },
                    {
                        "title": "No description here",
                        "url": "https://example.com/2"
                    }
                ]
            }
        });

        let hits = parse_results(&body).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Moving to Seattle");
        assert!(hits[1].description.is_empty());
    }

    #[test]
    fn test_parse_results_missing_section() {
        let body = serde_json::json!({ "news": {} });
        assert!(parse_results(&body).is_err());
    }
}
