//! HTTP client for the external data providers

use reqwest::{Client, header};
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};

/// Thin JSON GET client shared by all sources
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client })
    }

    /// GET `url` with query parameters and decode the JSON body
    ///
    /// Non-2xx statuses are errors; the body is not read.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<T> {
        let response = self
            .client
            .get(url)
            .query(query)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("{url}: {e}")))
    }
}

/// `base` + `path` without doubled slashes
pub(crate) fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join() {
        assert_eq!(join("https://a.in/", "/api/x"), "https://a.in/api/x");
        assert_eq!(join("https://a.in", "api/x"), "https://a.in/api/x");
    }
}
