use crate::core::{PageFetcher, RawPage};
use crate::utils::error::{IngestError, Result};
use reqwest::Client;
use std::time::Duration;

/// Fetches the listing either directly or through a rendering service that
/// takes the target URL appended to its own (`https://r.jina.ai/<url>` style).
pub struct HttpPageFetcher {
    client: Client,
    render_endpoint: Option<String>,
}

impl HttpPageFetcher {
    pub fn new(render_endpoint: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("press-ingest/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            render_endpoint,
        })
    }

    pub fn request_url(&self, url: &str) -> String {
        match &self.render_endpoint {
            Some(endpoint) => format!("{}{}", endpoint, url),
            None => url.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<RawPage> {
        let target = self.request_url(url);
        tracing::debug!("GET {}", target);

        let response = self.client.get(&target).send().await?;
        let status = response.status();
        tracing::debug!("Render response status: {}", status);

        if !status.is_success() {
            return Err(IngestError::RetrievalError {
                url: target,
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        Ok(RawPage {
            url: url.to_string(),
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_with_render_endpoint() {
        let fetcher = HttpPageFetcher::new(
            Some("https://r.jina.ai/".to_string()),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            fetcher.request_url("https://www.pib.gov.in/allRel.aspx?reg=3&lang=1"),
            "https://r.jina.ai/https://www.pib.gov.in/allRel.aspx?reg=3&lang=1"
        );
    }

    #[test]
    fn test_request_url_direct() {
        let fetcher = HttpPageFetcher::new(None, Duration::from_secs(5)).unwrap();
        assert_eq!(fetcher.request_url("https://example.com/a"), "https://example.com/a");
    }
}
