use crate::core::extractor::Extractor;
use crate::core::ingest::Ingestor;
use crate::core::normalizer::{LinkNormalizer, PathGate};
use crate::core::{
    ConfigProvider, DocumentStore, IngestSummary, PageFetcher, Pipeline, PressItem, RawPage,
    TransformResult,
};
use crate::utils::error::Result;

pub struct PressPipeline<F: PageFetcher, S: DocumentStore, C: ConfigProvider> {
    fetcher: F,
    config: C,
    extractor: Extractor,
    normalizer: LinkNormalizer,
    gate: PathGate,
    ingestor: Ingestor<S>,
}

impl<F: PageFetcher, S: DocumentStore, C: ConfigProvider> PressPipeline<F, S, C> {
    pub fn new(fetcher: F, store: S, config: C) -> Self {
        let extractor = Extractor::new(config.listing_marker(), config.end_markers().to_vec());
        let normalizer = LinkNormalizer::new(config.base_url());
        let gate = PathGate::new(config.allowed_prefixes().to_vec());
        let ingestor = Ingestor::new(store, config.source_tag());
        Self {
            fetcher,
            config,
            extractor,
            normalizer,
            gate,
            ingestor,
        }
    }

    pub fn store(&self) -> &S {
        self.ingestor.store()
    }

    /// Normalize, then gate. `None` drops the candidate.
    fn accept(&self, raw_link: &str) -> Option<String> {
        match self.normalizer.normalize(raw_link) {
            Ok(url) if self.gate.allows(&url) => Some(url),
            Ok(url) => {
                tracing::debug!("Outside release path prefixes: {}", url);
                None
            }
            Err(reason) => {
                tracing::debug!("Rejected link '{}': {}", raw_link, reason);
                None
            }
        }
    }
}

#[async_trait::async_trait]
impl<F: PageFetcher, S: DocumentStore, C: ConfigProvider> Pipeline for PressPipeline<F, S, C> {
    async fn extract(&self) -> Result<RawPage> {
        tracing::debug!("Fetching listing: {}", self.config.listing_url());
        let page = self.fetcher.fetch(self.config.listing_url()).await?;
        tracing::debug!("Fetched {} bytes of rendered text", page.text.len());
        Ok(page)
    }

    async fn transform(&self, page: RawPage) -> Result<TransformResult> {
        if self.extractor.listing_body(&page.text).is_none() {
            tracing::warn!("Listing marker not found in {}", page.url);
            return Ok(TransformResult {
                listing_found: false,
                candidates: 0,
                rejected: 0,
                items: Vec::new(),
            });
        }

        let mut candidates = 0;
        let mut items = Vec::new();
        for candidate in self.extractor.extract(&page.text) {
            candidates += 1;
            if let Some(url) = self.accept(candidate.raw_link) {
                items.push(PressItem {
                    ministry: candidate.ministry.to_string(),
                    title: candidate.title.to_string(),
                    url,
                });
            }
        }

        let rejected = candidates - items.len();
        tracing::info!(
            "Extracted {} candidates, {} accepted, {} rejected",
            candidates,
            items.len(),
            rejected
        );

        Ok(TransformResult {
            listing_found: true,
            candidates,
            rejected,
            items,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<IngestSummary> {
        tracing::debug!("Ingesting {} items", result.items.len());
        self.ingestor.ingest(result.items).await
    }
}
