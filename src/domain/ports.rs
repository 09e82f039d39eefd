use crate::domain::model::{IngestSummary, PressRecord, RawPage, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Returns a rendered, markdown-like dump of a web page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<RawPage>;
}

/// Document collection keyed logically by `url`.
pub trait DocumentStore: Send + Sync {
    /// Whether any document with this `url` exists, whatever its other fields.
    fn contains_url(&self, url: &str) -> impl std::future::Future<Output = Result<bool>> + Send;
    fn insert(&self, record: &PressRecord)
        -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn listing_url(&self) -> &str;
    fn listing_marker(&self) -> &str;
    fn end_markers(&self) -> &[String];
    fn base_url(&self) -> &str;
    fn allowed_prefixes(&self) -> &[String];
    fn source_tag(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<RawPage>;
    async fn transform(&self, page: RawPage) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<IngestSummary>;
}
