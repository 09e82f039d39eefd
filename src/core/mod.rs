pub mod etl;
pub mod extractor;
pub mod ingest;
pub mod normalizer;
pub mod pipeline;

pub use crate::domain::model::{
    Candidate, IngestSummary, PressItem, PressRecord, RawPage, RunOutcome, TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, DocumentStore, PageFetcher, Pipeline};
pub use crate::utils::error::Result;
