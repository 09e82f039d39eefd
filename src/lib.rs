pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliArgs;
pub use crate::config::AppConfig;

pub use adapters::{AstraStore, HttpPageFetcher, JsonlStore};
pub use crate::core::{etl::EtlEngine, pipeline::PressPipeline};
pub use domain::model::{IngestSummary, PressRecord, RunOutcome};
pub use utils::error::{IngestError, Result};
