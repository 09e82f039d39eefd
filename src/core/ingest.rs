use crate::core::{DocumentStore, IngestSummary, PressItem, PressRecord};
use crate::utils::error::Result;
use chrono::{NaiveDate, Utc};

pub const DEFAULT_SOURCE_TAG: &str = "PIB";

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Check-then-insert against the store, one item at a time.
///
/// The lookup and the insert are separate calls, so two runs racing on the
/// same store can both insert a URL unless the collection has a unique index
/// on `url`.
pub struct Ingestor<S: DocumentStore> {
    store: S,
    source_tag: String,
    clock: fn() -> NaiveDate,
}

impl<S: DocumentStore> Ingestor<S> {
    pub fn new(store: S, source_tag: &str) -> Self {
        Self {
            store,
            source_tag: source_tag.to_string(),
            clock: utc_today,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn ingest(&self, items: Vec<PressItem>) -> Result<IngestSummary> {
        let mut summary = IngestSummary::default();

        for item in items {
            if self.store.contains_url(&item.url).await? {
                tracing::debug!("⏭️ Already stored: {}", item.url);
                summary.skipped += 1;
                continue;
            }

            let record = PressRecord::from_item(item, &self.source_tag, (self.clock)());
            self.store.insert(&record).await?;
            tracing::info!("🆕 [{}] {}", record.ministry, record.title);
            summary.added += 1;
        }

        Ok(summary)
    }
}
