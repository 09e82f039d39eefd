use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text blob returned by the page-retrieval collaborator.
#[derive(Debug, Clone)]
pub struct RawPage {
    pub url: String,
    pub text: String,
}

/// One extracted news-item line, borrowed from the page text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub ministry: &'a str,
    pub title: &'a str,
    pub raw_link: &'a str,
}

/// A candidate whose link survived normalization and the path gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressItem {
    pub ministry: String,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressRecord {
    pub ministry: String,
    pub title: String,
    pub url: String,
    pub source: String,
    pub date: NaiveDate,
}

impl PressRecord {
    pub fn from_item(item: PressItem, source: &str, date: NaiveDate) -> Self {
        Self {
            ministry: item.ministry,
            title: item.title,
            url: item.url,
            source: source.to_string(),
            date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    /// `false` when the listing marker never appeared in the page.
    pub listing_found: bool,
    pub candidates: usize,
    pub rejected: usize,
    pub items: Vec<PressItem>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub added: usize,
    pub skipped: usize,
}

impl fmt::Display for IngestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✅ Done")?;
        writeln!(f, "🆕 New items added: {}", self.added)?;
        write!(f, "⏭️ Skipped (already existed): {}", self.skipped)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    NoListing,
    DryRun(Vec<PressItem>),
    Ingested(IngestSummary),
}
