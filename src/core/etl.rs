use crate::core::{Pipeline, RunOutcome};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    dry_run: bool,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            dry_run: false,
        }
    }

    /// Stop after the path gate and report items without touching the store.
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        println!("⏳ Fetching press releases...");
        let page = self.pipeline.extract().await?;

        let result = self.pipeline.transform(page).await?;
        if !result.listing_found {
            println!("No news found");
            return Ok(RunOutcome::NoListing);
        }

        if self.dry_run {
            for item in &result.items {
                println!("[{}] {} -> {}", item.ministry, item.title, item.url);
            }
            println!("🔍 Dry run: {} items would be checked", result.items.len());
            return Ok(RunOutcome::DryRun(result.items));
        }

        let summary = self.pipeline.load(result).await?;
        println!("\n{}", summary);

        Ok(RunOutcome::Ingested(summary))
    }
}
