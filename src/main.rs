use clap::Parser;
use press_ingest::core::{DocumentStore, RunOutcome};
use press_ingest::utils::error::ErrorSeverity;
use press_ingest::utils::{logger, validation::Validate};
use press_ingest::{
    AppConfig, AstraStore, CliArgs, EtlEngine, HttpPageFetcher, IngestError, JsonlStore,
    PressPipeline,
};

async fn run_with_store<S: DocumentStore>(
    store: S,
    config: AppConfig,
    dry_run: bool,
) -> press_ingest::Result<RunOutcome> {
    let fetcher = HttpPageFetcher::new(config.source.render_endpoint.clone(), config.timeout())?;
    let pipeline = PressPipeline::new(fetcher, store, config);
    EtlEngine::new(pipeline).dry_run(dry_run).run().await
}

async fn run(config: AppConfig, dry_run: bool) -> press_ingest::Result<RunOutcome> {
    if config.uses_file_store() {
        let file = config.store.file.clone().unwrap_or_default();
        tracing::info!("📁 Using local store: {}", file);
        let store = JsonlStore::open(&file)?;
        return run_with_store(store, config, dry_run).await;
    }

    // validate() 已確認 endpoint / token 存在
    let (Some(endpoint), Some(token)) = (config.store.endpoint.clone(), config.store.token.clone())
    else {
        return Err(IngestError::MissingConfigError {
            field: "store.endpoint".to_string(),
        });
    };
    let store = AstraStore::new(
        &endpoint,
        &token,
        &config.store.keyspace,
        &config.store.collection,
        config.timeout(),
    )?;
    tracing::info!("🗄️ Using Astra collection: {}", store.collection_url());
    run_with_store(store, config, dry_run).await
}

fn exit_with(e: &IngestError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting press-ingest");

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    if args.verbose {
        tracing::debug!("Resolved config: {:?}", config.source);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }
    for warning in config.warnings() {
        tracing::warn!("⚠️ {}", warning);
    }

    match run(config, args.dry_run).await {
        Ok(RunOutcome::Ingested(summary)) => {
            tracing::info!(added = summary.added, skipped = summary.skipped, "Run finished");
        }
        Ok(RunOutcome::NoListing) => tracing::info!("Run finished without a listing"),
        Ok(RunOutcome::DryRun(items)) => tracing::info!("Dry run listed {} items", items.len()),
        Err(e) => exit_with(&e),
    }

    Ok(())
}
