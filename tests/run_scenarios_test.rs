use anyhow::Result;
use httpmock::prelude::*;
use press_ingest::core::DocumentStore;
use press_ingest::utils::validation::Validate;
use press_ingest::{
    AppConfig, AstraStore, EtlEngine, HttpPageFetcher, IngestError, IngestSummary, JsonlStore,
    PressPipeline, RunOutcome,
};
use std::time::Duration;
use tempfile::TempDir;

const LISTING: &str = "Displaying ... \n**MINISTRY OF EXAMPLE**\n* [Title A](/PressReleasePage.aspx?id=1 \"tip\")\n";

fn config_for(server: &MockServer, store_file: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.source.listing_url = server.url("/allRel.aspx?reg=3&lang=1");
    config.store.file = Some(store_file.to_string());
    config
}

fn fetcher() -> HttpPageFetcher {
    HttpPageFetcher::new(None, Duration::from_secs(5)).unwrap()
}

fn serve<'a>(server: &'a MockServer, body: &str) -> httpmock::Mock<'a> {
    let body = body.to_string();
    server.mock(move |when, then| {
        when.method(GET).path("/allRel.aspx").query_param("reg", "3");
        then.status(200)
            .header("Content-Type", "text/plain; charset=utf-8")
            .body(body);
    })
}

#[tokio::test]
async fn test_single_release_is_stored() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store_path = temp_dir.path().join("press.jsonl");
    let server = MockServer::start();
    let page = serve(&server, LISTING);

    let config = config_for(&server, store_path.to_str().unwrap());
    config.validate()?;
    let store = JsonlStore::open(&store_path)?;
    let engine = EtlEngine::new(PressPipeline::new(fetcher(), store, config));

    let outcome = engine.run().await?;

    page.assert();
    assert_eq!(outcome, RunOutcome::Ingested(IngestSummary { added: 1, skipped: 0 }));

    let record = engine
        .pipeline()
        .store()
        .get("https://www.pib.gov.in/PressReleasePage.aspx?id=1")
        .await
        .expect("record stored");
    assert_eq!(record.ministry, "MINISTRY OF EXAMPLE");
    assert_eq!(record.title, "Title A");
    assert_eq!(record.source, "PIB");
    assert_eq!(record.date, chrono::Utc::now().date_naive());
    Ok(())
}

#[tokio::test]
async fn test_second_run_skips_existing_release() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store_path = temp_dir.path().join("press.jsonl");
    let server = MockServer::start();
    let page = serve(&server, LISTING);

    for expected in [
        IngestSummary { added: 1, skipped: 0 },
        IngestSummary { added: 0, skipped: 1 },
    ] {
        let config = config_for(&server, store_path.to_str().unwrap());
        let store = JsonlStore::open(&store_path)?;
        let engine = EtlEngine::new(PressPipeline::new(fetcher(), store, config));
        assert_eq!(engine.run().await?, RunOutcome::Ingested(expected));
    }

    page.assert_hits(2);
    let content = std::fs::read_to_string(&store_path)?;
    assert_eq!(content.lines().count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_orphan_and_out_of_scope_links_are_dropped() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store_path = temp_dir.path().join("press.jsonl");
    let server = MockServer::start();
    let body = "Displaying 3\n\
                * [Orphan](/PressReleasePage.aspx?id=0)\n\
                Ministry of Railways\n\
                * [Other section](/other/page)\n\
                * [Kept](/PressReleasePage.aspx?id=2)\n\
                RTI and Contact Us\n\
                * [Footer](/PressReleasePage.aspx?id=3)\n";
    serve(&server, body);

    let config = config_for(&server, store_path.to_str().unwrap());
    let store = JsonlStore::open(&store_path)?;
    let engine = EtlEngine::new(PressPipeline::new(fetcher(), store, config));

    let outcome = engine.run().await?;
    assert_eq!(outcome, RunOutcome::Ingested(IngestSummary { added: 1, skipped: 0 }));

    let store = engine.pipeline().store();
    assert_eq!(store.len().await, 1);
    assert!(store
        .contains_url("https://www.pib.gov.in/PressReleasePage.aspx?id=2")
        .await?);
    Ok(())
}

#[tokio::test]
async fn test_dry_run_lists_items_without_writing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store_path = temp_dir.path().join("press.jsonl");
    let server = MockServer::start();
    serve(&server, LISTING);

    let config = config_for(&server, store_path.to_str().unwrap());
    let store = JsonlStore::open(&store_path)?;
    let engine = EtlEngine::new(PressPipeline::new(fetcher(), store, config)).dry_run(true);

    match engine.run().await? {
        RunOutcome::DryRun(items) => {
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].url, "https://www.pib.gov.in/PressReleasePage.aspx?id=1");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(!store_path.exists());
    Ok(())
}

#[tokio::test]
async fn test_missing_listing_marker_makes_no_store_calls() -> Result<()> {
    let server = MockServer::start();
    serve(&server, "# Site under maintenance\n* [Something](/PressReleasePage.aspx?id=1)\n");
    let astra = server.mock(|when, then| {
        when.method(POST).path_contains("/api/json/v1/");
        then.status(200).json_body(serde_json::json!({ "data": { "document": null } }));
    });

    let mut config = AppConfig::default();
    config.source.listing_url = server.url("/allRel.aspx?reg=3&lang=1");
    let store = AstraStore::new(
        &server.base_url(),
        "token",
        &config.store.keyspace,
        &config.store.collection,
        Duration::from_secs(5),
    )?;
    let engine = EtlEngine::new(PressPipeline::new(fetcher(), store, config));

    assert_eq!(engine.run().await?, RunOutcome::NoListing);
    astra.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_retrieval_failure_aborts_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store_path = temp_dir.path().join("press.jsonl");
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/allRel.aspx");
        then.status(503);
    });

    let config = config_for(&server, store_path.to_str().unwrap());
    let store = JsonlStore::open(&store_path)?;
    let engine = EtlEngine::new(PressPipeline::new(fetcher(), store, config));

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, IngestError::RetrievalError { status: 503, .. }));
    assert!(!store_path.exists());
    Ok(())
}
