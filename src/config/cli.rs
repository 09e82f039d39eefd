use crate::config::toml_config::AppConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "press-ingest")]
#[command(about = "Scrape the PIB press release listing into a document store")]
pub struct CliArgs {
    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Listing page to scrape")]
    pub listing_url: Option<String>,

    #[arg(long, help = "Rendering service prefixed to the listing URL")]
    pub render_endpoint: Option<String>,

    #[arg(long, env = "ASTRA_DB_ENDPOINT", hide_env_values = true)]
    pub astra_endpoint: Option<String>,

    #[arg(long, env = "ASTRA_DB_TOKEN", hide_env_values = true)]
    pub astra_token: Option<String>,

    #[arg(long)]
    pub keyspace: Option<String>,

    #[arg(long)]
    pub collection: Option<String>,

    #[arg(long, help = "Store records in a local JSON-lines file instead of Astra")]
    pub store_file: Option<String>,

    #[arg(long, help = "Extract and print items without touching the store")]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit JSON log lines")]
    pub log_json: bool,
}

impl CliArgs {
    /// 載入設定檔 (若有) 再套用命令列覆蓋
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(url) = &self.listing_url {
            config.source.listing_url = url.clone();
        }
        if let Some(endpoint) = &self.render_endpoint {
            config.source.render_endpoint = Some(endpoint.clone());
        }
        if let Some(endpoint) = &self.astra_endpoint {
            config.store.endpoint = Some(endpoint.clone());
        }
        if let Some(token) = &self.astra_token {
            config.store.token = Some(token.clone());
        }
        if let Some(keyspace) = &self.keyspace {
            config.store.keyspace = keyspace.clone();
        }
        if let Some(collection) = &self.collection {
            config.store.collection = collection.clone();
        }
        if let Some(file) = &self.store_file {
            config.store.file = Some(file.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;

    #[test]
    fn test_overrides_apply_on_defaults() {
        let args = CliArgs::parse_from([
            "press-ingest",
            "--listing-url",
            "https://www.pib.gov.in/allRel.aspx?reg=6&lang=1",
            "--store-file",
            "out/press.jsonl",
            "--collection",
            "releases",
        ]);

        let config = args.resolve().unwrap();
        assert_eq!(config.listing_url(), "https://www.pib.gov.in/allRel.aspx?reg=6&lang=1");
        assert_eq!(config.store.file.as_deref(), Some("out/press.jsonl"));
        assert_eq!(config.store.collection, "releases");
        assert!(!args.dry_run);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let args = CliArgs::parse_from(["press-ingest", "--config", "/nonexistent/press.toml"]);
        assert!(args.resolve().is_err());
    }
}
