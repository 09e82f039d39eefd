use crate::adapters::astra::{DEFAULT_COLLECTION, DEFAULT_KEYSPACE};
use crate::core::extractor::{DEFAULT_END_MARKERS, DEFAULT_LISTING_MARKER};
use crate::core::ingest::DEFAULT_SOURCE_TAG;
use crate::core::normalizer::{DEFAULT_BASE_URL, DEFAULT_RELEASE_PREFIX};
use crate::core::ConfigProvider;
use crate::utils::error::{IngestError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_LISTING_URL: &str = "https://www.pib.gov.in/allRel.aspx?reg=3&lang=1";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub extract: ExtractConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub listing_url: String,
    pub render_endpoint: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            render_endpoint: None,
            timeout_seconds: 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    pub listing_marker: String,
    pub end_markers: Vec<String>,
    pub base_url: String,
    pub allowed_prefixes: Vec<String>,
    pub source_tag: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            listing_marker: DEFAULT_LISTING_MARKER.to_string(),
            end_markers: DEFAULT_END_MARKERS.iter().map(|m| m.to_string()).collect(),
            base_url: DEFAULT_BASE_URL.to_string(),
            allowed_prefixes: vec![DEFAULT_RELEASE_PREFIX.to_string()],
            source_tag: DEFAULT_SOURCE_TAG.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub endpoint: Option<String>,
    pub token: Option<String>,
    pub keyspace: String,
    pub collection: String,
    /// JSON-lines file; takes precedence over the Astra endpoint.
    pub file: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            token: None,
            keyspace: DEFAULT_KEYSPACE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(IngestError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| IngestError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ASTRA_DB_TOKEN})，找不到的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| IngestError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_seconds)
    }

    /// Settings that are valid but likely to make a run find nothing.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.source.render_endpoint.is_none() {
            warnings.push(format!(
                "source.render_endpoint is not set; {} will be fetched as raw HTML and no '* [' items will match",
                self.source.listing_url
            ));
        }
        warnings
    }

    pub fn uses_file_store(&self) -> bool {
        self.store.file.is_some()
    }

    fn validate_store(&self) -> Result<()> {
        if let Some(file) = &self.store.file {
            return validation::validate_non_empty_string("store.file", file);
        }

        let endpoint = validation::validate_required_field("store.endpoint", &self.store.endpoint)?;
        validation::validate_url("store.endpoint", endpoint)?;
        let token = validation::validate_required_field("store.token", &self.store.token)?;
        validation::validate_non_empty_string("store.token", token)?;
        validation::validate_non_empty_string("store.keyspace", &self.store.keyspace)?;
        validation::validate_non_empty_string("store.collection", &self.store.collection)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.listing_url", &self.source.listing_url)?;
        if let Some(endpoint) = &self.source.render_endpoint {
            validation::validate_url("source.render_endpoint", endpoint)?;
        }
        validation::validate_positive_number("source.timeout_seconds", self.source.timeout_seconds, 1)?;

        validation::validate_non_empty_string("extract.listing_marker", &self.extract.listing_marker)?;
        validation::validate_non_empty_entries("extract.end_markers", &self.extract.end_markers)?;
        validation::validate_url("extract.base_url", &self.extract.base_url)?;
        if self.extract.allowed_prefixes.is_empty() {
            return Err(IngestError::InvalidConfigValueError {
                field: "extract.allowed_prefixes".to_string(),
                value: "[]".to_string(),
                reason: "At least one release URL prefix is required".to_string(),
            });
        }
        for prefix in &self.extract.allowed_prefixes {
            validation::validate_url("extract.allowed_prefixes", prefix)?;
        }
        validation::validate_non_empty_string("extract.source_tag", &self.extract.source_tag)?;

        self.validate_store()
    }
}

impl ConfigProvider for AppConfig {
    fn listing_url(&self) -> &str {
        &self.source.listing_url
    }

    fn listing_marker(&self) -> &str {
        &self.extract.listing_marker
    }

    fn end_markers(&self) -> &[String] {
        &self.extract.end_markers
    }

    fn base_url(&self) -> &str {
        &self.extract.base_url
    }

    fn allowed_prefixes(&self) -> &[String] {
        &self.extract.allowed_prefixes
    }

    fn source_tag(&self) -> &str {
        &self.extract.source_tag
    }
}
