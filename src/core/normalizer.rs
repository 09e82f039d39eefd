use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://www.pib.gov.in";
pub const DEFAULT_RELEASE_PREFIX: &str = "https://www.pib.gov.in/PressReleasePage.aspx";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkRejection {
    Empty,
    Unsupported,
}

impl fmt::Display for LinkRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkRejection::Empty => write!(f, "empty link"),
            LinkRejection::Unsupported => write!(f, "neither absolute nor site-relative"),
        }
    }
}

/// Shapes raw links into absolute URLs against a fixed site origin.
#[derive(Debug, Clone)]
pub struct LinkNormalizer {
    base_url: String,
}

impl LinkNormalizer {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn normalize(&self, raw_link: &str) -> Result<String, LinkRejection> {
        let link = raw_link.trim();
        if link.is_empty() {
            return Err(LinkRejection::Empty);
        }
        if link.starts_with("http://") || link.starts_with("https://") {
            return Ok(link.to_string());
        }
        if link.starts_with('/') {
            return Ok(format!("{}{}", self.base_url, link));
        }
        Err(LinkRejection::Unsupported)
    }
}

impl Default for LinkNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Allow-list of press-release URL prefixes. Applied after normalization.
#[derive(Debug, Clone)]
pub struct PathGate {
    prefixes: Vec<String>,
}

impl PathGate {
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    pub fn allows(&self, url: &str) -> bool {
        self.prefixes.iter().any(|prefix| url.starts_with(prefix.as_str()))
    }
}

impl Default for PathGate {
    fn default() -> Self {
        Self::new(vec![DEFAULT_RELEASE_PREFIX.to_string()])
    }
}
