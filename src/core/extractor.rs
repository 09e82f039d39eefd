use crate::domain::model::Candidate;

pub const DEFAULT_LISTING_MARKER: &str = "Displaying";
pub const DEFAULT_END_MARKERS: [&str; 2] = ["![Link mygov.in]", "RTI and Contact Us"];

const MAX_HEADING_CHARS: usize = 80;
const ITEM_PREFIX: &str = "* [";
const LINK_DELIMITER: &str = "](";

/// Turns the rendered listing dump into `Candidate`s.
///
/// The extractor holds only the marker configuration. All parse state lives in
/// the `Candidates` iterator, so calling [`Extractor::extract`] twice on the
/// same text yields the same sequence.
#[derive(Debug, Clone)]
pub struct Extractor {
    listing_marker: String,
    end_markers: Vec<String>,
}

impl Extractor {
    pub fn new(listing_marker: impl Into<String>, end_markers: Vec<String>) -> Self {
        Self {
            listing_marker: listing_marker.into(),
            end_markers,
        }
    }

    /// Slice of `raw` between the listing marker and the earliest end marker.
    /// `None` when the listing marker is absent.
    pub fn listing_body<'a>(&self, raw: &'a str) -> Option<&'a str> {
        let (_, rest) = raw.split_once(self.listing_marker.as_str())?;
        let end = self
            .end_markers
            .iter()
            .filter_map(|marker| rest.find(marker.as_str()))
            .min()
            .unwrap_or(rest.len());
        Some(&rest[..end])
    }

    pub fn extract<'a>(&self, raw: &'a str) -> Candidates<'a> {
        let body = match self.listing_body(raw) {
            Some(body) => body,
            None => {
                tracing::debug!("Listing marker '{}' not found", self.listing_marker);
                ""
            }
        };
        Candidates {
            lines: body.lines(),
            ministry: None,
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(
            DEFAULT_LISTING_MARKER,
            DEFAULT_END_MARKERS.iter().map(|m| m.to_string()).collect(),
        )
    }
}

pub struct Candidates<'a> {
    lines: std::str::Lines<'a>,
    // 目前的部會標題，遇到下一個標題才會更新
    ministry: Option<&'a str>,
}

impl<'a> Iterator for Candidates<'a> {
    type Item = Candidate<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for raw in self.lines.by_ref() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let clean = strip_decoration(line);
            if is_heading(clean) {
                self.ministry = Some(clean);
                continue;
            }

            if !line.starts_with(ITEM_PREFIX) {
                continue;
            }

            let Some(ministry) = self.ministry else {
                tracing::debug!("Dropping item before any ministry heading: {}", line);
                continue;
            };

            match split_item(line) {
                Some((title, raw_link)) => {
                    return Some(Candidate {
                        ministry,
                        title,
                        raw_link,
                    })
                }
                None => tracing::debug!("Skipping malformed item line: {}", line),
            }
        }
        None
    }
}

fn strip_decoration(line: &str) -> &str {
    line.trim_matches(|c: char| c == '*' || c == '#' || c.is_whitespace())
}

pub fn is_heading(clean: &str) -> bool {
    if clean.is_empty() || clean.chars().count() >= MAX_HEADING_CHARS {
        return false;
    }
    clean.starts_with("Ministry")
        || clean.ends_with("Office")
        || clean == "AYUSH"
        || clean == "PIB Headquarters"
        || is_upper_case(clean)
}

/// At least one cased character and no lower-case ones.
fn is_upper_case(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// `* [title](link "tooltip")` -> (title, link)
fn split_item(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix(ITEM_PREFIX)?;
    let (title, tail) = rest.split_once(LINK_DELIMITER)?;
    let target = tail.split_once(')').map_or(tail, |(target, _)| target);
    let link = target.split(char::is_whitespace).next().unwrap_or("");
    Some((title.trim(), link))
}
