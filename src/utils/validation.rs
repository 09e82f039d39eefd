use crate::utils::error::{IngestError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(IngestError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Every entry must be non-blank; an empty list is allowed.
pub fn validate_non_empty_entries(field_name: &str, values: &[String]) -> Result<()> {
    for value in values {
        validate_non_empty_string(field_name, value)?;
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| IngestError::MissingConfigError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("source.listing_url", "https://www.pib.gov.in").is_ok());
        assert!(validate_url("source.listing_url", "http://localhost:8080/x").is_ok());
        assert!(validate_url("source.listing_url", "").is_err());
        assert!(validate_url("source.listing_url", "www.pib.gov.in").is_err());
        assert!(validate_url("source.listing_url", "ftp://pib.gov.in").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("source.timeout_seconds", 30, 1).is_ok());
        assert!(validate_positive_number("source.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_entries() {
        let good = vec!["RTI and Contact Us".to_string()];
        assert!(validate_non_empty_entries("extract.end_markers", &good).is_ok());
        assert!(validate_non_empty_entries("extract.end_markers", &[]).is_ok());

        let bad = vec!["ok".to_string(), "   ".to_string()];
        assert!(validate_non_empty_entries("extract.end_markers", &bad).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let missing: Option<String> = None;
        let err = validate_required_field("store.token", &missing).unwrap_err();
        assert!(matches!(err, IngestError::MissingConfigError { .. }));

        let present = Some("token".to_string());
        assert_eq!(validate_required_field("store.token", &present).unwrap(), "token");
    }
}
