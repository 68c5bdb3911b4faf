use std::collections::HashMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Substitution marker replaced by each candidate identifier.
pub const ID_MARKER: &str = "{id}";

/// Per-request timeout applied to every probe.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?\d+)-(-?\d+)$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        };
        write!(f, "{}", s)
    }
}

impl HttpMethod {
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            _ => Err(ConfigError::UnsupportedMethod(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    pub url_template: String,
    pub range_start: i64,
    pub range_end: i64,
    pub headers: HashMap<String, String>,
    pub method: HttpMethod,
}

impl ScanConfig {
    pub fn new(
        url_template: String,
        range: (i64, i64),
        headers: HashMap<String, String>,
        method: HttpMethod,
    ) -> Result<Self, ConfigError> {
        let markers = url_template.matches(ID_MARKER).count();
        if markers != 1 {
            return Err(ConfigError::MarkerCount(markers));
        }

        let (range_start, range_end) = range;
        if range_start > range_end {
            return Err(ConfigError::RangeOrder {
                start: range_start,
                end: range_end,
            });
        }

        Ok(Self {
            url_template,
            range_start,
            range_end,
            headers,
            method,
        })
    }

    /// Parse an identifier range of the form `<start>-<end>`.
    /// Negative bounds are valid: `-5--1` covers -5 through -1.
    pub fn parse_range(input: &str) -> Result<(i64, i64), ConfigError> {
        let trimmed = input.trim();
        let caps = RANGE_RE
            .captures(trimmed)
            .ok_or_else(|| ConfigError::InvalidRange(input.to_string()))?;

        let start: i64 = caps[1]
            .parse()
            .map_err(|_| ConfigError::InvalidRange(input.to_string()))?;
        let end: i64 = caps[2]
            .parse()
            .map_err(|_| ConfigError::InvalidRange(input.to_string()))?;

        if start > end {
            return Err(ConfigError::RangeOrder { start, end });
        }

        Ok((start, end))
    }

    /// Parse `"Name: Value"` header specs, split on the first colon with both
    /// sides trimmed. Entries without a colon or with an empty name are
    /// rejected. Duplicate names keep the last value.
    pub fn parse_headers(specs: &[String]) -> Result<HashMap<String, String>, ConfigError> {
        let mut headers = HashMap::new();
        for spec in specs {
            let (name, value) = spec
                .split_once(':')
                .ok_or_else(|| ConfigError::InvalidHeader(spec.clone()))?;
            let name = name.trim();
            if name.is_empty() {
                return Err(ConfigError::InvalidHeader(spec.clone()));
            }
            headers.insert(name.to_string(), value.trim().to_string());
        }
        Ok(headers)
    }

    pub fn resolve_url(&self, id: i64) -> String {
        self.url_template.replacen(ID_MARKER, &id.to_string(), 1)
    }

    pub fn ids(&self) -> RangeInclusive<i64> {
        self.range_start..=self.range_end
    }

    pub fn total_ids(&self) -> u64 {
        self.range_start.abs_diff(self.range_end).saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_template(template: &str) -> Result<ScanConfig, ConfigError> {
        ScanConfig::new(template.to_string(), (1, 10), HashMap::new(), HttpMethod::Get)
    }

    #[test]
    fn test_parse_range_simple() {
        assert_eq!(ScanConfig::parse_range("1-100").unwrap(), (1, 100));
    }

    #[test]
    fn test_parse_range_single_id() {
        assert_eq!(ScanConfig::parse_range("7-7").unwrap(), (7, 7));
    }

    #[test]
    fn test_parse_range_negative_bounds() {
        assert_eq!(ScanConfig::parse_range("-5--1").unwrap(), (-5, -1));
        assert_eq!(ScanConfig::parse_range("-3-3").unwrap(), (-3, 3));
        assert_eq!(ScanConfig::parse_range("0-0").unwrap(), (0, 0));
    }

    #[test]
    fn test_parse_range_malformed() {
        for input in ["", "1", "1-", "-1", "a-b", "1-2-3", "1..5", "1 - 5"] {
            assert!(
                matches!(
                    ScanConfig::parse_range(input),
                    Err(ConfigError::InvalidRange(_))
                ),
                "expected InvalidRange for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_range_reversed() {
        assert_eq!(
            ScanConfig::parse_range("10-1"),
            Err(ConfigError::RangeOrder { start: 10, end: 1 })
        );
    }

    #[test]
    fn test_parse_headers_trims_both_sides() {
        let specs = vec!["Authorization:  Bearer abc ".to_string()];
        let headers = ScanConfig::parse_headers(&specs).unwrap();
        assert_eq!(headers["Authorization"], "Bearer abc");
    }

    #[test]
    fn test_parse_headers_splits_on_first_colon() {
        let specs = vec!["Cookie: session=a:b:c".to_string()];
        let headers = ScanConfig::parse_headers(&specs).unwrap();
        assert_eq!(headers["Cookie"], "session=a:b:c");
    }

    #[test]
    fn test_parse_headers_rejects_missing_colon() {
        let specs = vec!["NotAHeader".to_string()];
        assert!(matches!(
            ScanConfig::parse_headers(&specs),
            Err(ConfigError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_parse_headers_rejects_empty_name() {
        let specs = vec![": value".to_string()];
        assert!(matches!(
            ScanConfig::parse_headers(&specs),
            Err(ConfigError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_parse_headers_last_duplicate_wins() {
        let specs = vec!["X-Token: first".to_string(), "X-Token: second".to_string()];
        let headers = ScanConfig::parse_headers(&specs).unwrap();
        assert_eq!(headers["X-Token"], "second");
    }

    #[test]
    fn test_method_parse_case_insensitive() {
        assert_eq!(HttpMethod::parse("get").unwrap(), HttpMethod::Get);
        assert_eq!(HttpMethod::parse("POST").unwrap(), HttpMethod::Post);
        assert_eq!(HttpMethod::parse("PoSt").unwrap(), HttpMethod::Post);
    }

    #[test]
    fn test_method_parse_unsupported() {
        assert_eq!(
            HttpMethod::parse("DELETE"),
            Err(ConfigError::UnsupportedMethod("DELETE".to_string()))
        );
    }

    #[test]
    fn test_config_rejects_missing_marker() {
        assert_eq!(
            config_with_template("http://t/api/users/1").unwrap_err(),
            ConfigError::MarkerCount(0)
        );
    }

    #[test]
    fn test_config_rejects_duplicate_marker() {
        assert_eq!(
            config_with_template("http://t/{id}/sub/{id}").unwrap_err(),
            ConfigError::MarkerCount(2)
        );
    }

    #[test]
    fn test_config_rejects_reversed_range() {
        let result = ScanConfig::new(
            "http://t/{id}".to_string(),
            (5, 2),
            HashMap::new(),
            HttpMethod::Get,
        );
        assert_eq!(
            result.unwrap_err(),
            ConfigError::RangeOrder { start: 5, end: 2 }
        );
    }

    #[test]
    fn test_resolve_url() {
        let config = config_with_template("http://t/api/users/{id}").unwrap();
        assert_eq!(config.resolve_url(42), "http://t/api/users/42");
        assert_eq!(config.resolve_url(-3), "http://t/api/users/-3");
    }

    #[test]
    fn test_total_ids() {
        let config = ScanConfig::new(
            "http://t/{id}".to_string(),
            (-2, 2),
            HashMap::new(),
            HttpMethod::Get,
        )
        .unwrap();
        assert_eq!(config.total_ids(), 5);
    }
}
