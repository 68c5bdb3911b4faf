use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Vulnerable,
    Protected,
    Other,
    Error,
}

impl Classification {
    /// Status-code classification policy. Only 200 counts as vulnerable and
    /// only 401/403 as protected. Everything else, redirects included, is
    /// inconclusive.
    pub fn from_status(status: u16) -> Self {
        match status {
            200 => Classification::Vulnerable,
            401 | 403 => Classification::Protected,
            _ => Classification::Other,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Classification::Vulnerable => "Vulnerable",
            Classification::Protected => "Protected",
            Classification::Other => "Other",
            Classification::Error => "Error",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    pub id: i64,
    pub status: Option<u16>,
    pub body_size: Option<usize>,
    pub url: String,
    pub classification: Classification,
    pub error: Option<String>,
}

impl ProbeResult {
    pub fn classified(id: i64, url: String, status: u16, body_size: usize) -> Self {
        Self {
            id,
            status: Some(status),
            body_size: Some(body_size),
            url,
            classification: Classification::from_status(status),
            error: None,
        }
    }

    pub fn transport_error(id: i64, url: String, error: String) -> Self {
        Self {
            id,
            status: None,
            body_size: None,
            url,
            classification: Classification::Error,
            error: Some(error),
        }
    }

    pub fn is_vulnerable(&self) -> bool {
        self.classification == Classification::Vulnerable
    }

    pub fn is_protected(&self) -> bool {
        self.classification == Classification::Protected
    }

    /// Shell-invocable reproduction command against the resolved URL.
    pub fn poc(&self) -> String {
        format!("curl '{}'", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_200_is_vulnerable() {
        assert_eq!(Classification::from_status(200), Classification::Vulnerable);
    }

    #[test]
    fn test_status_401_403_are_protected() {
        assert_eq!(Classification::from_status(401), Classification::Protected);
        assert_eq!(Classification::from_status(403), Classification::Protected);
    }

    #[test]
    fn test_other_statuses_are_inconclusive() {
        for status in [201, 204, 301, 302, 404, 418, 500, 503] {
            assert_eq!(
                Classification::from_status(status),
                Classification::Other,
                "status {}",
                status
            );
        }
    }

    #[test]
    fn test_classified_result_carries_response_fields() {
        let result = ProbeResult::classified(3, "http://t/api/users/3".to_string(), 200, 512);
        assert_eq!(result.status, Some(200));
        assert_eq!(result.body_size, Some(512));
        assert!(result.is_vulnerable());
        assert!(result.error.is_none());
    }

    #[test]
    fn test_transport_error_result() {
        let result =
            ProbeResult::transport_error(9, "http://t/api/users/9".to_string(), "timed out".into());
        assert_eq!(result.classification, Classification::Error);
        assert!(result.status.is_none());
        assert!(result.body_size.is_none());
        assert_eq!(result.error.as_deref(), Some("timed out"));
    }

    #[test]
    fn test_poc_command() {
        let result = ProbeResult::classified(1, "http://t/api/users/1".to_string(), 200, 10);
        assert_eq!(result.poc(), "curl 'http://t/api/users/1'");
    }
}
