use serde::{Deserialize, Serialize};

use super::{Classification, ProbeResult};

/// Aggregate of one sweep: every probed identifier exactly once, in ascending
/// id order, transport failures included as `Error` entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanOutcome {
    results: Vec<ProbeResult>,
    vulnerable_count: usize,
    protected_count: usize,
    other_count: usize,
    error_count: usize,
}

impl ScanOutcome {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            results: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub fn push(&mut self, result: ProbeResult) {
        match result.classification {
            Classification::Vulnerable => self.vulnerable_count += 1,
            Classification::Protected => self.protected_count += 1,
            Classification::Other => self.other_count += 1,
            Classification::Error => self.error_count += 1,
        }
        self.results.push(result);
    }

    pub fn results(&self) -> &[ProbeResult] {
        &self.results
    }

    pub fn vulnerable(&self) -> impl Iterator<Item = &ProbeResult> {
        self.results.iter().filter(|r| r.is_vulnerable())
    }

    pub fn protected_ids(&self) -> Vec<i64> {
        self.results
            .iter()
            .filter(|r| r.is_protected())
            .map(|r| r.id)
            .collect()
    }

    pub fn vulnerable_count(&self) -> usize {
        self.vulnerable_count
    }

    pub fn protected_count(&self) -> usize {
        self.protected_count
    }

    pub fn other_count(&self) -> usize {
        self.other_count
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn has_vulnerable(&self) -> bool {
        self.vulnerable_count > 0
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
