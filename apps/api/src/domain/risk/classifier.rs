//! Region risk classification.
//!
//! A region's risk is decided by substring membership in per-bucket
//! allow-lists. Buckets are checked in priority order (High, then Medium);
//! a name matching neither is Low. Classification is total: every name,
//! including the empty string, maps to exactly one level.

use super::level::RiskLevel;
use crate::domain::shared::errors::DomainError;
use serde::{Deserialize, Serialize};

const DEFAULT_HIGH_RISK: [&str; 3] = ["Maharashtra", "Assam", "Kerala"];
const DEFAULT_MEDIUM_RISK: [&str; 3] = ["Gujarat", "Bihar", "West Bengal"];

/// Source of risk levels for region names.
///
/// Renderers and handlers depend on this seam rather than on a fixed table,
/// so any table (or a future live feed) can be injected.
pub trait RiskProvider: Send + Sync {
    fn risk_for(&self, region_name: &str) -> RiskLevel;
}

/// Substring allow-lists for the High and Medium buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskTable {
    high: Vec<String>,
    medium: Vec<String>,
}

impl RiskTable {
    /// Build a table, rejecting blank entries.
    ///
    /// A blank substring would match every region name.
    pub fn new(high: Vec<String>, medium: Vec<String>) -> Result<Self, DomainError> {
        for (bucket, entries) in [("high", &high), ("medium", &medium)] {
            if entries.iter().any(|entry| entry.trim().is_empty()) {
                return Err(DomainError::ValidationError(format!(
                    "{} risk table contains a blank entry",
                    bucket
                )));
            }
        }
        Ok(Self { high, medium })
    }

    /// Parse a table from JSON of the form `{"high": [...], "medium": [...]}`.
    pub fn from_json(text: &str) -> Result<Self, DomainError> {
        let raw: RiskTable = serde_json::from_str(text)
            .map_err(|e| DomainError::ValidationError(format!("invalid risk table: {}", e)))?;
        Self::new(raw.high, raw.medium)
    }

    pub fn high(&self) -> &[String] {
        &self.high
    }

    pub fn medium(&self) -> &[String] {
        &self.medium
    }
}

impl Default for RiskTable {
    fn default() -> Self {
        Self {
            high: DEFAULT_HIGH_RISK.iter().map(|s| s.to_string()).collect(),
            medium: DEFAULT_MEDIUM_RISK.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RiskProvider for RiskTable {
    fn risk_for(&self, region_name: &str) -> RiskLevel {
        bucket_of(region_name, self.high.as_slice(), self.medium.as_slice())
    }
}

/// Classify a region name against the built-in table.
pub fn classify(region_name: &str) -> RiskLevel {
    bucket_of(region_name, &DEFAULT_HIGH_RISK[..], &DEFAULT_MEDIUM_RISK[..])
}

fn bucket_of<S: AsRef<str>>(name: &str, high: &[S], medium: &[S]) -> RiskLevel {
    let matches = |bucket: &[S]| bucket.iter().any(|needle| name.contains(needle.as_ref()));

    if matches(high) {
        RiskLevel::High
    } else if matches(medium) {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
