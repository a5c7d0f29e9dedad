use std::fmt;

use serde::{Deserialize, Serialize};

use super::de;

/// Severity of a vulnerability record.
///
/// The server stores severities as free-form uppercase strings; parsing is
/// case-insensitive and unknown values are treated as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Severity::Low),
            "medium" => Some(Severity::Medium),
            "high" => Some(Severity::High),
            "critical" => Some(Severity::Critical),
            _ => None,
        }
    }

    /// Lowercase suffix used to pick a `badge-severity-*` CSS class.
    pub fn class_suffix(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        })
    }
}

/// Bio-relevance classification of a vulnerability record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BioRelevance {
    Low,
    Medium,
    High,
}

impl BioRelevance {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(BioRelevance::Low),
            "medium" => Some(BioRelevance::Medium),
            "high" => Some(BioRelevance::High),
            _ => None,
        }
    }

    /// Lowercase suffix used to pick a `badge-bio-*` CSS class.
    pub fn class_suffix(self) -> &'static str {
        match self {
            BioRelevance::Low => "low",
            BioRelevance::Medium => "medium",
            BioRelevance::High => "high",
        }
    }
}

impl fmt::Display for BioRelevance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BioRelevance::Low => "LOW",
            BioRelevance::Medium => "MEDIUM",
            BioRelevance::High => "HIGH",
        })
    }
}

/// A vulnerability record as returned by `/api/alerts`.
///
/// Owned and mutated only by the server; the client treats it as immutable.
/// Date fields stay as the server's strings and are parsed at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub cve_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "de::severity_opt")]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default, deserialize_with = "de::bio_relevance_opt")]
    pub bio_relevance: Option<BioRelevance>,
    #[serde(default)]
    pub bio_impact: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "de::loose_bool")]
    pub kev_flag: bool,
}

/// One page of alerts plus the pagination envelope from `/api/alerts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertPage {
    #[serde(default)]
    pub alerts: Vec<Alert>,
    pub page: u32,
    pub total_pages: u32,
    pub total: u64,
}
