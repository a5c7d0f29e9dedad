use serde::{Deserialize, Serialize};

/// Precomputed dashboard statistics from `/api/stats`.
///
/// Every section defaults to empty so one missing key never sinks the rest of
/// the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub kev_count: u64,
    #[serde(default)]
    pub bio_count: u64,
    #[serde(default)]
    pub month_count: u64,
    #[serde(default)]
    pub bio_breakdown: BioBreakdown,
    #[serde(default)]
    pub top_vendors: Vec<VendorCount>,
    #[serde(default)]
    pub top_products: Vec<ProductCount>,
    #[serde(default)]
    pub timeline: Vec<TimelineBucket>,
    #[serde(default)]
    pub recent_alerts: Vec<RecentAlert>,
}

/// Three-way bio-relevance breakdown; absent keys default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BioBreakdown {
    #[serde(default, rename = "HIGH")]
    pub high: u64,
    #[serde(default, rename = "MEDIUM")]
    pub medium: u64,
    #[serde(default, rename = "LOW")]
    pub low: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorCount {
    pub vendor: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCount {
    pub product: String,
    pub count: u64,
}

/// One month of the publication timeline, keyed `YYYY-MM`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineBucket {
    pub month: String,
    pub count: u64,
}

/// A recent critical-severity alert for the priority list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentAlert {
    pub cve_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}
