use serde::{Deserialize, Serialize};

use super::alert::{BioRelevance, Severity};
use super::de;

/// A user's bookmark of a vulnerability record.
///
/// The server denormalizes key alert fields at save time and joins the live
/// severity/bio-relevance columns when listing, so everything here may be
/// absent except the identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedItem {
    pub id: i64,
    pub cve_id: String,
    #[serde(default, deserialize_with = "de::severity_opt")]
    pub severity: Option<Severity>,
    #[serde(default, deserialize_with = "de::bio_relevance_opt")]
    pub bio_relevance: Option<BioRelevance>,
    #[serde(default)]
    pub vulnerability_name: Option<String>,
    #[serde(default)]
    pub vendor_project: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub date_added: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_item_deserializes_joined_row() {
        let item: SavedItem = serde_json::from_str(
            r#"{
                "id": 42,
                "cve_id": "CVE-2024-0001",
                "severity": "HIGH",
                "bio_relevance": null,
                "vulnerability_name": "Widget overflow",
                "vendor_project": "Acme",
                "product": "Widget",
                "date_added": "2024-06-05 10:30:00",
                "short_description": "A buffer overflow.",
                "notes": ""
            }"#,
        )
        .unwrap();
        assert_eq!(item.id, 42);
        assert_eq!(item.severity, Some(Severity::High));
        assert_eq!(item.bio_relevance, None);
        assert_eq!(item.notes.as_deref(), Some(""));
    }
}
