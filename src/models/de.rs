//! Tolerant deserializers for loosely typed server fields.
//!
//! The backend serves rows straight out of MySQL, so enum-like columns arrive
//! as arbitrary-case strings (or null) and boolean flags arrive as 0/1
//! integers. Unknown enum values deserialize to `None` rather than failing the
//! whole payload.

use serde::{Deserialize, Deserializer};

use super::alert::{BioRelevance, Severity};

pub fn severity_opt<'de, D>(deserializer: D) -> Result<Option<Severity>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(Severity::parse))
}

pub fn bio_relevance_opt<'de, D>(deserializer: D) -> Result<Option<BioRelevance>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(BioRelevance::parse))
}

/// Accept `true`/`false`, 0/1 integers, or null for boolean flags.
pub fn loose_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LooseBool {
        Bool(bool),
        Int(i64),
    }

    let value: Option<LooseBool> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(LooseBool::Bool(b)) => b,
        Some(LooseBool::Int(n)) => n != 0,
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Flag {
        #[serde(default, deserialize_with = "super::loose_bool")]
        kev_flag: bool,
    }

    #[test]
    fn test_loose_bool_accepts_ints_and_bools() {
        let f: Flag = serde_json::from_str(r#"{"kev_flag": 1}"#).unwrap();
        assert!(f.kev_flag);
        let f: Flag = serde_json::from_str(r#"{"kev_flag": 0}"#).unwrap();
        assert!(!f.kev_flag);
        let f: Flag = serde_json::from_str(r#"{"kev_flag": true}"#).unwrap();
        assert!(f.kev_flag);
        let f: Flag = serde_json::from_str(r#"{"kev_flag": null}"#).unwrap();
        assert!(!f.kev_flag);
        let f: Flag = serde_json::from_str(r#"{}"#).unwrap();
        assert!(!f.kev_flag);
    }

    #[derive(Deserialize)]
    struct Sev {
        #[serde(default, deserialize_with = "super::severity_opt")]
        severity: Option<super::Severity>,
    }

    #[test]
    fn test_severity_opt_tolerates_unknown_values() {
        let s: Sev = serde_json::from_str(r#"{"severity": "HIGH"}"#).unwrap();
        assert_eq!(s.severity, Some(super::Severity::High));
        let s: Sev = serde_json::from_str(r#"{"severity": "weird"}"#).unwrap();
        assert_eq!(s.severity, None);
        let s: Sev = serde_json::from_str(r#"{"severity": null}"#).unwrap();
        assert_eq!(s.severity, None);
    }
}
