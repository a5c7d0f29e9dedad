//! The detail modal body for a single vulnerability record.

use crate::models::Alert;

use super::html::{bio_badge, escape_html, format_date, severity_badge};

/// Spinner shown while the record is being fetched.
pub fn detail_loading() -> String {
    r#"<div class="text-center py-5"><div class="spinner-border text-success"></div></div>"#
        .to_string()
}

/// Inline error shown in place of the detail body.
pub fn detail_error(message: &str) -> String {
    format!(r#"<p class="text-danger">{}</p>"#, escape_html(message))
}

/// Full field set for one record: identifier, title, severity and bio badges,
/// vendor/product, published date, optional bio impact, KEV flag, and the
/// summary (or its placeholder).
pub fn detail_body(alert: &Alert) -> String {
    let mut html = String::new();

    field(&mut html, "CVE ID", &escape_html(&alert.cve_id));
    field(&mut html, "Title", &escape_html(alert.title.as_deref().unwrap_or("N/A")));
    field(&mut html, "Severity", &severity_badge(alert.severity));
    field(&mut html, "Vendor", &escape_html(alert.vendor.as_deref().unwrap_or("N/A")));
    field(&mut html, "Product", &escape_html(alert.product.as_deref().unwrap_or("N/A")));
    field(&mut html, "Published", &format_date(alert.published_at.as_deref()));
    field(&mut html, "Bio-Relevance", &bio_badge(alert.bio_relevance));

    if let Some(impact) = alert.bio_impact.as_deref() {
        field(&mut html, "Bio Impact", &escape_html(impact));
    }

    let kev = if alert.kev_flag { r#"<span class="badge bg-danger">Yes</span>"# } else { "No" };
    field(&mut html, "KEV", kev);

    let summary = escape_html(alert.summary.as_deref().unwrap_or("No summary available."));
    html.push_str(&format!(
        "<div class=\"mb-3\"><strong>Summary:</strong> <p class=\"text-muted\">{}</p></div>\n",
        summary
    ));

    html
}

fn field(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!("<div class=\"mb-3\"><strong>{}:</strong> {}</div>\n", label, value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BioRelevance, Severity};

    fn full_alert() -> Alert {
        Alert {
            cve_id: "CVE-2024-0001".to_string(),
            title: Some("Heap overflow <critical>".to_string()),
            severity: Some(Severity::Critical),
            vendor: Some("Acme & Sons".to_string()),
            product: Some("Widget".to_string()),
            published_at: Some("2024-06-05 00:00:00".to_string()),
            bio_relevance: Some(BioRelevance::High),
            bio_impact: Some("Sequencer firmware".to_string()),
            summary: Some("An overflow.".to_string()),
            kev_flag: true,
        }
    }

    #[test]
    fn test_detail_body_escapes_and_badges() {
        let html = detail_body(&full_alert());
        assert!(html.contains("Heap overflow &lt;critical&gt;"));
        assert!(html.contains("Acme &amp; Sons"));
        assert!(html.contains("badge-severity-critical"));
        assert!(html.contains("badge-bio-high"));
        assert!(html.contains(r#"<span class="badge bg-danger">Yes</span>"#));
        assert!(html.contains("Jun 5, 2024"));
        assert!(html.contains("Bio Impact"));
    }

    #[test]
    fn test_detail_body_sparse_record() {
        let alert = Alert {
            cve_id: "CVE-2024-0002".to_string(),
            title: None,
            severity: None,
            vendor: None,
            product: None,
            published_at: None,
            bio_relevance: None,
            bio_impact: None,
            summary: None,
            kev_flag: false,
        };
        let html = detail_body(&alert);
        assert!(html.contains("No summary available."));
        assert!(html.contains("<strong>KEV:</strong> No"));
        assert!(!html.contains("Bio Impact"));
        assert!(!html.contains("bg-danger"));
    }

    #[test]
    fn test_detail_error_is_escaped() {
        assert_eq!(
            detail_error("Alert not found."),
            r#"<p class="text-danger">Alert not found.</p>"#
        );
        assert!(detail_error("<b>boom</b>").contains("&lt;b&gt;boom&lt;/b&gt;"));
    }
}
