//! Dashboard list sections: rankings, timeline, and priority alerts.
//!
//! Each renderer handles an empty input with its own neutral placeholder so
//! one missing section never blanks another.

use crate::models::{ProductCount, RecentAlert, TimelineBucket, VendorCount};

use super::html::{escape_html, format_date};

const NO_DATA: &str = r#"<div class="text-center text-muted py-3">No data available</div>"#;

/// Ranked vendor list with per-vendor alert counts.
pub fn top_vendors(vendors: &[VendorCount]) -> String {
    if vendors.is_empty() {
        return NO_DATA.to_string();
    }
    vendors
        .iter()
        .map(|v| {
            format!(
                r#"<div class="list-group-item d-flex justify-content-between align-items-center border-0 px-0"><div class="fw-semibold">{}</div><span class="badge bg-secondary rounded-pill">{} alerts</span></div>
"#,
                escape_html(&v.vendor),
                v.count
            )
        })
        .collect()
}

/// Ranked product list.
pub fn top_products(products: &[ProductCount]) -> String {
    if products.is_empty() {
        return NO_DATA.to_string();
    }
    products
        .iter()
        .map(|p| {
            format!(
                r#"<div class="list-group-item d-flex justify-content-between align-items-center border-0 px-0"><div class="fw-semibold">{}</div><span class="badge bg-secondary rounded-pill">{}</span></div>
"#,
                escape_html(&p.product),
                p.count
            )
        })
        .collect()
}

/// Monthly publication timeline, most recent first as served.
pub fn timeline(buckets: &[TimelineBucket]) -> String {
    if buckets.is_empty() {
        return NO_DATA.to_string();
    }
    buckets
        .iter()
        .map(|bucket| {
            format!(
                r#"<div class="list-group-item d-flex justify-content-between align-items-center border-0 px-0"><div class="fw-semibold">{}</div><span class="text-muted">{} CVEs</span></div>
"#,
                escape_html(&bucket.month),
                bucket.count
            )
        })
        .collect()
}

/// Recent critical-severity alerts.
pub fn priority_alerts(alerts: &[RecentAlert]) -> String {
    if alerts.is_empty() {
        return r#"<div class="text-center text-muted py-3">No critical alerts</div>"#.to_string();
    }
    alerts
        .iter()
        .map(|alert| {
            format!(
                r#"<div class="list-group-item border-0 px-0 py-3">
  <div class="fw-bold mb-1"><span class="badge badge-severity-critical me-2">CRITICAL</span>{}</div>
  <div class="text-muted small mb-1">{}</div>
  <div class="small text-muted">{} &bull; {}</div>
</div>
"#,
                escape_html(&alert.cve_id),
                escape_html(alert.title.as_deref().unwrap_or("")),
                escape_html(alert.vendor.as_deref().unwrap_or("Unknown")),
                format_date(alert.published_at.as_deref())
            )
        })
        .collect()
}
