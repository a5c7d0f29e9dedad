//! Card grid for the saved-vulnerabilities page.

use crate::models::SavedItem;

use super::html::{escape_html, format_date};

/// The "N saved items" counter text.
pub fn saved_count_label(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{} saved item{}", count, plural)
}

/// Card grid for the saved list; an empty list renders one placeholder block.
pub fn saved_cards(items: &[SavedItem]) -> String {
    if items.is_empty() {
        return r#"<div class="col-12 text-center py-5"><h4 class="mt-3 text-muted">No saved vulnerabilities yet</h4><p class="text-muted">Visit the <a href="/alerts.html">Alerts page</a> to save CVEs to your list.</p></div>"#.to_string();
    }

    items.iter().map(saved_card).collect()
}

/// The single inline error block shown when the saved list fails to load.
pub fn saved_error() -> String {
    r#"<div class="col-12 text-center text-danger py-4">Failed to load saved vulnerabilities. Please try again.</div>"#.to_string()
}

fn saved_card(item: &SavedItem) -> String {
    let severity = match item.severity {
        Some(severity) => format!(
            r#"<span class="badge badge-severity-{}">{}</span>"#,
            severity.class_suffix(),
            severity
        ),
        None => String::new(),
    };
    let bio = match item.bio_relevance {
        Some(bio) => format!(
            r#"<span class="badge badge-bio-{} ms-1">{}</span>"#,
            bio.class_suffix(),
            bio
        ),
        None => String::new(),
    };
    let description = match item.short_description.as_deref() {
        Some(text) if !text.is_empty() => format!(
            "<div class=\"mt-3\"><strong>Description:</strong> <p class=\"text-muted small\">{}</p></div>\n",
            escape_html(text)
        ),
        _ => String::new(),
    };
    let notes = match item.notes.as_deref() {
        Some(text) if !text.is_empty() => format!(
            "<div class=\"mt-3\"><strong>Notes:</strong> <p class=\"text-muted small\">{}</p></div>\n",
            escape_html(text)
        ),
        _ => String::new(),
    };

    format!(
        r#"<div class="col-md-6 col-lg-4"><div class="card border-0 shadow-sm h-100"><div class="card-body">
<div class="d-flex justify-content-between align-items-start mb-3">
  <h5 class="card-title mb-0">{cve_id}</h5>
  <button class="btn btn-sm btn-outline-danger" data-action="delete" data-id="{id}">Delete</button>
</div>
<div class="mb-2">{severity}{bio}</div>
<h6 class="card-subtitle text-muted mb-3">{name}</h6>
<div class="mb-2"><strong>Vendor:</strong> {vendor}</div>
<div class="mb-2"><strong>Product:</strong> {product}</div>
<div class="mb-2"><strong>Saved:</strong> {saved}</div>
{description}{notes}</div></div></div>
"#,
        cve_id = escape_html(&item.cve_id),
        id = item.id,
        severity = severity,
        bio = bio,
        name = escape_html(item.vulnerability_name.as_deref().unwrap_or("N/A")),
        vendor = escape_html(item.vendor_project.as_deref().unwrap_or("N/A")),
        product = escape_html(item.product.as_deref().unwrap_or("N/A")),
        saved = format_date(item.date_added.as_deref()),
        description = description,
        notes = notes,
    )
}
