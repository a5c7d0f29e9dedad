//! Alerts table, pagination controls, and filter dropdown options.

use crate::models::Alert;

use super::html::{bio_badge, escape_html, format_date, severity_badge};

/// Numbered page links shown in the pager window.
const MAX_VISIBLE_PAGES: u32 = 5;

/// Table body for one page of alerts. Zero records render exactly one
/// placeholder row.
pub fn alerts_table(alerts: &[Alert]) -> String {
    if alerts.is_empty() {
        return r#"<tr><td colspan="6" class="text-center text-muted py-4">No alerts found matching your filters.</td></tr>"#.to_string();
    }

    alerts.iter().map(alert_row).collect()
}

/// The single inline error row shown when the list request fails.
pub fn alerts_error_row() -> String {
    r#"<tr><td colspan="6" class="text-center text-danger py-4">Failed to load alerts. Please try again.</td></tr>"#.to_string()
}

fn alert_row(alert: &Alert) -> String {
    let cve_id = escape_html(&alert.cve_id);
    format!(
        r#"<tr class="alert-row" data-cve-id="{cve_id}">
  <td>{severity}</td>
  <td class="fw-semibold">{cve_id}</td>
  <td class="text-truncate" style="max-width: 300px;">{title}</td>
  <td>{published}</td>
  <td>{bio}</td>
  <td class="text-center"><button class="btn btn-sm btn-success" data-action="save" data-cve-id="{cve_id}">Save</button></td>
</tr>
"#,
        cve_id = cve_id,
        severity = severity_badge(alert.severity),
        title = escape_html(alert.title.as_deref().unwrap_or("N/A")),
        published = format_date(alert.published_at.as_deref()),
        bio = bio_badge(alert.bio_relevance),
    )
}

/// The "Showing page P of T (N total alerts)" line above the table.
pub fn results_info(page: u32, total_pages: u32, total: u64) -> String {
    format!("Showing page {} of {} ({} total alerts)", page, total_pages, total)
}

/// The window of numbered page links: up to five pages centered on the
/// current one, shifted to stay within `[1, total_pages]`.
pub fn page_window(page: u32, total_pages: u32) -> (u32, u32) {
    let half = MAX_VISIBLE_PAGES / 2;
    let start = page.saturating_sub(half).max(1);
    let end = (start + MAX_VISIBLE_PAGES - 1).min(total_pages);
    let start = end.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1);
    (start, end)
}

/// Pager markup: Previous/Next disabled at the boundaries plus the numbered
/// window. A single page renders no controls at all.
pub fn pagination(page: u32, total_pages: u32) -> String {
    if total_pages <= 1 {
        return String::new();
    }

    let mut html = String::new();

    let prev_disabled = if page == 1 { " disabled" } else { "" };
    html.push_str(&format!(
        r##"<li class="page-item{}"><a class="page-link" href="#" data-page="{}">Previous</a></li>
"##,
        prev_disabled,
        page.saturating_sub(1).max(1)
    ));

    let (start, end) = page_window(page, total_pages);
    for number in start..=end {
        let active = if number == page { " active" } else { "" };
        html.push_str(&format!(
            r##"<li class="page-item{}"><a class="page-link" href="#" data-page="{}">{}</a></li>
"##,
            active, number, number
        ));
    }

    let next_disabled = if page == total_pages { " disabled" } else { "" };
    html.push_str(&format!(
        r##"<li class="page-item{}"><a class="page-link" href="#" data-page="{}">Next</a></li>
"##,
        next_disabled,
        (page + 1).min(total_pages)
    ));

    html
}

/// `<option>` list for the vendor/product filter dropdowns.
pub fn select_options(values: &[String]) -> String {
    values
        .iter()
        .map(|value| {
            let escaped = escape_html(value);
            format!("<option value=\"{}\">{}</option>\n", escaped, escaped)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    fn alert(cve_id: &str, title: &str) -> Alert {
        Alert {
            cve_id: cve_id.to_string(),
            title: Some(title.to_string()),
            severity: Some(Severity::High),
            vendor: None,
            product: None,
            published_at: Some("2024-06-05".to_string()),
            bio_relevance: None,
            bio_impact: None,
            summary: None,
            kev_flag: false,
        }
    }

    #[test]
    fn test_empty_table_is_single_placeholder_row() {
        let html = alerts_table(&[]);
        assert_eq!(html.matches("<tr>").count(), 1);
        assert!(html.contains("No alerts found matching your filters."));
    }

    #[test]
    fn test_table_escapes_server_text() {
        let html = alerts_table(&[alert("CVE-2024-0001", "<script>alert(1)</script>")]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("CVE-2024-0001"));
        assert!(html.contains("Jun 5, 2024"));
    }

    #[test]
    fn test_page_window_spec_cases() {
        assert_eq!(page_window(1, 10), (1, 5));
        assert_eq!(page_window(5, 10), (3, 7));
        assert_eq!(page_window(10, 10), (6, 10));
        assert_eq!(page_window(1, 3), (1, 3));
        assert_eq!(page_window(2, 2), (1, 2));
    }

    #[test]
    fn test_pagination_single_page_renders_nothing() {
        assert_eq!(pagination(1, 1), "");
        assert_eq!(pagination(1, 0), "");
    }

    #[test]
    fn test_pagination_boundaries_disabled() {
        let first = pagination(1, 10);
        assert!(first.contains(r##"page-item disabled"><a class="page-link" href="#" data-page="1">Previous"##));
        assert!(first.contains(">Next<"));
        assert!(!first.contains(r##"disabled"><a class="page-link" href="#" data-page="2">Next"##));

        let last = pagination(10, 10);
        assert!(last.contains(r##"page-item disabled"><a class="page-link" href="#" data-page="10">Next"##));
        for number in 6..=10 {
            assert!(last.contains(&format!(r#"data-page="{}">{}</a>"#, number, number)));
        }
        assert!(!last.contains(r#">5</a>"#));
    }

    #[test]
    fn test_pagination_marks_active_page() {
        let html = pagination(5, 10);
        assert!(html.contains(r##"page-item active"><a class="page-link" href="#" data-page="5">5"##));
    }

    #[test]
    fn test_select_options_escaped() {
        let html = select_options(&["Acme & Sons".to_string()]);
        assert_eq!(
            html,
            "<option value=\"Acme &amp; Sons\">Acme &amp; Sons</option>\n"
        );
    }
}
