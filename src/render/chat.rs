//! Transcript entries for the assistant chat panel.

use crate::models::{ChatRole, RelatedCve};

use super::html::escape_html;

/// A transcript message from either party. Message text is always treated as
/// plain text.
pub fn message(role: ChatRole, text: &str) -> String {
    format!(
        r#"<div class="chat-message {}"><div class="message-header">{}</div><div>{}</div></div>"#,
        role.class_suffix(),
        role.label(),
        escape_html(text)
    )
}

/// The transient "Thinking..." placeholder shown while a request is
/// outstanding.
pub fn thinking() -> String {
    r#"<div class="chat-message ai"><div class="message-header">AI Assistant</div><div><span class="spinner-border spinner-border-sm me-2"></span>Thinking...</div></div>"#.to_string()
}

/// Secondary transcript entry listing the records related to a reply, each as
/// "identifier: title (vendor - severity)".
pub fn related_cves(cves: &[RelatedCve]) -> String {
    let items: String = cves
        .iter()
        .map(|cve| {
            let severity =
                cve.severity.map_or_else(|| "N/A".to_string(), |severity| severity.to_string());
            format!(
                "<li><strong>{}</strong>: {}<br><small class=\"text-muted\">{} - {}</small></li>\n",
                escape_html(&cve.cve_id),
                escape_html(cve.title.as_deref().unwrap_or("N/A")),
                escape_html(cve.vendor.as_deref().unwrap_or("N/A")),
                escape_html(&severity)
            )
        })
        .collect();

    format!(
        r#"<div class="chat-message ai"><div class="message-header">Related CVEs from Database</div><div class="small"><ul class="mb-0 ps-3">{}</ul></div></div>"#,
        items
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    #[test]
    fn test_message_roles_and_escaping() {
        let user = message(ChatRole::User, "what about <CVE-2024-0001>?");
        assert!(user.contains("chat-message user"));
        assert!(user.contains(">You<"));
        assert!(user.contains("&lt;CVE-2024-0001&gt;"));

        let assistant = message(ChatRole::Assistant, "It is critical & exploited.");
        assert!(assistant.contains("chat-message ai"));
        assert!(assistant.contains("AI Assistant"));
        assert!(assistant.contains("critical &amp; exploited"));
    }

    #[test]
    fn test_related_cves_listing() {
        let html = related_cves(&[RelatedCve {
            cve_id: "CVE-2024-0001".to_string(),
            title: Some("Overflow".to_string()),
            vendor: Some("Acme".to_string()),
            product: None,
            severity: Some(Severity::High),
            summary: None,
        }]);
        assert!(html.contains("Related CVEs from Database"));
        assert!(html.contains("<strong>CVE-2024-0001</strong>: Overflow"));
        assert!(html.contains("Acme - HIGH"));
    }

    #[test]
    fn test_thinking_placeholder() {
        assert!(thinking().contains("Thinking..."));
    }
}
