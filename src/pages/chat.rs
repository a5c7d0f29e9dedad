//! The assistant chat panel.
//!
//! The panel is shared across pages and, like the transcript container it
//! writes to, behaves as a shared resource: methods take `&self` and the
//! single-flight guard is interior-mutable. While a request is outstanding
//! any further submission is ignored; the guard is cleared on every
//! completion path, success or failure.

use std::cell::Cell;

use tracing::error;

use super::surface::{Region, Surface};
use crate::api::VulnApi;
use crate::models::ChatRole;
use crate::render::chat;

/// What a submission did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatOutcome {
    /// Reply rendered into the transcript.
    Answered,
    /// Error entry rendered into the transcript.
    Failed,
    /// Blank input; nothing sent.
    Empty,
    /// A request was already outstanding; nothing sent.
    Ignored,
}

/// Controller for the chat panel.
#[derive(Debug, Default)]
pub struct ChatPanel {
    in_flight: Cell<bool>,
}

impl ChatPanel {
    pub fn new() -> Self {
        Self { in_flight: Cell::new(false) }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Submit one message: append it to the transcript, show the transient
    /// placeholder, issue the request, then replace the placeholder with the
    /// reply (plus related records) or an inline error entry. The transcript
    /// is append-only; a failure never clears existing history.
    pub async fn submit<A: VulnApi, S: Surface>(
        &self,
        message: &str,
        api: &A,
        surface: &S,
    ) -> ChatOutcome {
        if self.in_flight.get() {
            return ChatOutcome::Ignored;
        }

        let message = message.trim();
        if message.is_empty() {
            return ChatOutcome::Empty;
        }

        surface.append_html(Region::Transcript, chat::message(ChatRole::User, message));

        self.in_flight.set(true);
        let placeholder = surface.append_html(Region::Transcript, chat::thinking());

        let result = api.chat(message).await;

        surface.remove_entry(Region::Transcript, placeholder);
        let outcome = match result {
            Ok(reply) => {
                surface
                    .append_html(Region::Transcript, chat::message(ChatRole::Assistant, &reply.response));
                if !reply.related_cves.is_empty() {
                    surface.append_html(Region::Transcript, chat::related_cves(&reply.related_cves));
                }
                ChatOutcome::Answered
            }
            Err(err) if err.is_transport() => {
                error!(error = %err, "chat request failed");
                surface.append_html(
                    Region::Transcript,
                    chat::message(ChatRole::Assistant, "Sorry, I encountered an error. Please try again."),
                );
                ChatOutcome::Failed
            }
            Err(err) => {
                let text = format!("Error: {}", err.message_or("Failed to get response"));
                surface.append_html(Region::Transcript, chat::message(ChatRole::Assistant, &text));
                ChatOutcome::Failed
            }
        };
        self.in_flight.set(false);

        outcome
    }
}
