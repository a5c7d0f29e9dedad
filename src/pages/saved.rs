//! The saved-vulnerabilities page: list plus confirmed delete.

use tracing::error;

use super::surface::{Region, Surface};
use crate::api::VulnApi;
use crate::render::saved;

/// A user interaction on the saved page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavedAction {
    Load,
    /// Delete a saved item by its server-assigned identifier, after
    /// interactive confirmation.
    Delete(i64),
}

/// Controller for the saved-vulnerabilities page.
#[derive(Debug, Default)]
pub struct SavedPage;

impl SavedPage {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle<A: VulnApi, S: Surface>(
        &mut self,
        action: SavedAction,
        api: &A,
        surface: &S,
    ) {
        match action {
            SavedAction::Load => self.load(api, surface).await,
            SavedAction::Delete(id) => self.delete(id, api, surface).await,
        }
    }

    async fn load<A: VulnApi, S: Surface>(&mut self, api: &A, surface: &S) {
        match api.saved_vulnerabilities().await {
            Ok(items) => {
                surface.set_text(Region::SavedCount, saved::saved_count_label(items.len()));
                surface.set_html(Region::SavedList, saved::saved_cards(&items));
            }
            Err(err) => {
                error!(error = %err, "failed to load saved vulnerabilities");
                surface.set_html(Region::SavedList, saved::saved_error());
            }
        }
    }

    /// Declined confirmation issues no request. A failed delete surfaces the
    /// server's message and leaves the list untouched; success reloads the
    /// whole list rather than removing in place.
    async fn delete<A: VulnApi, S: Surface>(&mut self, id: i64, api: &A, surface: &S) {
        if !surface.confirm("Are you sure you want to remove this from your saved list?") {
            return;
        }

        match api.delete_saved(id).await {
            Ok(()) => self.load(api, surface).await,
            Err(err) if err.is_transport() => {
                error!(error = %err, "failed to delete saved vulnerability");
                surface.notify("Failed to delete. Please try again.");
            }
            Err(err) => surface.notify(err.message_or("Failed to delete")),
        }
    }
}
