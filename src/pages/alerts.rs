//! The alerts page: filtered, paginated list plus the detail viewer and the
//! save action.
//!
//! `AlertsPage` owns the page's transient state (current filter set, page
//! number, the identifier shown in the detail modal) and is driven through
//! [`AlertsAction`]. Every fetch-and-render cycle runs to completion under an
//! exclusive borrow of the controller, so two cycles of the same page cannot
//! interleave and a stale response can never overwrite a fresher one.

use tracing::error;

use super::surface::{Region, Surface};
use crate::api::VulnApi;
use crate::filters::{AlertQuery, FilterSet};
use crate::render::{alerts, detail};

/// A user interaction on the alerts page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertsAction {
    /// Initial data load for the current state.
    Load,
    /// Populate the vendor/product filter dropdowns.
    LoadFilterOptions,
    /// "Apply Filters": adopt the form's filter values and return to page 1.
    ApplyFilters(FilterSet),
    /// "Reset": restore default filters and return to page 1.
    ResetFilters,
    /// Pagination click; filters are preserved.
    GoToPage(u32),
    /// Row click: open the detail modal for one record.
    OpenDetail(String),
    /// Per-row save button.
    Save(String),
    /// Save button inside the detail modal, acting on the displayed record.
    SaveCurrent,
}

/// Controller for the alerts page.
#[derive(Debug, Default)]
pub struct AlertsPage {
    filters: FilterSet,
    page: u32,
    current_cve: Option<String>,
}

impl AlertsPage {
    pub fn new() -> Self {
        Self { filters: FilterSet::default(), page: 1, current_cve: None }
    }

    /// Start from existing filter/page state, as the CLI does for one-shot
    /// renders.
    pub fn with_state(filters: FilterSet, page: u32) -> Self {
        Self { filters, page: page.max(1), current_cve: None }
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// The identifier currently shown in the detail modal, if any.
    pub fn current_cve(&self) -> Option<&str> {
        self.current_cve.as_deref()
    }

    pub async fn handle<A: VulnApi, S: Surface>(
        &mut self,
        action: AlertsAction,
        api: &A,
        surface: &S,
    ) {
        match action {
            AlertsAction::Load => self.load(api, surface).await,
            AlertsAction::LoadFilterOptions => load_filter_options(api, surface).await,
            AlertsAction::ApplyFilters(filters) => {
                self.filters = filters;
                self.page = 1;
                self.load(api, surface).await;
            }
            AlertsAction::ResetFilters => {
                self.filters.reset();
                self.page = 1;
                self.load(api, surface).await;
            }
            AlertsAction::GoToPage(page) => {
                self.page = page.max(1);
                self.load(api, surface).await;
            }
            AlertsAction::OpenDetail(cve_id) => self.open_detail(cve_id, api, surface).await,
            AlertsAction::Save(cve_id) => self.save(&cve_id, None, api, surface).await,
            AlertsAction::SaveCurrent => {
                if let Some(cve_id) = self.current_cve.clone() {
                    self.save(&cve_id, None, api, surface).await;
                }
            }
        }
    }

    /// Fetch the current page under the current filters and replace the
    /// table, results line, and pager. A failure clears the list to a single
    /// inline error row; nothing is retried.
    async fn load<A: VulnApi, S: Surface>(&mut self, api: &A, surface: &S) {
        let query = AlertQuery::new(self.page, &self.filters);
        match api.alerts(&query).await {
            Ok(page) => {
                surface.set_html(Region::AlertsTable, alerts::alerts_table(&page.alerts));
                surface.set_text(
                    Region::ResultsInfo,
                    alerts::results_info(page.page, page.total_pages, page.total),
                );
                surface.set_html(Region::Pagination, alerts::pagination(page.page, page.total_pages));
            }
            Err(err) => {
                error!(error = %err, "failed to load alerts");
                surface.set_html(Region::AlertsTable, alerts::alerts_error_row());
            }
        }
    }

    /// Open the detail modal: loading indicator first, then the record found
    /// by an exact-identifier lookup, or an inline error.
    async fn open_detail<A: VulnApi, S: Surface>(&mut self, cve_id: String, api: &A, surface: &S) {
        surface.set_text(Region::DetailTitle, cve_id.clone());
        surface.set_html(Region::DetailBody, detail::detail_loading());
        self.current_cve = Some(cve_id.clone());

        match api.alerts(&AlertQuery::lookup(&cve_id)).await {
            Ok(page) => match page.alerts.first() {
                Some(alert) => {
                    surface.set_html(Region::DetailBody, detail::detail_body(alert));
                }
                None => {
                    surface.set_html(Region::DetailBody, detail::detail_error("Alert not found."));
                }
            },
            Err(err) => {
                error!(error = %err, "failed to load alert details");
                surface.set_html(Region::DetailBody, detail::detail_error("Failed to load details."));
            }
        }
    }

    /// Save one record to the user's list. No list refresh on success; the
    /// outcome is surfaced as a blocking notification either way.
    pub async fn save<A: VulnApi, S: Surface>(
        &self,
        cve_id: &str,
        notes: Option<&str>,
        api: &A,
        surface: &S,
    ) {
        match api.save_vulnerability(cve_id, notes).await {
            Ok(()) => surface.notify("Vulnerability saved successfully!"),
            Err(err) if err.is_transport() => {
                error!(error = %err, "failed to save vulnerability");
                surface.notify("Failed to save vulnerability. Please try again.");
            }
            Err(err) => surface.notify(err.message_or("Failed to save vulnerability")),
        }
    }
}

/// Populate the vendor and product dropdowns. A failure is logged only; the
/// list itself still works without the options.
async fn load_filter_options<A: VulnApi, S: Surface>(api: &A, surface: &S) {
    match api.filter_options().await {
        Ok(options) => {
            surface.set_html(Region::VendorOptions, alerts::select_options(&options.vendors));
            surface.set_html(Region::ProductOptions, alerts::select_options(&options.products));
        }
        Err(err) => {
            error!(error = %err, "failed to load filter options");
        }
    }
}
