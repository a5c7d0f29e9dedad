//! The dashboard page: one stats request fanned out to independent sections.

use tracing::error;

use super::surface::{Region, Surface};
use crate::api::VulnApi;
use crate::render::dashboard;
use crate::render::html::format_count;

/// Controller for the dashboard page.
#[derive(Debug, Default)]
pub struct DashboardPage;

impl DashboardPage {
    pub fn new() -> Self {
        Self
    }

    /// Fetch `/api/stats` once and render every section from the single
    /// payload. Each list section falls back to its own placeholder when
    /// empty; a request failure is logged and blocks all sections, leaving
    /// the rest of the page interactive.
    pub async fn load<A: VulnApi, S: Surface>(&mut self, api: &A, surface: &S) {
        let stats = match api.stats().await {
            Ok(stats) => stats,
            Err(err) => {
                error!(error = %err, "failed to load dashboard stats");
                return;
            }
        };

        surface.set_text(Region::StatTotal, format_count(stats.total));
        surface.set_text(Region::StatKev, format_count(stats.kev_count));
        surface.set_text(Region::StatBio, format_count(stats.bio_count));
        surface.set_text(Region::StatMonth, format_count(stats.month_count));

        surface.set_text(Region::BioHigh, format_count(stats.bio_breakdown.high));
        surface.set_text(Region::BioMedium, format_count(stats.bio_breakdown.medium));
        surface.set_text(Region::BioLow, format_count(stats.bio_breakdown.low));

        surface.set_html(Region::TopVendors, dashboard::top_vendors(&stats.top_vendors));
        surface.set_html(Region::TopProducts, dashboard::top_products(&stats.top_products));
        surface.set_html(Region::Timeline, dashboard::timeline(&stats.timeline));
        surface.set_html(Region::PriorityAlerts, dashboard::priority_alerts(&stats.recent_alerts));
    }
}
