//! BioCVE Console - client for the BioCVE vulnerability-tracking service
//!
//! This library implements the presentation layer of the BioCVE web application
//! as a headless console client. It supports:
//!
//! - Session-gated access to every authenticated view
//! - Fetching paginated, filtered CVE alert pages and rendering them as HTML
//! - A detail view, save/delete actions, and a dashboard summary
//! - An assistant chat panel with a single-flight request guard
//!
//! Controllers in [`pages`] hold per-page state and are driven by actions; the
//! HTTP boundary ([`api::VulnApi`]) and the rendering boundary
//! ([`pages::Surface`]) are both traits so tests can substitute fakes.
//!
//! # Example
//!
//! ```no_run
//! use biocve_console::api::HttpApi;
//!
//! let api = HttpApi::new("http://localhost:5001");
//! # let _ = api;
//! ```

pub mod api;
pub mod cli;
pub mod filters;
pub mod models;
pub mod pages;
pub mod render;
pub mod utils;

// Re-export commonly used types
pub use api::{ApiError, ApiResult, HttpApi, VulnApi};
pub use filters::{AlertQuery, FilterSet, PAGE_SIZE};
pub use models::{Alert, AlertPage, BioRelevance, SavedItem, SessionInfo, Severity, StatsSummary};
pub use pages::{AlertsPage, ChatPanel, DashboardPage, Region, SavedPage, Surface};
