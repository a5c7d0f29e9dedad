//! Per-page controllers and the rendering surface boundary.
//!
//! Each page of the application is an explicit controller object constructed
//! at page-initialization time; there is no process-wide page state. The
//! controllers are driven through action enums and write only through the
//! [`Surface`] trait, so tests can drive every interaction against a recorded
//! surface and a scripted API.
//!
//! Control flow per page: [`session::ensure_session`] gates everything; once
//! authenticated, the page's controller loads its data, and user interactions
//! re-enter the controller through its action handler.

pub mod alerts;
pub mod auth;
pub mod chat;
pub mod dashboard;
pub mod saved;
pub mod session;
pub mod surface;

pub use alerts::{AlertsAction, AlertsPage};
pub use auth::{AuthOutcome, redirect_if_authenticated, submit_login, submit_signup};
pub use chat::{ChatOutcome, ChatPanel};
pub use dashboard::DashboardPage;
pub use saved::{SavedAction, SavedPage};
pub use session::{ensure_session, logout};
pub use surface::{Region, Surface};
