use serde::{Deserialize, Serialize};

/// The logged-in/identity projection from `/api/check-session`.
///
/// The client caches this for the lifetime of a page view only; absence of
/// `logged_in` means "redirect to the login page".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub logged_in: bool,
    #[serde(default)]
    pub email: Option<String>,
}
