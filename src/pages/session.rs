//! Session gating for authenticated pages.

use tracing::error;

use super::surface::{Region, Surface};
use crate::api::VulnApi;
use crate::models::SessionInfo;

/// Verify the session before a protected page initializes.
///
/// Returns the identity when logged in, after populating the navbar username.
/// A logged-out response or a transport failure both redirect to the login
/// page (fail closed) and return `None`; callers must perform no further
/// initialization in that case.
pub async fn ensure_session<A: VulnApi, S: Surface>(api: &A, surface: &S) -> Option<SessionInfo> {
    match api.check_session().await {
        Ok(info) if info.logged_in => {
            surface.set_text(Region::NavUsername, info.email.clone().unwrap_or_default());
            Some(info)
        }
        Ok(_) => {
            surface.navigate("/");
            None
        }
        Err(err) => {
            error!(error = %err, "session check failed");
            surface.navigate("/");
            None
        }
    }
}

/// Log out best-effort and navigate to the login page regardless of the
/// response.
pub async fn logout<A: VulnApi, S: Surface>(api: &A, surface: &S) {
    if let Err(err) = api.logout().await {
        error!(error = %err, "logout failed");
    }
    surface.navigate("/");
}
