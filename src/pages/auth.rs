//! Login and signup form flows.

use tracing::error;

use super::surface::{Region, Surface};
use crate::api::VulnApi;

/// Delay between a successful auth response and the redirect, covering the
/// page-transition effect. Surfaces without a transition navigate at once.
pub const REDIRECT_DELAY_MS: u64 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Redirected,
    Failed,
}

/// Submit the login form. Success navigates to the dashboard; an
/// application failure surfaces the server's message in the form's error
/// slot, a transport failure a generic one.
pub async fn submit_login<A: VulnApi, S: Surface>(
    api: &A,
    surface: &S,
    email: &str,
    password: &str,
) -> AuthOutcome {
    match api.login(email, password).await {
        Ok(()) => {
            surface.navigate("/dashboard.html");
            AuthOutcome::Redirected
        }
        Err(err) if err.is_transport() => {
            error!(error = %err, "login request failed");
            surface.set_text(Region::LoginError, "Connection error. Please try again.".to_string());
            AuthOutcome::Failed
        }
        Err(err) => {
            surface.set_text(Region::LoginError, err.message_or("Login failed").to_string());
            AuthOutcome::Failed
        }
    }
}

/// Submit the signup form; same contract as [`submit_login`].
pub async fn submit_signup<A: VulnApi, S: Surface>(
    api: &A,
    surface: &S,
    email: &str,
    password: &str,
) -> AuthOutcome {
    match api.signup(email, password).await {
        Ok(()) => {
            surface.navigate("/dashboard.html");
            AuthOutcome::Redirected
        }
        Err(err) if err.is_transport() => {
            error!(error = %err, "signup request failed");
            surface
                .set_text(Region::SignupError, "Connection error. Please try again.".to_string());
            AuthOutcome::Failed
        }
        Err(err) => {
            surface.set_text(Region::SignupError, err.message_or("Signup failed").to_string());
            AuthOutcome::Failed
        }
    }
}

/// On the login page itself an existing session skips the form entirely.
/// Failures are logged only; the user simply stays on the form.
pub async fn redirect_if_authenticated<A: VulnApi, S: Surface>(api: &A, surface: &S) -> bool {
    match api.check_session().await {
        Ok(info) if info.logged_in => {
            surface.navigate("/dashboard.html");
            true
        }
        Ok(_) => false,
        Err(err) => {
            error!(error = %err, "session check failed");
            false
        }
    }
}
