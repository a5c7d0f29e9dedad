use std::cell::RefCell;

use reqwest::header::{COOKIE, SET_COOKIE};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::error::{ApiError, ApiResult};
use crate::filters::{AlertQuery, FilterOptions};
use crate::models::{AlertPage, ChatReply, SavedItem, SessionInfo, StatsSummary};

/// The BioCVE server contract, one operation per endpoint.
///
/// Controllers are generic over this trait so tests can substitute a scripted
/// fake for the network. The client is single-threaded, so the returned
/// futures need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait VulnApi {
    /// `GET /api/check-session`
    async fn check_session(&self) -> ApiResult<SessionInfo>;
    /// `POST /api/login`
    async fn login(&self, email: &str, password: &str) -> ApiResult<()>;
    /// `POST /api/signup`
    async fn signup(&self, email: &str, password: &str) -> ApiResult<()>;
    /// `POST /api/logout`
    async fn logout(&self) -> ApiResult<()>;
    /// `GET /api/filter-options`
    async fn filter_options(&self) -> ApiResult<FilterOptions>;
    /// `GET /api/alerts?<query>`
    async fn alerts(&self, query: &AlertQuery) -> ApiResult<AlertPage>;
    /// `POST /api/save-vulnerability`
    async fn save_vulnerability(&self, cve_id: &str, notes: Option<&str>) -> ApiResult<()>;
    /// `GET /api/saved-vulnerabilities`
    async fn saved_vulnerabilities(&self) -> ApiResult<Vec<SavedItem>>;
    /// `POST /api/delete-saved`
    async fn delete_saved(&self, id: i64) -> ApiResult<()>;
    /// `GET /api/stats`
    async fn stats(&self) -> ApiResult<StatsSummary>;
    /// `POST /api/chatbot`
    async fn chat(&self, message: &str) -> ApiResult<ChatReply>;
}

/// Production [`VulnApi`] over reqwest.
///
/// The server session is cookie-based; the cookie pair is captured from
/// `Set-Cookie` on any response and replayed on every request, so a login
/// performed through this client authenticates its later calls. The CLI
/// persists the pair between invocations.
pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
    cookie: RefCell<Option<String>>,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http: reqwest::Client::new(), base_url, cookie: RefCell::new(None) }
    }

    /// Seed the client with a previously captured session cookie pair.
    pub fn with_session_cookie(self, cookie: impl Into<String>) -> Self {
        *self.cookie.borrow_mut() = Some(cookie.into());
        self
    }

    /// The current session cookie pair, if any request has produced one.
    pub fn session_cookie(&self) -> Option<String> {
        self.cookie.borrow().clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> ApiResult<reqwest::Response> {
        let cookie = self.cookie.borrow().clone();
        let request = match cookie {
            Some(pair) => request.header(COOKIE, pair),
            None => request,
        };
        let response = request.send().await?;
        if let Some(header) = response.headers().get(SET_COOKIE).and_then(|v| v.to_str().ok())
            && let Some(pair) = first_cookie_pair(header)
        {
            *self.cookie.borrow_mut() = Some(pair.to_string());
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send(self.http.get(self.url(path))).await?;
        parse(response).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> ApiResult<T> {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        parse(response).await
    }

    async fn post_ok(&self, path: &str, body: &serde_json::Value) -> ApiResult<()> {
        self.post_json::<serde_json::Value>(path, body).await.map(|_| ())
    }
}

impl VulnApi for HttpApi {
    async fn check_session(&self) -> ApiResult<SessionInfo> {
        self.get_json("/api/check-session").await
    }

    async fn login(&self, email: &str, password: &str) -> ApiResult<()> {
        self.post_ok("/api/login", &json!({ "email": email, "password": password })).await
    }

    async fn signup(&self, email: &str, password: &str) -> ApiResult<()> {
        self.post_ok("/api/signup", &json!({ "email": email, "password": password })).await
    }

    async fn logout(&self) -> ApiResult<()> {
        self.post_ok("/api/logout", &json!({})).await
    }

    async fn filter_options(&self) -> ApiResult<FilterOptions> {
        self.get_json("/api/filter-options").await
    }

    async fn alerts(&self, query: &AlertQuery) -> ApiResult<AlertPage> {
        self.get_json(&format!("/api/alerts?{}", query.query_string())).await
    }

    async fn save_vulnerability(&self, cve_id: &str, notes: Option<&str>) -> ApiResult<()> {
        let body = match notes {
            Some(notes) => json!({ "cve_id": cve_id, "notes": notes }),
            None => json!({ "cve_id": cve_id }),
        };
        self.post_ok("/api/save-vulnerability", &body).await
    }

    async fn saved_vulnerabilities(&self) -> ApiResult<Vec<SavedItem>> {
        #[derive(Deserialize)]
        struct SavedEnvelope {
            #[serde(default)]
            saved: Vec<SavedItem>,
        }

        self.get_json::<SavedEnvelope>("/api/saved-vulnerabilities").await.map(|e| e.saved)
    }

    async fn delete_saved(&self, id: i64) -> ApiResult<()> {
        self.post_ok("/api/delete-saved", &json!({ "id": id })).await
    }

    async fn stats(&self) -> ApiResult<StatsSummary> {
        self.get_json("/api/stats").await
    }

    async fn chat(&self, message: &str) -> ApiResult<ChatReply> {
        self.post_json("/api/chatbot", &json!({ "message": message })).await
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
}

async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json::<T>().await?)
    } else {
        let message = response.json::<ErrorBody>().await.map(|b| b.error).unwrap_or_default();
        Err(ApiError::Server { status: status.as_u16(), message })
    }
}

/// The `name=value` pair at the front of a `Set-Cookie` header, without
/// attributes like `Path` or `HttpOnly`.
fn first_cookie_pair(header: &str) -> Option<&str> {
    header.split(';').next().map(str::trim).filter(|pair| pair.contains('='))
}
