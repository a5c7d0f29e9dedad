//! Shared test fakes: a scripted API and a recording surface.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use biocve_console::api::{ApiError, ApiResult, VulnApi};
use biocve_console::filters::{AlertQuery, FilterOptions};
use biocve_console::models::{
    Alert, AlertPage, ChatReply, SavedItem, SessionInfo, StatsSummary,
};
use biocve_console::pages::{Region, Surface};

/// Scripted [`VulnApi`]: every endpoint returns a preset result and records
/// its calls.
pub struct FakeApi {
    pub session_result: RefCell<ApiResult<SessionInfo>>,
    pub login_result: RefCell<ApiResult<()>>,
    pub signup_result: RefCell<ApiResult<()>>,
    pub logout_result: RefCell<ApiResult<()>>,
    pub filter_options_result: RefCell<ApiResult<FilterOptions>>,
    pub alerts_result: RefCell<ApiResult<AlertPage>>,
    pub save_result: RefCell<ApiResult<()>>,
    pub saved_result: RefCell<ApiResult<Vec<SavedItem>>>,
    pub delete_result: RefCell<ApiResult<()>>,
    pub stats_result: RefCell<ApiResult<StatsSummary>>,
    pub chat_result: RefCell<ApiResult<ChatReply>>,
    /// When set, `chat` suspends once before completing so a second
    /// submission can be interleaved in the same task.
    pub chat_yields: Cell<bool>,

    pub alert_queries: RefCell<Vec<AlertQuery>>,
    pub save_calls: RefCell<Vec<(String, Option<String>)>>,
    pub delete_calls: RefCell<Vec<i64>>,
    pub saved_calls: Cell<usize>,
    pub chat_calls: Cell<usize>,
    pub logout_calls: Cell<usize>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            session_result: RefCell::new(Ok(SessionInfo {
                logged_in: true,
                email: Some("analyst@example.com".to_string()),
            })),
            login_result: RefCell::new(Ok(())),
            signup_result: RefCell::new(Ok(())),
            logout_result: RefCell::new(Ok(())),
            filter_options_result: RefCell::new(Ok(FilterOptions::default())),
            alerts_result: RefCell::new(Ok(empty_page())),
            save_result: RefCell::new(Ok(())),
            saved_result: RefCell::new(Ok(Vec::new())),
            delete_result: RefCell::new(Ok(())),
            stats_result: RefCell::new(Ok(StatsSummary::default())),
            chat_result: RefCell::new(Ok(ChatReply {
                response: String::new(),
                related_cves: Vec::new(),
            })),
            chat_yields: Cell::new(false),
            alert_queries: RefCell::new(Vec::new()),
            save_calls: RefCell::new(Vec::new()),
            delete_calls: RefCell::new(Vec::new()),
            saved_calls: Cell::new(0),
            chat_calls: Cell::new(0),
            logout_calls: Cell::new(0),
        }
    }
}

impl VulnApi for FakeApi {
    async fn check_session(&self) -> ApiResult<SessionInfo> {
        self.session_result.borrow().clone()
    }

    async fn login(&self, _email: &str, _password: &str) -> ApiResult<()> {
        self.login_result.borrow().clone()
    }

    async fn signup(&self, _email: &str, _password: &str) -> ApiResult<()> {
        self.signup_result.borrow().clone()
    }

    async fn logout(&self) -> ApiResult<()> {
        self.logout_calls.set(self.logout_calls.get() + 1);
        self.logout_result.borrow().clone()
    }

    async fn filter_options(&self) -> ApiResult<FilterOptions> {
        self.filter_options_result.borrow().clone()
    }

    async fn alerts(&self, query: &AlertQuery) -> ApiResult<AlertPage> {
        self.alert_queries.borrow_mut().push(query.clone());
        self.alerts_result.borrow().clone()
    }

    async fn save_vulnerability(&self, cve_id: &str, notes: Option<&str>) -> ApiResult<()> {
        self.save_calls.borrow_mut().push((cve_id.to_string(), notes.map(str::to_string)));
        self.save_result.borrow().clone()
    }

    async fn saved_vulnerabilities(&self) -> ApiResult<Vec<SavedItem>> {
        self.saved_calls.set(self.saved_calls.get() + 1);
        self.saved_result.borrow().clone()
    }

    async fn delete_saved(&self, id: i64) -> ApiResult<()> {
        self.delete_calls.borrow_mut().push(id);
        self.delete_result.borrow().clone()
    }

    async fn stats(&self) -> ApiResult<StatsSummary> {
        self.stats_result.borrow().clone()
    }

    async fn chat(&self, _message: &str) -> ApiResult<ChatReply> {
        self.chat_calls.set(self.chat_calls.get() + 1);
        if self.chat_yields.get() {
            tokio::task::yield_now().await;
        }
        self.chat_result.borrow().clone()
    }
}

/// Recording [`Surface`]: keeps the last write per region, the live
/// transcript entries, and every notification/confirmation/navigation.
pub struct RecordingSurface {
    html: RefCell<HashMap<Region, String>>,
    text: RefCell<HashMap<Region, String>>,
    entries: RefCell<Vec<(Region, Option<String>)>>,
    notices: RefCell<Vec<String>>,
    confirms: RefCell<Vec<String>>,
    confirm_answer: Cell<bool>,
    navigations: RefCell<Vec<String>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            html: RefCell::new(HashMap::new()),
            text: RefCell::new(HashMap::new()),
            entries: RefCell::new(Vec::new()),
            notices: RefCell::new(Vec::new()),
            confirms: RefCell::new(Vec::new()),
            confirm_answer: Cell::new(true),
            navigations: RefCell::new(Vec::new()),
        }
    }

    pub fn html(&self, region: Region) -> Option<String> {
        self.html.borrow().get(&region).cloned()
    }

    pub fn text(&self, region: Region) -> Option<String> {
        self.text.borrow().get(&region).cloned()
    }

    /// Appended entries for a region that have not been removed.
    pub fn live_entries(&self, region: Region) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(r, html)| *r == region && html.is_some())
            .map(|(_, html)| html.clone().unwrap())
            .collect()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    pub fn answer_confirms_with(&self, answer: bool) {
        self.confirm_answer.set(answer);
    }
}

impl Surface for RecordingSurface {
    fn set_html(&self, region: Region, html: String) {
        self.html.borrow_mut().insert(region, html);
    }

    fn set_text(&self, region: Region, text: String) {
        self.text.borrow_mut().insert(region, text);
    }

    fn append_html(&self, region: Region, html: String) -> usize {
        let mut entries = self.entries.borrow_mut();
        entries.push((region, Some(html)));
        entries.len() - 1
    }

    fn remove_entry(&self, _region: Region, entry: usize) {
        if let Some(slot) = self.entries.borrow_mut().get_mut(entry) {
            slot.1 = None;
        }
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.confirm_answer.get()
    }

    fn navigate(&self, location: &str) {
        self.navigations.borrow_mut().push(location.to_string());
    }
}

pub fn empty_page() -> AlertPage {
    AlertPage { alerts: Vec::new(), page: 1, total_pages: 1, total: 0 }
}

pub fn page_of(alerts: Vec<Alert>, page: u32, total_pages: u32, total: u64) -> AlertPage {
    AlertPage { alerts, page, total_pages, total }
}

/// A minimal alert with the given identifier; tests override fields as
/// needed.
pub fn alert(cve_id: &str) -> Alert {
    Alert {
        cve_id: cve_id.to_string(),
        title: Some("Test vulnerability".to_string()),
        severity: None,
        vendor: None,
        product: None,
        published_at: None,
        bio_relevance: None,
        bio_impact: None,
        summary: None,
        kev_flag: false,
    }
}

pub fn saved_item(id: i64, cve_id: &str) -> SavedItem {
    SavedItem {
        id,
        cve_id: cve_id.to_string(),
        severity: None,
        bio_relevance: None,
        vulnerability_name: Some("Test vulnerability".to_string()),
        vendor_project: Some("Acme".to_string()),
        product: Some("Widget".to_string()),
        date_added: Some("2024-06-05 10:30:00".to_string()),
        short_description: None,
        notes: None,
    }
}

pub fn server_error(status: u16, message: &str) -> ApiError {
    ApiError::Server { status, message: message.to_string() }
}

pub fn transport_error() -> ApiError {
    ApiError::Transport("connection refused".to_string())
}
