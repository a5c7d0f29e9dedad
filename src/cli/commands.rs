use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use super::surface::StdoutSurface;
use crate::api::HttpApi;
use crate::filters::FilterSet;
use crate::models::SessionInfo;
use crate::pages::{
    AlertsAction, AlertsPage, AuthOutcome, ChatPanel, DashboardPage, SavedAction, SavedPage,
    ensure_session, logout, submit_login, submit_signup,
};
use crate::utils::{clear_session, load_session, save_session};

const DEFAULT_BASE_URL: &str = "http://localhost:5001";

#[derive(Parser)]
#[command(name = "biocve-console")]
#[command(version = "0.1.0")]
#[command(about = "Console client for the BioCVE vulnerability tracker", long_about = None)]
pub struct Cli {
    /// Base URL of the BioCVE server (defaults to $BIOCVE_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session cookie
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and log in
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log out and forget the stored session
    Logout,
    /// Render the dashboard summary
    Dashboard,
    /// Render a page of CVE alerts
    Alerts {
        #[arg(long)]
        vendor: Option<String>,
        #[arg(long)]
        product: Option<String>,
        /// Bio-relevance level (HIGH, MEDIUM, LOW, NONE)
        #[arg(long)]
        bio_relevance: Option<String>,
        /// Only known-exploited vulnerabilities
        #[arg(long)]
        kev_only: bool,
        /// Free-text search over id, title, and summary
        #[arg(long)]
        search: Option<String>,
        /// Published on or after (YYYY-MM-DD)
        #[arg(long)]
        date_from: Option<String>,
        /// Published on or before (YYYY-MM-DD)
        #[arg(long)]
        date_to: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Render the detail view for one CVE
    Show { cve_id: String },
    /// Save a vulnerability to your list
    Save {
        cve_id: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Render your saved vulnerabilities
    Saved,
    /// Delete a saved vulnerability by its list id
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Ask the assistant about CVEs
    Chat { message: String },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("BIOCVE_BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let mut api = HttpApi::new(base_url);
    if let Some(cookie) = load_session() {
        api = api.with_session_cookie(cookie);
    }

    match command {
        Commands::Login { email, password } => {
            let surface = StdoutSurface::new(false);
            match submit_login(&api, &surface, &email, &password).await {
                AuthOutcome::Redirected => {
                    if let Some(cookie) = api.session_cookie() {
                        save_session(&cookie)?;
                    }
                    println!("Logged in as {}", email);
                    Ok(())
                }
                AuthOutcome::Failed => bail!("login failed"),
            }
        }
        Commands::Signup { email, password } => {
            let surface = StdoutSurface::new(false);
            match submit_signup(&api, &surface, &email, &password).await {
                AuthOutcome::Redirected => {
                    if let Some(cookie) = api.session_cookie() {
                        save_session(&cookie)?;
                    }
                    println!("Signed up as {}", email);
                    Ok(())
                }
                AuthOutcome::Failed => bail!("signup failed"),
            }
        }
        Commands::Logout => {
            let surface = StdoutSurface::new(false);
            logout(&api, &surface).await;
            clear_session()?;
            Ok(())
        }
        Commands::Dashboard => {
            let surface = StdoutSurface::new(false);
            require_session(&api, &surface).await?;
            DashboardPage::new().load(&api, &surface).await;
            Ok(())
        }
        Commands::Alerts {
            vendor,
            product,
            bio_relevance,
            kev_only,
            search,
            date_from,
            date_to,
            page,
        } => {
            let surface = StdoutSurface::new(false);
            require_session(&api, &surface).await?;
            let filters = FilterSet {
                vendor: vendor.unwrap_or_default(),
                product: product.unwrap_or_default(),
                bio_relevance: bio_relevance.unwrap_or_default(),
                kev_only,
                search: search.unwrap_or_default(),
                date_from: date_from.unwrap_or_default(),
                date_to: date_to.unwrap_or_default(),
            };
            let mut alerts = AlertsPage::with_state(filters, page);
            alerts.handle(AlertsAction::Load, &api, &surface).await;
            Ok(())
        }
        Commands::Show { cve_id } => {
            let surface = StdoutSurface::new(false);
            require_session(&api, &surface).await?;
            let mut alerts = AlertsPage::new();
            alerts.handle(AlertsAction::OpenDetail(cve_id), &api, &surface).await;
            Ok(())
        }
        Commands::Save { cve_id, notes } => {
            let surface = StdoutSurface::new(false);
            require_session(&api, &surface).await?;
            AlertsPage::new().save(&cve_id, notes.as_deref(), &api, &surface).await;
            Ok(())
        }
        Commands::Saved => {
            let surface = StdoutSurface::new(false);
            require_session(&api, &surface).await?;
            SavedPage::new().handle(SavedAction::Load, &api, &surface).await;
            Ok(())
        }
        Commands::Delete { id, yes } => {
            let surface = StdoutSurface::new(yes);
            require_session(&api, &surface).await?;
            SavedPage::new().handle(SavedAction::Delete(id), &api, &surface).await;
            Ok(())
        }
        Commands::Chat { message } => {
            let surface = StdoutSurface::new(false);
            require_session(&api, &surface).await?;
            ChatPanel::new().submit(&message, &api, &surface).await;
            Ok(())
        }
    }
}

/// Gate an authenticated command the way every protected page gates itself.
async fn require_session(api: &HttpApi, surface: &StdoutSurface) -> Result<SessionInfo> {
    match ensure_session(api, surface).await {
        Some(info) => Ok(info),
        None => bail!("not logged in; run `biocve-console login` first"),
    }
}
