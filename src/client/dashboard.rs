use thiserror::Error;
use tracing::{debug, warn};

use super::session::Session;
use super::toast::{Severity, ToastQueue};
use crate::seller::models::{DashboardData, DashboardEnvelope};

pub const DASHBOARD_PATH: &str = "/api/seller/dashboard";

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http status {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),
}

/// The network seam of the loader. Production uses [`HttpTransport`];
/// tests inject canned responses.
#[allow(async_fn_in_trait)]
pub trait DashboardTransport {
    async fn fetch_dashboard(&self, token: &str)
    -> Result<DashboardEnvelope, TransportError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Fresh data stored, view is ready.
    Loaded,
    /// Server answered `success: false`; previous data kept untouched.
    Unchanged,
    /// Missing or expired credentials; caller must navigate to login.
    RedirectToLogin,
    /// Transport or server failure; error view with retry.
    Failed,
}

/// Fetches the aggregated seller payload and drives the
/// loading → ready / error lifecycle. A refresh simply runs `load`
/// again; an in-flight request is never cancelled.
pub struct DashboardLoader<T> {
    transport: T,
    session: Session,
    toasts: ToastQueue,
    state: LoadState,
    data: Option<DashboardData>,
}

impl<T: DashboardTransport> DashboardLoader<T> {
    pub fn new(transport: T, session: Session, toasts: ToastQueue) -> Self {
        Self {
            transport,
            session,
            toasts,
            state: LoadState::Loading,
            data: None,
        }
    }

    pub async fn load(&mut self) -> LoadOutcome {
        let Some(token) = self.session.token().map(str::to_owned) else {
            debug!("no stored token, redirecting to login without fetching");
            return LoadOutcome::RedirectToLogin;
        };

        self.state = LoadState::Loading;

        match self.transport.fetch_dashboard(&token).await {
            Ok(envelope) if envelope.success => {
                self.data = envelope.data;
                self.state = LoadState::Ready;
                LoadOutcome::Loaded
            }
            Ok(_) => {
                warn!("dashboard fetch answered success=false, keeping previous data");
                self.state = if self.data.is_some() {
                    LoadState::Ready
                } else {
                    LoadState::Error
                };
                LoadOutcome::Unchanged
            }
            Err(TransportError::Status(401)) => {
                debug!("credentials rejected, clearing session");
                self.session.clear();
                self.state = LoadState::Error;
                LoadOutcome::RedirectToLogin
            }
            Err(err) => {
                warn!("dashboard fetch failed: {err}");
                self.toasts
                    .show("Failed to load dashboard", err.to_string(), Severity::Error);
                self.state = LoadState::Error;
                LoadOutcome::Failed
            }
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn data(&self) -> Option<&DashboardData> {
        self.data.as_ref()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }
}

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl DashboardTransport for HttpTransport {
    async fn fetch_dashboard(
        &self,
        token: &str,
    ) -> Result<DashboardEnvelope, TransportError> {
        let res = self
            .client
            .get(format!("{}{}", self.base_url, DASHBOARD_PATH))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        res.json::<DashboardEnvelope>()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))
    }
}
