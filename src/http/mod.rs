//! The HTTP surface: four dashboard routes over prebuilt pages.
//!
//! Everything interesting happens before the listener starts; a request
//! only resolves its path to one of the four prerendered pages. Unknown
//! paths are not errors, they fall back to the general dashboard.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::extract::State;
use axum::http::Uri;
use axum::response::Html;
use axum::routing::get;
use log::{debug, info};
use rustc_hash::FxHashMap;
use tokio::net::TcpListener;

use crate::dashboards;
use crate::error::{DashboardError, Result};
use crate::models::HealthRecord;
use crate::render::render_page;

/// Identifier for one of the four dashboards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardId {
    /// General health overview (also the default)
    General,
    /// Demographics breakdown
    Demographics,
    /// COVID-19 analysis
    Covid,
    /// Obesity and health analysis
    Obesity,
}

impl DashboardId {
    /// Route path the dashboard is served under
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::General => "/dashboard1",
            Self::Demographics => "/dashboard2",
            Self::Covid => "/dashboard3",
            Self::Obesity => "/dashboard4",
        }
    }
}

/// Map a request path to a dashboard.
///
/// Anything that is not one of the three non-default slugs (including `/`)
/// resolves to the general dashboard.
#[must_use]
pub fn resolve_slug(path: &str) -> DashboardId {
    match path {
        "/dashboard2" => DashboardId::Demographics,
        "/dashboard3" => DashboardId::Covid,
        "/dashboard4" => DashboardId::Obesity,
        _ => DashboardId::General,
    }
}

/// The four prerendered pages, immutable once built and shared without
/// locking across request handlers
#[derive(Debug)]
pub struct AppState {
    pages: FxHashMap<DashboardId, String>,
}

impl AppState {
    /// Build and render every dashboard from the loaded record set
    #[must_use]
    pub fn new(records: &[HealthRecord]) -> Self {
        let mut pages = FxHashMap::default();
        for page in dashboards::build_all(records) {
            let start = Instant::now();
            let id = resolve_slug(page.slug);
            let html = render_page(&page);
            debug!(
                "Rendered {} ({} bytes) in {:?}",
                page.slug,
                html.len(),
                start.elapsed()
            );
            pages.insert(id, html);
        }
        Self { pages }
    }

    /// The rendered page for a dashboard
    #[must_use]
    pub fn page(&self, id: DashboardId) -> &str {
        self.pages
            .get(&id)
            .map_or("", |html| html.as_str())
    }
}

/// Router with the four dashboard routes plus the default fallback
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/dashboard1", get(dashboard_handler))
        .route("/dashboard2", get(dashboard_handler))
        .route("/dashboard3", get(dashboard_handler))
        .route("/dashboard4", get(dashboard_handler))
        .fallback(dashboard_handler)
        .with_state(state)
}

async fn dashboard_handler(State(state): State<Arc<AppState>>, uri: Uri) -> Html<String> {
    Html(state.page(resolve_slug(uri.path())).to_string())
}

/// Bind the listener and serve until shutdown
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(DashboardError::Server)?;
    info!("Serving dashboards on http://{addr}");
    axum::serve(listener, build_router(state))
        .await
        .map_err(DashboardError::Server)
}
