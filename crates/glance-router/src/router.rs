//! Route dispatch and the navigation cycle.

use crate::error::{RouterError, RouterResult};
use futures_util::future::BoxFuture;
use glance_core::{Fragment, Severity};
use glance_ui::Ui;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Route used when navigation is requested without an explicit target.
pub const DEFAULT_ROUTE: &str = "dashboard";

/// Error type handlers may fail with.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Async content producer for one route.
///
/// Handlers are pure producers of markup given the current backend
/// state; they hold no state of their own.
pub type RouteHandler =
    Arc<dyn Fn() -> BoxFuture<'static, Result<Fragment, HandlerError>> + Send + Sync>;

/// Fixed route-name to handler mapping, built once at startup.
pub type RouteTable = HashMap<String, RouteHandler>;

/// How a navigation call concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The handler's fragment was rendered and the route became current.
    Rendered,
    /// The handler failed; its message was shown as an error notification.
    HandlerFailed,
    /// A newer navigation started while the handler was in flight; the
    /// result was discarded without rendering.
    Superseded,
}

/// Maps route names to handlers and drives the rendering cycle.
///
/// Clones share the route table, UI and navigation state.
#[derive(Clone)]
pub struct Router {
    ui: Ui,
    routes: Arc<RouteTable>,
    /// Generation of the most recently started navigation.
    nav_gen: Arc<AtomicU64>,
    current_route: Arc<Mutex<Option<String>>>,
}

impl Router {
    /// Create a router over a fixed route table.
    pub fn new(ui: Ui, routes: RouteTable) -> Self {
        Self {
            ui,
            routes: Arc::new(routes),
            nav_gen: Arc::new(AtomicU64::new(0)),
            current_route: Arc::new(Mutex::new(None)),
        }
    }

    /// Navigate to the default route.
    pub async fn navigate_default(&self) -> RouterResult<NavigationOutcome> {
        self.navigate(DEFAULT_ROUTE).await
    }

    /// Navigate to a named route.
    ///
    /// An unknown route is an error and leaves every piece of state
    /// untouched: no loading flash, no content change, no active link
    /// or location update. For a known route the loading indicator is
    /// visible for the whole handler execution and is hidden exactly
    /// once on exit, success or failure. A handler error is consumed
    /// and shown as a notification.
    pub async fn navigate(&self, route: &str) -> RouterResult<NavigationOutcome> {
        let route = if route.is_empty() { DEFAULT_ROUTE } else { route };
        let handler = self
            .routes
            .get(route)
            .cloned()
            .ok_or_else(|| RouterError::UnknownRoute(route.to_string()))?;

        // Starting a navigation supersedes any still-in-flight one.
        let generation = self.nav_gen.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(route, generation, "Navigation started");

        self.ui.show_loading();
        let result = handler().await;

        if self.nav_gen.load(Ordering::SeqCst) != generation {
            // A newer navigation owns the loading indicator and the
            // content region now; drop this result on the floor.
            debug!(route, generation, "Navigation superseded; discarding result");
            return Ok(NavigationOutcome::Superseded);
        }

        let outcome = match result {
            Ok(fragment) => {
                self.ui.render_content(&fragment);
                self.ui.surface().set_active_link(route);
                self.ui.surface().set_location_fragment(route);
                *self.current_route.lock() = Some(route.to_string());
                info!(route, "Navigation rendered");
                NavigationOutcome::Rendered
            }
            Err(e) => {
                warn!(route, error = %e, "Route handler failed");
                self.ui.show_notification(&e.to_string(), Severity::Error);
                NavigationOutcome::HandlerFailed
            }
        };

        self.ui.hide_loading();
        Ok(outcome)
    }

    /// Name of the last successfully rendered route.
    pub fn current_route(&self) -> Option<String> {
        self.current_route.lock().clone()
    }

    /// Route names this router knows about.
    pub fn route_names(&self) -> Vec<String> {
        self.routes.keys().cloned().collect()
    }
}
