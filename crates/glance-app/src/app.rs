//! Application wiring and event loop.

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::events::UiEvent;
use glance_api::{ApiClient, FeedbackRequest, MetricsReport};
use glance_core::Severity;
use glance_persistence::{PrefStore, ThemeStore};
use glance_router::{default_routes, Router};
use glance_telemetry::{MetricsSender, TimingRecorder};
use glance_ui::{Ui, ViewSurface};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Timing label for the initialization span.
const INIT_SPAN: &str = "app_init";

/// Placeholder identity attached to feedback submissions.
// TODO: replace with a real user identity once accounts exist.
const ANONYMOUS_USER: &str = "anonymous";

/// The glance client application.
///
/// Owns every service explicitly; the rendering backend is injected
/// as a [`ViewSurface`].
pub struct App {
    config: AppConfig,
    api: ApiClient,
    ui: Ui,
    router: Router,
    recorder: TimingRecorder,
    metrics: MetricsSender,
    theme_store: ThemeStore,
}

impl App {
    /// Wire up all services over the given surface.
    pub fn new(config: AppConfig, surface: Arc<dyn ViewSurface>) -> AppResult<Self> {
        let api = ApiClient::new(&config.base_url)?;
        let ui = Ui::new(surface, config.ui.clone());
        let router = Router::new(ui.clone(), default_routes(api.clone()));
        let theme_store = ThemeStore::new(PrefStore::load(&config.prefs_path)?);
        let metrics = MetricsSender::new(api.clone());

        Ok(Self {
            config,
            api,
            ui,
            router,
            recorder: TimingRecorder::new(),
            metrics,
            theme_store,
        })
    }

    /// Perform the timed startup sequence: apply the persisted theme,
    /// navigate to the default route and report the elapsed
    /// initialization time (fire-and-forget).
    pub async fn start(&self) -> AppResult<()> {
        self.ui.surface().apply_theme(self.theme_store.theme());

        self.recorder.start_timing(INIT_SPAN);
        if let Err(e) = self.router.navigate(&self.config.default_route).await {
            warn!(route = %self.config.default_route, error = %e, "Initial navigation rejected");
        }
        let init_time_ms = self.recorder.end_timing(INIT_SPAN);

        info!(init_time_ms, "Application initialized");
        self.metrics.send(&MetricsReport::init_time(init_time_ms)).await;
        Ok(())
    }

    /// Run the startup sequence, then consume page events until
    /// `Shutdown` or the sender hangs up.
    pub async fn run(&self, mut events: mpsc::Receiver<UiEvent>) -> AppResult<()> {
        self.start().await?;

        while let Some(event) = events.recv().await {
            match event {
                UiEvent::NavClicked(route) => {
                    // Unknown routes and failed handlers are diagnosable
                    // but never fatal to the event loop.
                    if let Err(e) = self.router.navigate(&route).await {
                        warn!(route, error = %e, "Navigation rejected");
                    }
                }
                UiEvent::FeedbackSubmitted(comments) => self.submit_feedback(comments).await,
                UiEvent::ThemeToggled => self.toggle_theme(),
                UiEvent::Shutdown => {
                    info!("Shutdown requested");
                    break;
                }
            }
        }

        Ok(())
    }

    /// The router driving this application.
    pub fn router(&self) -> &Router {
        &self.router
    }

    async fn submit_feedback(&self, comments: String) {
        let request = FeedbackRequest {
            user_id: ANONYMOUS_USER.to_string(),
            comments,
        };

        match self.api.post("/feedback", &request).await {
            Ok(_) => {
                info!("Feedback submitted");
                self.ui
                    .show_notification("Feedback submitted successfully", Severity::Success);
                self.ui.surface().clear_feedback_input();
            }
            Err(e) => {
                warn!(error = %e, "Feedback submission failed");
                self.ui.show_notification(&e.to_string(), Severity::Error);
            }
        }
    }

    fn toggle_theme(&self) {
        match self.theme_store.toggle() {
            Ok(theme) => {
                info!(%theme, "Theme toggled");
                self.ui.surface().apply_theme(theme);
            }
            Err(e) => {
                warn!(error = %e, "Failed to persist theme");
                self.ui.show_notification(&e.to_string(), Severity::Error);
            }
        }
    }
}
