//! Imperative UI service over a view surface.

use crate::surface::ViewSurface;
use glance_core::{Fragment, Severity};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Default loading indicator message.
const DEFAULT_LOADING_MESSAGE: &str = "Loading...";

/// UI behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Auto-dismiss delay for notifications in milliseconds.
    #[serde(default = "default_dismiss_delay_ms")]
    pub dismiss_delay_ms: u64,
}

fn default_dismiss_delay_ms() -> u64 {
    5_000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dismiss_delay_ms: default_dismiss_delay_ms(),
        }
    }
}

/// UI service owning the loading indicator, notification banner and
/// content region through an injected [`ViewSurface`].
///
/// At most one notification is conceptually visible. Every
/// `show_notification` bumps a generation counter carried by its
/// dismiss timer, so a timer scheduled for an earlier notification can
/// never hide a later one.
#[derive(Clone)]
pub struct Ui {
    surface: Arc<dyn ViewSurface>,
    config: UiConfig,
    notification_gen: Arc<AtomicU64>,
}

impl Ui {
    /// Create a UI service over the given surface.
    pub fn new(surface: Arc<dyn ViewSurface>, config: UiConfig) -> Self {
        Self {
            surface,
            config,
            notification_gen: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Show the loading indicator with the default message.
    pub fn show_loading(&self) {
        self.show_loading_with(DEFAULT_LOADING_MESSAGE);
    }

    /// Show the loading indicator with a custom message.
    pub fn show_loading_with(&self, message: &str) {
        let markup = format!(
            r#"<div class="loading"><div class="loading-spinner"></div><p>{message}</p></div>"#
        );
        self.surface.set_loading(&markup);
        self.surface.set_loading_visible(true);
    }

    /// Hide the loading indicator. Its markup is left as-is.
    pub fn hide_loading(&self) {
        self.surface.set_loading_visible(false);
    }

    /// Show a notification and schedule its auto-dismiss.
    ///
    /// The banner content is replaced wholesale; a dismiss timer fires
    /// after the configured delay and hides the banner only if no newer
    /// notification has been shown since.
    pub fn show_notification(&self, message: &str, severity: Severity) {
        let markup = format!("<p>{message}</p>");
        let css_class = format!("notification {}", severity.as_css_class());
        self.surface.set_notification(&markup, &css_class);
        self.surface.set_notification_visible(true);

        let generation = self.notification_gen.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(generation, %severity, "Notification shown");

        let surface = Arc::clone(&self.surface);
        let gen_counter = Arc::clone(&self.notification_gen);
        let delay = Duration::from_millis(self.config.dismiss_delay_ms);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Only the most recent notification's timer may hide the banner.
            if gen_counter.load(Ordering::SeqCst) == generation {
                surface.set_notification_visible(false);
            }
        });
    }

    /// Replace the main content region with a fragment.
    pub fn render_content(&self, fragment: &Fragment) {
        self.surface.render_content(fragment);
    }

    /// Direct access to the underlying surface for non-region state
    /// (active link, location fragment, theme, form inputs).
    pub fn surface(&self) -> &Arc<dyn ViewSurface> {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Page, PageSurface, RegionIds};

    fn ui_over_page(dismiss_delay_ms: u64) -> (Ui, Page) {
        let page = Page::with_regions(["loading", "notification", "content"]);
        let surface = PageSurface::new(page.clone(), RegionIds::default()).unwrap();
        let ui = Ui::new(Arc::new(surface), UiConfig { dismiss_delay_ms });
        (ui, page)
    }

    #[tokio::test(start_paused = true)]
    async fn test_notification_auto_dismisses() {
        let (ui, page) = ui_over_page(5_000);

        ui.show_notification("saved", Severity::Success);
        let banner = page.region("notification").unwrap();
        assert!(banner.visible);
        assert_eq!(banner.markup, "<p>saved</p>");
        assert_eq!(banner.css_class, "notification success");

        tokio::time::sleep(Duration::from_millis(5_100)).await;
        assert!(!page.region("notification").unwrap().visible);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_timer_never_hides_newer_notification() {
        let (ui, page) = ui_over_page(5_000);

        ui.show_notification("first", Severity::Info);
        tokio::time::sleep(Duration::from_millis(3_000)).await;
        ui.show_notification("second", Severity::Error);

        // First timer fires at t=5s; the second notification must survive it.
        tokio::time::sleep(Duration::from_millis(2_500)).await;
        let banner = page.region("notification").unwrap();
        assert!(banner.visible, "stale timer must not hide the newer banner");
        assert_eq!(banner.markup, "<p>second</p>");

        // Second timer fires at t=8s.
        tokio::time::sleep(Duration::from_millis(3_000)).await;
        assert!(!page.region("notification").unwrap().visible);
    }

    #[tokio::test]
    async fn test_show_loading_uses_default_message() {
        let (ui, page) = ui_over_page(5_000);

        ui.show_loading();
        let loading = page.region("loading").unwrap();
        assert!(loading.visible);
        assert!(loading.markup.contains("Loading..."));
        assert!(loading.markup.contains("loading-spinner"));

        ui.hide_loading();
        assert!(!page.region("loading").unwrap().visible);
    }
}
