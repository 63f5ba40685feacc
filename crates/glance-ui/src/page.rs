//! Headless page model and its [`ViewSurface`] implementation.
//!
//! `Page` plays the role of the host page markup: a set of identified
//! regions plus navigation/theme/form state, shared behind a lock.
//! `PageSurface` resolves its region ids once at construction and
//! fails loudly if one is absent, then renders into the page for the
//! rest of its life. Tests and the terminal frontend both read page
//! state back out.

use crate::error::{UiError, UiResult};
use crate::surface::ViewSurface;
use glance_core::{Fragment, Theme};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// State of a single identified page region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionState {
    /// Current inner markup.
    pub markup: String,
    /// CSS class attached to the region (notification severity etc.).
    pub css_class: String,
    /// Whether the region is currently visible.
    pub visible: bool,
}

/// One observable mutation of the page, in application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    LoadingSet(String),
    LoadingVisible(bool),
    NotificationSet { markup: String, css_class: String },
    NotificationVisible(bool),
    ContentRendered(String),
    ActiveLink(String),
    LocationFragment(String),
    ThemeApplied(Theme),
    FeedbackCleared,
}

#[derive(Debug, Default)]
struct PageInner {
    regions: HashMap<String, RegionState>,
    active_link: Option<String>,
    location_fragment: Option<String>,
    theme: Theme,
    feedback_input: String,
    events: Vec<SurfaceEvent>,
}

/// Shared headless page: the only mutable resource the client renders
/// into. Clones share the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct Page {
    inner: Arc<Mutex<PageInner>>,
}

impl Page {
    /// Create a page containing the given identified regions.
    pub fn with_regions<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let page = Self::default();
        {
            let mut inner = page.inner.lock();
            for id in ids {
                inner.regions.insert(id.into(), RegionState::default());
            }
        }
        page
    }

    /// Whether a region with this id exists on the page.
    pub fn has_region(&self, id: &str) -> bool {
        self.inner.lock().regions.contains_key(id)
    }

    /// Snapshot of a region's state, if the region exists.
    pub fn region(&self, id: &str) -> Option<RegionState> {
        self.inner.lock().regions.get(id).cloned()
    }

    /// Route name of the currently active navigation link.
    pub fn active_link(&self) -> Option<String> {
        self.inner.lock().active_link.clone()
    }

    /// Current location fragment (route name, without the `#`).
    pub fn location_fragment(&self) -> Option<String> {
        self.inner.lock().location_fragment.clone()
    }

    /// Currently applied theme.
    pub fn theme(&self) -> Theme {
        self.inner.lock().theme
    }

    /// Current contents of the feedback textarea.
    pub fn feedback_input(&self) -> String {
        self.inner.lock().feedback_input.clone()
    }

    /// Type into the feedback textarea (host-page side of the contract).
    pub fn set_feedback_input(&self, text: impl Into<String>) {
        self.inner.lock().feedback_input = text.into();
    }

    /// All mutations applied so far, in order.
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.inner.lock().events.clone()
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut PageInner) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

/// Region ids a [`PageSurface`] binds to.
#[derive(Debug, Clone)]
pub struct RegionIds {
    pub loading: String,
    pub notification: String,
    pub content: String,
}

impl Default for RegionIds {
    fn default() -> Self {
        Self {
            loading: "loading".to_string(),
            notification: "notification".to_string(),
            content: "content".to_string(),
        }
    }
}

/// [`ViewSurface`] over a [`Page`].
///
/// Region ids are resolved exactly once, here; a missing region is a
/// construction error rather than a deferred panic on first use.
#[derive(Debug, Clone)]
pub struct PageSurface {
    page: Page,
    ids: RegionIds,
}

impl PageSurface {
    /// Bind to `page`, verifying every required region exists.
    pub fn new(page: Page, ids: RegionIds) -> UiResult<Self> {
        for id in [&ids.loading, &ids.notification, &ids.content] {
            if !page.has_region(id) {
                return Err(UiError::MissingRegion(id.clone()));
            }
        }
        Ok(Self { page, ids })
    }

    /// The page this surface renders into.
    pub fn page(&self) -> &Page {
        &self.page
    }
}

impl ViewSurface for PageSurface {
    fn set_loading(&self, markup: &str) {
        self.page.mutate(|inner| {
            if let Some(region) = inner.regions.get_mut(&self.ids.loading) {
                region.markup = markup.to_string();
            }
            inner.events.push(SurfaceEvent::LoadingSet(markup.to_string()));
        });
    }

    fn set_loading_visible(&self, visible: bool) {
        self.page.mutate(|inner| {
            if let Some(region) = inner.regions.get_mut(&self.ids.loading) {
                region.visible = visible;
            }
            inner.events.push(SurfaceEvent::LoadingVisible(visible));
        });
    }

    fn set_notification(&self, markup: &str, css_class: &str) {
        self.page.mutate(|inner| {
            if let Some(region) = inner.regions.get_mut(&self.ids.notification) {
                region.markup = markup.to_string();
                region.css_class = css_class.to_string();
            }
            inner.events.push(SurfaceEvent::NotificationSet {
                markup: markup.to_string(),
                css_class: css_class.to_string(),
            });
        });
    }

    fn set_notification_visible(&self, visible: bool) {
        self.page.mutate(|inner| {
            if let Some(region) = inner.regions.get_mut(&self.ids.notification) {
                region.visible = visible;
            }
            inner.events.push(SurfaceEvent::NotificationVisible(visible));
        });
    }

    fn render_content(&self, fragment: &Fragment) {
        self.page.mutate(|inner| {
            if let Some(region) = inner.regions.get_mut(&self.ids.content) {
                region.markup = fragment.as_str().to_string();
                region.visible = true;
            }
            inner
                .events
                .push(SurfaceEvent::ContentRendered(fragment.as_str().to_string()));
        });
    }

    fn set_active_link(&self, route: &str) {
        self.page.mutate(|inner| {
            inner.active_link = Some(route.to_string());
            inner.events.push(SurfaceEvent::ActiveLink(route.to_string()));
        });
    }

    fn set_location_fragment(&self, route: &str) {
        self.page.mutate(|inner| {
            inner.location_fragment = Some(route.to_string());
            inner
                .events
                .push(SurfaceEvent::LocationFragment(route.to_string()));
        });
    }

    fn apply_theme(&self, theme: Theme) {
        self.page.mutate(|inner| {
            inner.theme = theme;
            inner.events.push(SurfaceEvent::ThemeApplied(theme));
        });
    }

    fn clear_feedback_input(&self) {
        self.page.mutate(|inner| {
            inner.feedback_input.clear();
            inner.events.push(SurfaceEvent::FeedbackCleared);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_region_is_a_construction_error() {
        let page = Page::with_regions(["loading", "content"]);
        let err = PageSurface::new(page, RegionIds::default()).unwrap_err();
        assert!(err.to_string().contains("notification"));
    }

    #[test]
    fn test_render_content_replaces_wholesale() {
        let page = Page::with_regions(["loading", "notification", "content"]);
        let surface = PageSurface::new(page.clone(), RegionIds::default()).unwrap();

        surface.render_content(&Fragment::new("<div>one</div>"));
        surface.render_content(&Fragment::new("<div>two</div>"));

        let content = page.region("content").unwrap();
        assert_eq!(content.markup, "<div>two</div>");
    }

    #[test]
    fn test_hide_leaves_loading_markup_in_place() {
        let page = Page::with_regions(["loading", "notification", "content"]);
        let surface = PageSurface::new(page.clone(), RegionIds::default()).unwrap();

        surface.set_loading("<p>Loading...</p>");
        surface.set_loading_visible(true);
        surface.set_loading_visible(false);

        let loading = page.region("loading").unwrap();
        assert!(!loading.visible);
        assert_eq!(loading.markup, "<p>Loading...</p>");
    }
}
