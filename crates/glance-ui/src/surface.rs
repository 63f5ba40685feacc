//! The injected rendering seam.

use glance_core::{Fragment, Theme};

/// Imperative handle onto the rendered page.
///
/// Implementations own concrete region handles (an in-memory page
/// model, a terminal renderer, a real DOM bridge). All methods are
/// plain state mutations; anything that can fail must fail at
/// construction time, not per call.
pub trait ViewSurface: Send + Sync {
    /// Replace the loading region's markup.
    fn set_loading(&self, markup: &str);

    /// Show or hide the loading region. Content is left as-is on hide.
    fn set_loading_visible(&self, visible: bool);

    /// Replace the notification banner's markup and severity class.
    fn set_notification(&self, markup: &str, css_class: &str);

    /// Show or hide the notification banner.
    fn set_notification_visible(&self, visible: bool);

    /// Replace the main content region wholesale. No diffing.
    fn render_content(&self, fragment: &Fragment);

    /// Mark the navigation link for `route` as the active one.
    fn set_active_link(&self, route: &str);

    /// Reflect the current route in the location fragment (`#route`).
    fn set_location_fragment(&self, route: &str);

    /// Apply a visual theme to the whole page.
    fn apply_theme(&self, theme: Theme);

    /// Clear the feedback form's textarea.
    fn clear_feedback_input(&self);
}
