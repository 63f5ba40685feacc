//! Page events driving the application.

/// One user interaction, delivered from whatever frontend hosts the
/// page (terminal loop, test harness, a future DOM bridge).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A navigation link was clicked; carries the route name.
    NavClicked(String),
    /// The feedback form was submitted; carries the textarea content.
    FeedbackSubmitted(String),
    /// The theme toggle control was activated.
    ThemeToggled,
    /// Stop the event loop.
    Shutdown,
}
