//! View-surface abstraction and UI service for the glance client.
//!
//! The original page owns three identified regions (loading indicator,
//! notification banner, main content). Here those regions live behind
//! the [`ViewSurface`] trait so the rendering backend is injected
//! rather than ambient, and missing regions are an explicit
//! construction error instead of a latent null dereference.
//!
//! [`Ui`] is the imperative service the router and app drive:
//! show/hide loading, show auto-dismissing notifications, replace the
//! content region wholesale.

pub mod error;
pub mod page;
pub mod surface;
pub mod ui;

pub use error::{UiError, UiResult};
pub use page::{Page, PageSurface, RegionIds, RegionState, SurfaceEvent};
pub use surface::ViewSurface;
pub use ui::{Ui, UiConfig};
