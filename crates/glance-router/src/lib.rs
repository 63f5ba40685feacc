//! Named-route dispatch and the rendering cycle for glance.
//!
//! A route is a name bound to an async handler producing a markup
//! fragment. `navigate` drives the whole cycle: show the loading
//! indicator, await the handler, render the fragment, mark the active
//! navigation link and location fragment, and hide the indicator on
//! exit. Handler failures surface as error notifications, never as
//! propagated errors.
//!
//! Each navigation supersedes any still-in-flight one: a slow
//! handler's result is discarded once a newer navigation has started,
//! so stale content can never render over newer state.

pub mod error;
pub mod router;
pub mod routes;

pub use error::{RouterError, RouterResult};
pub use router::{
    HandlerError, NavigationOutcome, RouteHandler, RouteTable, Router, DEFAULT_ROUTE,
};
pub use routes::default_routes;
