//! Core domain types for the glance dashboard client.
//!
//! This crate provides the fundamental types shared across the client:
//! - `Fragment`: a rendered markup string for a view
//! - `Severity`: notification severity levels
//! - `Theme`: light/dark theme preference

pub mod error;
pub mod fragment;
pub mod notification;
pub mod theme;

pub use error::{CoreError, Result};
pub use fragment::Fragment;
pub use notification::Severity;
pub use theme::Theme;
