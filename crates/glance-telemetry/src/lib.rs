//! Client-side timing and metrics reporting for glance.
//!
//! Provides:
//! - `TimingRecorder`: named start/stop spans over a monotonic clock
//! - `MetricsSender`: fire-and-forget delivery of measurements to the
//!   backend (failures are logged and swallowed, never surfaced)
//! - Structured logging initialization with tracing

pub mod error;
pub mod logging;
pub mod recorder;
pub mod sender;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::init_logging;
pub use recorder::TimingRecorder;
pub use sender::MetricsSender;
