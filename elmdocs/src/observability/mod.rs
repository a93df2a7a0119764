//! Observability module
//!
//! Logging infrastructure for reporting progress and failures on stderr.

pub mod logging;

pub use logging::{LogFormat, init_logging};
