//! HTTP middleware

mod logging;

pub use logging::access_log;
