//! Middleware for the pollboard server

pub mod logging;

pub use logging::request_logging;
