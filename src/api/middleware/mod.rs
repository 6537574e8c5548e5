//! HTTP middleware.

pub mod access_log;
