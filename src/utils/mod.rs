/// Module containing client certificate discovery
pub mod certs;
/// Module containing environment variable helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;

pub use certs::*;
pub use logger::*;
