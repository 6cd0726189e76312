/// Session-holding API client
pub mod client;
/// Application configuration module
pub mod config;
