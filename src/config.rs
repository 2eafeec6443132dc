//! Client Configuration
//!
//! Build-time settings read from the environment when the wasm bundle is compiled.

use tracing::Level;

pub const DEFAULT_API_BASE: &str = "https://fakestoreapi.com";
pub const DEFAULT_ADMIN_USERNAME: &str = "johnd";

#[derive(Debug, Clone, Copy)]
pub struct ClientConfig {
    /// REST API root, e.g. `https://fakestoreapi.com`
    pub api_base: &'static str,
    /// Account that manages products instead of buying them
    pub admin_username: &'static str,
    pub log_level: Level,
}

impl ClientConfig {
    /// `STOREFRONT_API_BASE`, `STOREFRONT_ADMIN_USERNAME`, `STOREFRONT_LOG_LEVEL`
    pub fn from_env() -> Self {
        Self {
            api_base: option_env!("STOREFRONT_API_BASE").unwrap_or(DEFAULT_API_BASE),
            admin_username: option_env!("STOREFRONT_ADMIN_USERNAME").unwrap_or(DEFAULT_ADMIN_USERNAME),
            log_level: option_env!("STOREFRONT_LOG_LEVEL")
                .and_then(|level| level.parse().ok())
                .unwrap_or(Level::INFO),
        }
    }
}
