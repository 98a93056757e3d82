//! Configuration module

mod site;

pub use site::ButtonTheme;
pub use site::ConfigError;
pub use site::GhostConfig;
pub use site::SiteConfig;
