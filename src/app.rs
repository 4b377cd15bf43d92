//! Application identity from Cargo.toml.

/// Application name (from Cargo.toml `package.name`).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Application version (from Cargo.toml `package.version`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix shared by every environment variable the crate reads.
pub const ENV_PREFIX: &str = "TEXT_MARKUP";
