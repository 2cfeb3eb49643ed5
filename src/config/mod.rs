//! # Configuration Module
//!
//! This module handles application configuration loading and management.
//! Configuration can be loaded from:
//! - Environment variables (prefixed with APP__, plus TINYCHIRP_DATA_DIR)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tinychirp::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("State lives in {}", settings.data_dir().display());
//! ```

mod settings;

pub use settings::*;
