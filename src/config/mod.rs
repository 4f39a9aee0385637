//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CanalConfig (validated, immutable)
//!     → routing options, listener, logging
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Routes themselves are code, not config: handlers cannot be named in TOML

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::CanalConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::RoutingConfig;
pub use schema::TimeoutConfig;
