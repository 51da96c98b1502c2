//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env file (optional)          config file (TOML, optional)
//!     → dotenvy                     → loader.rs (parse & deserialize)
//!     → process environment ───────→ apply_env (MODE, SERVE_PORT, *_SERVICE_ADDR)
//!                                   → validation.rs (semantic checks)
//!                                   → GatewayConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All fields have defaults to allow minimal configs
//! - Environment wins over the file, so containers can override one value

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_env_file, load_from_env, ConfigError};
pub use schema::{
    BackendsConfig, BootstrapConfig, GatewayConfig, LimitsConfig, ListenerConfig,
    ObservabilityConfig, RunMode, TimeoutConfig,
};
