//! Protek - data access for the machine-monitoring dashboard
//!
//! Fetches machine status, alerts, sensor history and predictive-maintenance
//! results from the Protek backend and normalizes them into the shape the
//! dashboard frontend renders. A fixture dataset stands in when no backend is
//! reachable.

pub mod client;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod io;
pub mod mapping;
pub mod raw;
pub mod types;

pub use client::ApiClient;
pub use config::{load_config, ApiConfig, Config};
pub use error::{ProtekError, Result};
