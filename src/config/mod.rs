//! Configuration module for Pharos
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files.
//!
//! # Example
//!
//! ```no_run
//! use pharos::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("pharos.toml")).unwrap();
//! println!("Results file: {}", config.output.results_path);
//! ```

mod parser;
mod types;

// Re-export types
pub use types::{AuditConfig, Config, OutputConfig, ScannerConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
