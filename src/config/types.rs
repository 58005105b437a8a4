use serde::Deserialize;

/// Main configuration structure for Pharos
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,
    pub audit: AuditConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Scan pacing and time-budget configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScannerConfig {
    /// Pause between audited pages (seconds)
    #[serde(rename = "pause-seconds", default = "default_pause_seconds")]
    pub pause_seconds: u64,

    /// Time budget for a single page audit (seconds)
    #[serde(
        rename = "audit-timeout-seconds",
        default = "default_audit_timeout_seconds"
    )]
    pub audit_timeout_seconds: u64,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            pause_seconds: default_pause_seconds(),
            audit_timeout_seconds: default_audit_timeout_seconds(),
        }
    }
}

/// Audit engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuditConfig {
    /// Base URL of the audit endpoint; the page URL is passed as the
    /// `url` query parameter and the endpoint answers with the report JSON
    pub endpoint: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the JSON results file
    #[serde(rename = "results-path", default = "default_results_path")]
    pub results_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_path: default_results_path(),
        }
    }
}

fn default_pause_seconds() -> u64 {
    5
}

fn default_audit_timeout_seconds() -> u64 {
    120
}

fn default_results_path() -> String {
    "audit_results.json".to_string()
}
