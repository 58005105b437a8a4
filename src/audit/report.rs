use serde::Deserialize;
use std::collections::BTreeMap;

/// Full report returned by the audit engine for one page
#[derive(Debug, Clone, Deserialize)]
pub struct AuditReport {
    pub categories: AuditCategories,

    /// Individual audit results keyed by audit id
    #[serde(default)]
    pub audits: BTreeMap<String, AuditEntry>,
}

/// The four category scores every report carries
#[derive(Debug, Clone, Deserialize)]
pub struct AuditCategories {
    pub performance: CategoryScore,
    pub accessibility: CategoryScore,
    #[serde(rename = "best-practices")]
    pub best_practices: CategoryScore,
    pub seo: CategoryScore,
}

/// A single category score in `[0, 1]`
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryScore {
    pub score: f64,
}

/// One audit within the report
#[derive(Debug, Clone, Deserialize)]
pub struct AuditEntry {
    /// `None` for informational audits that are not scored
    pub score: Option<f64>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub details: Option<AuditDetails>,
}

/// Detail payload attached to some audits
///
/// The item shape varies per audit, so items stay as raw JSON values and
/// consumers pick out the fields they understand.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditDetails {
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub items: Vec<serde_json::Value>,
}
