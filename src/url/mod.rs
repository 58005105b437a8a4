//! URL handling module for Pharos
//!
//! This module provides the URL normalization used everywhere a raw URL
//! string enters the system: operator input, sitemap candidates, and page
//! locations extracted from sitemap content.

mod normalize;

pub use normalize::normalize_url;
