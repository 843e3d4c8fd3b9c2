#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Nerkh asset API.
//!
//! The upstream service speaks camelCase JSON. These types are the single
//! decoding contract for the widget and any tooling that consumes the same
//! endpoint.
use serde::{Deserialize, Serialize};

/// Priced, named item returned by `GET /api/assets`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Stable, unique asset identifier.
    pub id: String,
    /// Persian display name.
    pub name_fa: String,
    /// Latest price in toman.
    pub price_toman: f64,
    /// Ticker-style symbol when the upstream provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Change over the last 24 hours, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_percent: Option<f64>,
}

impl Asset {
    /// Build an asset carrying only the required fields.
    #[must_use]
    pub fn new(id: impl Into<String>, name_fa: impl Into<String>, price_toman: f64) -> Self {
        Self {
            id: id.into(),
            name_fa: name_fa.into(),
            price_toman,
            symbol: None,
            change_percent: None,
        }
    }

    /// Whether the latest change is strictly negative.
    #[must_use]
    pub fn is_falling(&self) -> bool {
        self.change_percent.is_some_and(|change| change < 0.0)
    }
}
