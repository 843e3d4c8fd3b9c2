//! The one-shot initial asset load.
//!
//! # Design
//! - The fetch sits behind [`AssetSource`] so the load can be driven without a browser.
//! - A [`MountGuard`] shared with the component teardown decides whether a settled result
//!   may still touch state.

use crate::core::params::WidgetParams;
use async_trait::async_trait;
use nerkh_api_models::Asset;
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;

/// Why the asset load failed. All variants surface to the user as an empty list.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    /// The request never produced a response.
    #[error("asset request failed: {0}")]
    Request(String),
    /// The endpoint answered with a non-success status.
    #[error("asset endpoint returned status {0}")]
    Status(u16),
    /// The response body was not an asset list.
    #[error("asset payload could not be decoded: {0}")]
    Decode(String),
    /// The request was cancelled during teardown.
    #[error("asset request aborted")]
    Aborted,
}

/// Upstream that yields the full asset list.
#[async_trait(?Send)]
pub trait AssetSource {
    /// Fetch every asset the upstream knows about.
    async fn fetch_assets(&self) -> Result<Vec<Asset>, LoadError>;
}

/// Shared flag recording whether the owning widget is still mounted.
#[derive(Clone, Debug)]
pub struct MountGuard {
    mounted: Rc<Cell<bool>>,
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MountGuard {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.mounted, &other.mounted)
    }
}

impl MountGuard {
    /// Guard for a freshly mounted widget.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mounted: Rc::new(Cell::new(true)),
        }
    }

    /// Mark the widget as unmounted. Idempotent.
    pub fn release(&self) {
        self.mounted.set(false);
    }

    /// Whether state updates are still allowed.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }
}

/// Outcome of [`run_initial_load`].
#[derive(Clone, Debug, PartialEq)]
pub enum InitialLoad {
    /// `mode` was not `widget`; the source was never called.
    Skipped,
    /// The widget unmounted before the fetch settled; nothing may be applied.
    Discarded,
    /// The fetch settled while mounted.
    Settled(Result<Vec<Asset>, LoadError>),
}

/// Run the initial load for a mount, honouring the mode gate and the unmount guard.
pub async fn run_initial_load<S>(
    params: &WidgetParams,
    source: &S,
    guard: &MountGuard,
) -> InitialLoad
where
    S: AssetSource + ?Sized,
{
    if !params.should_load() {
        return InitialLoad::Skipped;
    }
    let result = source.fetch_assets().await;
    if guard.is_mounted() {
        InitialLoad::Settled(result)
    } else {
        InitialLoad::Discarded
    }
}
