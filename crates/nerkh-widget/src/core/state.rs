//! Widget state and its transitions, kept DOM-free for native tests.
//!
//! # Design
//! - One value holds everything the widget mutates: the fetched list, the load phase, and
//!   the favorites sequence.
//! - The load phase only moves forward (`Loading` to `Loaded`) within a mount.
//! - A failed load ends in `Loaded` with an empty list; the error is handed back to the
//!   caller for logging and never stored.

use crate::core::load::{InitialLoad, LoadError};
use crate::core::logic::{filter_assets, is_favorite, toggle_favorite};
use crate::core::params::{ViewType, WidgetParams};
use nerkh_api_models::Asset;

/// Progress of the one-shot initial load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Waiting for the initial load (or never started).
    #[default]
    Loading,
    /// Load settled, successfully or not.
    Loaded,
}

/// Local state owned by one mounted widget.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct WidgetState {
    /// Fetched assets, in upstream order.
    pub assets: Vec<Asset>,
    /// Load phase.
    pub phase: LoadPhase,
    /// Favorited asset ids, in toggle order.
    pub favorites: Vec<String>,
}

impl WidgetState {
    /// Fresh state for a new mount: empty, loading, no favorites.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the loading placeholder should be shown.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Apply the settled initial load.
    ///
    /// On success the list is replaced; on failure it is left untouched. Either way the phase
    /// moves to `Loaded`. Results arriving after the first settle are ignored.
    ///
    /// # Errors
    /// Returns the load error so the caller can log it; it is not kept in state.
    pub fn finish_load(&mut self, result: Result<Vec<Asset>, LoadError>) -> Result<(), LoadError> {
        if self.phase == LoadPhase::Loaded {
            return Ok(());
        }
        self.phase = LoadPhase::Loaded;
        self.assets = result?;
        Ok(())
    }

    /// Apply the outcome of the initial load run.
    ///
    /// A skipped load leaves the widget loading for the rest of the mount. A discarded load
    /// belongs to an unmounted widget and changes nothing.
    ///
    /// # Errors
    /// Returns the load error of a settled, failed load so the caller can log it.
    pub fn apply_initial_load(&mut self, outcome: InitialLoad) -> Result<(), LoadError> {
        match outcome {
            InitialLoad::Settled(result) => self.finish_load(result),
            InitialLoad::Skipped | InitialLoad::Discarded => Ok(()),
        }
    }

    /// Toggle `id` in the favorites sequence.
    pub fn toggle_favorite(&mut self, id: &str) {
        self.favorites = toggle_favorite(&self.favorites, id);
    }

    /// Whether `id` is currently a favorite.
    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        is_favorite(&self.favorites, id)
    }

    /// Derive what to render for the given parameters.
    #[must_use]
    pub fn view_model(&self, params: &WidgetParams) -> ViewModel {
        if self.loading() {
            return ViewModel::Loading;
        }
        let assets = filter_assets(&self.assets, &params.requested_ids);
        match params.view {
            ViewType::Grid => ViewModel::Grid(assets),
            ViewType::Table => ViewModel::Table(assets),
            ViewType::Strip => ViewModel::Strip(assets),
        }
    }
}

/// Render branch selected for the current state and parameters.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, Debug, PartialEq)]
pub enum ViewModel {
    /// Loading placeholder, no asset content.
    Loading,
    /// Card grid over the filtered assets.
    Grid(Vec<Asset>),
    /// Table over the filtered assets.
    Table(Vec<Asset>),
    /// Chip strip over the filtered assets.
    Strip(Vec<Asset>),
}
