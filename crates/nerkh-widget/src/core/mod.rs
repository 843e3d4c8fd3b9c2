//! Core, DOM-free primitives and helpers for the widget.
pub mod format;
pub mod load;
pub mod logic;
pub mod params;
pub mod state;
pub mod theme;
