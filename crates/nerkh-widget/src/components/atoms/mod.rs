//! Shared UI atoms used by the widget views.

pub(crate) mod favorite_toggle;
pub(crate) mod icon_button;
pub(crate) mod icons;

pub(crate) use favorite_toggle::FavoriteToggle;
pub(crate) use icon_button::IconButton;
