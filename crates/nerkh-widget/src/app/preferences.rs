//! Environment helpers for the widget entry point.

use gloo::utils::window;

/// Host element the widget renders into.
pub(crate) const ROOT_ELEMENT_ID: &str = "root";

/// Current `location.search`, including the leading `?` when present.
pub(crate) fn current_query() -> String {
    window().location().search().unwrap_or_default()
}

/// Asset API base: the build-time override when set, otherwise the host page origin.
pub(crate) fn api_base_url() -> String {
    if let Some(configured) = option_env!("NERKH_API_BASE_URL") {
        if !configured.trim().is_empty() {
            return configured.trim().to_string();
        }
    }
    window().location().origin().unwrap_or_default()
}
