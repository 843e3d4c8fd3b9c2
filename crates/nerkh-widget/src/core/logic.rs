//! Pure list helpers extracted from components for non-wasm testing.

use nerkh_api_models::Asset;

/// Path of the asset listing endpoint.
pub const ASSETS_PATH: &str = "/api/assets";

/// Build the asset listing URL from a configured base, tolerating a trailing slash.
#[must_use]
pub fn build_assets_url(base_url: &str) -> String {
    format!("{}{ASSETS_PATH}", base_url.trim_end_matches('/'))
}

/// Keep the assets whose id was requested, preserving the fetched order.
#[must_use]
pub fn filter_assets(assets: &[Asset], requested_ids: &[String]) -> Vec<Asset> {
    assets
        .iter()
        .filter(|asset| requested_ids.iter().any(|id| *id == asset.id))
        .cloned()
        .collect()
}

/// Remove `id` when present, otherwise append it.
#[must_use]
pub fn toggle_favorite(favorites: &[String], id: &str) -> Vec<String> {
    if favorites.iter().any(|fav| fav == id) {
        favorites.iter().filter(|fav| *fav != id).cloned().collect()
    } else {
        let mut next = favorites.to_vec();
        next.push(id.to_string());
        next
    }
}

/// Whether `id` is in the favorites sequence.
#[must_use]
pub fn is_favorite(favorites: &[String], id: &str) -> bool {
    favorites.iter().any(|fav| fav == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assets(ids: &[&str]) -> Vec<Asset> {
        ids.iter()
            .map(|id| Asset::new(*id, format!("name-{id}"), 1_000.0))
            .collect()
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    fn asset_ids(assets: &[Asset]) -> Vec<&str> {
        assets.iter().map(|asset| asset.id.as_str()).collect()
    }

    #[test]
    fn filter_keeps_fetched_order() {
        let fetched = assets(&["a1", "a2", "a3", "a4"]);
        let filtered = filter_assets(&fetched, &ids(&["a4", "a1"]));
        assert_eq!(asset_ids(&filtered), vec!["a1", "a4"]);
    }

    #[test]
    fn filter_with_no_requested_ids_is_empty() {
        let fetched = assets(&["a1", "a2"]);
        assert!(filter_assets(&fetched, &[]).is_empty());
    }

    #[test]
    fn filter_ignores_unknown_ids() {
        let fetched = assets(&["a1", "a2"]);
        let filtered = filter_assets(&fetched, &ids(&["zz", "a2"]));
        assert_eq!(asset_ids(&filtered), vec!["a2"]);
    }

    #[test]
    fn filter_is_subset_for_every_request_shape() {
        let fetched = assets(&["a", "b", "c", "d", "e"]);
        let all: Vec<&str> = vec!["a", "b", "c", "d", "e", "x"];
        for mask in 0u32..(1u32 << all.len()) {
            let requested: Vec<String> = all
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1u32 << *bit) != 0)
                .map(|(_, id)| (*id).to_string())
                .collect();
            let filtered = filter_assets(&fetched, &requested);
            let expected: Vec<&str> = fetched
                .iter()
                .filter(|asset| requested.contains(&asset.id))
                .map(|asset| asset.id.as_str())
                .collect();
            assert_eq!(asset_ids(&filtered), expected);
        }
    }

    #[test]
    fn toggle_appends_then_removes() {
        let once = toggle_favorite(&ids(&["a1"]), "a2");
        assert_eq!(once, ids(&["a1", "a2"]));
        let twice = toggle_favorite(&once, "a2");
        assert_eq!(twice, ids(&["a1"]));
    }

    #[test]
    fn toggle_twice_restores_content() {
        let start = ids(&["a3", "a1", "a2"]);
        let removed = toggle_favorite(&start, "a1");
        assert_eq!(removed, ids(&["a3", "a2"]));
        let restored = toggle_favorite(&removed, "a1");
        assert_eq!(restored, ids(&["a3", "a2", "a1"]));
        let mut sorted_start = start.clone();
        let mut sorted_restored = restored;
        sorted_start.sort();
        sorted_restored.sort();
        assert_eq!(sorted_start, sorted_restored);
    }

    #[test]
    fn assets_url_trims_trailing_slash() {
        assert_eq!(build_assets_url("https://x.ir/"), "https://x.ir/api/assets");
        assert_eq!(build_assets_url("https://x.ir"), "https://x.ir/api/assets");
        assert_eq!(build_assets_url(""), "/api/assets");
    }

    #[test]
    fn favorite_lookup() {
        let favorites = ids(&["a1"]);
        assert!(is_favorite(&favorites, "a1"));
        assert!(!is_favorite(&favorites, "a2"));
    }
}
