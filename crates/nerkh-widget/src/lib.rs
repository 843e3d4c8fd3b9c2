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
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Embeddable Nerkh asset widget.
//!
//! The widget is configured by the host page's query string and renders a filtered asset
//! list as cards, a table, or a scrolling strip. Everything under [`core`] and [`i18n`] is
//! DOM-free and tested natively; the Yew tree only builds for wasm32.

pub mod core;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::format::format_price;
    use crate::core::params::WidgetParams;
    use crate::core::state::{ViewModel, WidgetState};
    use crate::i18n::TranslationBundle;
    use nerkh_api_models::Asset;

    #[test]
    fn embedded_table_in_dark_mode() {
        let params = WidgetParams::from_query("?mode=widget&type=table&assets=a1,a3&theme=dark");
        let mut state = WidgetState::new();
        state
            .finish_load(Ok(vec![
                Asset::new("a1", "دلار", 58_250.0),
                Asset::new("a2", "یورو", 63_100.0),
                Asset::new("a3", "سکه", 41_500_000.0),
            ]))
            .unwrap();

        let ViewModel::Table(rows) = state.view_model(&params) else {
            panic!("table view expected");
        };
        let ids: Vec<&str> = rows.iter().map(|asset| asset.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a3"]);
        assert_eq!(params.theme.tokens().surface, "bg-slate-950 text-white");

        let bundle = TranslationBundle::new(params.locale);
        assert!(bundle.rtl());
        assert_eq!(format_price(rows[1].price_toman, bundle.locale), "۴۱٬۵۰۰٬۰۰۰");
    }
}
