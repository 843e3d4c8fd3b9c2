//! Horizontally scrolling chip strip.

use crate::core::format::format_price;
use crate::core::theme::ThemeMode;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use nerkh_api_models::Asset;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AssetStripProps {
    pub assets: Vec<Asset>,
}

#[function_component(AssetStrip)]
pub(crate) fn asset_strip(props: &AssetStripProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let tokens = use_context::<ThemeMode>().unwrap_or_default().tokens();

    html! {
        <div class="flex gap-2 overflow-x-auto pb-2" role="list" aria-label={bundle.text("strip.label")}>
            {for props.assets.iter().map(|asset| html! {
                <div
                    key={asset.id.clone()}
                    role="listitem"
                    class={classes!("flex-shrink-0", "px-3", "py-2", "rounded-lg", "text-sm", "whitespace-nowrap", tokens.raised)}
                >
                    <div class="font-bold">{asset.name_fa.clone()}</div>
                    <div class={classes!("text-xs", tokens.muted)}>
                        {format_price(asset.price_toman, bundle.locale)}
                    </div>
                </div>
            })}
        </div>
    }
}
