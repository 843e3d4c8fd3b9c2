//! Card renderer for the grid view.

use crate::components::atoms::FavoriteToggle;
use crate::core::format::{format_percent, format_price};
use crate::core::theme::{ThemeMode, change_class};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use nerkh_api_models::Asset;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AssetCardProps {
    pub asset: Asset,
    pub is_favorite: bool,
    pub on_toggle_favorite: Callback<String>,
}

#[function_component(AssetCard)]
pub(crate) fn asset_card(props: &AssetCardProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let theme = use_context::<ThemeMode>().unwrap_or_default();
    let tokens = theme.tokens();
    let asset = &props.asset;
    let price = format_price(asset.price_toman, bundle.locale);

    html! {
        <div class={classes!("rounded-xl", "p-4", "shadow-sm", tokens.raised)}>
            <div class="flex items-start justify-between gap-2">
                <div>
                    <p class="font-bold">{asset.name_fa.clone()}</p>
                    {asset.symbol.clone().map(|symbol| html! {
                        <p class={classes!("text-xs", tokens.muted)}>{symbol}</p>
                    }).unwrap_or_default()}
                </div>
                <FavoriteToggle
                    asset_id={AttrValue::from(asset.id.clone())}
                    active={props.is_favorite}
                    on_toggle={props.on_toggle_favorite.clone()}
                />
            </div>
            <div class="mt-3 flex items-baseline justify-between gap-2">
                <p class="text-lg font-semibold">
                    {price}
                    <span class={classes!("ms-1", "text-xs", tokens.muted)}>
                        {bundle.text("widget.currency")}
                    </span>
                </p>
                {asset.change_percent.map(|change| html! {
                    <span class={classes!("text-sm", change_class(change))} dir="ltr">
                        {format_percent(change, bundle.locale)}
                    </span>
                }).unwrap_or_default()}
            </div>
        </div>
    }
}
