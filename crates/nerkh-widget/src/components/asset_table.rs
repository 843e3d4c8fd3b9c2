//! Table renderer with a favorites column.

use crate::components::atoms::FavoriteToggle;
use crate::core::format::{format_percent, format_price};
use crate::core::logic::is_favorite;
use crate::core::theme::{ThemeMode, change_class};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use nerkh_api_models::Asset;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AssetTableProps {
    pub assets: Vec<Asset>,
    pub favorites: Vec<String>,
    pub on_toggle_favorite: Callback<String>,
}

#[function_component(AssetTable)]
pub(crate) fn asset_table(props: &AssetTableProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let theme = use_context::<ThemeMode>().unwrap_or_default();
    let tokens = theme.tokens();
    let t = |key: &str| bundle.text(key);

    html! {
        <div class="overflow-x-auto">
            <table class="w-full text-sm">
                <thead>
                    <tr class={classes!("border-b", tokens.border, tokens.muted)}>
                        <th class="p-2 text-start">{t("table.favorite")}</th>
                        <th class="p-2 text-start">{t("table.name")}</th>
                        <th class="p-2 text-start">{t("table.price")}</th>
                        <th class="p-2 text-start">{t("table.change")}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.assets.iter().map(|asset| html! {
                        <tr key={asset.id.clone()} class={classes!("border-b", tokens.border)}>
                            <td class="p-2">
                                <FavoriteToggle
                                    asset_id={AttrValue::from(asset.id.clone())}
                                    active={is_favorite(&props.favorites, &asset.id)}
                                    on_toggle={props.on_toggle_favorite.clone()}
                                />
                            </td>
                            <td class="p-2 font-medium">{asset.name_fa.clone()}</td>
                            <td class="p-2">{format_price(asset.price_toman, bundle.locale)}</td>
                            <td class="p-2">
                                {asset.change_percent.map(|change| html! {
                                    <span class={change_class(change)} dir="ltr">
                                        {format_percent(change, bundle.locale)}
                                    </span>
                                }).unwrap_or_else(|| html! { <span class={tokens.muted}>{"–"}</span> })}
                            </td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
