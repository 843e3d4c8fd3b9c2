//! Star button that flips an asset's favorite state.
//!
//! # Design
//! - Emits the asset id; the owner decides what toggling means.
//! - Copy comes from the ambient translation bundle.

use super::icons::StarIcon;
use super::IconButton;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct FavoriteToggleProps {
    pub asset_id: AttrValue,
    pub active: bool,
    pub on_toggle: Callback<String>,
}

#[function_component(FavoriteToggle)]
pub(crate) fn favorite_toggle(props: &FavoriteToggleProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let label = if props.active {
        bundle.text("card.favorite_remove")
    } else {
        bundle.text("card.favorite_add")
    };
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let id = props.asset_id.to_string();
        Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
    };
    let tone = if props.active {
        "text-amber-400"
    } else {
        "text-slate-400"
    };

    html! {
        <IconButton aria_label={AttrValue::from(label)} pressed={props.active} onclick={onclick}>
            <StarIcon filled={props.active} class={classes!(tone)} />
        </IconButton>
    }
}
