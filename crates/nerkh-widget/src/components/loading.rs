use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[function_component(LoadingPlaceholder)]
pub(crate) fn loading_placeholder() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    html! {
        <div class="flex items-center justify-center p-4" dir={bundle.dir()} aria-busy="true">
            <div class="text-slate-500 text-sm">{bundle.text("widget.loading")}</div>
        </div>
    }
}
