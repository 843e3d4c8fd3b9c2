use crate::components::asset_card::AssetCard;
use crate::components::asset_strip::AssetStrip;
use crate::components::asset_table::AssetTable;
use crate::components::loading::LoadingPlaceholder;
use crate::core::load::{InitialLoad, MountGuard, run_initial_load};
use crate::core::params::WidgetParams;
use crate::core::state::{ViewModel, WidgetState};
use crate::core::theme::ThemeMode;
use crate::i18n::TranslationBundle;
use crate::services::api::ApiClient;
use gloo::console;
use preferences::{ROOT_ELEMENT_ID, api_base_url, current_query};
use std::rc::Rc;
use web_sys::AbortController;
use yew::prelude::*;

mod preferences;

/// State transitions dispatched from effects and callbacks.
pub(crate) enum WidgetAction {
    InitialLoad(InitialLoad),
    ToggleFavorite(String),
}

impl Reducible for WidgetState {
    type Action = WidgetAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            WidgetAction::InitialLoad(outcome) => {
                if let Err(err) = next.apply_initial_load(outcome) {
                    console::error!("failed to load widget data", err.to_string());
                }
            }
            WidgetAction::ToggleFavorite(id) => next.toggle_favorite(&id),
        }
        Rc::new(next)
    }
}

#[function_component(WidgetApp)]
pub(crate) fn widget_app() -> Html {
    let state = use_reducer(WidgetState::new);
    // Re-derived every render; the query is never cached in state.
    let params = WidgetParams::from_query(&current_query());
    let bundle = use_memo(|locale| TranslationBundle::new(*locale), params.locale);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let guard = MountGuard::new();
                let controller = AbortController::new().ok();
                let client = ApiClient::new(
                    api_base_url(),
                    controller.as_ref().map(AbortController::signal),
                );
                let params = WidgetParams::from_query(&current_query());
                {
                    let guard = guard.clone();
                    yew::platform::spawn_local(async move {
                        let outcome = run_initial_load(&params, &client, &guard).await;
                        match outcome {
                            InitialLoad::Discarded => {
                                console::debug!("widget unmounted before assets arrived");
                                return;
                            }
                            InitialLoad::Skipped => {
                                console::debug!("asset load skipped: mode is not widget");
                            }
                            InitialLoad::Settled(_) => {}
                        }
                        dispatcher.dispatch(WidgetAction::InitialLoad(outcome));
                    });
                }
                move || {
                    guard.release();
                    if let Some(controller) = controller {
                        controller.abort();
                    }
                }
            },
            (),
        );
    }

    let on_toggle_favorite = {
        let state = state.clone();
        Callback::from(move |id: String| state.dispatch(WidgetAction::ToggleFavorite(id)))
    };

    let content = match state.view_model(&params) {
        ViewModel::Loading => return html! {
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                <LoadingPlaceholder />
            </ContextProvider<TranslationBundle>>
        },
        ViewModel::Grid(assets) => html! {
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                {for assets.into_iter().map(|asset| {
                    let key = asset.id.clone();
                    let is_favorite = state.is_favorite(&asset.id);
                    html! {
                        <AssetCard
                            key={key}
                            asset={asset}
                            is_favorite={is_favorite}
                            on_toggle_favorite={on_toggle_favorite.clone()}
                        />
                    }
                })}
            </div>
        },
        ViewModel::Table(assets) => html! {
            <AssetTable
                assets={assets}
                favorites={state.favorites.clone()}
                on_toggle_favorite={on_toggle_favorite.clone()}
            />
        },
        ViewModel::Strip(assets) => html! { <AssetStrip assets={assets} /> },
    };

    let theme = params.theme;
    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <ContextProvider<ThemeMode> context={theme}>
                <div
                    class={classes!("p-4", "font-vazir", theme.tokens().surface)}
                    dir={bundle.dir()}
                    lang={bundle.locale.code()}
                    data-theme={theme.as_str()}
                >
                    {content}
                </div>
            </ContextProvider<ThemeMode>>
        </ContextProvider<TranslationBundle>>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id(ROOT_ELEMENT_ID) {
        yew::Renderer::<WidgetApp>::with_root(root).render();
    } else {
        yew::Renderer::<WidgetApp>::new().render();
    }
}
