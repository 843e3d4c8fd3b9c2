use yew::prelude::*;

/// Props for icon-only toggle buttons.
#[derive(Properties, PartialEq)]
pub(crate) struct IconButtonProps {
    /// Accessible label for the button.
    pub aria_label: AttrValue,
    /// Current toggle state, exposed as `aria-pressed`.
    pub pressed: bool,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    /// Icon content.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(IconButton)]
pub(crate) fn icon_button(props: &IconButtonProps) -> Html {
    let pressed = if props.pressed { "true" } else { "false" };
    html! {
        <button
            class="icon-btn ghost"
            type="button"
            aria-label={props.aria_label.clone()}
            aria-pressed={pressed}
            onclick={props.onclick.clone()}
        >
            {for props.children.iter()}
        </button>
    }
}
