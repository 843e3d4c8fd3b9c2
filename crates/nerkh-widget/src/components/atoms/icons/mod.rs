//! Inline SVG icons.

use yew::prelude::*;

const STAR_PATH: &str = "M11.525 2.295a.53.53 0 0 1 .95 0l2.31 4.679a2.12 2.12 0 0 0 1.595 1.16l5.166.756a.53.53 0 0 1 .294.904l-3.736 3.638a2.12 2.12 0 0 0-.611 1.878l.882 5.14a.53.53 0 0 1-.771.56l-4.618-2.428a2.12 2.12 0 0 0-1.973 0L6.396 21.01a.53.53 0 0 1-.77-.56l.881-5.139a2.12 2.12 0 0 0-.611-1.879L2.16 9.795a.53.53 0 0 1 .294-.906l5.165-.755a2.12 2.12 0 0 0 1.597-1.16z";

#[derive(Properties, PartialEq)]
pub(crate) struct StarIconProps {
    /// Solid star when set, outline otherwise.
    #[prop_or_default]
    pub filled: bool,
    #[prop_or_default]
    pub class: Classes,
}

/// Decorative star; the owning button carries the accessible label.
#[function_component(StarIcon)]
pub(crate) fn star_icon(props: &StarIconProps) -> Html {
    let fill = if props.filled { "currentColor" } else { "none" };
    html! {
        <svg
            class={classes!("size-5", props.class.clone())}
            viewBox="0 0 24 24"
            fill={fill}
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            aria-hidden="true"
        >
            <path d={STAR_PATH} />
        </svg>
    }
}
