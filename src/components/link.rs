use yew::prelude::*;
use crate::models::Route;
use crate::services::push_route;

#[derive(Properties, PartialEq)]
pub struct LinkProps {
    pub to: Route,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// `<a>` que navega con pushState en vez de recargar la página
#[function_component(Link)]
pub fn link(props: &LinkProps) -> Html {
    let to = props.to;
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Err(err) = push_route(to.path()) {
            log::error!("❌ {}", err);
        }
    });

    html! {
        <a href={to.path()} class={props.classes.clone()} {onclick}>
            { props.children.clone() }
        </a>
    }
}
