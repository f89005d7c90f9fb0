use yew::prelude::*;

use crate::utils::format::short_address;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub address: Option<String>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="app-header">
            <div>
                <h1>{"Ensoku"}</h1>
                <p class="tagline">{"家に帰るまでが遠足"}</p>
            </div>
            if let Some(address) = &props.address {
                <div class="address-pill">
                    <span class="status-dot"></span>
                    <span class="address-mono">{ short_address(address) }</span>
                </div>
            }
        </header>
    }
}
