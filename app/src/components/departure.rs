use yew::prelude::*;

use crate::services::zklogin;

#[derive(Properties, PartialEq)]
pub struct DepartureScreenProps {
    pub on_connect: Callback<MouseEvent>,
}

/// Unauthenticated screen: leave for the excursion with Google (zkLogin) or
/// with a connected wallet.
#[function_component(DepartureScreen)]
pub fn departure_screen(props: &DepartureScreenProps) -> Html {
    let oauth_href = {
        let redirect_uri = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        let nonce = format!("{}", js_sys::Date::now() as u64);
        zklogin::authorization_url(&redirect_uri, &nonce)
    };

    html! {
        <div class="screen departure">
            <div class="card">
                <h2>{"遠足に出かけよう！"}</h2>
                <p>
                    {"Sui筒（ウォレット）を持って、"}<br />
                    {"デジタルな遠足に出発しませんか？"}<br />
                    {"Googleアカウントですぐに始められます。"}
                </p>

                <div class="departure-actions">
                    <a class="btn-google" href={oauth_href}>
                        {"Googleで出発"}
                    </a>
                    <span class="divider">{"または"}</span>
                    <button class="btn-connect" onclick={props.on_connect.clone()}>
                        {"ウォレットを接続"}
                    </button>
                </div>
            </div>
        </div>
    }
}
