use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExcursionScreenProps {
    pub is_pouring: bool,
    pub is_minting: bool,
    pub on_pour: Callback<MouseEvent>,
    pub on_mint: Callback<MouseEvent>,
    pub on_go_home: Callback<MouseEvent>,
}

/// Main activity screen: the water point (faucet) and the snack stand
/// (mint). Each button only disables itself while its own request is
/// pending; the two operations never block each other.
#[function_component(ExcursionScreen)]
pub fn excursion_screen(props: &ExcursionScreenProps) -> Html {
    html! {
        <div class="screen excursion">
            <div class="card water-point">
                <div>
                    <h3>{"給水ポイント"}</h3>
                    <p>{"お水（SUI）を補給します"}</p>
                </div>
                <button
                    class="btn-pour"
                    onclick={props.on_pour.clone()}
                    disabled={props.is_pouring}
                >
                    { if props.is_pouring { "給水中..." } else { "水筒にSUIを入れる" } }
                </button>
            </div>

            <div class="card snack-stand">
                <div>
                    <h3>{"おやつを買う"}</h3>
                    <p>{"この場所限定のおやつを買おう"}</p>
                </div>
                <div class="snack-preview">
                    <span class="snack-emoji">{"🍡"}</span>
                    <p>{"東京の桜餅"}</p>
                </div>
                <button
                    class="btn-mint"
                    onclick={props.on_mint.clone()}
                    disabled={props.is_minting}
                >
                    { if props.is_minting { "買っています..." } else { "おやつを買う！" } }
                </button>
            </div>

            <button class="btn-go-home" onclick={props.on_go_home.clone()}>
                {"おうちに帰る"}
            </button>
        </div>
    }
}
