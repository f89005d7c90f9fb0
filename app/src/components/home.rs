use yew::prelude::*;

use crate::models::OwnedSnack;

#[derive(Properties, PartialEq)]
pub struct HomeScreenProps {
    pub snacks: Vec<OwnedSnack>,
    pub on_keep_playing: Callback<MouseEvent>,
    pub on_disconnect: Callback<MouseEvent>,
}

/// Summary/exit screen: the day's haul, a way back to the excursion, and
/// logout. The transfer button is a placeholder until asset withdrawal is
/// wired up.
#[function_component(HomeScreen)]
pub fn home_screen(props: &HomeScreenProps) -> Html {
    html! {
        <div class="screen home">
            <div class="card">
                <h2>{"ただいま！"}</h2>
                <p>{"今日の遠足の成果を確認しましょう"}</p>

                <div class="inventory-grid">
                    <div class="inventory-cell water">
                        <p class="label">{"お水 (SUI)"}</p>
                        <p class="value">{"0.05"}</p>
                    </div>
                    <div class="inventory-cell snacks">
                        <p class="label">{"おやつ (NFT)"}</p>
                        <p class="value">{ props.snacks.len() }<span class="unit">{"個"}</span></p>
                    </div>
                </div>

                if !props.snacks.is_empty() {
                    <div class="snack-gallery">
                        <p class="label">{"買ったおやつ"}</p>
                        <div class="snack-row">
                            {
                                props.snacks.iter().map(|snack| {
                                    html! {
                                        <div class="snack-thumb" key={snack.object_id.clone()}>
                                            {
                                                match &snack.image_url {
                                                    Some(url) => html! { <img src={url.clone()} alt="Snack" /> },
                                                    None => html! { <span>{"?"}</span> },
                                                }
                                            }
                                        </div>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                }

                <div class="home-actions">
                    <p class="hint">
                        {"これらの思い出（資産）を、"}<br />
                        {"あなたのメインウォレットに移しますか？"}
                    </p>
                    <button class="btn-transfer">{"すべて持ち帰る (Transfer)"}</button>
                    <button class="btn-keep-playing" onclick={props.on_keep_playing.clone()}>
                        {"まだ遊ぶ"}
                    </button>
                </div>
            </div>

            <button class="btn-logout" onclick={props.on_disconnect.clone()}>
                {"ログアウトして終了"}
            </button>
        </div>
    }
}
