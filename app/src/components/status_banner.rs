use yew::prelude::*;

use crate::models::{Status, StatusKind};

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    pub status: Status,
}

/// Single status line above the active screen; success and error share the
/// slot, so a new result always replaces the previous one.
#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    let class = match props.status.kind {
        StatusKind::Success => "status-banner success",
        StatusKind::Error => "status-banner error",
    };

    html! {
        <div class={class}>
            { &props.status.message }
        </div>
    }
}
