use yew::prelude::*;

use crate::model::LossReason;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverOverlayProps {
    pub show: bool,
    pub won: bool,
    pub detail: String,
    pub loss: Option<LossReason>,
    pub restart: Callback<()>,
}

#[function_component]
pub fn GameOverOverlay(props: &GameOverOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let restart_cb = props.restart.clone();
    let restart_btn = Callback::from(move |_| restart_cb.emit(()));
    let (marker, title, accent) = if props.won {
        ("🏆", "Victory!", "#3fb950")
    } else {
        ("😔", "Game Over", "#f85149")
    };
    html! {
        <div style="text-align:center; display:flex; flex-direction:column; gap:24px; align-items:center;">
            <div style="font-size:96px;">{ marker }</div>
            <div>
                <h2 style={format!("margin:0 0 8px 0; font-size:36px; color:{};", accent)}>{ title }</h2>
                <p style="margin:4px 0; font-size:20px; opacity:0.8;">{ props.detail.clone() }</p>
                { if let Some(reason) = props.loss { html!{ <p style="margin:4px 0; opacity:0.7;">{ reason.message() }</p> } } else { html!{} } }
            </div>
            <button onclick={restart_btn} style="font-size:20px; padding:16px 48px;">{"Play Again"}</button>
        </div>
    }
}
