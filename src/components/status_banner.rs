use yew::prelude::*;

use super::timer_display::TimerDisplay;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusBannerProps {
    pub status: String,
    pub show_timer: bool,
    pub time_left: u32,
    pub round_serial: u64,
    pub on_time_up: Callback<()>,
}

#[function_component]
pub fn StatusBanner(props: &StatusBannerProps) -> Html {
    html! {
        <header style="display:flex; justify-content:space-between; align-items:flex-start; margin-bottom:64px;">
            <div>
                <h1 style="margin:0 0 8px 0; font-size:48px; color:#f85149;">{"Catch Red"}</h1>
                <p style="margin:0; opacity:0.7;">{ props.status.clone() }</p>
            </div>
            { if props.show_timer {
                html!{ <TimerDisplay time_left={props.time_left} round_serial={props.round_serial} on_time_up={props.on_time_up.clone()} /> }
            } else { html!{} } }
        </header>
    }
}
