use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IntroOverlayProps {
    pub show: bool,
    pub schedule_text: String,
    pub rounds_total: usize,
    pub start: Callback<()>,
}

#[function_component(IntroOverlay)]
pub fn intro_overlay(props: &IntroOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let start_cb = props.start.clone();
    let start_btn = Callback::from(move |_| start_cb.emit(()));
    html! {
        <div style="text-align:center; display:flex; flex-direction:column; gap:32px; align-items:center;">
            <div style="display:flex; flex-direction:column; gap:12px;">
                <p style="margin:0; font-size:20px;">{"Ready for the challenge?"}</p>
                <p style="margin:0; opacity:0.7;">
                    { format!("You'll have {} seconds across {} rounds", props.schedule_text, props.rounds_total) }
                </p>
            </div>
            <button onclick={start_btn} style="font-size:20px; padding:16px 48px;">{"Start Game"}</button>
        </div>
    }
}
