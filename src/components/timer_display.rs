use yew::prelude::*;

use crate::state::{Reading, expiry_due};

#[derive(Properties, PartialEq, Clone)]
pub struct TimerDisplayProps {
    pub time_left: u32,
    pub round_serial: u64,
    pub on_time_up: Callback<()>,
}

/// Countdown readout. Signals expiry once per round when the readout hits zero.
#[function_component(TimerDisplay)]
pub fn timer_display(props: &TimerDisplayProps) -> Html {
    let last_seen = use_mut_ref(|| None::<Reading>);
    {
        let on_time_up = props.on_time_up.clone();
        use_effect_with((props.round_serial, props.time_left), move |reading| {
            let mut last = last_seen.borrow_mut();
            let due = expiry_due(*last, *reading);
            *last = Some(*reading);
            drop(last);
            if due {
                on_time_up.emit(());
            }
            || ()
        });
    }
    html! {
        <div style="text-align:right;">
            <div style="font-size:60px; font-weight:700; font-variant-numeric:tabular-nums;">{ props.time_left }</div>
            <div style="font-size:12px; opacity:0.7; text-transform:uppercase; letter-spacing:0.1em;">{"Seconds"}</div>
        </div>
    }
}
