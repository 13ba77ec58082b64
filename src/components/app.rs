use super::{
    game_grid::GameGrid, game_over_overlay::GameOverOverlay, intro_overlay::IntroOverlay,
    status_banner::StatusBanner,
};
use crate::config::GameConfig;
use crate::model::{GameAction, GameState, Phase};
use crate::state::{Countdown, should_run};
use yew::prelude::*;

fn entropy_seed() -> u64 {
    let r = js_sys::Math::random() * (u32::MAX as f64);
    ((js_sys::Date::now() as u64) << 32) ^ (r as u64)
}

#[function_component(App)]
pub fn app() -> Html {
    let game = use_reducer(|| GameState::new(GameConfig::load(), entropy_seed()));

    // Countdown lives only while a round is playing with time on the clock;
    // a new round or a restart gets a fresh interval.
    {
        let dispatcher = game.dispatcher();
        let running = should_run(game.phase, game.time_left);
        let period_ms = game.config.tick_ms;
        use_effect_with((running, game.round_serial), move |(running, _)| {
            let countdown = if *running {
                Countdown::start(
                    period_ms,
                    Callback::from(move |_: ()| dispatcher.dispatch(GameAction::Tick)),
                )
            } else {
                None
            };
            move || drop(countdown)
        });
    }

    let start = {
        let dispatcher = game.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(GameAction::Start))
    };
    let on_circle_click = {
        let dispatcher = game.dispatcher();
        Callback::from(move |id: usize| dispatcher.dispatch(GameAction::Click { id }))
    };
    let on_time_up = {
        let dispatcher = game.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(GameAction::TimeUp))
    };

    let playing = game.phase == Phase::Playing;
    let finished = matches!(game.phase, Phase::Won | Phase::Lost);

    html! {
        <div style="min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; padding:32px; background:#0e1116; color:#e6edf3; font-family:sans-serif;">
            <div style="width:100%; max-width:896px;">
                <StatusBanner
                    status={game.status_line()}
                    show_timer={playing}
                    time_left={game.time_left}
                    round_serial={game.round_serial}
                    {on_time_up}
                />
                <IntroOverlay
                    show={game.phase == Phase::Waiting}
                    schedule_text={game.config.schedule_text()}
                    rounds_total={game.rounds_total()}
                    start={start.clone()}
                />
                { if playing {
                    html!{ <GameGrid
                        circles={game.circles.clone()}
                        activation_window_ms={game.config.activation_window_ms}
                        {on_circle_click}
                    /> }
                } else { html!{} } }
                <GameOverOverlay
                    show={finished}
                    won={game.phase == Phase::Won}
                    detail={game.outcome_detail()}
                    loss={game.loss}
                    restart={start}
                />
            </div>
        </div>
    }
}
