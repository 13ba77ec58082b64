use yew::prelude::*;

use super::game_circle::GameCircle;
use crate::model::Circle;

#[derive(Properties, PartialEq, Clone)]
pub struct GameGridProps {
    pub circles: Vec<Circle>,
    pub activation_window_ms: u32,
    pub on_circle_click: Callback<usize>,
}

#[function_component(GameGrid)]
pub fn game_grid(props: &GameGridProps) -> Html {
    html! {
        <div class="game-grid" style="display:grid; grid-template-columns:repeat(4, 96px); gap:32px; justify-content:center; margin:0 auto;">
            { for props.circles.iter().map(|circle| html! {
                <GameCircle
                    key={circle.id}
                    circle={circle.clone()}
                    activation_window_ms={props.activation_window_ms}
                    on_activate={props.on_circle_click.clone()}
                />
            }) }
        </div>
    }
}
