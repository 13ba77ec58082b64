use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{MouseEvent, PointerEvent};
use yew::prelude::*;

use crate::model::{Circle, SPENT_CSS};
use crate::state::{ActivationGuard, ClickOutcome};

#[derive(Properties, PartialEq, Clone)]
pub struct GameCircleProps {
    pub circle: Circle,
    pub activation_window_ms: u32,
    pub on_activate: Callback<usize>,
}

// Clears the guard after the suppression window; immediately if no timer is available.
fn release_after(guard: Rc<RefCell<ActivationGuard>>, window_ms: u32) {
    let Some(window) = web_sys::window() else {
        guard.borrow_mut().release();
        return;
    };
    let timeout = i32::try_from(window_ms).unwrap_or(i32::MAX);
    let guard_cb = guard.clone();
    let release = Closure::once_into_js(move || guard_cb.borrow_mut().release());
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(release.unchecked_ref(), timeout)
        .is_err()
    {
        guard.borrow_mut().release();
    }
}

#[function_component(GameCircle)]
pub fn game_circle(props: &GameCircleProps) -> Html {
    let guard = use_mut_ref(ActivationGuard::default);
    let id = props.circle.id;
    let spent = props.circle.is_clicked;

    let onpointerup = {
        let guard = guard.clone();
        let cb = props.on_activate.clone();
        let window_ms = props.activation_window_ms;
        Callback::from(move |_: PointerEvent| {
            if !guard.borrow_mut().pointer_up(spent) {
                return;
            }
            cb.emit(id);
            release_after(guard.clone(), window_ms);
        })
    };
    let onclick = {
        let guard = guard.clone();
        let cb = props.on_activate.clone();
        Callback::from(move |e: MouseEvent| {
            let outcome = guard.borrow().click(spent);
            match outcome {
                ClickOutcome::Fire => cb.emit(id),
                ClickOutcome::Suppress => {
                    e.prevent_default();
                    e.stop_propagation();
                }
                ClickOutcome::Ignore => {}
            }
        })
    };

    let fill = if spent && props.circle.is_red() {
        SPENT_CSS
    } else {
        props.circle.color.css()
    };
    let style = format!(
        "width:96px; height:96px; border-radius:50%; border:none; background:{}; box-shadow:0 4px 10px rgba(0,0,0,0.5); cursor:{}; opacity:{};",
        fill,
        if spent { "not-allowed" } else { "pointer" },
        if spent { "0.7" } else { "1" },
    );
    html! {
        <button
            class="game-circle"
            aria-label={props.circle.color.label()}
            disabled={spent}
            {onclick}
            {onpointerup}
            {style}
        ></button>
    }
}
