use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::Callback;

use crate::model::Phase;

/// The interval runs only while a round is playing with time on the clock.
pub fn should_run(phase: Phase, time_left: u32) -> bool {
    phase == Phase::Playing && time_left > 0
}

/// Readout position as (round_serial, time_left).
pub type Reading = (u64, u32);

/// Expiry fires when the readout moves onto zero, once per round. A repeated
/// render of the same zero reading does not fire again.
pub fn expiry_due(prev: Option<Reading>, cur: Reading) -> bool {
    cur.1 == 0 && prev != Some(cur)
}

/// A running browser interval. Dropping the handle stops it.
pub struct Countdown {
    id: i32,
    _tick: Closure<dyn FnMut()>,
}

impl Countdown {
    /// Emits `on_tick` every `period_ms` until dropped. `None` if the
    /// interval could not be registered.
    pub fn start(period_ms: u32, on_tick: Callback<()>) -> Option<Self> {
        let window = web_sys::window()?;
        let tick = Closure::wrap(Box::new(move || on_tick.emit(())) as Box<dyn FnMut()>);
        let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                timeout,
            )
            .ok()?;
        Some(Self { id, _tick: tick })
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}
