use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::ENTRANCE_FRAME_MS;

/// False on the first paint after mount, true one frame later. Drives
/// entrance animations that play once on mount regardless of scroll.
#[hook]
pub fn use_entered() -> bool {
    let entered = use_state_eq(|| false);

    {
        let entered = entered.clone();
        use_effect_once(move || {
            let timeout = Timeout::new(ENTRANCE_FRAME_MS, move || entered.set(true));
            move || drop(timeout)
        });
    }

    *entered
}
