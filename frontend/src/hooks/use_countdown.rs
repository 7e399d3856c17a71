use gloo_timers::callback::Interval;
use shared::countdown::{Countdown, CountdownParts};
use yew::prelude::*;

use crate::config::now_ms;

const TICK_MS: u32 = 1000;

/// Re-renders once a second with the time left until `deadline_ms`.
#[hook]
pub fn use_countdown(deadline_ms: u64) -> CountdownParts {
    let parts = use_state_eq(|| Countdown::until(now_ms(), deadline_ms));

    {
        let parts = parts.clone();
        use_effect_with(deadline_ms, move |deadline_ms| {
            let deadline_ms = *deadline_ms;
            parts.set(Countdown::until(now_ms(), deadline_ms));

            let interval = Interval::new(TICK_MS, move || {
                parts.set(Countdown::until(now_ms(), deadline_ms));
            });

            move || drop(interval)
        });
    }

    *parts
}
