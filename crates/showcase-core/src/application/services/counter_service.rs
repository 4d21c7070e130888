//! Counter Service - drives a counter roll-up on a fixed tick.

use tokio::time::{Instant, interval_at};
use tracing::debug;

use crate::{
    application::{runtime::spawn_detached, state::SharedState},
    domain::{CounterAnimation, CounterSpec, CounterTiming},
};

#[derive(Debug, Clone)]
pub struct CounterService {
    state: SharedState,
    timing: CounterTiming,
}

impl CounterService {
    pub fn new(state: SharedState, timing: CounterTiming) -> Self {
        Self { state, timing }
    }

    /// Start rolling `spec` up from zero. The first frame renders one tick
    /// after the call.
    pub fn start(&self, spec: CounterSpec) {
        let state = self.state.clone();
        let timing = self.timing;
        debug!(element = %spec.element, target = spec.target, "Counter started");

        spawn_detached("counter.roll-up", async move {
            let mut animation = CounterAnimation::new(&spec, &timing);
            let mut ticks = interval_at(Instant::now() + timing.tick(), timing.tick());

            while !animation.is_finished() {
                ticks.tick().await;
                let Some(text) = animation.next() else { break };
                state.with(|s| s.counter_text.insert(spec.element.clone(), text));
            }
            debug!(element = %spec.element, "Counter finished");
        });
    }
}
