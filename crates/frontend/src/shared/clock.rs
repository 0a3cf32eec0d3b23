use contracts::shared::form_fields::{Clock, SystemClock};
use leptos::prelude::*;
use std::sync::Arc;

/// Clock shared with every date field below the providing component.
#[derive(Clone)]
pub struct ClockContext(pub Arc<dyn Clock>);

pub fn provide_clock(clock: impl Clock + 'static) {
    provide_context(ClockContext(Arc::new(clock)));
}

/// The provided clock, or the system clock when none was provided.
pub fn use_clock() -> Arc<dyn Clock> {
    use_context::<ClockContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| Arc::new(SystemClock))
}
