use crate::constants::*;
use crate::visibility::ObserverOptions;
use std::time::Duration;

/// Timings and thresholds for one page session. `Default` carries the
/// production values from `constants.rs`.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub observer: ObserverOptions,
    pub bar_fill_delay: Duration,
    pub counter_duration: Duration,
    pub counter_steps: u32,
    pub scroll_debounce: Duration,
    pub race_tick: Duration,
    pub race_total_ticks: u32,
    pub race_settle_delay: Duration,
    pub notify_enter_delay: Duration,
    pub notify_display: Duration,
    pub notify_exit: Duration,
    pub intro_line_stagger: Duration,
    pub intro_highlight_delay: Duration,
    pub page_loaded_delay: Duration,
    pub form_submit_delay: Duration,
    pub quote_fade_delay: Duration,
    pub quote_fade_step: Duration,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            observer: ObserverOptions::default(),
            bar_fill_delay: BAR_FILL_DELAY,
            counter_duration: COUNTER_DURATION,
            counter_steps: COUNTER_STEPS,
            scroll_debounce: SCROLL_DEBOUNCE,
            race_tick: RACE_TICK,
            race_total_ticks: RACE_TOTAL_TICKS,
            race_settle_delay: RACE_SETTLE_DELAY,
            notify_enter_delay: NOTIFY_ENTER_DELAY,
            notify_display: NOTIFY_DISPLAY,
            notify_exit: NOTIFY_EXIT,
            intro_line_stagger: INTRO_LINE_STAGGER,
            intro_highlight_delay: INTRO_HIGHLIGHT_DELAY,
            page_loaded_delay: PAGE_LOADED_DELAY,
            form_submit_delay: FORM_SUBMIT_DELAY,
            quote_fade_delay: QUOTE_FADE_DELAY,
            quote_fade_step: QUOTE_FADE_STEP,
        }
    }
}
