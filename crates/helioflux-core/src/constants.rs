use std::time::Duration;

// Shared timing and tuning constants for the interaction core.

// Visibility
pub const REVEAL_THRESHOLD: f64 = 0.1; // fraction of the element that must be visible
pub const REVEAL_BOTTOM_MARGIN_PX: f64 = 50.0; // inset from the viewport bottom

// Reveal animations
pub const BAR_FILL_DELAY: Duration = Duration::from_millis(200);
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);
pub const COUNTER_STEPS: u32 = 60;

// Scroll tracking
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(10);
pub const SECTION_LOOK_AHEAD_PX: f64 = 200.0;
pub const NAVBAR_SCROLLED_PX: f64 = 50.0;
pub const BODY_SCROLLED_DOWN_PX: f64 = 200.0;
pub const NAVBAR_HEIGHT_PX: f64 = 80.0; // fixed navbar allowance when jumping to a section
pub const PARALLAX_BACKGROUND_RATE: f64 = -0.5;
pub const PARALLAX_PARTICLES_RATE: f64 = -0.3;

// Model viewer
pub const DRAG_DEGREES_PER_PX: f32 = 0.5;
pub const PITCH_LIMIT_DEG: f32 = 60.0;
pub const RESET_PITCH_DEG: f32 = -15.0;
pub const RESET_YAW_DEG: f32 = 15.0;

// Power race
pub const RACE_TICK: Duration = Duration::from_millis(50);
pub const RACE_TOTAL_TICKS: u32 = 100; // 5000 ms at one tick per 50 ms
pub const RACE_RATE_MULTIPLIER: f64 = 1.67;
pub const RACE_ENERGY_MAX_A_KWH: f64 = 22.7;
pub const RACE_ENERGY_MAX_B_KWH: f64 = 15.0;
pub const RACE_SETTLE_DELAY: Duration = Duration::from_millis(1000);

// Notifications
pub const NOTIFY_ENTER_DELAY: Duration = Duration::from_millis(100);
pub const NOTIFY_DISPLAY: Duration = Duration::from_millis(5000);
pub const NOTIFY_EXIT: Duration = Duration::from_millis(300);

// Page intro
pub const INTRO_LINE_STAGGER: Duration = Duration::from_millis(300);
pub const INTRO_HIGHLIGHT_DELAY: Duration = Duration::from_millis(1200);
pub const PAGE_LOADED_DELAY: Duration = Duration::from_millis(500);

// Forms
pub const FORM_SUBMIT_DELAY: Duration = Duration::from_millis(2000);
pub const QUOTE_FADE_DELAY: Duration = Duration::from_millis(100);
pub const QUOTE_FADE_STEP: Duration = Duration::from_millis(50);

// Calculator pricing (AED)
pub const UNIT_PRICE_AED: f64 = 325.0;
pub const SETUP_FEE_AED: f64 = 50.0;
pub const MONTHLY_PLAN_AED: f64 = 150.0;
pub const BULK_DISCOUNT_MIN_UNITS: u32 = 10;
pub const BULK_DISCOUNT_RATE: f64 = 0.1;
