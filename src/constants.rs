// DOM hooks shared by the wasm front-end: element ids, selectors, class names
// and the fixed labels written into the page.

// Navigation
pub const NAVBAR_ID: &str = "navbar";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const HAMBURGER_ID: &str = "hamburger";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const ANCHOR_LINK_SELECTOR: &str = "a[href^=\"#\"]";
pub const HERO_ID: &str = "hero";
pub const HERO_BACKGROUND_SELECTOR: &str = ".hero-background";
pub const SOLAR_PARTICLES_SELECTOR: &str = ".solar-particles";

// Reveal targets
pub const REVEAL_SELECTOR: &str = ".feature-card, .problem-stat, .material-card, .team-member, \
     .study-stat, .calc-item, .comparison-card, .chart-bar, .stat-item";
pub const CHART_BAR_CLASS: &str = "chart-bar";
pub const STAT_ITEM_CLASS: &str = "stat-item";
pub const BAR_FILL_SELECTOR: &str = ".bar-fill";
pub const STAT_NUMBER_SELECTOR: &str = ".stat-number";
pub const LAZY_SELECTOR: &str = "[data-lazy]";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const DATA_PERCENTAGE: &str = "data-percentage";
pub const DATA_LAZY: &str = "data-lazy";
pub const DATA_SRC: &str = "data-src";
pub const DATA_REVEAL_ID: &str = "data-reveal-id";

// Component viewer
pub const MODEL_ID: &str = "model3d";
pub const COMPONENT_SELECTOR: &str = ".component";
pub const COMPONENT_BUTTON_SELECTOR: &str = ".component-btn";
pub const COMPONENT_SELECTOR_ID: &str = "componentSelector";
pub const DATA_COMPONENT: &str = "data-component";
pub const COMPONENT_NAME_ID: &str = "componentName";
pub const COMPONENT_DESCRIPTION_ID: &str = "componentDescription";
pub const ROTATE_BUTTON_ID: &str = "rotateBtn";
pub const EXPLODE_BUTTON_ID: &str = "explodeBtn";
pub const RESET_BUTTON_ID: &str = "resetBtn";

// Efficiency race
pub const RACE_BUTTON_ID: &str = "raceStartBtn";
pub const HELIOFLUX_PROGRESS_ID: &str = "heliofluxProgress";
pub const TRADITIONAL_PROGRESS_ID: &str = "traditionalProgress";
pub const PROGRESS_FILL_SELECTOR: &str = ".progress-fill";
pub const PROGRESS_LABEL_SELECTOR: &str = ".progress-label";
pub const HELIOFLUX_OUTPUT_ID: &str = "heliofluxOutput";
pub const TRADITIONAL_OUTPUT_ID: &str = "traditionalOutput";
pub const RACE_RESULTS_ID: &str = "raceResults";

// Calculator
pub const CALCULATOR_FORM_ID: &str = "calculatorForm";
pub const CALCULATOR_RESULT_ID: &str = "calculatorResult";
pub const TOTAL_AMOUNT_ID: &str = "totalAmount";
pub const COST_BREAKDOWN_ID: &str = "costBreakdown";
pub const CONTACT_NOTE_ID: &str = "contactNote";
pub const UNITS_INPUT_ID: &str = "numUnits";
pub const ITEMS_INPUT_ID: &str = "numItems";
pub const PLAN_SELECT_ID: &str = "maintenancePlan";
pub const HAS_ITEMS_CHECKED_SELECTOR: &str = "input[name=\"hasItems\"]:checked";
pub const CALCULATOR_DEFAULTS: [(&str, &str); 3] = [
    (UNITS_INPUT_ID, "1"),
    (ITEMS_INPUT_ID, "1"),
    (PLAN_SELECT_ID, "standard"),
];
pub const CALCULATOR_INPUT_SELECTOR: &str = "#calculatorForm input, #calculatorForm select";
pub const HAS_ITEMS_MISSING_MESSAGE: &str =
    "Please select whether you have the required items at home.";

// Forms
pub const FORM_SELECTOR: &str = "form";
pub const REQUIRED_FIELD_SELECTOR: &str = "[required]";

// Hero intro
pub const TITLE_LINE_SELECTOR: &str = ".hero-title-line";
pub const TITLE_HIGHLIGHT_SELECTOR: &str = ".hero-title-highlight";
pub const TITLE_LINE_TRANSITION: &str = "all 0.8s ease";
pub const TITLE_HIGHLIGHT_TRANSITION: &str = "all 1s ease";
pub const TITLE_HIGHLIGHT_SCALE: &str = "scale(1.05)";

// Card hover lift
pub const HOVER_CARD_SELECTOR: &str =
    ".feature-card, .material-card, .team-member, .problem-stat, .comparison-card";
pub const HOVER_LIFT_TRANSFORM: &str = "translateY(-10px) scale(1.02)";
pub const HOVER_REST_TRANSFORM: &str = "translateY(0) scale(1)";
pub const HOVER_LIFT_SHADOW: &str = "0 20px 40px rgba(0, 0, 0, 0.2)";

// Video placeholder
pub const PLAY_BUTTON_SELECTOR: &str = ".play-button";
pub const VIDEO_PLACEHOLDER_SELECTOR: &str = ".video-placeholder";
pub const VIDEO_PLACEHOLDER_MESSAGE: &str =
    "Video integration placeholder - YouTube/Vimeo embed will be added here";

// Keyboard access
pub const ACTIVATABLE_SELECTOR: &str = ".feature-card, .material-card, .team-member, .cta-button";
pub const SKIP_LINK_TEXT: &str = "Skip to main content";
pub const SKIP_LINK_STYLE: &str = "position:absolute;top:-40px;left:6px;\
     background:var(--primary-blue);color:white;padding:8px;z-index:10001;\
     text-decoration:none;border-radius:4px;transition:top 0.3s ease;";
pub const SKIP_LINK_FOCUS_TOP: &str = "6px";
pub const SKIP_LINK_BLUR_TOP: &str = "-40px";

// Notifications
pub const NOTIFICATION_CLASS: &str = "notification";
pub const NOTIFICATION_STYLE: &str = "position:fixed;top:100px;right:20px;\
     padding:1rem 1.5rem;border-radius:8px;color:white;font-weight:500;z-index:10000;\
     transform:translateX(100%);transition:transform 0.3s ease;";

// Classes
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_ANIMATE_ON_SCROLL: &str = "animate-on-scroll";
pub const CLASS_ANIMATED: &str = "animated";
pub const CLASS_ERROR: &str = "error";
pub const CLASS_EXPLODED: &str = "exploded";
pub const CLASS_HIGHLIGHTED: &str = "highlighted";
pub const CLASS_LOADED: &str = "loaded";
pub const CLASS_LOADING: &str = "loading";
pub const CLASS_ROTATING: &str = "rotating";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_SCROLLED_DOWN: &str = "scrolled-down";
pub const CLASS_SHOW: &str = "show";

// Button labels
pub const LABEL_STOP_ROTATION: &str = "⏸ Stop Rotation";
pub const LABEL_AUTO_ROTATE: &str = "🔄 Auto Rotate";
pub const LABEL_ASSEMBLE: &str = "🔧 Assemble View";
pub const LABEL_EXPLODE: &str = "💥 Exploded View";
pub const LABEL_RACING: &str = "🏃 Racing...";
pub const LABEL_START_RACE: &str = "🚀 Start Race";

// Layout
pub const MOBILE_MAX_WIDTH_PX: f64 = 768.0;
pub const MOBILE_SELECTOR_STYLE: [(&str, &str); 4] = [
    ("position", "static"),
    ("width", "100%"),
    ("margin", "1rem"),
    ("max-width", "none"),
];
pub const FADE_OFFSET_PX: f64 = 20.0; // start offset of fade-in elements

pub fn rotate_label(auto_rotate: bool) -> &'static str {
    if auto_rotate {
        LABEL_STOP_ROTATION
    } else {
        LABEL_AUTO_ROTATE
    }
}

pub fn explode_label(exploded: bool) -> &'static str {
    if exploded {
        LABEL_ASSEMBLE
    } else {
        LABEL_EXPLODE
    }
}

/// `href` of the nav link pointing at section `id`.
pub fn section_href(id: &str) -> String {
    format!("#{id}")
}

/// Target of an in-page link (`"#about"` -> `"about"`); `None` for a bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Enter and Space activate focusable cards.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

pub fn is_mobile_width(width: f64) -> bool {
    width <= MOBILE_MAX_WIDTH_PX
}

pub fn translate_y_px(value: f64) -> String {
    format!("translateY({value}px)")
}
