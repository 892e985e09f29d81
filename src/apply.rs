use crate::constants::*;
use crate::dom;
use crate::notify;
use crate::runtime::Runtime;
use helioflux_core::orientation::{
    ComponentInfo, PLACEHOLDER_COMPONENT_DESCRIPTION, PLACEHOLDER_COMPONENT_NAME,
};
use helioflux_core::race::{energy_label, percent_label, RaceFrame};
use helioflux_core::Effect;
use wasm_bindgen::JsCast;
use web_sys as web;

// Elements looked up once at startup. Anything missing stays `None` and its
// effects become no-ops.
pub struct Views {
    body: Option<web::HtmlElement>,
    navbar: Option<web::Element>,
    nav_links: Vec<web::Element>,
    hero_background: Option<web::Element>,
    solar_particles: Option<web::Element>,
    model: Option<web::Element>,
    components: Vec<web::Element>,
    component_buttons: Vec<web::Element>,
    component_name: Option<web::Element>,
    component_description: Option<web::Element>,
    rotate_button: Option<web::Element>,
    explode_button: Option<web::Element>,
    race_button: Option<web::HtmlButtonElement>,
    helioflux_progress: Option<web::Element>,
    traditional_progress: Option<web::Element>,
    helioflux_output: Option<web::Element>,
    traditional_output: Option<web::Element>,
    race_results: Option<web::Element>,
    calculator_result: Option<web::Element>,
    title_lines: Vec<web::Element>,
    title_highlight: Option<web::Element>,
}

impl Views {
    pub fn bind(document: &web::Document) -> Self {
        let by_id = |id: &str| document.get_element_by_id(id);
        let one = |selector: &str| document.query_selector(selector).ok().flatten();
        Self {
            body: document.body(),
            navbar: by_id(NAVBAR_ID),
            nav_links: dom::query_all(document, NAV_LINK_SELECTOR),
            hero_background: one(HERO_BACKGROUND_SELECTOR),
            solar_particles: one(SOLAR_PARTICLES_SELECTOR),
            model: by_id(MODEL_ID),
            components: dom::query_all(document, COMPONENT_SELECTOR),
            component_buttons: dom::query_all(document, COMPONENT_BUTTON_SELECTOR),
            component_name: by_id(COMPONENT_NAME_ID),
            component_description: by_id(COMPONENT_DESCRIPTION_ID),
            rotate_button: by_id(ROTATE_BUTTON_ID),
            explode_button: by_id(EXPLODE_BUTTON_ID),
            race_button: by_id(RACE_BUTTON_ID).and_then(|el| el.dyn_into().ok()),
            helioflux_progress: by_id(HELIOFLUX_PROGRESS_ID),
            traditional_progress: by_id(TRADITIONAL_PROGRESS_ID),
            helioflux_output: by_id(HELIOFLUX_OUTPUT_ID),
            traditional_output: by_id(TRADITIONAL_OUTPUT_ID),
            race_results: by_id(RACE_RESULTS_ID),
            calculator_result: by_id(CALCULATOR_RESULT_ID),
            title_lines: dom::query_all(document, TITLE_LINE_SELECTOR),
            title_highlight: one(TITLE_HIGHLIGHT_SELECTOR),
        }
    }

    pub fn body(&self) -> Option<&web::HtmlElement> {
        self.body.as_ref()
    }

    pub fn model(&self) -> Option<&web::Element> {
        self.model.as_ref()
    }

    pub fn title_lines(&self) -> &[web::Element] {
        &self.title_lines
    }

    pub fn has_title_highlight(&self) -> bool {
        self.title_highlight.is_some()
    }

    fn set_body_class(&self, class: &str, on: bool) {
        if let Some(body) = &self.body {
            dom::set_class(body, class, on);
        }
    }

    fn highlight(&self, info: Option<&ComponentInfo>) {
        let selected = info.map(|i| i.name.as_str());
        let matches = |el: &web::Element| {
            selected.is_some() && el.get_attribute(DATA_COMPONENT).as_deref() == selected
        };
        for el in &self.components {
            dom::set_class(el, CLASS_HIGHLIGHTED, matches(el));
        }
        for el in &self.component_buttons {
            dom::set_class(el, CLASS_ACTIVE, matches(el));
        }
        let (name, description) = match info {
            Some(info) => (info.name.as_str(), info.description),
            None => (PLACEHOLDER_COMPONENT_NAME, PLACEHOLDER_COMPONENT_DESCRIPTION),
        };
        if let Some(el) = &self.component_name {
            dom::set_text(el, name);
        }
        if let Some(el) = &self.component_description {
            dom::set_text(el, description);
        }
    }

    fn race_frame(&self, frame: &RaceFrame) {
        let lanes = [
            (&self.helioflux_progress, &self.helioflux_output, frame.progress_a, frame.energy_a),
            (&self.traditional_progress, &self.traditional_output, frame.progress_b, frame.energy_b),
        ];
        for (track, output, progress, energy) in lanes {
            if let Some(track) = track {
                if let Some(fill) = dom::child(track, PROGRESS_FILL_SELECTOR) {
                    dom::set_style(&fill, "width", &format!("{progress}%"));
                }
                if let Some(label) = dom::child(track, PROGRESS_LABEL_SELECTOR) {
                    dom::set_text(&label, &percent_label(progress));
                }
            }
            if let Some(output) = output {
                dom::set_text(output, &energy_label(energy));
            }
        }
    }

    fn race_button(&self, racing: bool) {
        if let Some(button) = &self.race_button {
            button.set_disabled(racing);
            button.set_text_content(Some(if racing { LABEL_RACING } else { LABEL_START_RACE }));
        }
    }
}

impl Runtime {
    pub(crate) fn apply(&self, effect: &Effect) {
        let views = &self.views;
        match effect {
            Effect::Revealed(id) => {
                if let Some(el) = self.element(*id) {
                    dom::add_class(&el, CLASS_ANIMATED);
                }
            }
            Effect::BarWidth { element, percent } => {
                if let Some(fill) = self
                    .element(*element)
                    .and_then(|el| dom::child(&el, BAR_FILL_SELECTOR))
                {
                    dom::set_style(&fill, "width", &format!("{percent}%"));
                }
            }
            Effect::CounterText { element, text } => {
                if let Some(number) = self
                    .element(*element)
                    .and_then(|el| dom::child(&el, STAT_NUMBER_SELECTOR))
                {
                    dom::set_text(&number, text);
                }
            }
            Effect::LoadContent(id) => {
                if let Some(el) = self.element(*id) {
                    dom::add_class(&el, CLASS_LOADED);
                }
            }
            Effect::LoadImage(id) => {
                if let Some(el) = self.element(*id) {
                    if let Some(src) = el.get_attribute(DATA_SRC) {
                        _ = el.set_attribute("src", &src);
                        _ = el.remove_attribute(DATA_SRC);
                    }
                }
            }

            Effect::ActiveSection(active) => {
                let href = active.as_deref().map(section_href);
                for link in &views.nav_links {
                    let on = href.is_some() && link.get_attribute("href") == href;
                    dom::set_class(link, CLASS_ACTIVE, on);
                }
            }
            Effect::NavbarScrolled(on) => {
                if let Some(navbar) = &views.navbar {
                    dom::set_class(navbar, CLASS_SCROLLED, *on);
                }
            }
            Effect::BodyScrolledDown(on) => views.set_body_class(CLASS_SCROLLED_DOWN, *on),
            Effect::Parallax(p) => {
                if let Some(bg) = &views.hero_background {
                    dom::set_style(bg, "transform", &translate_y_px(p.background_y));
                }
                if let Some(particles) = &views.solar_particles {
                    dom::set_style(particles, "transform", &translate_y_px(p.particles_y));
                }
            }

            Effect::ModelTransform(orientation) => {
                if let Some(model) = &views.model {
                    dom::set_style(model, "transform", &orientation.css_transform());
                }
            }
            Effect::Grabbing(on) => {
                if let Some(model) = &views.model {
                    dom::set_style(model, "cursor", if *on { "grabbing" } else { "grab" });
                }
            }
            Effect::AutoRotate(on) => {
                if let Some(model) = &views.model {
                    dom::set_class(model, CLASS_ROTATING, *on);
                }
                if let Some(button) = &views.rotate_button {
                    dom::set_class(button, CLASS_ACTIVE, *on);
                    dom::set_text(button, rotate_label(*on));
                }
            }
            Effect::Exploded(on) => {
                if let Some(model) = &views.model {
                    dom::set_class(model, CLASS_EXPLODED, *on);
                }
                if let Some(button) = &views.explode_button {
                    dom::set_class(button, CLASS_ACTIVE, *on);
                    dom::set_text(button, explode_label(*on));
                }
            }
            Effect::Highlight(info) => views.highlight(info.as_ref()),

            Effect::RaceStarted => {
                views.race_button(true);
                if let Some(results) = &views.race_results {
                    dom::remove_class(results, CLASS_SHOW);
                }
            }
            Effect::RaceFrame(frame) => views.race_frame(frame),
            Effect::RaceResults => {
                if let Some(results) = &views.race_results {
                    dom::add_class(results, CLASS_SHOW);
                }
                views.race_button(false);
            }

            Effect::NotificationCreated { id, message, kind } => {
                notify::create(&self.document, *id, message, *kind)
            }
            Effect::NotificationEnter(id) => notify::slide(&self.document, *id, true),
            Effect::NotificationExit(id) => notify::slide(&self.document, *id, false),
            Effect::NotificationRemoved(id) => notify::remove(&self.document, *id),

            Effect::IntroLine(i) => {
                if let Some(line) = views.title_lines.get(*i) {
                    dom::set_style(line, "transition", TITLE_LINE_TRANSITION);
                    dom::set_style(line, "opacity", "1");
                    dom::set_style(line, "transform", &translate_y_px(0.0));
                }
            }
            Effect::IntroHighlight => {
                if let Some(highlight) = &views.title_highlight {
                    dom::set_style(highlight, "transition", TITLE_HIGHLIGHT_TRANSITION);
                    dom::set_style(highlight, "opacity", "1");
                    dom::set_style(highlight, "transform", TITLE_HIGHLIGHT_SCALE);
                }
            }
            Effect::PageLoaded => {
                views.set_body_class(CLASS_LOADING, false);
                views.set_body_class(CLASS_LOADED, true);
            }

            Effect::FormSubmitting(id) => {
                if let Some(form) = self.form(*id) {
                    dom::add_class(&form, CLASS_LOADING);
                }
            }
            Effect::FormSent(id) => {
                if let Some(form) = self.form(*id) {
                    dom::remove_class(&form, CLASS_LOADING);
                    form.reset();
                }
            }

            Effect::QuoteFadeStart => {
                if let Some(result) = &views.calculator_result {
                    dom::set_style(result, "opacity", "0");
                    dom::set_style(result, "transform", &translate_y_px(FADE_OFFSET_PX));
                    dom::set_style(result, "transition", "all 0.5s ease");
                }
            }
            Effect::QuoteFadeEnd => {
                if let Some(result) = &views.calculator_result {
                    dom::set_style(result, "opacity", "1");
                    dom::set_style(result, "transform", &translate_y_px(0.0));
                }
            }
        }
    }
}
