#![cfg(target_arch = "wasm32")]
//! Browser front-end for the HelioFlux site.
//!
//! Binds the platform-free session in `helioflux-core` to the document: DOM
//! events become session inputs, session effects become DOM writes.

use helioflux_core::{NotificationKind, PageConfig};
use runtime::Runtime;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod apply;
mod calculator;
mod constants;
mod dom;
mod events;
mod forms;
mod notify;
mod reveal;
mod runtime;

thread_local! {
    static RUNTIME: RefCell<Option<Rc<Runtime>>> = const { RefCell::new(None) };
}

fn with_runtime(f: impl FnOnce(&Rc<Runtime>)) {
    let rt = RUNTIME.with(|slot| slot.borrow().clone());
    match rt {
        Some(rt) => f(&rt),
        None => log::warn!("[api] called before the page finished starting"),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("helioflux-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

// Resolves once the document has been parsed.
async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = document.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("DOMContentLoaded: {:?}", e))?;
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom_ready(&document).await?;

    let rt = Runtime::new(&document, PageConfig::default());
    RUNTIME.with(|slot| *slot.borrow_mut() = Some(rt.clone()));

    events::wire_error_log(&window);
    start_intro(&rt);

    let observed = reveal::scan(&rt, &document);
    reveal::observe(&rt, &window, &observed);

    events::scroll::wire_scroll(&rt, &window, &document);
    events::controls::wire_navigation(&document);
    events::controls::wire_viewer_controls(&rt, &document);
    events::pointer::wire_viewer_drag(&rt, &document);
    events::controls::wire_race(&rt, &document);
    calculator::wire(&rt, &document);
    forms::wire(&rt, &document);
    events::keyboard::wire_activation(&document);
    events::keyboard::insert_skip_link(&document);
    events::hover::wire_hover(&document);
    events::hover::wire_video_placeholder(&window, &document);

    install_public_api(&window)?;
    log::info!("helioflux-web ready");
    Ok(())
}

// Hide the hero title lines and queue their staggered entrance.
fn start_intro(rt: &Rc<Runtime>) {
    if let Some(body) = rt.views.body() {
        dom::add_class(body, constants::CLASS_LOADING);
    }
    let hidden = constants::translate_y_px(constants::FADE_OFFSET_PX);
    for line in rt.views.title_lines() {
        dom::set_style(line, "opacity", "0");
        dom::set_style(line, "transform", &hidden);
    }
    let lines = rt.views.title_lines().len();
    let highlight = rt.views.has_title_highlight();
    rt.dispatch(|page| page.start_intro(lines, highlight));
}

/// Smooth-scroll to the section with this id.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(section_id: &str) {
    if let Some(document) = dom::window_document() {
        events::scroll::scroll_to_section(&document, section_id);
    }
}

/// Show a toast. `kind` is "info", "success" or "error"; anything else is info.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>) {
    let kind = kind
        .as_deref()
        .map(NotificationKind::parse)
        .unwrap_or_default();
    with_runtime(|rt| {
        rt.dispatch(|page| page.notify(message, kind));
    });
}

/// Flag blank required fields of `form`; true when it may be submitted.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form: &web::Element) -> bool {
    forms::validate(form)
}

/// Start the count-up of a registered `.stat-item`.
#[wasm_bindgen(js_name = animateCounter)]
pub fn animate_counter(stat_item: &web::Element) {
    with_runtime(|rt| {
        let Some(id) = rt.element_id(stat_item) else {
            log::warn!("[api] animateCounter on an unregistered element");
            return;
        };
        if let Err(e) = rt.dispatch(|page| page.animate_counter(id)) {
            log::warn!("[api] animateCounter: {e}");
        }
    });
}

#[wasm_bindgen(js_name = resetCalculator)]
pub fn reset_calculator() {
    if let Some(document) = dom::window_document() {
        calculator::reset(&document);
    }
}

fn set(target: &JsValue, name: &str, value: JsValue) -> anyhow::Result<()> {
    js_sys::Reflect::set(target, &JsValue::from_str(name), &value)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("install {name}: {:?}", e))
}

// Expose the entry points as `window.HelioFlux` for inline page scripts, plus
// the bare `resetCalculator` the calculator markup calls.
fn install_public_api(window: &web::Window) -> anyhow::Result<()> {
    let api = js_sys::Object::new();

    set(
        &api,
        "scrollToSection",
        Closure::wrap(Box::new(|id: String| scroll_to_section(&id)) as Box<dyn FnMut(String)>)
            .into_js_value(),
    )?;
    set(
        &api,
        "showNotification",
        Closure::wrap(Box::new(|message: String, kind: Option<String>| {
            show_notification(&message, kind)
        }) as Box<dyn FnMut(String, Option<String>)>)
        .into_js_value(),
    )?;
    set(
        &api,
        "validateForm",
        Closure::wrap(Box::new(|form: web::Element| validate_form(&form))
            as Box<dyn FnMut(web::Element) -> bool>)
        .into_js_value(),
    )?;
    set(
        &api,
        "animateCounter",
        Closure::wrap(Box::new(|el: web::Element| animate_counter(&el))
            as Box<dyn FnMut(web::Element)>)
        .into_js_value(),
    )?;
    let reset = Closure::wrap(Box::new(reset_calculator) as Box<dyn FnMut()>).into_js_value();
    set(&api, "resetCalculator", reset.clone())?;

    set(window, "HelioFlux", api.into())?;
    set(window, "resetCalculator", reset)?;
    Ok(())
}
