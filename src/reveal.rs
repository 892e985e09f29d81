use crate::constants::*;
use crate::dom;
use crate::runtime::Runtime;
use helioflux_core::visibility::{Category, LazyKind};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

fn category_of(el: &web::Element) -> Category {
    if dom::has_class(el, CHART_BAR_CLASS) {
        Category::ChartBar
    } else if dom::has_class(el, STAT_ITEM_CLASS) {
        Category::Stat
    } else {
        Category::Reveal
    }
}

fn lazy_kind(el: &web::Element) -> LazyKind {
    match el.get_attribute(DATA_LAZY).as_deref() {
        Some("content") => LazyKind::Content,
        _ => LazyKind::Other,
    }
}

/// Register every reveal, chart, statistic and lazy target and put each in its
/// pre-animation state. Returns the registered nodes.
pub fn scan(rt: &Runtime, document: &web::Document) -> Vec<web::Element> {
    let mut observed = Vec::new();

    for el in dom::query_all(document, REVEAL_SELECTOR) {
        dom::add_class(&el, CLASS_ANIMATE_ON_SCROLL);
        let category = category_of(&el);
        let id = rt.register(&el, category);
        match category {
            Category::ChartBar => {
                let percentage = el.get_attribute(DATA_PERCENTAGE).unwrap_or_default();
                rt.dispatch(|page| page.add_bar(id, &percentage));
                if let Some(fill) = dom::child(&el, BAR_FILL_SELECTOR) {
                    dom::set_style(&fill, "width", "0%");
                }
            }
            Category::Stat => {
                if let Some(number) = dom::child(&el, STAT_NUMBER_SELECTOR) {
                    let authored = dom::text(&number);
                    match rt.dispatch(|page| page.add_counter(id, &authored)) {
                        Ok(initial) => dom::set_text(&number, &initial),
                        Err(e) => log::warn!("[reveal] skipping counter: {e}"),
                    }
                }
            }
            _ => {}
        }
        observed.push(el);
    }

    // An element matching several target lists keeps its first registration.
    let lazy = dom::query_all(document, LAZY_SELECTOR)
        .into_iter()
        .map(|el| {
            let kind = lazy_kind(&el);
            (el, kind)
        })
        .chain(
            dom::query_all(document, LAZY_IMAGE_SELECTOR)
                .into_iter()
                .map(|el| (el, LazyKind::Image)),
        );
    for (el, kind) in lazy {
        if rt.element_id(&el).is_some() {
            continue;
        }
        rt.register(&el, Category::Lazy(kind));
        observed.push(el);
    }

    log::info!("[reveal] registered {} elements", observed.len());
    observed
}

fn observer_supported(window: &web::Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Watch the registered nodes. Without IntersectionObserver support everything
/// is revealed at once.
pub fn observe(rt: &Rc<Runtime>, window: &web::Window, elements: &[web::Element]) {
    if !observer_supported(window) {
        log::warn!("[reveal] IntersectionObserver unavailable");
        rt.dispatch(|page| page.reveal_all());
        return;
    }

    let options = rt.with_page(|page| page.config().observer);
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin());

    let rt_cb = rt.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            let reports: Vec<(web::Element, bool)> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<web::IntersectionObserverEntry>().ok())
                .map(|entry| (entry.target(), entry.is_intersecting()))
                .collect();
            let entered = rt_cb.dispatch(|page| {
                let mut entered = Vec::new();
                for (el, intersecting) in &reports {
                    let Some(id) = rt_cb.element_id(el) else {
                        continue;
                    };
                    match page.report_intersection(id, *intersecting) {
                        Ok(true) => entered.push(el.clone()),
                        Ok(false) => {}
                        Err(e) => log::warn!("[reveal] {e}"),
                    }
                }
                entered
            });
            // Each element fires once, so stop watching it.
            for el in &entered {
                observer.unobserve(el);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for el in elements {
                observer.observe(el);
            }
        }
        Err(e) => {
            log::warn!("[reveal] observer construction failed: {:?}", e);
            rt.dispatch(|page| page.reveal_all());
        }
    }
    callback.forget();
}
