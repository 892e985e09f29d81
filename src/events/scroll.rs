use crate::constants::{
    is_mobile_width, COMPONENT_SELECTOR_ID, MOBILE_SELECTOR_STYLE, SECTION_SELECTOR,
};
use crate::dom;
use crate::runtime::Runtime;
use helioflux_core::scroll::{scroll_target, Section};
use std::rc::Rc;
use web_sys as web;

/// Document offsets of every `section[id]`, in document order.
pub fn measure_sections(document: &web::Document) -> Vec<Section> {
    dom::query_all(document, SECTION_SELECTOR)
        .iter()
        .map(|el| Section {
            id: el.id(),
            top: dom::offset_top(el),
        })
        .collect()
}

#[inline]
fn scroll_offset(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Smooth-scroll so section `id` lands just below the fixed navbar. Unknown
/// ids are ignored.
pub fn scroll_to_section(document: &web::Document, id: &str) {
    let (Some(window), Some(section)) = (web::window(), document.get_element_by_id(id)) else {
        log::debug!("[scroll] no section {id}");
        return;
    };
    dom::smooth_scroll_to(&window, scroll_target(dom::offset_top(&section)));
}

// The component selector drops its floating layout on narrow viewports.
fn apply_responsive_layout(document: &web::Document, window: &web::Window) {
    let Some(panel) = document.get_element_by_id(COMPONENT_SELECTOR_ID) else {
        return;
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(f64::MAX);
    let mobile = is_mobile_width(width);
    for (property, value) in MOBILE_SELECTOR_STYLE {
        dom::set_style(&panel, property, if mobile { value } else { "" });
    }
}

pub fn wire_scroll(rt: &Rc<Runtime>, window: &web::Window, document: &web::Document) {
    rt.dispatch(|page| {
        page.set_sections(measure_sections(document));
        page.on_scroll(scroll_offset(window));
    });
    apply_responsive_layout(document, window);

    // Section tops move with lazy images, late fonts and the calculator panel,
    // so every scroll re-measures them.
    let rt_scroll = rt.clone();
    let win = window.clone();
    dom::listen(window, "scroll", move |_: web::Event| {
        let sections = measure_sections(&rt_scroll.document);
        let offset = scroll_offset(&win);
        rt_scroll.dispatch(|page| {
            page.set_sections(sections);
            page.on_scroll(offset);
        });
    });

    // Layout shifts move sections; re-measure before recomputing.
    let rt_resize = rt.clone();
    let win = window.clone();
    dom::listen(window, "resize", move |_: web::Event| {
        let document = &rt_resize.document;
        let sections = measure_sections(document);
        let offset = scroll_offset(&win);
        rt_resize.dispatch(|page| {
            page.set_sections(sections);
            page.on_scroll(offset);
        });
        apply_responsive_layout(document, &win);
    });
}
