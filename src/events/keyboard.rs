use crate::constants::{
    is_activation_key, ACTIVATABLE_SELECTOR, HERO_ID, SKIP_LINK_BLUR_TOP, SKIP_LINK_FOCUS_TOP,
    SKIP_LINK_STYLE, SKIP_LINK_TEXT,
};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Cards and call-to-action buttons become focusable; Enter or Space clicks
/// them.
pub fn wire_activation(document: &web::Document) {
    for el in dom::query_all(document, ACTIVATABLE_SELECTOR) {
        _ = el.set_attribute("tabindex", "0");
        let target = el.clone();
        dom::listen(&el, "keydown", move |ev: web::KeyboardEvent| {
            if !is_activation_key(&ev.key()) {
                return;
            }
            ev.prevent_default();
            if let Some(html) = target.dyn_ref::<web::HtmlElement>() {
                html.click();
            }
        });
    }
}

/// Insert a "skip to main content" link as the first element of the body. It
/// sits off-screen until focused.
pub fn insert_skip_link(document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    let Ok(link) = document.create_element("a") else {
        return;
    };
    _ = link.set_attribute("href", &crate::constants::section_href(HERO_ID));
    _ = link.set_attribute("style", SKIP_LINK_STYLE);
    link.set_class_name("skip-link");
    dom::set_text(&link, SKIP_LINK_TEXT);

    let focused = link.clone();
    dom::listen(&link, "focus", move |_: web::Event| {
        dom::set_style(&focused, "top", SKIP_LINK_FOCUS_TOP);
    });
    let blurred = link.clone();
    dom::listen(&link, "blur", move |_: web::Event| {
        dom::set_style(&blurred, "top", SKIP_LINK_BLUR_TOP);
    });

    _ = body.insert_before(&link, body.first_child().as_ref());
}
