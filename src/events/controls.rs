use crate::constants::*;
use crate::dom;
use crate::events::scroll::scroll_to_section;
use crate::runtime::Runtime;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn close_menu(document: &web::Document) {
    for id in [NAV_MENU_ID, HAMBURGER_ID] {
        if let Some(el) = document.get_element_by_id(id) {
            dom::remove_class(&el, CLASS_ACTIVE);
        }
    }
}

/// Hamburger toggle, outside-click close and in-page anchor scrolling.
pub fn wire_navigation(document: &web::Document) {
    dom::add_click_listener(document, HAMBURGER_ID, {
        let document = document.clone();
        move || {
            for id in [NAV_MENU_ID, HAMBURGER_ID] {
                if let Some(el) = document.get_element_by_id(id) {
                    _ = el.class_list().toggle(CLASS_ACTIVE);
                }
            }
        }
    });

    {
        let doc = document.clone();
        dom::listen(document, "click", move |ev: web::MouseEvent| {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok()) else {
                return;
            };
            let inside = [NAV_MENU_ID, HAMBURGER_ID].iter().any(|id| {
                doc.get_element_by_id(id)
                    .map(|el| el.contains(Some(&target)))
                    .unwrap_or(false)
            });
            if !inside {
                close_menu(&doc);
            }
        });
    }

    // Nav links are anchors too, so this also covers them and closes the menu.
    for link in dom::query_all(document, ANCHOR_LINK_SELECTOR) {
        let doc = document.clone();
        let anchor = link.clone();
        dom::listen(&link, "click", move |ev: web::MouseEvent| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            let Some(id) = anchor_target(&href) else {
                return;
            };
            ev.prevent_default();
            scroll_to_section(&doc, id);
            close_menu(&doc);
        });
    }
}

pub fn wire_viewer_controls(rt: &Rc<Runtime>, document: &web::Document) {
    for button in dom::query_all(document, COMPONENT_BUTTON_SELECTOR) {
        let rt = rt.clone();
        let source = button.clone();
        dom::listen(&button, "click", move |_: web::MouseEvent| {
            let name = source.get_attribute(DATA_COMPONENT).unwrap_or_default();
            rt.dispatch(|page| page.select_component(&name));
        });
    }

    let rt_rotate = rt.clone();
    dom::add_click_listener(document, ROTATE_BUTTON_ID, move || {
        rt_rotate.dispatch(|page| page.toggle_auto_rotate());
    });
    let rt_explode = rt.clone();
    dom::add_click_listener(document, EXPLODE_BUTTON_ID, move || {
        rt_explode.dispatch(|page| page.toggle_exploded());
    });
    let rt_reset = rt.clone();
    dom::add_click_listener(document, RESET_BUTTON_ID, move || {
        rt_reset.dispatch(|page| page.reset_viewer());
    });
}

pub fn wire_race(rt: &Rc<Runtime>, document: &web::Document) {
    let rt = rt.clone();
    dom::add_click_listener(document, RACE_BUTTON_ID, move || {
        if !rt.dispatch(|page| page.start_race()) {
            log::debug!("[race] start ignored while a race is in progress");
        }
    });
}
