use crate::constants::*;
use crate::dom;
use crate::runtime::Runtime;
use helioflux_core::pricing::{format_amount, quote, Quote, QuoteRequest};
use helioflux_core::NotificationKind;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn read_request(document: &web::Document) -> Result<QuoteRequest, helioflux_core::CoreError> {
    let has_items = document
        .query_selector(HAS_ITEMS_CHECKED_SELECTOR)
        .ok()
        .flatten()
        .map(|el| dom::control_value(&el));
    QuoteRequest::from_form(
        &dom::value_by_id(document, UNITS_INPUT_ID),
        &dom::value_by_id(document, PLAN_SELECT_ID),
        &dom::value_by_id(document, ITEMS_INPUT_ID),
        has_items.as_deref(),
    )
}

fn breakdown_html(q: &Quote) -> String {
    q.breakdown()
        .iter()
        .map(|line| {
            if line.emphasis {
                format!(
                    "<div class=\"breakdown-item total\"><span><strong>{}</strong></span><span><strong>{}</strong></span></div>",
                    line.label, line.amount
                )
            } else {
                format!(
                    "<div class=\"breakdown-item\"><span>{}</span><span>{}</span></div>",
                    line.label, line.amount
                )
            }
        })
        .collect()
}

fn render(document: &web::Document, q: &Quote) {
    if let Some(el) = document.get_element_by_id(TOTAL_AMOUNT_ID) {
        dom::set_text(&el, &format_amount(q.total));
    }
    if let Some(el) = document.get_element_by_id(COST_BREAKDOWN_ID) {
        el.set_inner_html(&breakdown_html(q));
    }
    if let Some(el) = document.get_element_by_id(CONTACT_NOTE_ID) {
        dom::set_style(&el, "display", if q.has_items { "none" } else { "block" });
    }
    if let Some(el) = document.get_element_by_id(CALCULATOR_RESULT_ID) {
        dom::set_style(&el, "display", "block");
        dom::scroll_into_view_smooth(&el, web::ScrollLogicalPosition::Nearest);
    }
}

/// Price the current form values and show the quote, or report the missing
/// selection.
pub fn calculate(rt: &Runtime) {
    let document = &rt.document;
    match read_request(document) {
        Ok(request) => {
            let q = quote(&request);
            log::info!("[calculator] {} units -> {} AED", q.units, format_amount(q.total));
            render(document, &q);
            rt.dispatch(|page| page.show_quote());
        }
        Err(e) => {
            log::info!("[calculator] {e}");
            rt.dispatch(|page| {
                page.notify(HAS_ITEMS_MISSING_MESSAGE, NotificationKind::Error);
            });
        }
    }
}

fn result_shown(document: &web::Document) -> bool {
    document
        .get_element_by_id(CALCULATOR_RESULT_ID)
        .map(|el| dom::style_value(&el, "display") == "block")
        .unwrap_or(false)
}

/// Restore the form defaults and hide the quote.
pub fn reset(document: &web::Document) {
    let form = document.get_element_by_id(CALCULATOR_FORM_ID);
    // Native reset also clears the hasItems radios.
    if let Some(form) = form.as_ref().and_then(|f| f.dyn_ref::<web::HtmlFormElement>()) {
        form.reset();
    }
    for (id, value) in CALCULATOR_DEFAULTS {
        if let Some(el) = document.get_element_by_id(id) {
            _ = js_sys::Reflect::set(&el, &"value".into(), &value.into());
        }
    }
    if let Some(el) = document.get_element_by_id(CALCULATOR_RESULT_ID) {
        dom::set_style(&el, "display", "none");
    }
    if let Some(form) = &form {
        dom::scroll_into_view_smooth(form, web::ScrollLogicalPosition::Center);
    }
}

pub fn wire(rt: &Rc<Runtime>, document: &web::Document) {
    let Some(form) = document.get_element_by_id(CALCULATOR_FORM_ID) else {
        return;
    };
    let rt_submit = rt.clone();
    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        calculate(&rt_submit);
    });

    for input in dom::query_all(document, CALCULATOR_INPUT_SELECTOR) {
        let rt_input = rt.clone();
        let is_radio = input
            .dyn_ref::<web::HtmlInputElement>()
            .map(|i| i.type_() == "radio")
            .unwrap_or(false);
        let event = if is_radio { "change" } else { "input" };
        dom::listen(&input, event, move |_: web::Event| {
            if result_shown(&rt_input.document) {
                calculate(&rt_input);
            }
        });
    }
}
