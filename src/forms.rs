use crate::constants::*;
use crate::dom;
use crate::runtime::Runtime;
use helioflux_core::form::check_required;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Flag blank required fields with the error class. True when none are blank.
pub fn validate(form: &web::Element) -> bool {
    let fields = dom::query_all_in(form, REQUIRED_FIELD_SELECTOR);
    let values: Vec<String> = fields.iter().map(dom::control_value).collect();
    let check = check_required(values.iter().map(String::as_str));
    for (field, blank) in fields.iter().zip(&check.blank) {
        dom::set_class(field, CLASS_ERROR, *blank);
    }
    check.is_valid()
}

/// Validate-then-submit for every form except the calculator, which prices
/// instead of sending.
pub fn wire(rt: &Rc<Runtime>, document: &web::Document) {
    for el in dom::query_all(document, FORM_SELECTOR) {
        if el.id() == CALCULATOR_FORM_ID {
            continue;
        }
        let Ok(form) = el.dyn_into::<web::HtmlFormElement>() else {
            continue;
        };
        let id = rt.register_form(&form);
        let rt_submit = rt.clone();
        let target = form.clone();
        dom::listen(&form, "submit", move |ev: web::Event| {
            ev.prevent_default();
            if validate(&target) {
                log::info!("[forms] submitting {:?}", id);
                rt_submit.dispatch(|page| page.submit_form(id));
            }
        });
    }
}
