use crate::constants::{NOTIFICATION_CLASS, NOTIFICATION_STYLE};
use crate::dom;
use helioflux_core::{NotificationId, NotificationKind};
use web_sys as web;

#[inline]
fn dom_id(id: NotificationId) -> String {
    format!("notification-{}", id.0)
}

/// Append an off-screen toast for `message`; it slides in on the next
/// enter effect.
pub fn create(document: &web::Document, id: NotificationId, message: &str, kind: NotificationKind) {
    let Ok(el) = document.create_element("div") else {
        log::warn!("[notify] could not create toast for {:?}", id);
        return;
    };
    el.set_id(&dom_id(id));
    el.set_class_name(&format!("{NOTIFICATION_CLASS} {NOTIFICATION_CLASS}-{}", kind.as_str()));
    _ = el.set_attribute("role", "status");
    _ = el.set_attribute("style", NOTIFICATION_STYLE);
    dom::set_style(&el, "background", kind.background());
    // Plain text only: the message never becomes markup.
    dom::set_text(&el, message);
    if let Some(body) = document.body() {
        _ = body.append_child(&el);
    }
}

/// Slide a toast on screen (`true`) or back off it.
pub fn slide(document: &web::Document, id: NotificationId, visible: bool) {
    if let Some(el) = document.get_element_by_id(&dom_id(id)) {
        let offset = if visible { "translateX(0)" } else { "translateX(100%)" };
        dom::set_style(&el, "transform", offset);
    }
}

pub fn remove(document: &web::Document, id: NotificationId) {
    if let Some(el) = document.get_element_by_id(&dom_id(id)) {
        el.remove();
    }
}
