use crate::dom;
use crate::runtime::Runtime;
use glam::Vec2;
use std::rc::Rc;
use web_sys as web;

#[inline]
fn mouse_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

// Position of the only touch, or None for multi-touch gestures.
fn single_touch_pos(ev: &web::TouchEvent) -> Option<Vec2> {
    let touches = ev.touches();
    if touches.length() != 1 {
        return None;
    }
    touches
        .get(0)
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

/// Mouse and single-finger drag on the model rotate it. Moves and releases are
/// taken from the whole document so a drag can leave the model.
pub fn wire_viewer_drag(rt: &Rc<Runtime>, document: &web::Document) {
    let Some(model) = rt.views.model().cloned() else {
        return;
    };
    wire_mousedown(rt, &model);
    wire_touchstart(rt, &model);
    wire_mousemove(rt, document);
    wire_touchmove(rt, &model);
    wire_release(rt, document);
}

fn wire_mousedown(rt: &Rc<Runtime>, model: &web::Element) {
    let rt = rt.clone();
    dom::listen(model, "mousedown", move |ev: web::MouseEvent| {
        rt.dispatch(|page| page.begin_drag(mouse_pos(&ev)));
    });
}

fn wire_touchstart(rt: &Rc<Runtime>, model: &web::Element) {
    let rt = rt.clone();
    dom::listen(model, "touchstart", move |ev: web::TouchEvent| {
        if let Some(pos) = single_touch_pos(&ev) {
            rt.dispatch(|page| page.begin_drag(pos));
        }
    });
}

fn wire_mousemove(rt: &Rc<Runtime>, document: &web::Document) {
    let rt = rt.clone();
    dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
        if !rt.with_page(|page| page.viewer().is_dragging()) {
            return;
        }
        rt.dispatch(|page| page.drag_to(mouse_pos(&ev)));
    });
}

fn wire_touchmove(rt: &Rc<Runtime>, model: &web::Element) {
    let rt = rt.clone();
    dom::listen(model, "touchmove", move |ev: web::TouchEvent| {
        if !rt.with_page(|page| page.viewer().is_dragging()) {
            return;
        }
        if let Some(pos) = single_touch_pos(&ev) {
            // keep the page from scrolling under the drag
            ev.prevent_default();
            rt.dispatch(|page| page.drag_to(pos));
        }
    });
}

fn wire_release(rt: &Rc<Runtime>, document: &web::Document) {
    for event in ["mouseup", "touchend"] {
        let rt = rt.clone();
        dom::listen(document, event, move |_: web::Event| {
            if rt.with_page(|page| page.viewer().is_dragging()) {
                rt.dispatch(|page| page.end_drag());
            }
        });
    }
}
