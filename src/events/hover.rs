use crate::constants::{
    HOVER_CARD_SELECTOR, HOVER_LIFT_SHADOW, HOVER_LIFT_TRANSFORM, HOVER_REST_TRANSFORM,
    PLAY_BUTTON_SELECTOR, VIDEO_PLACEHOLDER_MESSAGE, VIDEO_PLACEHOLDER_SELECTOR,
};
use crate::dom;
use web_sys as web;

/// Cards lift under the pointer and settle back when it leaves.
pub fn wire_hover(document: &web::Document) {
    let cards = dom::query_all(document, HOVER_CARD_SELECTOR);
    for card in &cards {
        let target = card.clone();
        dom::listen(card, "mouseenter", move |_: web::MouseEvent| {
            dom::set_style(&target, "transform", HOVER_LIFT_TRANSFORM);
            dom::set_style(&target, "box-shadow", HOVER_LIFT_SHADOW);
        });
        let target = card.clone();
        dom::listen(card, "mouseleave", move |_: web::MouseEvent| {
            dom::set_style(&target, "transform", HOVER_REST_TRANSFORM);
            dom::set_style(&target, "box-shadow", "");
        });
    }
    log::debug!("[hover] {} cards", cards.len());
}

/// The play button only announces that the video embed is still to come.
pub fn wire_video_placeholder(window: &web::Window, document: &web::Document) {
    let play = document.query_selector(PLAY_BUTTON_SELECTOR).ok().flatten();
    let placeholder = document.query_selector(VIDEO_PLACEHOLDER_SELECTOR).ok().flatten();
    let (Some(play), Some(_)) = (play, placeholder) else {
        return;
    };
    let win = window.clone();
    dom::listen(&play, "click", move |_: web::MouseEvent| {
        _ = win.alert_with_message(VIDEO_PLACEHOLDER_MESSAGE);
    });
}
