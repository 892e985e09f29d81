pub mod controls;
pub mod hover;
pub mod keyboard;
pub mod pointer;
pub mod scroll;

use crate::dom;
use web_sys as web;

/// Uncaught script errors are logged rather than surfaced to visitors.
pub fn wire_error_log(window: &web::Window) {
    dom::listen(window, "error", |ev: web::ErrorEvent| {
        log::error!("[page] uncaught error: {} ({}:{})", ev.message(), ev.filename(), ev.lineno());
    });
}
