use crate::apply::Views;
use helioflux_core::visibility::Category;
use helioflux_core::{ElementId, FormId, Page, PageConfig};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Browser-side owner of the page session.
///
/// Every input goes through [`Runtime::dispatch`]: the clock is brought up to
/// date, the input is applied, produced effects are written to the DOM and a
/// single timeout is re-armed for the next deadline.
pub struct Runtime {
    page: RefCell<Page>,
    origin: Instant,
    pub(crate) document: web::Document,
    pub(crate) views: Views,
    elements: RefCell<Vec<web::Element>>,
    forms: RefCell<Vec<web::HtmlFormElement>>,
    timer: Cell<Option<i32>>,
    pump: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Runtime {
    pub fn new(document: &web::Document, config: PageConfig) -> Rc<Self> {
        let rt = Rc::new(Self {
            page: RefCell::new(Page::new(config)),
            origin: Instant::now(),
            document: document.clone(),
            views: Views::bind(document),
            elements: RefCell::new(Vec::new()),
            forms: RefCell::new(Vec::new()),
            timer: Cell::new(None),
            pump: RefCell::new(None),
        });
        let weak = Rc::downgrade(&rt);
        let pump = Closure::wrap(Box::new(move || {
            if let Some(rt) = weak.upgrade() {
                rt.timer.set(None);
                rt.dispatch(|_| {});
            }
        }) as Box<dyn FnMut()>);
        *rt.pump.borrow_mut() = Some(pump);
        rt
    }

    /// Time since the session started.
    #[inline]
    pub fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    /// Read-only look at the session.
    pub fn with_page<R>(&self, f: impl FnOnce(&Page) -> R) -> R {
        f(&self.page.borrow())
    }

    pub fn dispatch<R>(&self, f: impl FnOnce(&mut Page) -> R) -> R {
        let (out, effects) = {
            let mut page = self.page.borrow_mut();
            page.advance_to(self.now());
            let out = f(&mut page);
            (out, page.take_effects())
        };
        for effect in &effects {
            self.apply(effect);
        }
        self.arm();
        out
    }

    fn arm(&self) {
        let Some(window) = web::window() else {
            return;
        };
        if let Some(handle) = self.timer.take() {
            window.clear_timeout_with_handle(handle);
        }
        let Some(deadline) = self.page.borrow_mut().next_deadline() else {
            return;
        };
        let wait = deadline.saturating_sub(self.now());
        let wait_ms = wait.as_micros().div_ceil(1000).min(i32::MAX as u128) as i32;
        let pump = self.pump.borrow();
        let Some(pump) = pump.as_ref() else {
            return;
        };
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            pump.as_ref().unchecked_ref(),
            wait_ms,
        ) {
            Ok(handle) => self.timer.set(Some(handle)),
            Err(e) => log::warn!("[runtime] setTimeout failed: {:?}", e),
        }
    }

    /// Register an element with the visibility observer and remember its node.
    pub fn register(&self, el: &web::Element, category: Category) -> ElementId {
        let id = self.page.borrow_mut().observe(category);
        _ = el.set_attribute(crate::constants::DATA_REVEAL_ID, &id.0.to_string());
        self.elements.borrow_mut().push(el.clone());
        id
    }

    pub fn element(&self, id: ElementId) -> Option<web::Element> {
        self.elements.borrow().get(id.0).cloned()
    }

    /// Registered id of a node, read back from its data attribute.
    pub fn element_id(&self, el: &web::Element) -> Option<ElementId> {
        el.get_attribute(crate::constants::DATA_REVEAL_ID)
            .and_then(|raw| raw.parse().ok())
            .map(ElementId)
    }

    pub fn register_form(&self, form: &web::HtmlFormElement) -> FormId {
        let mut forms = self.forms.borrow_mut();
        forms.push(form.clone());
        FormId(forms.len() - 1)
    }

    pub fn form(&self, id: FormId) -> Option<web::HtmlFormElement> {
        self.forms.borrow().get(id.0).cloned()
    }
}
