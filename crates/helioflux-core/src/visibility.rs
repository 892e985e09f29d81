use crate::constants::{REVEAL_BOTTOM_MARGIN_PX, REVEAL_THRESHOLD};
use crate::error::{CoreError, CoreResult};
use crate::ElementId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LazyKind {
    /// `data-lazy="content"`: gains the `loaded` class.
    Content,
    /// `img[data-src]`: source swapped in on first sight.
    Image,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Reveal,
    ChartBar,
    Stat,
    Lazy(LazyKind),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub bottom_margin_px: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            bottom_margin_px: REVEAL_BOTTOM_MARGIN_PX,
        }
    }
}

impl ObserverOptions {
    /// CSS-style root margin string for `IntersectionObserver`.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

#[derive(Clone, Debug)]
pub struct ObservableElement {
    pub id: ElementId,
    pub category: Category,
    has_fired: bool,
    intersecting: bool,
}

impl ObservableElement {
    #[inline]
    pub fn has_fired(&self) -> bool {
        self.has_fired
    }
}

/// Tracks first-time visibility for every watched element.
#[derive(Default)]
pub struct VisibilityObserver {
    options: ObserverOptions,
    elements: Vec<ObservableElement>,
}

impl VisibilityObserver {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            elements: Vec::new(),
        }
    }

    #[inline]
    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    pub fn observe(&mut self, category: Category) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(ObservableElement {
            id,
            category,
            has_fired: false,
            intersecting: false,
        });
        id
    }

    pub fn get(&self, id: ElementId) -> Option<&ObservableElement> {
        self.elements.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Feed one intersection report. Returns the element when this report is
    /// its first false → true crossing.
    pub fn report(&mut self, id: ElementId, intersecting: bool) -> CoreResult<Option<&ObservableElement>> {
        let el = self
            .elements
            .get_mut(id.0)
            .ok_or(CoreError::UnknownElement(id))?;
        let crossed = intersecting && !el.intersecting;
        el.intersecting = intersecting;
        if !crossed || el.has_fired {
            return Ok(None);
        }
        el.has_fired = true;
        Ok(Some(&*el))
    }

    /// Fallback when no visibility primitive exists: every element that has
    /// not fired yet is treated as entered now.
    pub fn enter_all(&mut self) -> Vec<(ElementId, Category)> {
        self.elements
            .iter_mut()
            .filter(|el| !el.has_fired)
            .map(|el| {
                el.has_fired = true;
                el.intersecting = true;
                (el.id, el.category)
            })
            .collect()
    }
}
