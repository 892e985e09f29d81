use crate::constants::{
    BODY_SCROLLED_DOWN_PX, NAVBAR_HEIGHT_PX, NAVBAR_SCROLLED_PX, PARALLAX_BACKGROUND_RATE,
    PARALLAX_PARTICLES_RATE, SECTION_LOOK_AHEAD_PX,
};
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ScrollChange {
    ActiveSection(Option<String>),
    NavbarScrolled(bool),
    BodyScrolledDown(bool),
}

/// Hero parallax translations (px) for a scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub background_y: f64,
    pub particles_y: f64,
}

pub fn parallax(offset: f64) -> Parallax {
    Parallax {
        background_y: offset * PARALLAX_BACKGROUND_RATE,
        particles_y: offset * PARALLAX_PARTICLES_RATE,
    }
}

/// Scroll target that leaves the section clear of the fixed navbar.
#[inline]
pub fn scroll_target(section_top: f64) -> f64 {
    section_top - NAVBAR_HEIGHT_PX
}

#[derive(Default)]
pub struct ScrollTracker {
    sections: Vec<Section>,
    active: Option<String>,
    navbar_scrolled: bool,
    scrolled_down: bool,
}

impl ScrollTracker {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            ..Self::default()
        }
    }

    /// Replace the measured sections (document order), e.g. after a resize.
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Last section in document order whose look-ahead top is at or above
    /// `offset`.
    pub fn current_section(&self, offset: f64) -> Option<&Section> {
        self.sections
            .iter()
            .rev()
            .find(|s| offset >= s.top - SECTION_LOOK_AHEAD_PX)
    }

    /// Recompute state for `offset` and report only what changed.
    pub fn update(&mut self, offset: f64) -> SmallVec<[ScrollChange; 3]> {
        let mut changes = SmallVec::new();

        let current = self.current_section(offset).map(|s| s.id.clone());
        if current != self.active {
            self.active = current.clone();
            changes.push(ScrollChange::ActiveSection(current));
        }

        let navbar_scrolled = offset > NAVBAR_SCROLLED_PX;
        if navbar_scrolled != self.navbar_scrolled {
            self.navbar_scrolled = navbar_scrolled;
            changes.push(ScrollChange::NavbarScrolled(navbar_scrolled));
        }

        let scrolled_down = offset > BODY_SCROLLED_DOWN_PX;
        if scrolled_down != self.scrolled_down {
            self.scrolled_down = scrolled_down;
            changes.push(ScrollChange::BodyScrolledDown(scrolled_down));
        }

        changes
    }
}
