//! Page session: owns every component plus the timeline that drives them.
//!
//! Inputs arrive as method calls, outputs leave as [`Effect`]s. The host
//! applies effects to the DOM and calls [`Page::advance_to`] whenever the next
//! deadline passes.

use crate::config::PageConfig;
use crate::counter::step_interval;
use crate::error::CoreResult;
use crate::notify::{NotificationId, NotificationKind, NotificationQueue};
use crate::orientation::{ComponentInfo, Orientation, OrientationController};
use crate::race::{RaceFrame, RaceSimulator};
use crate::reveal::{RevealAnimator, RevealStep};
use crate::scroll::{parallax, Parallax, ScrollChange, ScrollTracker, Section};
use crate::timeline::{Timeline, TimerId};
use crate::visibility::{Category, VisibilityObserver};
use crate::{ElementId, FormId};
use glam::Vec2;
use std::time::Duration;

pub const FORM_SENT_MESSAGE: &str = "Message sent successfully!";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Task {
    FillBar(ElementId),
    CounterStep(ElementId),
    ScrollSettled,
    RaceTick,
    RaceSettled,
    NotificationEnter(NotificationId),
    NotificationExit(NotificationId),
    NotificationRemove(NotificationId),
    IntroLine(usize),
    IntroHighlight,
    PageLoaded,
    FormSent(FormId),
    QuoteFadeStart,
    QuoteFadeEnd,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Revealed(ElementId),
    BarWidth { element: ElementId, percent: f64 },
    CounterText { element: ElementId, text: String },
    LoadContent(ElementId),
    LoadImage(ElementId),

    ActiveSection(Option<String>),
    NavbarScrolled(bool),
    BodyScrolledDown(bool),
    Parallax(Parallax),

    ModelTransform(Orientation),
    Grabbing(bool),
    AutoRotate(bool),
    Exploded(bool),
    Highlight(Option<ComponentInfo>),

    RaceStarted,
    RaceFrame(RaceFrame),
    RaceResults,

    NotificationCreated {
        id: NotificationId,
        message: String,
        kind: NotificationKind,
    },
    NotificationEnter(NotificationId),
    NotificationExit(NotificationId),
    NotificationRemoved(NotificationId),

    IntroLine(usize),
    IntroHighlight,
    PageLoaded,

    FormSubmitting(FormId),
    FormSent(FormId),
    QuoteFadeStart,
    QuoteFadeEnd,
}

pub struct Page {
    config: PageConfig,
    timeline: Timeline<Task>,
    observer: VisibilityObserver,
    reveal: RevealAnimator,
    scroll: ScrollTracker,
    pending_scroll: Option<TimerId>,
    scroll_offset: f64,
    viewer: OrientationController,
    race: RaceSimulator,
    notifications: NotificationQueue,
    effects: Vec<Effect>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new(PageConfig::default())
    }
}

impl Page {
    pub fn new(config: PageConfig) -> Self {
        Self {
            timeline: Timeline::new(),
            observer: VisibilityObserver::new(config.observer),
            reveal: RevealAnimator::new(config.counter_steps),
            scroll: ScrollTracker::default(),
            pending_scroll: None,
            scroll_offset: 0.0,
            viewer: OrientationController::new(),
            race: RaceSimulator::new(config.race_total_ticks),
            notifications: NotificationQueue::new(),
            effects: Vec::new(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.timeline.now()
    }

    pub fn observer(&self) -> &VisibilityObserver {
        &self.observer
    }

    pub fn reveal(&self) -> &RevealAnimator {
        &self.reveal
    }

    pub fn scroll(&self) -> &ScrollTracker {
        &self.scroll
    }

    pub fn viewer(&self) -> &OrientationController {
        &self.viewer
    }

    pub fn race(&self) -> &RaceSimulator {
        &self.race
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn next_deadline(&mut self) -> Option<Duration> {
        self.timeline.next_deadline()
    }

    /// Run every task due at or before `now`, in deadline order.
    pub fn advance_to(&mut self, now: Duration) {
        while let Some(task) = self.timeline.pop_due(now) {
            self.run(task);
        }
    }

    // ---------------- Reveal ----------------

    pub fn observe(&mut self, category: Category) -> ElementId {
        self.observer.observe(category)
    }

    pub fn add_bar(&mut self, id: ElementId, percentage: &str) {
        self.reveal.add_bar(id, percentage);
    }

    /// Returns the text the counter shows until it is animated.
    pub fn add_counter(&mut self, id: ElementId, text: &str) -> CoreResult<String> {
        self.reveal.add_counter(id, text)
    }

    /// Feed an intersection report. Ok(true) when the element entered just now.
    pub fn report_intersection(&mut self, id: ElementId, intersecting: bool) -> CoreResult<bool> {
        let entered = self
            .observer
            .report(id, intersecting)?
            .map(|el| el.category);
        match entered {
            Some(category) => {
                self.on_entered(id, category);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Fallback when visibility cannot be observed: reveal everything now.
    pub fn reveal_all(&mut self) {
        let entered = self.observer.enter_all();
        log::info!("[reveal] revealing {} elements without observation", entered.len());
        for (id, category) in entered {
            self.on_entered(id, category);
        }
    }

    /// Start a statistic's count-up. Ok(false) when it already ran.
    pub fn animate_counter(&mut self, id: ElementId) -> CoreResult<bool> {
        if !self.reveal.start_counter(id)? {
            return Ok(false);
        }
        self.schedule_counter_step(id);
        Ok(true)
    }

    fn on_entered(&mut self, id: ElementId, category: Category) {
        log::debug!("[reveal] {:?} entered ({:?})", id, category);
        for step in self.reveal.on_entered(id, category) {
            match step {
                RevealStep::Reveal => self.effects.push(Effect::Revealed(id)),
                RevealStep::FillBarLater { .. } => {
                    self.timeline
                        .schedule(self.config.bar_fill_delay, Task::FillBar(id));
                }
                RevealStep::CountUp => self.schedule_counter_step(id),
                RevealStep::LoadContent => self.effects.push(Effect::LoadContent(id)),
                RevealStep::LoadImage => self.effects.push(Effect::LoadImage(id)),
            }
        }
    }

    fn schedule_counter_step(&mut self, id: ElementId) {
        let interval = step_interval(self.config.counter_duration, self.config.counter_steps);
        self.timeline.schedule(interval, Task::CounterStep(id));
    }

    // ---------------- Scroll ----------------

    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.scroll.set_sections(sections);
    }

    /// Record a scroll offset; state is recomputed once input pauses for the
    /// debounce window.
    pub fn on_scroll(&mut self, offset: f64) {
        self.scroll_offset = offset;
        if let Some(pending) = self.pending_scroll.take() {
            self.timeline.cancel(pending);
        }
        self.pending_scroll = Some(
            self.timeline
                .schedule(self.config.scroll_debounce, Task::ScrollSettled),
        );
    }

    fn settle_scroll(&mut self) {
        self.pending_scroll = None;
        for change in self.scroll.update(self.scroll_offset) {
            self.effects.push(match change {
                ScrollChange::ActiveSection(id) => Effect::ActiveSection(id),
                ScrollChange::NavbarScrolled(on) => Effect::NavbarScrolled(on),
                ScrollChange::BodyScrolledDown(on) => Effect::BodyScrolledDown(on),
            });
        }
        self.effects
            .push(Effect::Parallax(parallax(self.scroll_offset)));
    }

    // ---------------- Viewer ----------------

    pub fn begin_drag(&mut self, at: Vec2) {
        self.viewer.begin_drag(at);
        self.effects.push(Effect::Grabbing(true));
    }

    pub fn drag_to(&mut self, at: Vec2) {
        if let Some(orientation) = self.viewer.drag_to(at) {
            self.effects.push(Effect::ModelTransform(orientation));
        }
    }

    pub fn end_drag(&mut self) {
        if self.viewer.end_drag() {
            self.effects.push(Effect::Grabbing(false));
        }
    }

    pub fn toggle_auto_rotate(&mut self) {
        let on = self.viewer.toggle_auto_rotate();
        self.effects.push(Effect::AutoRotate(on));
        if !on {
            self.effects
                .push(Effect::ModelTransform(self.viewer.orientation()));
        }
    }

    pub fn toggle_exploded(&mut self) {
        let on = self.viewer.toggle_exploded();
        self.effects.push(Effect::Exploded(on));
    }

    pub fn select_component(&mut self, name: &str) {
        let info = self.viewer.select(name);
        self.effects.push(Effect::Highlight(Some(info)));
    }

    pub fn reset_viewer(&mut self) {
        self.viewer.reset();
        self.effects.extend([
            Effect::AutoRotate(false),
            Effect::Exploded(false),
            Effect::Highlight(None),
            Effect::ModelTransform(self.viewer.orientation()),
        ]);
    }

    // ---------------- Race ----------------

    /// Returns false when a race is already running or settling.
    pub fn start_race(&mut self) -> bool {
        if !self.race.start() {
            return false;
        }
        log::info!("[race] start");
        self.effects.push(Effect::RaceStarted);
        self.effects.push(Effect::RaceFrame(RaceFrame::ZERO));
        self.timeline.schedule(self.config.race_tick, Task::RaceTick);
        true
    }

    // ---------------- Notifications ----------------

    pub fn notify(&mut self, message: &str, kind: NotificationKind) -> NotificationId {
        let now = self.timeline.now();
        let id = self.notifications.push(message, kind, now).id;
        self.effects.push(Effect::NotificationCreated {
            id,
            message: message.to_string(),
            kind,
        });
        self.timeline
            .schedule(self.config.notify_enter_delay, Task::NotificationEnter(id));
        self.timeline
            .schedule(self.config.notify_display, Task::NotificationExit(id));
        id
    }

    // ---------------- Intro / forms ----------------

    /// Stagger `lines` hero title lines, then the highlight, and flip the body
    /// from loading to loaded.
    pub fn start_intro(&mut self, lines: usize, highlight: bool) {
        let stagger = self.config.intro_line_stagger;
        for i in 0..lines {
            self.timeline
                .schedule(stagger * i as u32, Task::IntroLine(i));
        }
        if highlight {
            self.timeline
                .schedule(self.config.intro_highlight_delay, Task::IntroHighlight);
        }
        self.timeline
            .schedule(self.config.page_loaded_delay, Task::PageLoaded);
    }

    /// A validated form enters its loading state and reports success once the
    /// simulated submission completes.
    pub fn submit_form(&mut self, form: FormId) {
        self.effects.push(Effect::FormSubmitting(form));
        self.timeline
            .schedule(self.config.form_submit_delay, Task::FormSent(form));
    }

    /// Fade a freshly rendered quote in: hidden after a short delay, then
    /// faded to full opacity one step later.
    pub fn show_quote(&mut self) {
        self.timeline
            .schedule(self.config.quote_fade_delay, Task::QuoteFadeStart);
    }

    fn run(&mut self, task: Task) {
        match task {
            Task::FillBar(id) => {
                if let Some(percent) = self.reveal.bar_target(id) {
                    self.effects.push(Effect::BarWidth {
                        element: id,
                        percent,
                    });
                }
            }
            Task::CounterStep(id) => {
                if let Some((text, more)) = self.reveal.step_counter(id) {
                    self.effects.push(Effect::CounterText { element: id, text });
                    if more {
                        self.schedule_counter_step(id);
                    }
                }
            }
            Task::ScrollSettled => self.settle_scroll(),
            Task::RaceTick => {
                if let Some(tick) = self.race.tick() {
                    self.effects.push(Effect::RaceFrame(tick.frame));
                    let next = if tick.finished {
                        (self.config.race_settle_delay, Task::RaceSettled)
                    } else {
                        (self.config.race_tick, Task::RaceTick)
                    };
                    self.timeline.schedule(next.0, next.1);
                }
            }
            Task::RaceSettled => {
                if self.race.settle() {
                    self.effects.push(Effect::RaceResults);
                }
            }
            Task::NotificationEnter(id) => self.effects.push(Effect::NotificationEnter(id)),
            Task::NotificationExit(id) => {
                self.effects.push(Effect::NotificationExit(id));
                self.timeline
                    .schedule(self.config.notify_exit, Task::NotificationRemove(id));
            }
            Task::NotificationRemove(id) => {
                if self.notifications.remove(id).is_some() {
                    self.effects.push(Effect::NotificationRemoved(id));
                }
            }
            Task::IntroLine(i) => self.effects.push(Effect::IntroLine(i)),
            Task::IntroHighlight => self.effects.push(Effect::IntroHighlight),
            Task::PageLoaded => self.effects.push(Effect::PageLoaded),
            Task::FormSent(form) => {
                self.effects.push(Effect::FormSent(form));
                self.notify(FORM_SENT_MESSAGE, NotificationKind::Success);
            }
            Task::QuoteFadeStart => {
                self.effects.push(Effect::QuoteFadeStart);
                self.timeline
                    .schedule(self.config.quote_fade_step, Task::QuoteFadeEnd);
            }
            Task::QuoteFadeEnd => self.effects.push(Effect::QuoteFadeEnd),
        }
    }
}
