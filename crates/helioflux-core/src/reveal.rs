use crate::counter::CounterSpec;
use crate::error::{CoreError, CoreResult};
use crate::visibility::{Category, LazyKind};
use crate::ElementId;
use fnv::FnvHashMap;
use smallvec::SmallVec;

/// What an "entered" element should do next.
#[derive(Clone, Debug, PartialEq)]
pub enum RevealStep {
    /// Add the generic reveal class.
    Reveal,
    /// Fill the bar to `percent` once the fill delay has passed.
    FillBarLater { percent: f64 },
    /// Begin the count-up; the first step is due one interval from now.
    CountUp,
    LoadContent,
    LoadImage,
}

#[derive(Default)]
pub struct RevealAnimator {
    bars: FnvHashMap<ElementId, f64>,
    counters: FnvHashMap<ElementId, CounterSpec>,
    counter_steps: u32,
}

impl RevealAnimator {
    pub fn new(counter_steps: u32) -> Self {
        Self {
            bars: FnvHashMap::default(),
            counters: FnvHashMap::default(),
            counter_steps,
        }
    }

    /// Remember a bar's target fill. Unparseable percentages fill to 0.
    pub fn add_bar(&mut self, id: ElementId, percentage: &str) {
        let percent = percentage.trim().parse::<f64>().unwrap_or(0.0);
        self.bars.insert(id, percent.clamp(0.0, 100.0));
    }

    /// Parse and store a statistic's counter; returns the text to show until
    /// the count-up starts.
    pub fn add_counter(&mut self, id: ElementId, text: &str) -> CoreResult<String> {
        let spec = CounterSpec::parse_with_steps(text, self.counter_steps)?;
        let initial = spec.initial_text();
        self.counters.insert(id, spec);
        Ok(initial)
    }

    pub fn bar_target(&self, id: ElementId) -> Option<f64> {
        self.bars.get(&id).copied()
    }

    pub fn counter(&self, id: ElementId) -> Option<&CounterSpec> {
        self.counters.get(&id)
    }

    pub fn on_entered(&mut self, id: ElementId, category: Category) -> SmallVec<[RevealStep; 2]> {
        let mut steps = SmallVec::new();
        steps.push(RevealStep::Reveal);
        match category {
            Category::Reveal => {}
            Category::ChartBar => {
                if let Some(percent) = self.bar_target(id) {
                    steps.push(RevealStep::FillBarLater { percent });
                }
            }
            Category::Stat => {
                if self.start_counter(id).unwrap_or(false) {
                    steps.push(RevealStep::CountUp);
                }
            }
            Category::Lazy(LazyKind::Content) => steps.push(RevealStep::LoadContent),
            Category::Lazy(LazyKind::Image) => steps.push(RevealStep::LoadImage),
            Category::Lazy(LazyKind::Other) => {}
        }
        steps
    }

    /// Ok(false) when the counter already started or finished.
    pub fn start_counter(&mut self, id: ElementId) -> CoreResult<bool> {
        let spec = self
            .counters
            .get_mut(&id)
            .ok_or(CoreError::UnknownElement(id))?;
        Ok(spec.start())
    }

    /// One count-up step: the new text and whether more steps follow.
    pub fn step_counter(&mut self, id: ElementId) -> Option<(String, bool)> {
        let spec = self.counters.get_mut(&id)?;
        let text = spec.advance()?;
        Some((text, !spec.is_animated()))
    }
}
