use crate::constants::{
    RACE_ENERGY_MAX_A_KWH, RACE_ENERGY_MAX_B_KWH, RACE_RATE_MULTIPLIER, RACE_TOTAL_TICKS,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RacePhase {
    #[default]
    Idle,
    Running,
    /// Stopped; results are shown once the settle delay passes.
    Settling,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RaceState {
    pub tick_index: u32,
    pub total_ticks: u32,
    pub progress_a: f64,
    pub progress_b: f64,
    pub running: bool,
}

/// One rendered race frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaceFrame {
    pub progress_a: f64,
    pub progress_b: f64,
    pub energy_a: f64,
    pub energy_b: f64,
}

impl RaceFrame {
    pub const ZERO: RaceFrame = RaceFrame {
        progress_a: 0.0,
        progress_b: 0.0,
        energy_a: 0.0,
        energy_b: 0.0,
    };

    fn from_progress(progress_a: f64, progress_b: f64) -> Self {
        Self {
            progress_a,
            progress_b,
            energy_a: progress_a / 100.0 * RACE_ENERGY_MAX_A_KWH,
            energy_b: progress_b / 100.0 * RACE_ENERGY_MAX_B_KWH,
        }
    }
}

#[inline]
pub fn percent_label(progress: f64) -> String {
    format!("{}%", progress.round() as i64)
}

#[inline]
pub fn energy_label(kwh: f64) -> String {
    format!("{kwh:.1} kWh")
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaceTick {
    pub frame: RaceFrame,
    pub finished: bool,
}

/// Side-by-side progress race: contender A advances at a fixed multiple of B.
pub struct RaceSimulator {
    state: RaceState,
    phase: RacePhase,
}

impl Default for RaceSimulator {
    fn default() -> Self {
        Self::new(RACE_TOTAL_TICKS)
    }
}

impl RaceSimulator {
    pub fn new(total_ticks: u32) -> Self {
        Self {
            state: RaceState {
                total_ticks: total_ticks.max(1),
                ..RaceState::default()
            },
            phase: RacePhase::Idle,
        }
    }

    #[inline]
    pub fn state(&self) -> &RaceState {
        &self.state
    }

    #[inline]
    pub fn phase(&self) -> RacePhase {
        self.phase
    }

    /// Returns false while a race is running or its results are settling.
    pub fn start(&mut self) -> bool {
        if matches!(self.phase, RacePhase::Running | RacePhase::Settling) {
            return false;
        }
        self.state = RaceState {
            total_ticks: self.state.total_ticks,
            running: true,
            ..RaceState::default()
        };
        self.phase = RacePhase::Running;
        true
    }

    pub fn tick(&mut self) -> Option<RaceTick> {
        if self.phase != RacePhase::Running {
            return None;
        }
        let s = &mut self.state;
        s.tick_index += 1;
        let fraction = s.tick_index as f64 / s.total_ticks as f64;
        s.progress_b = (fraction * 100.0).min(100.0);
        s.progress_a = (fraction * 100.0 * RACE_RATE_MULTIPLIER).min(100.0);
        let finished = s.progress_a >= 100.0 || s.tick_index >= s.total_ticks;
        let frame = RaceFrame::from_progress(s.progress_a, s.progress_b);
        if finished {
            s.running = false;
            self.phase = RacePhase::Settling;
            log::info!(
                "[race] finished after {} ticks (a={:.1}%, b={:.1}%)",
                s.tick_index,
                s.progress_a,
                s.progress_b
            );
        }
        Some(RaceTick { frame, finished })
    }

    /// End of the settle delay; returns false when nothing was settling.
    pub fn settle(&mut self) -> bool {
        if self.phase != RacePhase::Settling {
            return false;
        }
        self.phase = RacePhase::Finished;
        true
    }
}
