use crate::constants::COUNTER_STEPS;
use crate::error::{CoreError, CoreResult};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Pending,
    Counting { step: u32 },
    Finished,
}

/// Count-up state for one statistic, parsed from the text it was authored with.
#[derive(Clone, Debug)]
pub struct CounterSpec {
    target: f64,
    suffix: String,
    current: f64,
    steps: u32,
    phase: Phase,
}

impl CounterSpec {
    /// Split authored text such as `"85%"` or `"2.5K+"` into the number made
    /// of its digit and `.` characters and the remaining suffix.
    pub fn parse(text: &str) -> CoreResult<Self> {
        Self::parse_with_steps(text, COUNTER_STEPS)
    }

    pub fn parse_with_steps(text: &str, steps: u32) -> CoreResult<Self> {
        let numeric: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let suffix: String = text
            .chars()
            .filter(|c| !(c.is_ascii_digit() || *c == '.'))
            .collect();
        let target = leading_float(&numeric)
            .ok_or_else(|| CoreError::InvalidCounterText(text.to_string()))?;
        Ok(Self {
            target,
            suffix,
            current: 0.0,
            steps: steps.max(1),
            phase: Phase::Pending,
        })
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[inline]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn is_started(&self) -> bool {
        self.phase != Phase::Pending
    }

    pub fn is_animated(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Text shown before the count-up starts.
    pub fn initial_text(&self) -> String {
        format!("0{}", self.suffix)
    }

    pub fn display(&self) -> String {
        format!("{}{}", format_value(self.current), self.suffix)
    }

    /// Returns false (and changes nothing) when the count-up already ran or is
    /// running.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Pending {
            return false;
        }
        self.phase = Phase::Counting { step: 0 };
        true
    }

    /// Advance one step. Returns the new display text, or `None` when the
    /// counter is not counting.
    pub fn advance(&mut self) -> Option<String> {
        let Phase::Counting { step } = self.phase else {
            return None;
        };
        let step = step + 1;
        self.current = value_at(step, self.steps, self.target);
        self.phase = if step >= self.steps || self.current >= self.target {
            self.current = self.target;
            Phase::Finished
        } else {
            Phase::Counting { step }
        };
        Some(self.display())
    }
}

/// Interval between count-up steps when `steps` steps span `duration`.
pub fn step_interval(duration: Duration, steps: u32) -> Duration {
    duration / steps.max(1)
}

/// Value shown at `step` of `steps`, pinned to `target` on the last step.
pub fn value_at(step: u32, steps: u32, target: f64) -> f64 {
    if step >= steps {
        return target;
    }
    (step as f64 * target / steps as f64).min(target)
}

/// Display form of a counter value: thousands collapse to one decimal with a
/// `K`, whole numbers print bare, everything else keeps one decimal.
pub fn format_value(value: f64) -> String {
    if value >= 1000.0 {
        format!("{}K", fixed1(value / 1000.0))
    } else if value.fract() == 0.0 {
        format!("{}", value.round() as i64)
    } else {
        fixed1(value)
    }
}

// One decimal, rounding the stored binary value. Only values that are exact
// ties (odd multiples of 0.25) round up; 0.35 is stored below the tie.
fn fixed1(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return format!("{:.1}", value + 0.05);
    }
    format!("{value:.1}")
}

// Longest prefix that reads as a decimal number ("1.2.3" -> 1.2).
fn leading_float(s: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    let prefix = s[..end].trim_end_matches('.');
    if prefix.is_empty() || prefix == "." {
        return None;
    }
    prefix.parse().ok()
}
