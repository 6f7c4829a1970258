use std::f64::consts::PI;

use super::percent_of;

pub const PROGRESS_MAX: u32 = 100;
pub const MIN_STEP: u8 = 1;
pub const MAX_STEP: u8 = 100;

pub fn clamp_step(step: u8) -> u8 {
    step.clamp(MIN_STEP, MAX_STEP)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ProgressStatus {
    Idle,
    Running,
    Complete,
}

impl ProgressStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProgressStatus::Idle => "idle",
            ProgressStatus::Running => "running",
            ProgressStatus::Complete => "complete",
        }
    }
}

/// Bounded progress value shown by the progress demo.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Progress {
    value: u32,
    max: u32,
}

impl Progress {
    pub fn new(max: u32) -> Self {
        Self {
            value: 0,
            max: max.max(1),
        }
    }

    pub fn with_value(mut self, value: u32) -> Self {
        self.set(value);
        self
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn set(&mut self, value: u32) {
        self.value = value.min(self.max);
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    /// Moves the value by `delta`, saturating at both ends.
    pub fn step_by(&mut self, delta: i64) {
        let next = i64::from(self.value).saturating_add(delta).clamp(0, i64::from(self.max));
        self.value = u32::try_from(next).unwrap_or(self.max);
    }

    /// Advances by `step` and starts over from zero once the maximum was reached.
    pub fn advance_wrapping(&mut self, step: u32) {
        self.value = match self.value >= self.max {
            true => 0,
            false => self.value.saturating_add(step).min(self.max),
        };
    }

    pub fn percent(&self) -> f64 {
        percent_of(self.value, self.max)
    }

    pub fn status(&self) -> ProgressStatus {
        match self.value {
            0 => ProgressStatus::Idle,
            v if v >= self.max => ProgressStatus::Complete,
            _ => ProgressStatus::Running,
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(PROGRESS_MAX)
    }
}

/// Stroke dash of a progress ring.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RingDash {
    pub circumference: f64,
    pub offset: f64,
}

pub fn ring_dash(radius: f64, percent: f64) -> RingDash {
    let circumference = 2.0 * PI * radius.max(0.0);
    let filled = percent.clamp(0.0, 100.0) / 100.0;
    RingDash {
        circumference,
        offset: circumference * (1.0 - filled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_is_clamped_to_max() {
        let progress = Progress::default().with_value(250);
        assert_eq!(progress.value(), 100);
        assert_eq!(progress.status(), ProgressStatus::Complete);
    }

    #[test]
    fn step_by_saturates() {
        let mut progress = Progress::default().with_value(10);
        progress.step_by(-25);
        assert_eq!(progress.value(), 0);
        assert_eq!(progress.status(), ProgressStatus::Idle);
        progress.step_by(40);
        assert_eq!(progress.value(), 40);
        assert_eq!(progress.status(), ProgressStatus::Running);
        progress.step_by(i64::MAX);
        assert_eq!(progress.value(), 100);
    }

    #[test]
    fn advance_wraps_after_complete() {
        let mut progress = Progress::default().with_value(95);
        progress.advance_wrapping(10);
        assert_eq!(progress.value(), 100);
        progress.advance_wrapping(10);
        assert_eq!(progress.value(), 0);
    }

    #[test]
    fn zero_max_is_raised() {
        let progress = Progress::new(0).with_value(1);
        assert_eq!(progress.max(), 1);
        assert_eq!(progress.percent(), 100.0);
    }

    #[test]
    fn ring_dash_tracks_percent() {
        let empty = ring_dash(10.0, 0.0);
        assert_eq!(empty.offset, empty.circumference);

        let full = ring_dash(10.0, 100.0);
        assert_eq!(full.offset, 0.0);

        let half = ring_dash(10.0, 50.0);
        assert!((half.offset - half.circumference / 2.0).abs() < 1e-9);
    }

    #[test]
    fn step_is_clamped() {
        assert_eq!(clamp_step(0), 1);
        assert_eq!(clamp_step(5), 5);
        assert_eq!(clamp_step(200), 100);
    }
}
