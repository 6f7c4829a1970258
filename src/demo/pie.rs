use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::percent_of;

pub const PALETTE: [&str; 6] = [
    "#f97316", "#0ea5e9", "#22c55e", "#eab308", "#a855f7", "#ef4444",
];

const FULL_CIRCLE: f64 = 360.0;
const ANGLE_EPSILON: f64 = 1e-9;

#[derive(Debug, Error, PartialEq)]
pub enum PieError {
    #[error("Slice {0} has a negative value!")]
    NegativeValue(String),
    #[error("Slice {0} has a value that is not a finite number!")]
    NotFinite(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl Slice {
    pub fn new(label: &str, value: f64, color: &str) -> Self {
        Self {
            label: label.to_string(),
            value,
            color: color.to_string(),
        }
    }

    fn validate(&self) -> Result<(), PieError> {
        if !self.value.is_finite() {
            return Err(PieError::NotFinite(self.label.clone()));
        }
        if self.value < 0.0 {
            return Err(PieError::NegativeValue(self.label.clone()));
        }
        Ok(())
    }
}

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Slice added by the demo's "add" button, values cycle through a fixed sequence.
pub fn sample_slice(index: usize) -> Slice {
    let value = ((index * 37) % 50 + 10) as f64;
    Slice::new(&format!("Slice {}", index + 1), value, palette_color(index))
}

/// Chart the pie demo opens with.
pub fn default_chart() -> PieChart {
    PieChart {
        slices: (0..3).map(sample_slice).collect(),
    }
}

/// Angular extent of one slice, angles in degrees clockwise from twelve o'clock.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub label: String,
    pub color: String,
    pub start_angle: f64,
    pub end_angle: f64,
    pub percent: f64,
}

impl Segment {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PieChart {
    slices: Vec<Slice>,
}

impl PieChart {
    pub fn new(slices: Vec<Slice>) -> Result<Self, PieError> {
        for slice in &slices {
            slice.validate()?;
        }
        Ok(Self { slices })
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.slices.iter().map(|slice| slice.value).sum()
    }

    pub fn push(&mut self, slice: Slice) -> Result<(), PieError> {
        slice.validate()?;
        self.slices.push(slice);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Slice> {
        self.slices.pop()
    }

    /// Segments of all non-empty slices, laid out one after the other.
    pub fn segments(&self) -> Vec<Segment> {
        let total = self.total();
        let mut start_angle = 0.0;
        let mut segments = Vec::with_capacity(self.slices.len());

        for slice in self.slices.iter().filter(|slice| slice.value > 0.0) {
            let percent = percent_of(slice.value, total);
            let end_angle = start_angle + FULL_CIRCLE * percent / 100.0;
            segments.push(Segment {
                label: slice.label.clone(),
                color: slice.color.clone(),
                start_angle,
                end_angle,
                percent,
            });
            start_angle = end_angle;
        }
        segments
    }
}

fn point_on_circle(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    let radians = angle * PI / 180.0;
    (cx + r * radians.sin(), cy - r * radians.cos())
}

/// SVG path data for a pie wedge.
///
/// A full circle cannot be drawn with one arc command, so it is split into two halves.
pub fn arc_path(cx: f64, cy: f64, r: f64, start_angle: f64, end_angle: f64) -> String {
    let sweep = end_angle - start_angle;
    if sweep >= FULL_CIRCLE - ANGLE_EPSILON {
        return format!(
            "M {cx:.3} {top:.3} A {r:.3} {r:.3} 0 1 1 {cx:.3} {bottom:.3} A {r:.3} {r:.3} 0 1 1 {cx:.3} {top:.3} Z",
            top = cy - r,
            bottom = cy + r,
        );
    }

    let (x1, y1) = point_on_circle(cx, cy, r, start_angle);
    let (x2, y2) = point_on_circle(cx, cy, r, end_angle);
    let large_arc = match sweep > FULL_CIRCLE / 2.0 {
        true => 1,
        false => 0,
    };
    format!(
        "M {cx:.3} {cy:.3} L {x1:.3} {y1:.3} A {r:.3} {r:.3} 0 {large_arc} 1 {x2:.3} {y2:.3} Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> PieChart {
        PieChart::new(vec![
            Slice::new("done", 50.0, "#000"),
            Slice::new("empty", 0.0, "#111"),
            Slice::new("todo", 25.0, "#222"),
            Slice::new("blocked", 25.0, "#333"),
        ])
        .unwrap()
    }

    #[test]
    fn segments_cover_full_circle() {
        let segments = chart().segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].start_angle, 0.0);
        assert_eq!(segments[0].end_angle, 180.0);
        assert_eq!(segments[1].label, "todo");
        assert_eq!(segments[1].percent, 25.0);

        let swept: f64 = segments.iter().map(Segment::sweep).sum();
        assert!((swept - 360.0).abs() < 1e-9);
        assert_eq!(segments[2].end_angle, 360.0);
    }

    #[test]
    fn all_zero_chart_has_no_segments() {
        let chart = PieChart::new(vec![Slice::new("a", 0.0, "#000")]).unwrap();
        assert!(chart.segments().is_empty());
        assert!(PieChart::default().segments().is_empty());
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(
            PieChart::new(vec![Slice::new("neg", -1.0, "#000")]),
            Err(PieError::NegativeValue("neg".to_string()))
        );

        let mut chart = PieChart::default();
        assert_eq!(
            chart.push(Slice::new("nan", f64::NAN, "#000")),
            Err(PieError::NotFinite("nan".to_string()))
        );
        assert!(chart.is_empty());
    }

    #[test]
    fn quarter_arc_path() {
        let path = arc_path(50.0, 50.0, 50.0, 0.0, 90.0);
        assert_eq!(
            path,
            "M 50.000 50.000 L 50.000 0.000 A 50.000 50.000 0 0 1 100.000 50.000 Z"
        );
    }

    #[test]
    fn large_arc_flag_above_half() {
        let path = arc_path(50.0, 50.0, 50.0, 0.0, 270.0);
        assert!(path.contains(" 0 1 1 "));
    }

    #[test]
    fn full_circle_uses_two_arcs() {
        let path = arc_path(50.0, 50.0, 40.0, 0.0, 360.0);
        assert_eq!(
            path,
            "M 50.000 10.000 A 40.000 40.000 0 1 1 50.000 90.000 A 40.000 40.000 0 1 1 50.000 10.000 Z"
        );
    }

    #[test]
    fn default_chart_is_valid() {
        let chart = default_chart();
        assert_eq!(chart.len(), 3);
        assert_eq!(PieChart::new(chart.slices().to_vec()), Ok(chart));
    }

    #[test]
    fn sample_slices_cycle_palette() {
        assert_eq!(sample_slice(0).color, PALETTE[0]);
        assert_eq!(sample_slice(PALETTE.len()).color, PALETTE[0]);
        assert_eq!(sample_slice(0).label, "Slice 1");
        assert!(sample_slice(3).value >= 10.0);
    }
}
