//! SVG path helpers shared by the chart components.

/// Point on a circle; `deg` is measured clockwise from 12 o'clock.
pub fn polar(cx: f32, cy: f32, r: f32, deg: f32) -> (f32, f32) {
    let rad = (deg - 90.0).to_radians();
    (cx + r * rad.cos(), cy + r * rad.sin())
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliceArc {
    pub start_deg: f32,
    pub end_deg: f32,
}

impl SliceArc {
    pub fn sweep(&self) -> f32 {
        self.end_deg - self.start_deg
    }

    pub fn mid_deg(&self) -> f32 {
        (self.start_deg + self.end_deg) / 2.0
    }
}

/// Split the circle proportionally to `values`. Non-positive values get an
/// empty arc; a non-positive total yields no arcs at all.
pub fn slice_arcs(values: &[f64]) -> Vec<SliceArc> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0f64;
    values
        .iter()
        .map(|v| {
            let sweep = v.max(0.0) / total * 360.0;
            let arc = SliceArc {
                start_deg: start as f32,
                end_deg: (start + sweep) as f32,
            };
            start += sweep;
            arc
        })
        .collect()
}

/// Closed wedge path from the center. A full circle is drawn as two
/// half arcs since a single arc with equal endpoints renders nothing.
pub fn slice_path(cx: f32, cy: f32, r: f32, arc: &SliceArc) -> String {
    if arc.sweep() >= 359.999 {
        let (x0, y0) = polar(cx, cy, r, 0.0);
        let (x1, y1) = polar(cx, cy, r, 180.0);
        return format!(
            "M {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 1 1 {x1:.3} {y1:.3} A {r:.3} {r:.3} 0 1 1 {x0:.3} {y0:.3} Z"
        );
    }
    let (x0, y0) = polar(cx, cy, r, arc.start_deg);
    let (x1, y1) = polar(cx, cy, r, arc.end_deg);
    let large_arc = if arc.sweep() > 180.0 { 1 } else { 0 };
    format!("M {cx:.3} {cy:.3} L {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 {large_arc} 1 {x1:.3} {y1:.3} Z")
}

/// Plot area inside an SVG view box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// y coordinate for `value` on a `0..=max` axis.
    pub fn y_for(&self, value: f64, max: f64) -> f32 {
        if max <= 0.0 {
            return self.bottom();
        }
        let ratio = (value / max).clamp(0.0, 1.0) as f32;
        self.bottom() - ratio * self.height
    }

    /// x coordinate of the `i`-th of `n` evenly spaced points, first and last on the edges.
    pub fn x_at(&self, i: usize, n: usize) -> f32 {
        if n <= 1 {
            return self.left + self.width / 2.0;
        }
        self.left + self.width * (i as f32) / ((n - 1) as f32)
    }
}

/// Axis maximum rounded up to a "nice" 1/2/5 step so tick labels stay readable.
pub fn nice_max(max: f64) -> f64 {
    if max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    let normalized = max / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

/// Polyline through the data points.
pub fn line_path(frame: &Frame, values: &[f64], max: f64) -> String {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let cmd = if i == 0 { "M" } else { "L" };
            format!("{cmd} {:.3} {:.3}", frame.x_at(i, n), frame.y_for(*v, max))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The line closed down to the baseline, for the filled area under it.
pub fn area_path(frame: &Frame, values: &[f64], max: f64) -> String {
    let n = values.len();
    if n == 0 {
        return String::new();
    }
    let first_x = frame.x_at(0, n);
    let last_x = frame.x_at(n - 1, n);
    let base = frame.bottom();
    format!(
        "M {first_x:.3} {base:.3} {} L {last_x:.3} {base:.3} Z",
        line_path(frame, values, max).replacen('M', "L", 1)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Frame = Frame {
        left: 10.0,
        top: 10.0,
        width: 100.0,
        height: 50.0,
    };

    #[test]
    fn polar_starts_at_twelve_oclock() {
        let (x, y) = polar(50.0, 50.0, 10.0, 0.0);
        assert!((x - 50.0).abs() < 1e-4);
        assert!((y - 40.0).abs() < 1e-4);
        let (x, y) = polar(50.0, 50.0, 10.0, 90.0);
        assert!((x - 60.0).abs() < 1e-4);
        assert!((y - 50.0).abs() < 1e-4);
    }

    #[test]
    fn arcs_cover_the_circle() {
        let arcs = slice_arcs(&[34.3, 32.1, 26.4, 7.2]);
        assert_eq!(arcs.len(), 4);
        assert_eq!(arcs[0].start_deg, 0.0);
        let total: f32 = arcs.iter().map(|a| a.sweep()).sum();
        assert!((total - 360.0).abs() < 1e-3);
        for pair in arcs.windows(2) {
            assert_eq!(pair[0].end_deg, pair[1].start_deg);
        }
    }

    #[test]
    fn empty_or_zero_values_yield_no_arcs() {
        assert!(slice_arcs(&[]).is_empty());
        assert!(slice_arcs(&[0.0, 0.0]).is_empty());
        let arcs = slice_arcs(&[-1.0, 2.0]);
        assert_eq!(arcs[0].sweep(), 0.0);
        assert!((arcs[1].sweep() - 360.0).abs() < 1e-3);
    }

    #[test]
    fn large_slices_use_large_arc_flag() {
        let big = SliceArc {
            start_deg: 0.0,
            end_deg: 270.0,
        };
        assert!(slice_path(0.0, 0.0, 1.0, &big).contains(" 0 1 1 "));
        let small = SliceArc {
            start_deg: 0.0,
            end_deg: 90.0,
        };
        assert!(slice_path(0.0, 0.0, 1.0, &small).contains(" 0 0 1 "));
    }

    #[test]
    fn y_scale_clamps_and_handles_zero_max() {
        assert_eq!(FRAME.y_for(0.0, 100.0), 60.0);
        assert_eq!(FRAME.y_for(100.0, 100.0), 10.0);
        assert_eq!(FRAME.y_for(250.0, 100.0), 10.0);
        assert_eq!(FRAME.y_for(5.0, 0.0), 60.0);
    }

    #[test]
    fn x_positions_span_the_frame() {
        assert_eq!(FRAME.x_at(0, 5), 10.0);
        assert_eq!(FRAME.x_at(4, 5), 110.0);
        assert_eq!(FRAME.x_at(0, 1), 60.0);
    }

    #[test]
    fn nice_max_rounds_up() {
        assert_eq!(nice_max(3200.0), 5000.0);
        assert_eq!(nice_max(52_000.0), 100_000.0);
        assert_eq!(nice_max(1500.0), 2000.0);
        assert_eq!(nice_max(7.5), 10.0);
        assert_eq!(nice_max(0.0), 1.0);
    }

    #[test]
    fn area_closes_on_baseline() {
        let path = area_path(&FRAME, &[0.0, 50.0, 100.0], 100.0);
        assert!(path.starts_with("M 10.000 60.000 L 10.000 60.000"));
        assert!(path.ends_with("L 110.000 60.000 Z"));
        assert!(path.contains("L 60.000 35.000"));
        assert_eq!(area_path(&FRAME, &[], 1.0), "");
    }
}
