//! Segment-to-equation translation.
//!
//! Turns vector path segments into graphing-calculator expressions: shallow
//! lines become `y = mx + b` with a domain restriction, cubic curves become
//! a parametric pair in `t`.
//!
//! Formatting policy: slope and intercept at full precision, domain/range
//! bounds at two decimals, cubic coefficients at one decimal. The output is
//! read by a human-facing renderer and never re-parsed.

use rayon::prelude::*;

use crate::geom::{Outline, Segment};

/// Stand-in divisor for slope computation when a line has zero horizontal
/// extent.
///
/// An approximation, not vertical-line detection: the slope of a vertical
/// segment comes out around 1e4 rather than infinite, so the `x = c` branch
/// in [`translate`] never fires and steep segments are dropped by the slope
/// threshold instead.
pub const VERTICAL_SLOPE_EPSILON: f64 = 0.0001;

/// Maximum |slope| rendered as a function of x.
pub const SLOPE_THRESHOLD: f64 = 1.0;

/// Translate one segment into an equation, if it has one.
///
/// Lines steeper than [`SLOPE_THRESHOLD`] yield `None` unless the slope is
/// exactly infinite; unsupported segment kinds always yield `None`.
pub fn translate(segment: &Segment) -> Option<String> {
    match *segment {
        Segment::Line { start, end } => {
            let (x1, y1) = (start.x, start.y);
            let (x2, y2) = (end.x, end.y);
            let d = x2 - x1;
            let d = if d == 0.0 { VERTICAL_SLOPE_EPSILON } else { d };
            let m = (y2 - y1) / d;
            let b = y1 - m * x1;
            if m.abs() <= SLOPE_THRESHOLD {
                Some(format!(
                    "y = {:?}x + {:?} \\left\\{{ {:.2} \\leq x \\leq {:.2} \\right\\}}",
                    m,
                    b,
                    x1.min(x2),
                    x1.max(x2),
                ))
            } else if m.is_infinite() {
                Some(format!(
                    "x = {:.2} \\left\\{{ {:.2} \\leq y \\leq {:.2} \\right\\}}",
                    x1,
                    y1.min(y2),
                    y1.max(y2),
                ))
            } else {
                None
            }
        }
        Segment::Cubic {
            start,
            control1,
            control2,
            end,
        } => {
            let x_expr = parametric_expr(start.x, control1.x, control2.x, end.x);
            let y_expr = parametric_expr(start.y, control1.y, control2.y, end.y);
            Some(format!("\\left({},{}\\right)", x_expr, y_expr))
        }
        // Quadratics and arcs: skipped, not an error.
        Segment::Unsupported { .. } => None,
    }
}

/// One coordinate of the cubic Bézier basis, coefficients to one decimal.
fn parametric_expr(c0: f64, c1: f64, c2: f64, c3: f64) -> String {
    format!(
        "(1 - t)^3*{:.1} + 3*t*(1 - t)^2*{:.1} + 3*t^2*(1 - t)*{:.1} + t^3*{:.1}",
        c0, c1, c2, c3,
    )
}

/// Translate every outline, in traversal order.
///
/// Outlines carry no cross-outline state, so they are translated in
/// parallel; collecting the per-outline batches before flattening keeps the
/// output in input order.
pub fn collect(outlines: &[Outline]) -> Vec<String> {
    let per_outline: Vec<Vec<String>> = outlines
        .par_iter()
        .map(|outline| outline.segments.iter().filter_map(translate).collect())
        .collect();
    per_outline.into_iter().flatten().collect()
}
