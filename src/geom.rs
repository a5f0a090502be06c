//! Shared geometry types for vector outlines.

use kurbo::Point;

/// One indivisible piece of a vector outline.
///
/// Coordinates are in the space the vectorizer emitted (image pixel space,
/// y increasing downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Straight line between two points.
    Line { start: Point, end: Point },
    /// Cubic Bézier curve.
    Cubic {
        start: Point,
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// A kind the translator does not handle (quadratic, arc). Only the
    /// endpoint is kept so traversal stays well-defined.
    Unsupported { end: Point },
}

/// An ordered run of segments forming one contiguous outline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    pub segments: Vec<Segment>,
}
