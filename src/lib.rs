//! img2desmos: raster image → graphing-calculator equations.
//!
//! Detects edges in a bitmap image, vectorizes the edge bitmap into path
//! outlines with the external potrace tool, and translates every line and
//! cubic curve segment into a closed-form expression with the right domain
//! restriction or parameterization.
//!
//! # Example
//!
//! ```no_run
//! use img2desmos::{convert, ConvertConfig};
//! use std::path::Path;
//!
//! let config = ConvertConfig::default();
//! let result = convert(Path::new("koala.jpg"), &config)?;
//! for equation in &result.equations {
//!     println!("{equation}");
//! }
//! # Ok::<(), img2desmos::ConvertError>(())
//! ```

#![forbid(unsafe_code)]

mod bitmap;
mod config;
mod vectorize;

pub mod equation;
pub mod error;
pub mod geom;
pub mod svg;

// Re-export kurbo so downstream users get the same version used by the
// points in geom::Segment.
pub use kurbo;

pub use config::ConvertConfig;
pub use error::ConvertError;

use std::path::Path;
use std::time::Instant;

use image::GrayImage;

use geom::{Outline, Segment};

/// The result of a conversion: equations plus the intermediate edge bitmap.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Equations in outline-then-segment traversal order.
    pub equations: Vec<String>,
    /// The inverted Canny edge bitmap handed to the vectorizer.
    pub edge_image: GrayImage,
    /// Number of traced outlines.
    pub outline_count: usize,
}

/// Full pipeline: image path → equations.
///
/// Edge detection, external vectorization, outline parsing, translation.
/// A blank image yields an empty equation list, not an error.
pub fn convert(image_path: &Path, config: &ConvertConfig) -> Result<ConvertResult, ConvertError> {
    let t_start = Instant::now();

    // ── Edge detection ────────────────────────────────────
    let edge_image = bitmap::detect_edges(image_path, config)?;
    let (w, h) = edge_image.dimensions();
    eprintln!(
        "  Edges       {}x{} px, Canny {}/{}",
        w, h, config.canny_low, config.canny_high
    );

    // ── Vectorize & parse ─────────────────────────────────
    let svg_text = vectorize::vectorize(&edge_image, config)?;
    let outlines = svg::parse_outlines(&svg_text)?;
    let (cubics, lines, unsupported) = count_segments(&outlines);
    eprintln!(
        "  Trace       {} outlines \u{2192} {} curves + {} lines",
        outlines.len(),
        cubics,
        lines
    );

    // ── Translate ─────────────────────────────────────────
    let equations = equation::collect(&outlines);
    let dropped = cubics + lines + unsupported - equations.len();
    let elapsed = t_start.elapsed().as_millis();
    eprintln!(
        "  Translate   {} equations ({} segments dropped)  ({}ms)",
        equations.len(),
        dropped,
        elapsed
    );

    Ok(ConvertResult {
        equations,
        edge_image,
        outline_count: outlines.len(),
    })
}

/// Translate an SVG document's outlines directly, skipping edge detection
/// and vectorization.
pub fn svg_to_equations(svg_text: &str) -> Result<Vec<String>, ConvertError> {
    let outlines = svg::parse_outlines(svg_text)?;
    Ok(equation::collect(&outlines))
}

/// Count (cubic, line, unsupported) segments in a set of outlines.
pub fn count_segments(outlines: &[Outline]) -> (usize, usize, usize) {
    let mut cubics = 0;
    let mut lines = 0;
    let mut unsupported = 0;
    for outline in outlines {
        for segment in &outline.segments {
            match segment {
                Segment::Cubic { .. } => cubics += 1,
                Segment::Line { .. } => lines += 1,
                Segment::Unsupported { .. } => unsupported += 1,
            }
        }
    }
    (cubics, lines, unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_to_equations_runs_the_source_and_collector() {
        // One shallow line, one vertical-ish line (dropped), one cubic.
        let svg_text = r#"<svg><path d="M0 0 L4 2 L4 7 C 5 9 7 9 8 7"/></svg>"#;
        let equations = svg_to_equations(svg_text).unwrap();
        assert_eq!(equations.len(), 2);
        assert!(equations[0].starts_with("y = 0.5x"));
        assert!(equations[1].starts_with("\\left("));
    }

    #[test]
    fn count_segments_distinguishes_kinds() {
        let svg_text = r#"<svg><path d="M0 0 L1 1 C 1 2 2 2 3 1 q 1 1 2 0"/></svg>"#;
        let outlines = svg::parse_outlines(svg_text).unwrap();
        assert_eq!(count_segments(&outlines), (1, 1, 1));
    }
}
