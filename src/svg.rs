//! Geometry source: SVG path elements → vector outlines.
//!
//! Reads the `d` attribute of every `<path>` element in document order and
//! walks the path data, producing one [`Outline`] per subpath. Transforms on
//! enclosing elements are ignored; coordinates stay in the space the
//! vectorizer emitted.

use kurbo::Point;
use quick_xml::events::Event;
use svgtypes::{PathParser, PathSegment};

use crate::error::ConvertError;
use crate::geom::{Outline, Segment};

/// Extract and parse all path outlines from an SVG document.
pub fn parse_outlines(svg: &str) -> Result<Vec<Outline>, ConvertError> {
    let mut outlines = Vec::new();
    for data in path_data(svg)? {
        parse_path_data(&data, &mut outlines)?;
    }
    Ok(outlines)
}

/// Collect the `d` attribute of every `<path>` element in document order.
fn path_data(svg: &str) -> Result<Vec<String>, ConvertError> {
    let mut reader = quick_xml::Reader::from_str(svg);
    let mut data = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                if e.name().as_ref() == b"path" {
                    for attr in e.attributes().filter_map(Result::ok) {
                        if attr.key.as_ref() == b"d" {
                            let value = attr.unescape_value().map_err(|err| {
                                ConvertError::InvalidGeometry(format!(
                                    "bad path attribute: {err}"
                                ))
                            })?;
                            data.push(value.into_owned());
                        }
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                return Err(ConvertError::InvalidGeometry(format!(
                    "svg parse error: {err}"
                )));
            }
        }
    }
    Ok(data)
}

/// Walk one `d` attribute, appending finished outlines.
fn parse_path_data(data: &str, outlines: &mut Vec<Outline>) -> Result<(), ConvertError> {
    let mut current = Point::ZERO;
    let mut subpath_start = Point::ZERO;
    let mut outline = Outline::default();
    // Second control point of the previous cubic, for smooth (S/s) curves.
    let mut prev_ctrl2: Option<Point> = None;

    for token in PathParser::from(data) {
        let segment = token
            .map_err(|err| ConvertError::InvalidGeometry(format!("bad path data: {err}")))?;
        match segment {
            PathSegment::MoveTo { abs, x, y } => {
                if !outline.segments.is_empty() {
                    outlines.push(std::mem::take(&mut outline));
                }
                current = resolve(abs, current, x, y);
                subpath_start = current;
                prev_ctrl2 = None;
            }
            PathSegment::LineTo { abs, x, y } => {
                let end = resolve(abs, current, x, y);
                outline.segments.push(Segment::Line {
                    start: current,
                    end,
                });
                current = end;
                prev_ctrl2 = None;
            }
            PathSegment::HorizontalLineTo { abs, x } => {
                let end = Point::new(if abs { x } else { current.x + x }, current.y);
                outline.segments.push(Segment::Line {
                    start: current,
                    end,
                });
                current = end;
                prev_ctrl2 = None;
            }
            PathSegment::VerticalLineTo { abs, y } => {
                let end = Point::new(current.x, if abs { y } else { current.y + y });
                outline.segments.push(Segment::Line {
                    start: current,
                    end,
                });
                current = end;
                prev_ctrl2 = None;
            }
            PathSegment::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let control1 = resolve(abs, current, x1, y1);
                let control2 = resolve(abs, current, x2, y2);
                let end = resolve(abs, current, x, y);
                outline.segments.push(Segment::Cubic {
                    start: current,
                    control1,
                    control2,
                    end,
                });
                prev_ctrl2 = Some(control2);
                current = end;
            }
            PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                // First control point mirrors the previous cubic's second
                // control point across the current point; falls back to the
                // current point when the previous segment was not a cubic.
                let control1 = match prev_ctrl2 {
                    Some(c) => Point::new(2.0 * current.x - c.x, 2.0 * current.y - c.y),
                    None => current,
                };
                let control2 = resolve(abs, current, x2, y2);
                let end = resolve(abs, current, x, y);
                outline.segments.push(Segment::Cubic {
                    start: current,
                    control1,
                    control2,
                    end,
                });
                prev_ctrl2 = Some(control2);
                current = end;
            }
            PathSegment::Quadratic { abs, x, y, .. }
            | PathSegment::SmoothQuadratic { abs, x, y }
            | PathSegment::EllipticalArc { abs, x, y, .. } => {
                // Not translatable; keep the endpoint so the walk stays
                // consistent.
                let end = resolve(abs, current, x, y);
                outline.segments.push(Segment::Unsupported { end });
                current = end;
                prev_ctrl2 = None;
            }
            PathSegment::ClosePath { .. } => {
                if current != subpath_start {
                    outline.segments.push(Segment::Line {
                        start: current,
                        end: subpath_start,
                    });
                }
                current = subpath_start;
                if !outline.segments.is_empty() {
                    outlines.push(std::mem::take(&mut outline));
                }
                prev_ctrl2 = None;
            }
        }
    }

    if !outline.segments.is_empty() {
        outlines.push(outline);
    }
    Ok(())
}

fn resolve(abs: bool, current: Point, x: f64, y: f64) -> Point {
    if abs {
        Point::new(x, y)
    } else {
        Point::new(current.x + x, current.y + y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn potrace_style_path_parses_to_lines_and_cubics() {
        let svg = r##"<?xml version="1.0"?>
<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
<g transform="translate(0,10) scale(0.1,-0.1)" fill="#000000" stroke="none">
<path d="M10 20 l 30 0 c 10 0 20 10 20 20 z"/>
</g>
</svg>"##;
        let outlines = parse_outlines(svg).unwrap();
        assert_eq!(outlines.len(), 1);

        let segments = &outlines[0].segments;
        assert_eq!(segments.len(), 3);
        assert_eq!(
            segments[0],
            Segment::Line {
                start: Point::new(10.0, 20.0),
                end: Point::new(40.0, 20.0),
            }
        );
        assert_eq!(
            segments[1],
            Segment::Cubic {
                start: Point::new(40.0, 20.0),
                control1: Point::new(50.0, 20.0),
                control2: Point::new(60.0, 30.0),
                end: Point::new(60.0, 40.0),
            }
        );
        // z closes back to the subpath start with a line.
        assert_eq!(
            segments[2],
            Segment::Line {
                start: Point::new(60.0, 40.0),
                end: Point::new(10.0, 20.0),
            }
        );
    }

    #[test]
    fn close_on_a_closed_subpath_adds_no_segment() {
        let svg = r#"<svg><path d="M0 0 L10 0 L10 10 L0 0 Z"/></svg>"#;
        let outlines = parse_outlines(svg).unwrap();
        assert_eq!(outlines.len(), 1);
        assert_eq!(outlines[0].segments.len(), 3);
    }

    #[test]
    fn horizontal_and_vertical_commands_become_lines() {
        let svg = r#"<svg><path d="M1 2 h 4 V 10"/></svg>"#;
        let outlines = parse_outlines(svg).unwrap();
        let segments = &outlines[0].segments;
        assert_eq!(
            segments[0],
            Segment::Line {
                start: Point::new(1.0, 2.0),
                end: Point::new(5.0, 2.0),
            }
        );
        assert_eq!(
            segments[1],
            Segment::Line {
                start: Point::new(5.0, 2.0),
                end: Point::new(5.0, 10.0),
            }
        );
    }

    #[test]
    fn smooth_curve_reflects_previous_control() {
        let svg = r#"<svg><path d="M0 0 C 0 10 10 10 10 0 S 20 -10 20 0"/></svg>"#;
        let outlines = parse_outlines(svg).unwrap();
        let segments = &outlines[0].segments;
        assert_eq!(segments.len(), 2);
        assert_eq!(
            segments[1],
            Segment::Cubic {
                start: Point::new(10.0, 0.0),
                control1: Point::new(10.0, -10.0),
                control2: Point::new(20.0, -10.0),
                end: Point::new(20.0, 0.0),
            }
        );
    }

    #[test]
    fn unsupported_kinds_keep_the_current_point() {
        let svg = r#"<svg><path d="M0 0 q 5 5 10 0 l 10 0"/></svg>"#;
        let outlines = parse_outlines(svg).unwrap();
        let segments = &outlines[0].segments;
        assert_eq!(
            segments[0],
            Segment::Unsupported {
                end: Point::new(10.0, 0.0),
            }
        );
        assert_eq!(
            segments[1],
            Segment::Line {
                start: Point::new(10.0, 0.0),
                end: Point::new(20.0, 0.0),
            }
        );
    }

    #[test]
    fn subpaths_become_separate_outlines() {
        let svg = r#"<svg><path d="M0 0 h 10 M20 0 v 5"/></svg>"#;
        let outlines = parse_outlines(svg).unwrap();
        assert_eq!(outlines.len(), 2);
        assert_eq!(outlines[0].segments.len(), 1);
        assert_eq!(outlines[1].segments.len(), 1);
        assert_eq!(
            outlines[1].segments[0],
            Segment::Line {
                start: Point::new(20.0, 0.0),
                end: Point::new(20.0, 5.0),
            }
        );
    }

    #[test]
    fn paths_parse_in_document_order() {
        let svg = r#"<svg><path d="M0 0 l 1 0"/><path d="M5 5 l 1 0"/></svg>"#;
        let outlines = parse_outlines(svg).unwrap();
        assert_eq!(outlines.len(), 2);
        assert_eq!(
            outlines[0].segments[0],
            Segment::Line {
                start: Point::new(0.0, 0.0),
                end: Point::new(1.0, 0.0),
            }
        );
        assert_eq!(
            outlines[1].segments[0],
            Segment::Line {
                start: Point::new(5.0, 5.0),
                end: Point::new(6.0, 5.0),
            }
        );
    }

    #[test]
    fn bad_path_data_is_invalid_geometry() {
        let svg = r#"<svg><path d="M 0 0 C 1 2 3"/></svg>"#;
        let err = parse_outlines(svg).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidGeometry(_)));
    }

    #[test]
    fn svg_without_paths_is_empty() {
        assert!(parse_outlines("<svg></svg>").unwrap().is_empty());
    }
}
