//! SVG path data output.
//!
//! Commands are written in absolute coordinates with comma separated arguments,
//! for example `M0,0L10,0 Q15,5,20,0`.

use crate::geom::{Curve, Point, Segment};
use crate::path::Path;
use crate::segment::PathSegment;

/// Parameters of the SVG output.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SvgOptions {
    /// Number of points per hundred units of length used when a curve is
    /// approximated with lines.
    pub resolution: f64,
    /// Approximate every curve with lines, including the ones SVG can express.
    pub approximate: bool,
}

impl SvgOptions {
    pub const DEFAULT_RESOLUTION: f64 = 5.0;
}

impl Default for SvgOptions {
    fn default() -> Self {
        SvgOptions {
            resolution: Self::DEFAULT_RESOLUTION,
            approximate: false,
        }
    }
}

/// Serializes the drawing commands of a single segment, without the initial move.
pub fn segment_to_svg(segment: &PathSegment<Point>, options: &SvgOptions) -> String {
    if let PathSegment::Path(path) = segment {
        return write_commands(path, options, path.first_point());
    }

    if options.approximate {
        return lines(&approximate(segment, options.resolution));
    }

    match segment {
        PathSegment::Line(line) => format!("L{},{}", line.to.x, line.to.y),
        PathSegment::Polyline(poly) => lines(poly.points.get(1..).unwrap_or(&[])),
        PathSegment::Quadratic(q) => {
            format!("Q{},{},{},{}", q.ctrl.x, q.ctrl.y, q.to.x, q.to.y)
        }
        PathSegment::Cubic(c) => format!(
            "C{},{},{},{},{},{}",
            c.ctrl1.x, c.ctrl1.y, c.ctrl2.x, c.ctrl2.y, c.to.x, c.to.y
        ),
        PathSegment::Ellipse(arc) => arc
            .to_svg_arcs()
            .iter()
            .map(|a| {
                format!(
                    "A{},{},{},{},{},{},{}",
                    a.radii.x,
                    a.radii.y,
                    a.x_rotation.to_degrees(),
                    a.flags.large_arc as u8,
                    a.flags.sweep as u8,
                    a.to.x,
                    a.to.y
                )
            })
            .collect::<Vec<_>>()
            .join(" "),
        PathSegment::CatmullRom(_) | PathSegment::Spline(_) | PathSegment::Path(_) => {
            lines(&approximate(segment, options.resolution))
        }
    }
}

/// Serializes a path.
///
/// A move command precedes the first segment and every segment that does not start
/// where the previous one ends.
pub fn path_to_svg(path: &Path<Point>, options: &SvgOptions) -> String {
    write_commands(path, options, None)
}

/// `previous` is the pen position before the first segment.
fn write_commands(
    path: &Path<Point>,
    options: &SvgOptions,
    mut previous: Option<Point>,
) -> String {
    let mut commands = Vec::with_capacity(path.len());
    for segment in path.segments() {
        let start = segment.from();
        let mut command = String::new();
        if previous != Some(start) {
            command += &format!("M{},{}", start.x, start.y);
        }
        command += &segment_to_svg(segment, options);
        commands.push(command);
        previous = Some(segment.to());
    }

    commands.join(" ")
}

/// Points evenly spaced along the segment, `resolution` per hundred units of length.
fn approximate(segment: &PathSegment<Point>, resolution: f64) -> Vec<Point> {
    let divisions = (segment.length() * resolution / 100.0).floor().max(1.0) as usize;
    log::trace!("approximating a segment with {} lines", divisions);

    segment.spaced_points(divisions)
}

fn lines(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("L{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
use crate::geom::{
    point, Angle, CatmullRomSegment, CubicBezierSegment, EllipticArc, LineSegment, Polyline,
    QuadraticBezierSegment, Vector,
};

#[test]
fn connected_segments() {
    let mut path: Path<Point> = Path::new();
    path.add(LineSegment {
        from: point(0.0, 0.0),
        to: point(10.0, 0.0),
    });
    path.add(QuadraticBezierSegment {
        from: point(10.0, 0.0),
        ctrl: point(15.0, 5.0),
        to: point(20.0, 0.0),
    });
    path.add(CubicBezierSegment {
        from: point(20.0, 0.0),
        ctrl1: point(21.0, 1.0),
        ctrl2: point(22.5, 1.0),
        to: point(23.0, 0.0),
    });
    assert_eq!(
        path_to_svg(&path, &SvgOptions::default()),
        "M0,0L10,0 Q15,5,20,0 C21,1,22.5,1,23,0"
    );
}

#[test]
fn disconnected_segments() {
    let mut path: Path<Point> = Path::new();
    path.add(LineSegment {
        from: point(0.0, 0.0),
        to: point(10.0, 0.0),
    });
    path.add(Polyline::new(vec![
        point(0.0, 5.0),
        point(5.0, 5.0),
        point(5.0, 10.0),
    ]));
    assert_eq!(
        path_to_svg(&path, &SvgOptions::default()),
        "M0,0L10,0 M0,5L5,5 L5,10"
    );
}

#[test]
fn arcs() {
    let options = SvgOptions::default();
    let quarter: PathSegment<Point> =
        EllipticArc::circle(point(0.0, 0.0), 2.0, Angle::zero(), Angle::frac_pi_2(), false)
            .into();
    let svg = segment_to_svg(&quarter, &options);
    assert!(svg.starts_with("A2,2,0,0,1,"), "{}", svg);

    let long_way: PathSegment<Point> =
        EllipticArc::circle(point(0.0, 0.0), 2.0, Angle::zero(), Angle::frac_pi_2(), true).into();
    let svg = segment_to_svg(&long_way, &options);
    assert!(svg.starts_with("A2,2,0,1,0,"), "{}", svg);

    let full: PathSegment<Point> =
        EllipticArc::ellipse(point(0.0, 0.0), Vector::new(3.0, 1.0), Angle::frac_pi_2()).into();
    let svg = segment_to_svg(&full, &options);
    assert_eq!(svg.matches('A').count(), 2);
    assert!(svg.starts_with("A3,1,90,1,1,"), "{}", svg);

    let empty: PathSegment<Point> =
        EllipticArc::circle(point(0.0, 0.0), 2.0, Angle::zero(), Angle::zero(), false).into();
    assert_eq!(segment_to_svg(&empty, &options), "");
}

#[test]
fn approximated_curves() {
    let catmull_rom: PathSegment<Point> = CatmullRomSegment {
        prev: point(-110.0, 0.0),
        from: point(0.0, 0.0),
        to: point(110.0, 0.0),
        next: point(220.0, 0.0),
    }
    .into();
    // 110 units at 5 points per hundred units.
    let svg = segment_to_svg(&catmull_rom, &SvgOptions::default());
    assert_eq!(svg.matches('L').count(), 6);
    assert!(svg.starts_with("L0,0 L"), "{}", svg);

    let line: PathSegment<Point> = LineSegment {
        from: point(0.0, 0.0),
        to: point(10.0, 0.0),
    }
    .into();
    let options = SvgOptions {
        approximate: true,
        ..SvgOptions::default()
    };
    assert_eq!(segment_to_svg(&line, &options), "L0,0 L10,0");
}

#[test]
fn nested_paths() {
    let mut inner: Path<Point> = Path::new();
    inner.add(LineSegment {
        from: point(10.0, 0.0),
        to: point(10.0, 10.0),
    });
    let mut path: Path<Point> = Path::new();
    path.add(LineSegment {
        from: point(0.0, 0.0),
        to: point(10.0, 0.0),
    });
    path.add(inner);
    assert_eq!(
        path_to_svg(&path, &SvgOptions::default()),
        "M0,0L10,0 L10,10"
    );
}

#[test]
fn disconnected_nested_paths() {
    let mut inner: Path<Point> = Path::new();
    inner.add(LineSegment {
        from: point(20.0, 0.0),
        to: point(20.0, 10.0),
    });
    inner.add(LineSegment {
        from: point(30.0, 0.0),
        to: point(30.0, 10.0),
    });
    let mut path: Path<Point> = Path::new();
    path.add(LineSegment {
        from: point(0.0, 0.0),
        to: point(10.0, 0.0),
    });
    path.add(inner.clone());
    assert_eq!(
        path_to_svg(&path, &SvgOptions::default()),
        "M0,0L10,0 M20,0L20,10 M30,0L30,10"
    );

    // On its own the nested path starts at the pen position.
    let nested: PathSegment<Point> = inner.into();
    assert_eq!(
        segment_to_svg(&nested, &SvgOptions::default()),
        "L20,10 M30,0L30,10"
    );
}
