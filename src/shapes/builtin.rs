use std::f64::consts::{FRAC_PI_2, FRAC_PI_8, PI};

use super::ShapeSource;
use crate::common::{QRError, QRResult, Shape};

// Procedurally drawn shapes. Sizes are arbitrary since every shape is normalized before use.
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinShapes;

impl BuiltinShapes {
    pub const NAMES: [&'static str; 22] = [
        "square",
        "squareRounded",
        "circle",
        "octagon",
        "diamond",
        "plus",
        "star",
        "heart",
        "xShape",
        "squareHollow",
        "squareHollow2",
        "line",
        "thinLine",
        "wideLine",
        "outerEyeSquare",
        "outerEyeSquareRounded",
        "outerEyeCircle",
        "outerEyeOctagon",
        "outerEyeInnerSquareRounded",
        "outerEyeSquareSingleSharpCorner",
        "outerEyeSquareGrid",
        "outerEyeCircleGrid",
    ];
}

impl ShapeSource for BuiltinShapes {
    fn resolve(&self, name: &str) -> QRResult<Shape> {
        let shape = match name {
            // Dots & inner eyes
            "square" => Shape::square(10.0),
            "squareRounded" => rounded_square(10.0, [2.5; 4]),
            "circle" => Shape::circle(5.0),
            "octagon" => octagon(5.0),
            "diamond" => Shape::regular_polygon(4, 5.0, 0.0),
            "plus" => plus(10.0, 10.0 / 3.0),
            "star" => star(5, 5.0, 2.0),
            "heart" => heart(),
            "xShape" => plus(10.0, 10.0 / 3.0).rotate(45.0),
            "squareHollow" => Shape::square(10.0).subtract(&Shape::square(6.0)),
            "squareHollow2" => {
                Shape::square(10.0).subtract(&Shape::square(7.0)).union(&Shape::square(4.0))
            }

            // Connectors between neighbouring dots
            "line" => Shape::rect(9.0, 4.0),
            "thinLine" => Shape::rect(3.0, 1.0),
            "wideLine" => Shape::rect(2.0, 1.8),

            // Outer eye frames, 7 modules wide with a 5 module opening
            "outerEyeSquare" => Shape::square(7.0).subtract(&Shape::square(5.0)),
            "outerEyeSquareRounded" => {
                rounded_square(7.0, [1.5; 4]).subtract(&rounded_square(5.0, [0.75; 4]))
            }
            "outerEyeCircle" => Shape::circle(3.5).subtract(&Shape::circle(2.5)),
            "outerEyeOctagon" => octagon(3.5).subtract(&octagon(2.5)),
            "outerEyeInnerSquareRounded" => {
                Shape::square(7.0).subtract(&rounded_square(5.0, [1.0; 4]))
            }
            "outerEyeSquareSingleSharpCorner" => {
                let outer = rounded_square(7.0, [1.5, 1.5, 0.0, 1.5]);
                outer.subtract(&rounded_square(5.0, [0.75, 0.75, 0.0, 0.75]))
            }
            "outerEyeSquareGrid" => module_ring(&Shape::square(GRID_MODULE)),
            "outerEyeCircleGrid" => module_ring(&Shape::circle(GRID_MODULE / 2.0)),
            _ => return Err(QRError::UnknownShape(name.to_string())),
        };
        Ok(shape)
    }
}

const ARC_SEGMENTS: usize = 8;

/// Square centered at the origin with per corner radii, counter-clockwise from bottom left
fn rounded_square(side: f64, radii: [f64; 4]) -> Shape {
    let h = side / 2.0;
    let corners = [(-h, -h, PI), (h, -h, 3.0 * FRAC_PI_2), (h, h, 0.0), (-h, h, FRAC_PI_2)];
    let mut pts = Vec::with_capacity(4 * (ARC_SEGMENTS + 1));
    for ((x, y, start), r) in corners.into_iter().zip(radii) {
        if r <= 0.0 {
            pts.push((x, y));
            continue;
        }
        // Arc center sits inset by r from both edges
        let cx = x - r * x.signum();
        let cy = y - r * y.signum();
        for i in 0..=ARC_SEGMENTS {
            let a = start + FRAC_PI_2 * i as f64 / ARC_SEGMENTS as f64;
            pts.push((cx + r * a.cos(), cy + r * a.sin()));
        }
    }
    Shape::from_rings(&pts, &[])
}

fn octagon(radius: f64) -> Shape {
    Shape::regular_polygon(8, radius, FRAC_PI_8)
}

// Side of one module in the grid frames, leaving a gap to its neighbours
const GRID_MODULE: f64 = 0.8;

/// The 24 modules on the border of a 7x7 block, one `module` centered on each
fn module_ring(module: &Shape) -> Shape {
    let ring = (0..7i32)
        .flat_map(|r| (0..7i32).map(move |c| (c, r)))
        .filter(|&(c, r)| c == 0 || c == 6 || r == 0 || r == 6)
        .map(|(c, r)| module.translate(f64::from(c - 3), f64::from(r - 3)));
    Shape::union_all(ring)
}

fn plus(span: f64, arm: f64) -> Shape {
    let (s, a) = (span / 2.0, arm / 2.0);
    let pts = [
        (-a, -s),
        (a, -s),
        (a, -a),
        (s, -a),
        (s, a),
        (a, a),
        (a, s),
        (-a, s),
        (-a, a),
        (-s, a),
        (-s, -a),
        (-a, -a),
    ];
    Shape::from_rings(&pts, &[])
}

fn star(points: usize, outer: f64, inner: f64) -> Shape {
    let pts = (0..points * 2)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let a = FRAC_PI_2 + PI * i as f64 / points as f64;
            (r * a.cos(), r * a.sin())
        })
        .collect::<Vec<_>>();
    Shape::from_rings(&pts, &[])
}

fn heart() -> Shape {
    const SAMPLES: usize = 96;
    let pts = (0..SAMPLES)
        .map(|i| {
            let t = 2.0 * PI * i as f64 / SAMPLES as f64;
            let x = 16.0 * t.sin().powi(3);
            let y =
                13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
            (x, y)
        })
        .collect::<Vec<_>>();
    Shape::from_rings(&pts, &[])
}

#[cfg(test)]
mod builtin_tests {
    use test_case::test_case;

    use super::BuiltinShapes;
    use crate::common::QRError;
    use crate::shapes::ShapeSource;

    #[test]
    fn test_all_names_resolve() {
        for name in BuiltinShapes::NAMES {
            let shape = BuiltinShapes.resolve(name).unwrap();
            assert!(shape.area() > 0.0, "{name} has no area");
        }
    }

    #[test]
    fn test_unknown() {
        assert_eq!(
            BuiltinShapes.resolve("outerEyeTriangle"),
            Err(QRError::UnknownShape("outerEyeTriangle".to_string()))
        );
    }

    #[test_case("outerEyeSquare", 24.0)]
    #[test_case("squareHollow", 64.0)]
    #[test_case("square", 100.0)]
    #[test_case("outerEyeSquareGrid", 24.0 * 0.64)]
    fn test_area(name: &str, exp: f64) {
        let area = BuiltinShapes.resolve(name).unwrap().area();
        assert!((area - exp).abs() < 1e-6, "{name}: {area}");
    }

    #[test]
    fn test_rounded_square_is_smaller_than_square() {
        let rounded = BuiltinShapes.resolve("squareRounded").unwrap();
        let b = rounded.bounds().unwrap();
        assert!((b.width() - 10.0).abs() < 1e-9);
        assert!(rounded.area() < 100.0);
    }

    #[test]
    fn test_frames_have_openings() {
        let names = [
            "outerEyeCircle",
            "outerEyeOctagon",
            "outerEyeSquareSingleSharpCorner",
            "outerEyeSquareGrid",
            "outerEyeCircleGrid",
        ];
        for name in names {
            let frame = BuiltinShapes.resolve(name).unwrap();
            let b = frame.bounds().unwrap();
            assert!(frame.area() < b.width() * b.height() * 0.8, "{name} is not hollow");
        }
    }

    #[test_case("outerEyeSquareGrid")]
    #[test_case("outerEyeCircleGrid")]
    fn test_grid_frames(name: &str) {
        let frame = BuiltinShapes.resolve(name).unwrap();
        assert_eq!(frame.polygons().0.len(), 24);
        let b = frame.bounds().unwrap();
        assert!((b.width() - 6.8).abs() < 1e-6 && (b.height() - 6.8).abs() < 1e-6);
        assert!(b.center()[0].abs() < 1e-6 && b.center()[1].abs() < 1e-6);
    }
}
