use std::f64::consts::PI;

use geo::{
    AffineOps, AffineTransform, Area, BooleanOps, BoundingRect, Coord, LineString, MultiPolygon,
    Point, Polygon, Rotate, Scale, Simplify, Translate,
};

// Axis aligned bounds of a shape
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f64 {
        self.max[1] - self.min[1]
    }

    pub fn center(&self) -> [f64; 2] {
        [(self.max[0] + self.min[0]) / 2.0, (self.max[1] + self.min[1]) / 2.0]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

// Immutable planar region. Every operation returns a new shape.
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Shape(MultiPolygon<f64>);

impl Default for Shape {
    fn default() -> Self {
        Self(MultiPolygon::new(Vec::new()))
    }
}

impl From<MultiPolygon<f64>> for Shape {
    fn from(mp: MultiPolygon<f64>) -> Self {
        Self(mp)
    }
}

impl From<Polygon<f64>> for Shape {
    fn from(p: Polygon<f64>) -> Self {
        Self(MultiPolygon::new(vec![p]))
    }
}

impl Shape {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a shape from an outer ring and optional holes. Rings need not be closed.
    pub fn from_rings(exterior: &[(f64, f64)], holes: &[Vec<(f64, f64)>]) -> Self {
        let ring = |pts: &[(f64, f64)]| LineString::from(pts.to_vec());
        let interiors = holes.iter().map(|h| ring(h)).collect();
        Polygon::new(ring(exterior), interiors).into()
    }

    /// Axis aligned rectangle centered at the origin
    pub fn rect(w: f64, h: f64) -> Self {
        let (x, y) = (w / 2.0, h / 2.0);
        Self::from_rings(&[(-x, -y), (x, -y), (x, y), (-x, y)], &[])
    }

    pub fn square(side: f64) -> Self {
        Self::rect(side, side)
    }

    /// Regular polygon centered at the origin with its first vertex at `phase` radians
    pub fn regular_polygon(sides: usize, radius: f64, phase: f64) -> Self {
        let pts = (0..sides)
            .map(|i| {
                let a = phase + 2.0 * PI * i as f64 / sides as f64;
                (radius * a.cos(), radius * a.sin())
            })
            .collect::<Vec<_>>();
        Self::from_rings(&pts, &[])
    }

    pub fn circle(radius: f64) -> Self {
        Self::regular_polygon(CIRCLE_SEGMENTS, radius, 0.0)
    }

    pub fn polygons(&self) -> &MultiPolygon<f64> {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 .0.is_empty()
    }

    pub fn area(&self) -> f64 {
        self.0.unsigned_area()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.0
            .bounding_rect()
            .map(|r| Bounds { min: [r.min().x, r.min().y], max: [r.max().x, r.max().y] })
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self(self.0.translate(dx, dy))
    }

    /// Counter-clockwise rotation in degrees about the origin
    pub fn rotate(&self, degrees: f64) -> Self {
        Self(self.0.rotate_around_point(degrees, Point::new(0.0, 0.0)))
    }

    /// Scales about the origin
    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        Self(self.0.scale_around_point(sx, sy, Coord { x: 0.0, y: 0.0 }))
    }

    /// Reflects by negating the coordinate of the given axis
    pub fn mirror(&self, axis: Axis) -> Self {
        let t = match axis {
            Axis::X => AffineTransform::new(-1.0, 0.0, 0.0, 0.0, 1.0, 0.0),
            Axis::Y => AffineTransform::new(1.0, 0.0, 0.0, 0.0, -1.0, 0.0),
        };
        Self(self.0.affine_transform(&t))
    }

    pub fn union(&self, other: &Shape) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        Self(self.0.union(&other.0))
    }

    pub fn subtract(&self, other: &Shape) -> Self {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }
        Self(self.0.difference(&other.0))
    }

    /// Unions all shapes by pairwise reduction, keeping operand sizes balanced
    pub fn union_all<I: IntoIterator<Item = Shape>>(shapes: I) -> Self {
        let mut level = shapes.into_iter().filter(|s| !s.is_empty()).collect::<Vec<_>>();
        while level.len() > 1 {
            level = level
                .chunks(2)
                .map(|pair| match pair {
                    [a, b] => a.union(b),
                    [a] => a.clone(),
                    _ => unreachable!(),
                })
                .collect();
        }
        level.pop().unwrap_or_default()
    }

    /// Collapses vertices closer than `tolerance` and drops polygons left without area
    pub fn simplify(&self, tolerance: f64) -> Self {
        let simplified = self.0.simplify(&tolerance);
        let polys =
            simplified.0.into_iter().filter(|p| p.unsigned_area() > f64::EPSILON).collect();
        Self(MultiPolygon::new(polys))
    }
}

const CIRCLE_SEGMENTS: usize = 64;

#[cfg(test)]
mod shape_tests {
    use super::{Axis, Bounds, Shape};

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-6, "{a} != {b}");
    }

    fn assert_bounds(s: &Shape, min: [f64; 2], max: [f64; 2]) {
        let Bounds { min: m, max: x } = s.bounds().unwrap();
        assert_close(m[0], min[0]);
        assert_close(m[1], min[1]);
        assert_close(x[0], max[0]);
        assert_close(x[1], max[1]);
    }

    #[test]
    fn test_rect_bounds() {
        let r = Shape::rect(4.0, 2.0);
        assert_bounds(&r, [-2.0, -1.0], [2.0, 1.0]);
        assert_close(r.area(), 8.0);
    }

    #[test]
    fn test_empty_has_no_bounds() {
        assert!(Shape::empty().bounds().is_none());
        assert_close(Shape::empty().area(), 0.0);
    }

    #[test]
    fn test_translate() {
        let r = Shape::square(2.0).translate(3.0, -1.0);
        assert_bounds(&r, [2.0, -2.0], [4.0, 0.0]);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let r = Shape::rect(4.0, 2.0).rotate(90.0);
        assert_bounds(&r, [-1.0, -2.0], [1.0, 2.0]);
    }

    #[test]
    fn test_scale_about_origin() {
        let r = Shape::square(2.0).translate(1.0, 1.0).scale(2.0, 3.0);
        assert_bounds(&r, [0.0, 0.0], [4.0, 6.0]);
    }

    #[test]
    fn test_mirror() {
        let r = Shape::square(2.0).translate(5.0, 3.0);
        assert_bounds(&r.mirror(Axis::X), [-6.0, 2.0], [-4.0, 4.0]);
        assert_bounds(&r.mirror(Axis::Y), [4.0, -4.0], [6.0, -2.0]);
    }

    #[test]
    fn test_union_overlapping() {
        let a = Shape::square(2.0);
        let b = Shape::square(2.0).translate(1.0, 0.0);
        let u = a.union(&b);
        assert_close(u.area(), 6.0);
        assert_bounds(&u, [-1.0, -1.0], [2.0, 1.0]);
    }

    #[test]
    fn test_union_disjoint() {
        let a = Shape::square(1.0);
        let b = Shape::square(1.0).translate(5.0, 0.0);
        assert_close(a.union(&b).area(), 2.0);
    }

    #[test]
    fn test_union_is_idempotent() {
        let a = Shape::square(2.0);
        assert_close(a.union(&a).area(), 4.0);
    }

    #[test]
    fn test_subtract() {
        let frame = Shape::square(7.0).subtract(&Shape::square(5.0));
        assert_close(frame.area(), 24.0);
        assert_bounds(&frame, [-3.5, -3.5], [3.5, 3.5]);
    }

    #[test]
    fn test_union_all() {
        let shapes = (0..5).map(|i| Shape::square(1.0).translate(i as f64 * 2.0, 0.0));
        let u = Shape::union_all(shapes);
        assert_close(u.area(), 5.0);
        assert_eq!(u.polygons().0.len(), 5);
        assert!(Shape::union_all(Vec::new()).is_empty());
    }

    #[test]
    fn test_simplify_drops_collinear_points() {
        let ring = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.001), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)];
        let s = Shape::from_rings(&ring, &[]);
        let simplified = s.simplify(0.01);
        assert_eq!(simplified.polygons().0[0].exterior().0.len(), 5);
    }

    #[test]
    fn test_circle_area() {
        let c = Shape::circle(1.0);
        assert!((c.area() - std::f64::consts::PI).abs() < 0.01);
    }
}
