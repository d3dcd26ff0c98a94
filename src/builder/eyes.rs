use super::config::CELL_UNIT;
use super::dots::{Placement, PlacementKind};
use crate::common::Shape;

// Finder eyes
//------------------------------------------------------------------------------

/// Composite eye from normalized inner and outer shapes, both centered on the origin
pub fn eye_shape(inner: &Shape, outer: &Shape) -> Shape {
    inner.union(outer)
}

/// Centers of the three finder corners: top-left, bottom-left and bottom-right, with row 0 at
/// the bottom
pub fn eye_anchors(size: usize) -> [[f64; 2]; 3] {
    let near = 3.0 * CELL_UNIT;
    let far = (size as f64 - 4.0) * CELL_UNIT;
    [[near, far], [near, near], [far, near]]
}

pub fn place_eyes(size: usize, eye: &Shape) -> [Placement<'_>; 3] {
    eye_anchors(size).map(|[x, y]| Placement::new(PlacementKind::Eye, x, y, eye))
}

#[cfg(test)]
mod eye_tests {
    use super::{eye_anchors, eye_shape, place_eyes};
    use crate::builder::config::CELL_UNIT;
    use crate::builder::dots::PlacementKind;
    use crate::builder::reserved::is_reserved;
    use crate::common::Shape;

    #[test]
    fn test_anchors_21() {
        let u = CELL_UNIT;
        assert_eq!(eye_anchors(21), [[3.0 * u, 17.0 * u], [3.0 * u, 3.0 * u], [17.0 * u, 3.0 * u]]);
    }

    #[test]
    fn test_anchors_sit_on_reserved_cells() {
        for size in [21, 25, 41, 177] {
            for [x, y] in eye_anchors(size) {
                let (col, row) = ((x / CELL_UNIT) as usize, (y / CELL_UNIT) as usize);
                assert!(is_reserved(col, row, size), "size {size}: ({col}, {row})");
            }
        }
    }

    #[test]
    fn test_eye_shape() {
        let inner = Shape::square(3.0 * CELL_UNIT);
        let outer = Shape::square(7.0 * CELL_UNIT).subtract(&Shape::square(5.0 * CELL_UNIT));
        let eye = eye_shape(&inner, &outer);
        let exp = (9.0 + 24.0) * CELL_UNIT * CELL_UNIT;
        assert!((eye.area() - exp).abs() < 1e-6);
        assert_eq!(eye.polygons().0.len(), 2);
    }

    #[test]
    fn test_place_eyes() {
        let eye = Shape::square(7.0 * CELL_UNIT);
        let eyes = place_eyes(21, &eye);
        assert!(eyes.iter().all(|p| p.kind == PlacementKind::Eye));
        let b = eyes[1].placed().bounds().unwrap();
        assert!((b.min[0] + 0.5 * CELL_UNIT).abs() < 1e-9);
        assert!((b.max[0] - 6.5 * CELL_UNIT).abs() < 1e-9);
    }
}
