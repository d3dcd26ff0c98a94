use super::config::{DecorationConfig, CELL_UNIT};
use super::reserved::{count_neighbors, is_filled, is_reserved};
use crate::common::{Modules, Shape};

// Placed shape instance
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementKind {
    /// Connector between a cell and its right or upper neighbour
    Intermediate,
    /// Dot at the shared corner of a 2x2 block
    Middle,
    Dot,
    SmallDot,
    Eye,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Placement<'s> {
    pub kind: PlacementKind,
    pub offset: [f64; 2],
    pub shape: &'s Shape,
}

impl<'s> Placement<'s> {
    pub fn new(kind: PlacementKind, x: f64, y: f64, shape: &'s Shape) -> Self {
        Self { kind, offset: [x, y], shape }
    }

    pub fn placed(&self) -> Shape {
        self.shape.translate(self.offset[0], self.offset[1])
    }
}

// Normalized shapes for one generation call
//------------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ShapeSet {
    pub dot: Shape,
    pub small_dot: Option<Shape>,
    pub intermediate: Option<Shape>,
    /// Intermediate turned by 90° for vertical connections
    pub intermediate_vertical: Option<Shape>,
    pub eye: Shape,
}

// Dot placement
//------------------------------------------------------------------------------

/// Walks the grid in row-major order and emits every dot, middle dot and connector
pub fn place_dots<'s, G: Modules + ?Sized>(
    grid: &G,
    cfg: &DecorationConfig,
    shapes: &'s ShapeSet,
) -> Vec<Placement<'s>> {
    let size = grid.size();
    let mut res = Vec::new();

    for i in 0..size * size {
        let col = i % size;
        let row = i / size;

        if !grid.is_dark(col, row) || is_reserved(col, row, size) {
            continue;
        }

        place_intermediates(grid, cfg, shapes, col, row, &mut res);

        if cfg.fill {
            place_middle_dot(grid, shapes, col, row, &mut res);
        }

        let (x, y) = (col as f64 * CELL_UNIT, row as f64 * CELL_UNIT);
        let neighbors = count_neighbors(grid, col, row);
        if cfg.only_dots_on_ends {
            if neighbors < 2 {
                res.push(Placement::new(PlacementKind::Dot, x, y, &shapes.dot));
            }
        } else if let (Some(small), 0) = (&shapes.small_dot, neighbors) {
            res.push(Placement::new(PlacementKind::SmallDot, x, y, small));
        } else {
            res.push(Placement::new(PlacementKind::Dot, x, y, &shapes.dot));
        }
    }

    res
}

fn place_intermediates<'s, G: Modules + ?Sized>(
    grid: &G,
    cfg: &DecorationConfig,
    shapes: &'s ShapeSet,
    col: usize,
    row: usize,
    res: &mut Vec<Placement<'s>>,
) {
    let (Some(horizontal), Some(vertical)) = (&shapes.intermediate, &shapes.intermediate_vertical)
    else {
        return;
    };
    let (c, r) = (col as isize, row as isize);
    let (x, y) = (col as f64 * CELL_UNIT, row as f64 * CELL_UNIT);

    if cfg.tries_vertical() && is_filled(grid, c, r + 1) {
        res.push(Placement::new(PlacementKind::Intermediate, x, y + CELL_UNIT / 2.0, vertical));
    }
    if cfg.tries_horizontal() && is_filled(grid, c + 1, r) {
        res.push(Placement::new(PlacementKind::Intermediate, x + CELL_UNIT / 2.0, y, horizontal));
    }
}

// Fills the gap in the middle of a 2x2 block whose cells are all filled
fn place_middle_dot<'s, G: Modules + ?Sized>(
    grid: &G,
    shapes: &'s ShapeSet,
    col: usize,
    row: usize,
    res: &mut Vec<Placement<'s>>,
) {
    let (c, r) = (col as isize, row as isize);
    let block = [(c, r), (c, r + 1), (c + 1, r), (c + 1, r + 1)];
    if block.iter().all(|&(bc, br)| is_filled(grid, bc, br)) {
        let x = col as f64 * CELL_UNIT + CELL_UNIT / 2.0;
        let y = row as f64 * CELL_UNIT + CELL_UNIT / 2.0;
        res.push(Placement::new(PlacementKind::Middle, x, y, &shapes.dot));
    }
}
