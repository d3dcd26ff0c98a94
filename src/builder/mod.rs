mod compose;
mod config;
mod dots;
mod eyes;
mod reserved;

pub use compose::{finish, union_placements};
pub use config::{DecorationConfig, EyeConfig, Intermediate, Orientation, CELL_UNIT};
pub use dots::{place_dots, Placement, PlacementKind, ShapeSet};
pub use eyes::{eye_anchors, eye_shape, place_eyes};
pub use reserved::{can_access, count_neighbors, is_filled, is_reserved};

use tracing::{debug, info};

use crate::common::{Modules, QRResult, Shape};
use crate::encode::Encoder;
use crate::shapes::{ShapeLibrary, ShapeRef, ShapeSource, Target};

/// Physical size of the output when none is requested
pub const DEFAULT_SIZE: f64 = 25.0;

pub struct QRShapeBuilder<'a, S> {
    library: &'a ShapeLibrary<S>,
    decoration: DecorationConfig,
    eyes: EyeConfig,
    target: Target,
    orientation: Orientation,
}

impl<'a, S: ShapeSource> QRShapeBuilder<'a, S> {
    pub fn new(library: &'a ShapeLibrary<S>) -> Self {
        Self {
            library,
            decoration: DecorationConfig::default(),
            eyes: EyeConfig::default(),
            target: Target::square(DEFAULT_SIZE),
            orientation: Orientation::native(),
        }
    }

    pub fn decoration(&mut self, decoration: DecorationConfig) -> &mut Self {
        self.decoration = decoration;
        self
    }

    pub fn eyes(&mut self, eyes: EyeConfig) -> &mut Self {
        self.eyes = eyes;
        self
    }

    pub fn size(&mut self, width: f64, height: f64) -> &mut Self {
        self.target = Target::new(width, height, self.target.keep_aspect);
        self
    }

    pub fn keep_aspect(&mut self, keep_aspect: bool) -> &mut Self {
        self.target.keep_aspect = keep_aspect;
        self
    }

    pub fn orientation(&mut self, orientation: Orientation) -> &mut Self {
        self.orientation = orientation;
        self
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Size: {}x{}, Ec level: {}, Padding: {}, Fill: {}/{}/{}, Ends only: {} }}",
            self.target.width,
            self.target.height,
            self.decoration.ec_level,
            self.decoration.padding,
            self.decoration.horizontal_fill,
            self.decoration.vertical_fill,
            self.decoration.fill,
            self.decoration.only_dots_on_ends,
        )
    }
}


impl<S: ShapeSource> QRShapeBuilder<'_, S> {
    /// Resolves and normalizes every shape the configuration needs
    pub fn shapes(&self) -> QRResult<ShapeSet> {
        self.decoration.validate()?;
        self.target.validate()?;

        let turn = |s: Shape| if self.orientation.rotate_shapes { s.rotate(180.0) } else { s };
        let normalized = |s: &ShapeRef, t: Target| self.library.normalized(s, t);

        debug!("Resolving dot shapes...");
        let dot_target = self.decoration.dot_target();
        let dot = turn(normalized(&self.decoration.dot_shape, dot_target)?);
        let small_dot = match &self.decoration.small_dot_shape {
            Some(s) => Some(turn(normalized(s, dot_target)?)),
            None => None,
        };
        let intermediate = match &self.decoration.intermediate {
            Some(i) => Some(normalized(&i.shape, i.target)?),
            None => None,
        };
        let intermediate_vertical = intermediate.as_ref().map(|s| s.rotate(90.0));

        debug!("Resolving eye shapes...");
        let inner = turn(normalized(&self.eyes.inner, Target::square(3.0 * CELL_UNIT))?);
        let outer = turn(normalized(&self.eyes.outer, Target::square(7.0 * CELL_UNIT))?);
        let eye = eye_shape(&inner, &outer);

        Ok(ShapeSet { dot, small_dot, intermediate, intermediate_vertical, eye })
    }

    /// Every placement for `grid`: dots and connectors in row-major order, then the three eyes
    pub fn layout<'s, G: Modules + ?Sized>(
        &self,
        grid: &G,
        shapes: &'s ShapeSet,
    ) -> Vec<Placement<'s>> {
        debug!("Placing dots...");
        let mut placements = place_dots(grid, &self.decoration, shapes);

        debug!("Placing eyes...");
        placements.extend(place_eyes(grid.size(), &shapes.eye));
        placements
    }

    /// Compiles `grid` into one region fitted to the requested size
    pub fn build<G: Modules + ?Sized>(&self, grid: &G) -> QRResult<Shape> {
        info!(size = grid.size(), config = %self.metadata(), "Compiling QR shape");

        let shapes = self.shapes()?;
        let placements = self.layout(grid, &shapes);
        let region = union_placements(&placements);
        let res = finish(&region, self.orientation, self.target);

        info!(
            placements = placements.len(),
            polygons = res.polygons().0.len(),
            "QR shape compiled"
        );
        Ok(res)
    }

    /// Encodes `text` with the configured error correction level, then compiles the grid
    pub fn generate<E: Encoder + ?Sized>(&self, text: &str, encoder: &E) -> QRResult<Shape> {
        self.decoration.validate()?;

        debug!(ec_level = %self.decoration.ec_level, "Encoding text...");
        let grid = encoder.encode(text, self.decoration.ec_level)?;
        self.build(&grid)
    }
}
