use crate::common::{Axis, ECLevel, QRError, QRResult, Shape};
use crate::shapes::{ShapeRef, Target};

/// Side of one module in layout space, before the final rescale
pub const CELL_UNIT: f64 = 2.0;

// Dot decoration
//------------------------------------------------------------------------------

/// Connector drawn between two dark neighbours, fitted into its own box
#[derive(Debug, Clone, PartialEq)]
pub struct Intermediate {
    pub shape: ShapeRef,
    pub target: Target,
}

impl Intermediate {
    pub fn new(shape: impl Into<ShapeRef>, target: Target) -> Self {
        Self { shape: shape.into(), target }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecorationConfig {
    pub dot_shape: ShapeRef,
    pub small_dot_shape: Option<ShapeRef>,
    pub intermediate: Option<Intermediate>,
    pub horizontal_fill: bool,
    pub vertical_fill: bool,
    pub fill: bool,
    pub padding: f64,
    pub only_dots_on_ends: bool,
    pub ec_level: ECLevel,
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            dot_shape: Shape::square(CELL_UNIT).into(),
            small_dot_shape: None,
            intermediate: None,
            horizontal_fill: false,
            vertical_fill: false,
            fill: false,
            padding: 0.0,
            only_dots_on_ends: false,
            ec_level: ECLevel::M,
        }
    }
}

impl DecorationConfig {
    pub fn with_dot_shape(mut self, shape: impl Into<ShapeRef>) -> Self {
        self.dot_shape = shape.into();
        self
    }

    pub fn with_small_dot_shape(mut self, shape: impl Into<ShapeRef>) -> Self {
        self.small_dot_shape = Some(shape.into());
        self
    }

    pub fn with_intermediate(mut self, intermediate: Intermediate) -> Self {
        self.intermediate = Some(intermediate);
        self
    }

    pub fn with_horizontal_fill(mut self, on: bool) -> Self {
        self.horizontal_fill = on;
        self
    }

    pub fn with_vertical_fill(mut self, on: bool) -> Self {
        self.vertical_fill = on;
        self
    }

    pub fn with_fill(mut self, on: bool) -> Self {
        self.fill = on;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_only_dots_on_ends(mut self, on: bool) -> Self {
        self.only_dots_on_ends = on;
        self
    }

    pub fn with_ec_level(mut self, ec_level: ECLevel) -> Self {
        self.ec_level = ec_level;
        self
    }

    pub fn tries_vertical(&self) -> bool {
        self.vertical_fill || self.fill
    }

    pub fn tries_horizontal(&self) -> bool {
        self.horizontal_fill || self.fill
    }

    /// Footprint of the main dot after padding
    pub fn dot_target(&self) -> Target {
        Target::square((1.0 - self.padding) * CELL_UNIT)
    }

    pub fn validate(&self) -> QRResult<()> {
        if !(0.0..1.0).contains(&self.padding) {
            return Err(QRError::InvalidPadding);
        }
        if let Some(i) = &self.intermediate {
            i.target.validate()?;
        }
        Ok(())
    }
}

// Finder eyes
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct EyeConfig {
    pub inner: ShapeRef,
    pub outer: ShapeRef,
}

impl Default for EyeConfig {
    fn default() -> Self {
        let frame = Shape::square(7.0 * CELL_UNIT).subtract(&Shape::square(5.0 * CELL_UNIT));
        Self { inner: Shape::square(3.0 * CELL_UNIT).into(), outer: frame.into() }
    }
}

impl EyeConfig {
    pub fn named(inner: &str, outer: &str) -> Self {
        Self { inner: ShapeRef::named(inner), outer: ShapeRef::named(outer) }
    }
}

// Coordinate convention of the consuming renderer
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Orientation {
    /// Turn every resolved shape by 180° before placement
    pub rotate_shapes: bool,
    /// Mirror the compiled region before the final rescale
    pub mirror: Option<Axis>,
}

impl Orientation {
    pub const fn native() -> Self {
        Self { rotate_shapes: false, mirror: None }
    }

    /// Row 0 at the top with y growing upwards, as CAD and mesh consumers expect
    pub const fn y_up() -> Self {
        Self { rotate_shapes: true, mirror: Some(Axis::Y) }
    }
}
