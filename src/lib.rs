//! # qrcraft
//!
//! A Rust library that compiles the module grid of a QR code into a single planar region made of
//! decorative shapes. The region can be handed to a vector exporter, a rasterizer or a solid
//! extruder while staying scannable.
//!
//! ## Features
//!
//! - **Stylized dots**: Any shape per module, with padding and a separate shape for isolated modules
//! - **Connectors**: Intermediate shapes joining horizontal and vertical neighbours, plus middle
//!   dots that close 2x2 blocks
//! - **Custom eyes**: Inner and outer finder shapes drawn over the three finder corners
//! - **Presets**: The classic dot styles (`lines`, `dotsInterFill`, `heart`, ...) by name
//! - **Deterministic output**: Same grid and configuration always give the same polygons
//!
//! ## Quick Start
//!
//! ```rust
//! use qrcraft::{ModuleGrid, QRShapeBuilder, ShapeLibrary};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Any encoder output works, here a blank version 1 grid
//! let grid = ModuleGrid::empty(21);
//!
//! let library = ShapeLibrary::default();
//! let region = QRShapeBuilder::new(&library)
//!     .size(25.0, 25.0)  // Physical size of the output, aspect ratio is kept
//!     .build(&grid)?;
//!
//! let bounds = region.bounds().unwrap();
//! assert!((bounds.width() - 25.0).abs() < 1e-6);
//! # Ok(())
//! # }
//! ```
//!
//! ### Styled Dots and Eyes
//!
//! ```rust
//! use qrcraft::{
//!     DecorationConfig, ECLevel, EyeConfig, ModuleGrid, Orientation, QRShapeBuilder, ShapeLibrary,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let library = ShapeLibrary::default();
//! let mut grid = ModuleGrid::empty(21);
//! grid.set(10, 10, true);
//! grid.set(11, 10, true);
//!
//! let region = QRShapeBuilder::new(&library)
//!     .decoration(DecorationConfig::preset("dotsInterThinHor")?.with_ec_level(ECLevel::H))
//!     .eyes(EyeConfig::named("circle", "outerEyeCircle"))
//!     .orientation(Orientation::y_up())
//!     .build(&grid)?;
//! assert!(region.area() > 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Layout Space
//!
//! Every module is [`CELL_UNIT`] wide. Cell `(col, row)` is centered at
//! `(col * CELL_UNIT, row * CELL_UNIT)`, eyes sit over the finder corners at the low/high ends
//! of the grid, and the final region is rescaled and centered on the origin.

pub mod builder;
pub(crate) mod common;
pub mod encode;
pub mod shapes;

pub use builder::{
    DecorationConfig, EyeConfig, Intermediate, Orientation, Placement, PlacementKind,
    QRShapeBuilder, ShapeSet, CELL_UNIT,
};
pub use common::{Axis, Bounds, ECLevel, ModuleGrid, Modules, QRError, QRResult, Shape};
pub use encode::Encoder;
pub use shapes::{BuiltinShapes, ShapeLibrary, ShapeRef, ShapeSource, Target};
