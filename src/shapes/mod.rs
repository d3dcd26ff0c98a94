mod builtin;
mod presets;

pub use builtin::BuiltinShapes;
pub use presets::PRESET_NAMES;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::common::{QRError, QRResult, Shape};

/// Tolerance used to simplify every normalized shape
pub const SIMPLIFY_TOLERANCE: f64 = 0.01;

// Reference to a shape, either by name or as a ready region
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeRef {
    Named(String),
    Region(Shape),
}

impl ShapeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

impl From<Shape> for ShapeRef {
    fn from(shape: Shape) -> Self {
        Self::Region(shape)
    }
}

// Supplier of base shapes by name
//------------------------------------------------------------------------------

pub trait ShapeSource {
    /// Returns the raw shape for `name`, or [`QRError::UnknownShape`].
    fn resolve(&self, name: &str) -> QRResult<Shape>;
}

impl<S: ShapeSource + ?Sized> ShapeSource for &S {
    fn resolve(&self, name: &str) -> QRResult<Shape> {
        (**self).resolve(name)
    }
}

impl ShapeSource for HashMap<String, Shape> {
    fn resolve(&self, name: &str) -> QRResult<Shape> {
        self.get(name).cloned().ok_or_else(|| QRError::UnknownShape(name.to_string()))
    }
}

// Normalization
//------------------------------------------------------------------------------

/// Box a shape is fitted into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub width: f64,
    pub height: f64,
    pub keep_aspect: bool,
}

impl Target {
    pub const fn new(width: f64, height: f64, keep_aspect: bool) -> Self {
        Self { width, height, keep_aspect }
    }

    pub const fn square(side: f64) -> Self {
        Self::new(side, side, true)
    }

    pub fn validate(&self) -> QRResult<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(QRError::InvalidSize)
        }
    }

    fn key(&self) -> (u64, u64, bool) {
        (self.width.to_bits(), self.height.to_bits(), self.keep_aspect)
    }
}

/// Scales about the origin so the bounds fit `width` x `height`. With `keep_aspect` the smaller
/// factor is used on both axes.
pub fn scale_to_size(shape: &Shape, width: f64, height: f64, keep_aspect: bool) -> Shape {
    let Some(b) = shape.bounds() else {
        return shape.clone();
    };
    let factor = |target: f64, extent: f64| if extent > 0.0 { target / extent } else { 1.0 };
    let sx = factor(width, b.width());
    let sy = factor(height, b.height());
    if keep_aspect {
        let s = sx.min(sy);
        shape.scale(s, s)
    } else {
        shape.scale(sx, sy)
    }
}

/// Moves the bounds center onto the origin
pub fn center(shape: &Shape) -> Shape {
    match shape.bounds() {
        Some(b) => {
            let [cx, cy] = b.center();
            shape.translate(-cx, -cy)
        }
        None => shape.clone(),
    }
}

pub fn scale_to_size_and_center(shape: &Shape, target: Target) -> Shape {
    center(&scale_to_size(shape, target.width, target.height, target.keep_aspect))
}

fn normalize(shape: &Shape, target: Target) -> Shape {
    scale_to_size_and_center(shape, target).simplify(SIMPLIFY_TOLERANCE)
}

// Shape source with a lazily filled cache of normalized shapes
//------------------------------------------------------------------------------

type ShapeKey = (String, (u64, u64, bool));

pub struct ShapeLibrary<S> {
    source: S,
    cache: Mutex<HashMap<ShapeKey, Shape>>,
}

impl Default for ShapeLibrary<BuiltinShapes> {
    fn default() -> Self {
        Self::new(BuiltinShapes)
    }
}

impl<S: ShapeSource> ShapeLibrary<S> {
    pub fn new(source: S) -> Self {
        Self { source, cache: Mutex::new(HashMap::new()) }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolves `shape`, fits it into `target`, centers it on the origin and simplifies it.
    /// Named shapes are cached per target.
    pub fn normalized(&self, shape: &ShapeRef, target: Target) -> QRResult<Shape> {
        target.validate()?;
        let name = match shape {
            ShapeRef::Region(region) => return Ok(normalize(region, target)),
            ShapeRef::Named(name) => name,
        };

        let key = (name.clone(), target.key());
        if let Some(hit) = self.lock().get(&key) {
            debug!(shape = %name, "Shape cache hit");
            return Ok(hit.clone());
        }

        debug!(shape = %name, width = target.width, height = target.height, "Resolving shape");
        let normalized = normalize(&self.source.resolve(name)?, target);
        self.lock().insert(key, normalized.clone());
        Ok(normalized)
    }

    pub fn cached(&self) -> usize {
        self.lock().len()
    }

    // Cached entries are immutable once inserted, so a poisoned map is still consistent
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<ShapeKey, Shape>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
