use tracing::debug;

use super::config::Orientation;
use super::dots::Placement;
use crate::common::Shape;
use crate::shapes::{scale_to_size_and_center, Target};

// Region compositor
//------------------------------------------------------------------------------

/// Unions every placement into one region in layout space
pub fn union_placements(placements: &[Placement]) -> Shape {
    debug!(count = placements.len(), "Unioning placements");
    Shape::union_all(placements.iter().map(Placement::placed))
}

/// Applies the renderer convention, then fits the region into `target` centered on the origin
pub fn finish(region: &Shape, orientation: Orientation, target: Target) -> Shape {
    let oriented = match orientation.mirror {
        Some(axis) => region.mirror(axis),
        None => region.clone(),
    };
    debug!(width = target.width, height = target.height, "Rescaling region");
    scale_to_size_and_center(&oriented, target)
}
