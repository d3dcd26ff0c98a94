pub mod error;
pub mod grid;
pub mod metadata;
pub mod region;

pub use error::*;
pub use grid::*;
pub use metadata::*;
pub use region::*;
