//! Input model for geovt: geographic coordinates, the closed set of geometry
//! kinds, and features carrying properties and identifiers.
//!
//! Coordinates are longitude/latitude in degrees. Nothing in this crate
//! projects or simplifies; see `geovt_projection` for that.

mod collection;
mod feature;
mod geometry;
mod id;
mod properties;
mod types;
mod value;

pub use collection::*;
pub use feature::*;
pub use geometry::*;
pub use id::*;
pub use properties::*;
pub use types::*;
pub use value::*;
