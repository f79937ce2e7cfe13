// Tile-space counterparts of the input geometry model. Lines carry their
// cumulative length and visible span, rings their area, and composite kinds
// mirror the nesting of the geometry they were projected from.

mod collection;
mod feature;
mod geometry;
mod linestring;
mod multi;
mod polygon;
mod ring;

pub use collection::*;
pub use feature::*;
pub use geometry::*;
pub use linestring::*;
pub use multi::*;
pub use polygon::*;
pub use ring::*;
