//! Projects geographic features into normalized tile space.
//!
//! Every coordinate is mapped with a spherical Mercator projection into
//! `[0, 1] × [0, 1]`, lines are annotated with their cumulative length and
//! rings with their area, and each line or ring is handed to a [`Simplifier`]
//! that records per-point importance for the later tiling stage.
//!
//! ```
//! use geovt_geometry::{GeoCollection, GeoFeature, Geometry};
//! use geovt_projection::{IdCounter, convert};
//!
//! let features = GeoCollection::from(vec![GeoFeature::new(Geometry::new_point([0.0, 0.0]))]);
//! let mut ids = IdCounter::new();
//! let projected = convert(&features, 0.0, true, &mut ids, false);
//! assert_eq!(projected.features[0].id.as_u64(), Some(0));
//! assert_eq!(ids.peek(), 1);
//! ```

mod config;
mod converter;
mod id;
mod metrics;
mod point;
mod projector;
mod simplify;
mod types;

pub use config::*;
pub use converter::*;
pub use id::*;
pub use metrics::*;
pub use point::*;
pub use projector::*;
pub use simplify::*;
pub use types::*;
