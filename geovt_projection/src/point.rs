use geovt_geometry::Coordinates;
use std::f64::consts::PI;

/// A coordinate in tile space.
///
/// `x` and `y` are normalized to the whole world, independent of zoom level.
/// `z` starts at 0 and is written by a [`crate::Simplifier`] to record how
/// important the point is for the shape.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProjectedPoint {
	pub x: f64,
	pub y: f64,
	pub z: f64,
}

impl ProjectedPoint {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y, z: 0.0 }
	}
}

/// Projects a longitude/latitude pair (degrees) into tile space.
///
/// `x` is not wrapped, so longitudes outside `[-180, 180]` give `x` outside
/// `[0, 1]`. `y` is always clamped into `[0, 1]`: at the poles the logarithm
/// runs to an infinity, which the clamp folds to 0 (north) or 1 (south).
#[must_use]
pub fn project_point(coord: &Coordinates) -> ProjectedPoint {
	let sine = (coord.y() * PI / 180.0).sin();
	let x = coord.x() / 360.0 + 0.5;
	let y = (0.5 - 0.25 * ((1.0 + sine) / (1.0 - sine)).ln() / PI).clamp(0.0, 1.0);
	ProjectedPoint::new(x, y)
}
