use crate::{ProjectedPoint, retained_points};

/// A projected open path.
///
/// `dist` is the cumulative planar length in tile-space units. `seg_start` and
/// `seg_end` mark the visible span along that length, initially the whole line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectedLineString {
	pub points: Vec<ProjectedPoint>,
	pub dist: f64,
	pub seg_start: f64,
	pub seg_end: f64,
}

impl ProjectedLineString {
	pub fn len(&self) -> usize {
		self.points.len()
	}

	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	/// Points kept when displaying at `tolerance`, see [`retained_points`].
	#[must_use]
	pub fn retained(&self, tolerance: f64) -> Vec<ProjectedPoint> {
		retained_points(&self.points, tolerance)
	}
}
