use crate::{ProjectedPoint, retained_points};

/// A projected closed loop with its absolute area in tile-space units.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectedRing {
	pub points: Vec<ProjectedPoint>,
	pub area: f64,
}

impl ProjectedRing {
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
