use super::{Coordinates, GeometryTrait};
use anyhow::{Result, ensure};

/// A closed loop of coordinates, the building block of polygons.
/// The first and last coordinates are expected to be identical.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// Returns `true` if the ring is non-empty and its first and last coordinates are equal.
	#[must_use]
	pub fn is_closed(&self) -> bool {
		!self.0.is_empty() && self.0.first() == self.0.last()
	}
}

impl GeometryTrait for RingGeometry {
	/// Verifies that the ring:
	/// - has at least 4 coordinates (3 unique points plus the closing point),
	/// - is closed.
	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 4, "Ring must have at least 4 points");
		ensure!(self.is_closed(), "Ring must be closed");
		Ok(())
	}

	fn num_points(&self) -> usize {
		self.0.len()
	}
}

crate::impl_composite!(RingGeometry, Coordinates);
crate::impl_from_array!(RingGeometry, Coordinates);

impl From<geo::LineString<f64>> for RingGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		RingGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}
