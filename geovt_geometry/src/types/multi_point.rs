use super::{GeometryTrait, PointGeometry};
use anyhow::Result;

#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl GeometryTrait for MultiPointGeometry {
	fn verify(&self) -> Result<()> {
		Ok(())
	}

	fn num_points(&self) -> usize {
		self.0.len()
	}
}

crate::impl_composite!(MultiPointGeometry, PointGeometry);
crate::impl_from_array!(MultiPointGeometry, PointGeometry);

impl From<geo::MultiPoint<f64>> for MultiPointGeometry {
	fn from(geometry: geo::MultiPoint<f64>) -> Self {
		MultiPointGeometry(geometry.0.into_iter().map(PointGeometry::from).collect())
	}
}
