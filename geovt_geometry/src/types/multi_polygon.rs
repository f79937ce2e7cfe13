use super::{GeometryTrait, PolygonGeometry};
use anyhow::Result;

#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl GeometryTrait for MultiPolygonGeometry {
	fn verify(&self) -> Result<()> {
		for polygon in &self.0 {
			polygon.verify()?;
		}
		Ok(())
	}

	fn num_points(&self) -> usize {
		self.0.iter().map(PolygonGeometry::num_points).sum()
	}
}

crate::impl_composite!(MultiPolygonGeometry, PolygonGeometry);
crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);

impl From<geo::MultiPolygon<f64>> for MultiPolygonGeometry {
	fn from(geometry: geo::MultiPolygon<f64>) -> Self {
		MultiPolygonGeometry(geometry.0.into_iter().map(PolygonGeometry::from).collect())
	}
}
