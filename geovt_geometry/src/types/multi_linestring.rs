use super::{GeometryTrait, LineStringGeometry};
use anyhow::Result;

#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	fn verify(&self) -> Result<()> {
		for line in &self.0 {
			line.verify()?;
		}
		Ok(())
	}

	fn num_points(&self) -> usize {
		self.0.iter().map(LineStringGeometry::num_points).sum()
	}
}

crate::impl_composite!(MultiLineStringGeometry, LineStringGeometry);
crate::impl_from_array!(MultiLineStringGeometry, LineStringGeometry);

impl From<geo::MultiLineString<f64>> for MultiLineStringGeometry {
	fn from(geometry: geo::MultiLineString<f64>) -> Self {
		MultiLineStringGeometry(geometry.0.into_iter().map(LineStringGeometry::from).collect())
	}
}
