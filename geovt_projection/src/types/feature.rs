use super::ProjectedGeometry;
use geovt_geometry::{GeoId, GeoProperties};

/// A feature in tile space, ready to be handed to the tiler.
///
/// `bounds` and `num_points` are derived from the projected geometry when the
/// feature is created.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedFeature {
	pub id: GeoId,
	pub geometry: ProjectedGeometry,
	pub properties: GeoProperties,
	pub bounds: Option<[f64; 4]>,
	pub num_points: usize,
}

impl ProjectedFeature {
	pub fn new(geometry: ProjectedGeometry, properties: GeoProperties, id: GeoId) -> Self {
		let bounds = geometry.compute_bounds();
		let num_points = geometry.num_points();
		Self {
			id,
			geometry,
			properties,
			bounds,
			num_points,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{ProjectedMultiPoint, ProjectedPoint};

	#[test]
	fn derives_bounds_and_count() {
		let geometry = ProjectedGeometry::MultiPoint(ProjectedMultiPoint(vec![
			ProjectedPoint::new(0.25, 0.75),
			ProjectedPoint::new(0.5, 0.5),
		]));
		let feature = ProjectedFeature::new(geometry, GeoProperties::new(), GeoId::Null);
		assert_eq!(feature.num_points, 2);
		assert_eq!(feature.bounds, Some([0.25, 0.5, 0.5, 0.75]));
	}

	#[test]
	fn empty_geometry() {
		let feature = ProjectedFeature::new(ProjectedGeometry::Empty, GeoProperties::new(), GeoId::from(1u64));
		assert_eq!(feature.num_points, 0);
		assert_eq!(feature.bounds, None);
	}
}
