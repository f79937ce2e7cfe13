use super::GeoFeature;

/// An ordered set of features.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl From<Vec<GeoFeature>> for GeoCollection {
	fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}
}

impl GeoCollection {
	pub fn len(&self) -> usize {
		self.features.len()
	}

	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, GeoFeature> {
		self.features.iter()
	}
}

impl<'a> IntoIterator for &'a GeoCollection {
	type Item = &'a GeoFeature;
	type IntoIter = std::slice::Iter<'a, GeoFeature>;
	fn into_iter(self) -> Self::IntoIter {
		self.features.iter()
	}
}

impl FromIterator<GeoFeature> for GeoCollection {
	fn from_iter<T: IntoIterator<Item = GeoFeature>>(iter: T) -> Self {
		Self {
			features: iter.into_iter().collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Geometry;

	#[test]
	fn collect_keeps_order() {
		let collection: GeoCollection = (0..3u64)
			.map(|i| {
				let mut f = GeoFeature::new(Geometry::Empty);
				f.set_id(i);
				f
			})
			.collect();
		assert_eq!(collection.len(), 3);
		let ids: Vec<_> = collection.iter().map(|f| f.id.as_u64()).collect();
		assert_eq!(ids, vec![Some(0), Some(1), Some(2)]);
	}

	#[test]
	fn from_vec_keeps_order() {
		let features = vec![GeoFeature::new(Geometry::Empty), GeoFeature::new_example()];
		let collection: GeoCollection = features.clone().into();
		assert_eq!(collection, GeoCollection::from(features));
		assert_eq!(collection.iter().map(|f| f.id.as_u64()).collect::<Vec<_>>(), vec![None, Some(13)]);
	}
}
