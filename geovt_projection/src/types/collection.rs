use super::ProjectedFeature;

/// Projected features in the order of the input collection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectedCollection {
	pub features: Vec<ProjectedFeature>,
}

impl From<Vec<ProjectedFeature>> for ProjectedCollection {
	fn from(features: Vec<ProjectedFeature>) -> Self {
		Self { features }
	}
}

impl ProjectedCollection {
	pub fn len(&self) -> usize {
		self.features.len()
	}

	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, ProjectedFeature> {
		self.features.iter()
	}

	/// Total number of projected points over all features.
	pub fn num_points(&self) -> usize {
		self.features.iter().map(|f| f.num_points).sum()
	}
}

impl<'a> IntoIterator for &'a ProjectedCollection {
	type Item = &'a ProjectedFeature;
	type IntoIter = std::slice::Iter<'a, ProjectedFeature>;
	fn into_iter(self) -> Self::IntoIter {
		self.features.iter()
	}
}

impl IntoIterator for ProjectedCollection {
	type Item = ProjectedFeature;
	type IntoIter = std::vec::IntoIter<ProjectedFeature>;
	fn into_iter(self) -> Self::IntoIter {
		self.features.into_iter()
	}
}
