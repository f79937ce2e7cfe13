use crate::{ConvertOptions, DouglasPeucker, GeometryProjector, IdCounter, IdPolicy, ProjectedCollection, ProjectedFeature, Simplifier};
use anyhow::Result;
use geovt_geometry::{GeoCollection, GeometryTrait};
use log::{Level, debug, log_enabled, trace};

/// Converts feature collections into tile space with a fixed tolerance,
/// identifier policy and simplifier.
pub struct FeatureConverter<S: Simplifier = DouglasPeucker> {
	tolerance: f64,
	policy: IdPolicy,
	simplifier: S,
}

impl FeatureConverter<DouglasPeucker> {
	pub fn new(options: &ConvertOptions) -> Result<Self> {
		Self::with_simplifier(options, DouglasPeucker)
	}
}

impl<S: Simplifier> FeatureConverter<S> {
	pub fn with_simplifier(options: &ConvertOptions, simplifier: S) -> Result<Self> {
		options.verify()?;
		Ok(Self {
			tolerance: options.tile_tolerance(),
			policy: options.id_policy(),
			simplifier,
		})
	}

	/// Tile-space tolerance handed to the simplifier.
	pub fn tolerance(&self) -> f64 {
		self.tolerance
	}

	pub fn policy(&self) -> IdPolicy {
		self.policy
	}

	pub fn convert(&self, collection: &GeoCollection, ids: &mut IdCounter) -> ProjectedCollection {
		let projector = GeometryProjector::new(self.tolerance, &self.simplifier);
		convert_with(collection, &projector, self.policy, ids)
	}
}

/// Converts `collection` into tile space using Douglas-Peucker importance.
///
/// With `generate_id`, features get identifiers from `ids`: all of them, or
/// with `updating` only those whose identifier is null. `ids` advances once
/// per assigned identifier. Properties are copied unchanged and the feature
/// order is kept.
pub fn convert(
	collection: &GeoCollection,
	tolerance: f64,
	generate_id: bool,
	ids: &mut IdCounter,
	updating: bool,
) -> ProjectedCollection {
	let projector = GeometryProjector::new(tolerance, &DouglasPeucker);
	convert_with(collection, &projector, IdPolicy::new(generate_id, updating), ids)
}

fn convert_with<S: Simplifier + ?Sized>(
	collection: &GeoCollection,
	projector: &GeometryProjector<'_, S>,
	policy: IdPolicy,
	ids: &mut IdCounter,
) -> ProjectedCollection {
	let first_id = ids.peek();
	let mut features = Vec::with_capacity(collection.len());

	for (index, feature) in collection.iter().enumerate() {
		if log_enabled!(Level::Trace)
			&& let Err(err) = feature.geometry.verify()
		{
			trace!("feature #{index}: converting invalid {} geometry: {err}", feature.geometry.type_name());
		}

		let id = policy.resolve(&feature.id, ids);
		let geometry = projector.project(&feature.geometry);
		let projected = ProjectedFeature::new(geometry, feature.properties.clone(), id);
		trace!(
			"feature #{index}: {} with {} points, id {}",
			projected.geometry.type_name(),
			projected.num_points,
			projected.id
		);
		features.push(projected);
	}

	debug!(
		"converted {} features ({policy:?}), assigned {} ids",
		features.len(),
		ids.peek().wrapping_sub(first_id)
	);

	ProjectedCollection::from(features)
}
