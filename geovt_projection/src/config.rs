use crate::IdPolicy;
use anyhow::{Result, ensure};
use serde::Deserialize;
use std::io::Read;

/// Options of a [`crate::FeatureConverter`].
///
/// Can be read from YAML; missing fields take their defaults and unknown
/// fields are rejected.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct ConvertOptions {
	/// Simplification tolerance in pixels at `max_zoom`. Higher means simpler.
	pub tolerance: f64,

	/// Tile extent in pixels.
	pub extent: u32,

	/// Deepest zoom level; the tolerance is resolved against it.
	pub max_zoom: u8,

	/// Generate numeric feature identifiers.
	pub generate_id: bool,

	/// With `generate_id`, only fill in identifiers that are missing.
	pub updating: bool,
}

impl Default for ConvertOptions {
	fn default() -> Self {
		Self {
			tolerance: 3.0,
			extent: 4096,
			max_zoom: 14,
			generate_id: false,
			updating: false,
		}
	}
}

impl ConvertOptions {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		let options: Self = serde_yaml_ng::from_reader(reader)?;
		options.verify()?;
		Ok(options)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		let options: Self = serde_yaml_ng::from_str(text)?;
		options.verify()?;
		Ok(options)
	}

	pub fn verify(&self) -> Result<()> {
		ensure!(
			self.tolerance.is_finite() && self.tolerance >= 0.0,
			"tolerance must be a finite, non-negative number, got {}",
			self.tolerance
		);
		ensure!(self.extent > 0, "extent must be positive");
		ensure!(self.max_zoom <= 24, "max_zoom must be between 0 and 24, got {}", self.max_zoom);
		Ok(())
	}

	/// The tolerance in tile-space units: one pixel at `max_zoom` is
	/// `1 / (2^max_zoom * extent)` of the world.
	#[must_use]
	pub fn tile_tolerance(&self) -> f64 {
		self.tolerance / (2f64.powi(i32::from(self.max_zoom)) * f64::from(self.extent))
	}

	#[must_use]
	pub fn id_policy(&self) -> IdPolicy {
		IdPolicy::new(self.generate_id, self.updating)
	}
}
