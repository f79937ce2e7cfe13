use super::*;
use std::fmt::Debug;

/// A single geographic record: geometry, property mapping and identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub id: GeoId,
	pub geometry: Geometry,
	pub properties: GeoProperties,
}

impl GeoFeature {
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: GeoId::Null,
			geometry,
			properties: GeoProperties::new(),
		}
	}

	pub fn set_id<T>(&mut self, id: T)
	where
		GeoId: From<T>,
	{
		self.id = GeoId::from(id);
	}

	pub fn set_properties(&mut self, properties: GeoProperties) {
		self.properties = properties;
	}

	pub fn set_property<T>(&mut self, key: String, value: T)
	where
		GeoValue: From<T>,
	{
		self.properties.insert(key, GeoValue::from(value));
	}

	#[cfg(any(test, feature = "test"))]
	pub fn new_example() -> Self {
		Self {
			id: GeoId::UInt(13),
			geometry: Geometry::new_example(),
			properties: GeoProperties::from(vec![
				("name", GeoValue::from("Nice")),
				("population", GeoValue::from(348085)),
				("is_nice", GeoValue::from(true)),
			]),
		}
	}
}
