use std::fmt::{Debug, Display};

/// The identifier of a feature.
///
/// `Null` marks a feature without an identifier. It is the only variant that
/// counts as "missing" when identifiers are generated in updating mode.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GeoId {
	#[default]
	Null,
	UInt(u64),
	Int(i64),
	Double(f64),
	String(String),
}

impl GeoId {
	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, GeoId::Null)
	}

	/// Returns the numeric value if the identifier is an unsigned integer.
	#[must_use]
	pub fn as_u64(&self) -> Option<u64> {
		match self {
			GeoId::UInt(v) => Some(*v),
			_ => None,
		}
	}
}

impl From<u64> for GeoId {
	fn from(value: u64) -> Self {
		GeoId::UInt(value)
	}
}

impl From<i64> for GeoId {
	fn from(value: i64) -> Self {
		GeoId::Int(value)
	}
}

impl From<f64> for GeoId {
	fn from(value: f64) -> Self {
		GeoId::Double(value)
	}
}

impl From<&str> for GeoId {
	fn from(value: &str) -> Self {
		GeoId::String(value.to_string())
	}
}

impl From<String> for GeoId {
	fn from(value: String) -> Self {
		GeoId::String(value)
	}
}

impl<T> From<Option<T>> for GeoId
where
	GeoId: From<T>,
{
	fn from(value: Option<T>) -> Self {
		value.map_or(GeoId::Null, GeoId::from)
	}
}

impl Display for GeoId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GeoId::Null => write!(f, "null"),
			GeoId::UInt(v) => write!(f, "{v}"),
			GeoId::Int(v) => write!(f, "{v}"),
			GeoId::Double(v) => write!(f, "{v}"),
			GeoId::String(v) => write!(f, "{v:?}"),
		}
	}
}
