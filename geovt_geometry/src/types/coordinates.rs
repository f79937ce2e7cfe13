use std::fmt::Debug;

/// A raw geographic coordinate: `x` is the longitude and `y` the latitude, both in degrees.
///
/// No range is enforced. Longitudes outside `[-180, 180]` and latitudes outside
/// `[-90, 90]` are carried as given.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self([x, y])
	}

	/// Longitude in degrees.
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	/// Latitude in degrees.
	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates(value)
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<&Coordinates> for Coordinates {
	fn from(value: &Coordinates) -> Self {
		*value
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		value.0
	}
}

impl From<geo::Coord<f64>> for Coordinates {
	fn from(value: geo::Coord<f64>) -> Self {
		Coordinates([value.x, value.y])
	}
}

impl From<geo::Point<f64>> for Coordinates {
	fn from(value: geo::Point<f64>) -> Self {
		Coordinates([value.x(), value.y()])
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn new_and_accessors() {
		let c = Coordinates::new(13.404954, 52.520008);
		assert_eq!(c.x(), 13.404954);
		assert_eq!(c.y(), 52.520008);
	}

	#[test]
	fn debug_formats_like_array() {
		assert_eq!(format!("{:?}", Coordinates::new(1.0, 2.0)), "[1.0, 2.0]");
	}

	#[rstest]
	#[case(&[1i32, 2i32], [1.0, 2.0])]
	#[case(&[-180i32, 90i32], [-180.0, 90.0])]
	fn from_int_array_ref(#[case] input: &[i32; 2], #[case] expected: [f64; 2]) {
		let c = Coordinates::from(input);
		assert_eq!(<[f64; 2]>::from(c), expected);
	}

	#[test]
	fn from_f32_array_ref() {
		let c = Coordinates::from(&[1.5f32, -2.5f32]);
		assert_eq!(c, Coordinates::new(1.5, -2.5));
	}

	#[test]
	fn from_tuple() {
		let c = Coordinates::from((3.0, 4.0));
		assert_eq!(c.x(), 3.0);
		assert_eq!(c.y(), 4.0);
	}

	#[test]
	fn from_geo_coord_and_point() {
		let c1 = Coordinates::from(geo::Coord { x: 11.0, y: 22.0 });
		let c2 = Coordinates::from(geo::Point::new(11.0, 22.0));
		assert_eq!(c1, c2);
		assert_eq!(c1.x(), 11.0);
		assert_eq!(c1.y(), 22.0);
	}
}
