use super::*;
use anyhow::Result;
use std::fmt::Debug;

/// The closed set of geometry kinds a feature can carry.
///
/// `GeometryCollection` is the only recursive variant.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Empty,
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(Vec<Geometry>),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		Coordinates: From<T>,
	{
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string<T>(value: Vec<T>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon<T>(value: Vec<Vec<T>>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_point<T>(value: Vec<T>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_multi_line_string<T>(value: Vec<Vec<T>>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_multi_polygon<T>(value: Vec<Vec<Vec<T>>>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}

	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Empty => "Empty",
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
			Geometry::GeometryCollection(_) => "GeometryCollection",
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		matches!(self, Geometry::Empty)
	}

	#[cfg(any(test, feature = "test"))]
	pub fn new_example() -> Self {
		Self::new_multi_polygon(vec![
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			vec![
				vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]],
				vec![[7.0, 1.0], [7.0, 3.0], [8.0, 3.0], [8.0, 1.0], [7.0, 1.0]],
			],
		])
	}
}

impl GeometryTrait for Geometry {
	fn verify(&self) -> Result<()> {
		match self {
			Geometry::Empty => Ok(()),
			Geometry::Point(g) => g.verify(),
			Geometry::LineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
			Geometry::MultiPoint(g) => g.verify(),
			Geometry::MultiLineString(g) => g.verify(),
			Geometry::MultiPolygon(g) => g.verify(),
			Geometry::GeometryCollection(list) => list.iter().try_for_each(Geometry::verify),
		}
	}

	fn num_points(&self) -> usize {
		match self {
			Geometry::Empty => 0,
			Geometry::Point(g) => g.num_points(),
			Geometry::LineString(g) => g.num_points(),
			Geometry::Polygon(g) => g.num_points(),
			Geometry::MultiPoint(g) => g.num_points(),
			Geometry::MultiLineString(g) => g.num_points(),
			Geometry::MultiPolygon(g) => g.num_points(),
			Geometry::GeometryCollection(list) => list.iter().map(Geometry::num_points).sum(),
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Empty => return f.write_str("Empty"),
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

/// Converts any `geo` geometry. `Line`, `Rect` and `Triangle` have no kind of
/// their own here and become a line string or a polygon.
impl From<geo::Geometry<f64>> for Geometry {
	fn from(geometry: geo::Geometry<f64>) -> Self {
		match geometry {
			geo::Geometry::Point(g) => Geometry::Point(PointGeometry::from(g)),
			geo::Geometry::Line(g) => Geometry::LineString(LineStringGeometry(vec![
				Coordinates::from(g.start),
				Coordinates::from(g.end),
			])),
			geo::Geometry::LineString(g) => Geometry::LineString(LineStringGeometry::from(g)),
			geo::Geometry::Polygon(g) => Geometry::Polygon(PolygonGeometry::from(g)),
			geo::Geometry::MultiPoint(g) => Geometry::MultiPoint(MultiPointGeometry::from(g)),
			geo::Geometry::MultiLineString(g) => Geometry::MultiLineString(MultiLineStringGeometry::from(g)),
			geo::Geometry::MultiPolygon(g) => Geometry::MultiPolygon(MultiPolygonGeometry::from(g)),
			geo::Geometry::GeometryCollection(g) => {
				Geometry::GeometryCollection(g.0.into_iter().map(Geometry::from).collect())
			}
			geo::Geometry::Rect(g) => Geometry::Polygon(PolygonGeometry::from(g.to_polygon())),
			geo::Geometry::Triangle(g) => Geometry::Polygon(PolygonGeometry::from(g.to_polygon())),
		}
	}
}
