use super::*;
use crate::ProjectedPoint;

/// A geometry in tile space, mirroring the kind and nesting of its source.
#[derive(Clone, Debug, PartialEq)]
pub enum ProjectedGeometry {
	Empty,
	Point(ProjectedPoint),
	LineString(ProjectedLineString),
	Polygon(ProjectedPolygon),
	MultiPoint(ProjectedMultiPoint),
	MultiLineString(ProjectedMultiLineString),
	MultiPolygon(ProjectedMultiPolygon),
	GeometryCollection(Vec<ProjectedGeometry>),
}

impl ProjectedGeometry {
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			ProjectedGeometry::Empty => "Empty",
			ProjectedGeometry::Point(_) => "Point",
			ProjectedGeometry::LineString(_) => "LineString",
			ProjectedGeometry::Polygon(_) => "Polygon",
			ProjectedGeometry::MultiPoint(_) => "MultiPoint",
			ProjectedGeometry::MultiLineString(_) => "MultiLineString",
			ProjectedGeometry::MultiPolygon(_) => "MultiPolygon",
			ProjectedGeometry::GeometryCollection(_) => "GeometryCollection",
		}
	}

	/// Calls `f` for every point, depth first, in input order.
	pub fn for_each_point<F: FnMut(&ProjectedPoint)>(&self, f: &mut F) {
		match self {
			ProjectedGeometry::Empty => {}
			ProjectedGeometry::Point(p) => f(p),
			ProjectedGeometry::LineString(g) => g.points.iter().for_each(f),
			ProjectedGeometry::Polygon(g) => g.0.iter().flat_map(|r| &r.points).for_each(f),
			ProjectedGeometry::MultiPoint(g) => g.0.iter().for_each(f),
			ProjectedGeometry::MultiLineString(g) => g.0.iter().flat_map(|l| &l.points).for_each(f),
			ProjectedGeometry::MultiPolygon(g) => g
				.0
				.iter()
				.flat_map(|p| &p.0)
				.flat_map(|r| &r.points)
				.for_each(f),
			ProjectedGeometry::GeometryCollection(list) => {
				for geometry in list {
					geometry.for_each_point(f);
				}
			}
		}
	}

	pub fn num_points(&self) -> usize {
		let mut count = 0;
		self.for_each_point(&mut |_: &ProjectedPoint| count += 1);
		count
	}

	/// Returns `Some([x_min, y_min, x_max, y_max])` over all points, or `None`
	/// if the geometry has no points.
	pub fn compute_bounds(&self) -> Option<[f64; 4]> {
		let mut bounds: Option<[f64; 4]> = None;
		self.for_each_point(&mut |p: &ProjectedPoint| {
			let b = bounds.get_or_insert([p.x, p.y, p.x, p.y]);
			b[0] = b[0].min(p.x);
			b[1] = b[1].min(p.y);
			b[2] = b[2].max(p.x);
			b[3] = b[3].max(p.y);
		});
		bounds
	}
}
