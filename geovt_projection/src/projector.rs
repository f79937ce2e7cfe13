use crate::{
	DouglasPeucker, ProjectedGeometry, ProjectedLineString, ProjectedMultiLineString, ProjectedMultiPoint,
	ProjectedMultiPolygon, ProjectedPoint, ProjectedPolygon, ProjectedRing, Simplifier, path_length, project_point,
	ring_area,
};
use geovt_geometry::{
	CompositeGeometryTrait, Coordinates, Geometry, LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry,
	MultiPolygonGeometry, PointGeometry, PolygonGeometry, RingGeometry,
};

/// Projects input geometries into tile space.
///
/// Lines and rings are measured and then passed to the simplifier together
/// with `tolerance`. Composite geometries are projected element by element,
/// keeping order and nesting. Projection never fails: degenerate shapes get
/// zero metrics and are not simplified.
#[derive(Debug)]
pub struct GeometryProjector<'a, S: Simplifier + ?Sized = DouglasPeucker> {
	tolerance: f64,
	simplifier: &'a S,
}

impl<'a, S: Simplifier + ?Sized> GeometryProjector<'a, S> {
	pub fn new(tolerance: f64, simplifier: &'a S) -> Self {
		Self { tolerance, simplifier }
	}

	pub fn tolerance(&self) -> f64 {
		self.tolerance
	}

	pub fn project(&self, geometry: &Geometry) -> ProjectedGeometry {
		match geometry {
			Geometry::Empty => ProjectedGeometry::Empty,
			Geometry::Point(g) => ProjectedGeometry::Point(Self::project_point(g)),
			Geometry::LineString(g) => ProjectedGeometry::LineString(self.project_line_string(g)),
			Geometry::Polygon(g) => ProjectedGeometry::Polygon(self.project_polygon(g)),
			Geometry::MultiPoint(g) => ProjectedGeometry::MultiPoint(self.project_multi_point(g)),
			Geometry::MultiLineString(g) => ProjectedGeometry::MultiLineString(self.project_multi_line_string(g)),
			Geometry::MultiPolygon(g) => ProjectedGeometry::MultiPolygon(self.project_multi_polygon(g)),
			Geometry::GeometryCollection(list) => ProjectedGeometry::GeometryCollection(self.project_collection(list)),
		}
	}

	pub fn project_point(point: &PointGeometry) -> ProjectedPoint {
		project_point(point.as_coord())
	}

	pub fn project_line_string(&self, line: &LineStringGeometry) -> ProjectedLineString {
		let mut points = project_all(line.as_vec());
		if points.len() < 2 {
			return ProjectedLineString {
				points,
				..Default::default()
			};
		}

		let dist = path_length(&points);
		self.simplifier.simplify(&mut points, self.tolerance);

		ProjectedLineString {
			points,
			dist,
			seg_start: 0.0,
			seg_end: dist,
		}
	}

	pub fn project_ring(&self, ring: &RingGeometry) -> ProjectedRing {
		let mut points = project_all(ring.as_vec());
		if points.len() < 2 {
			return ProjectedRing { points, area: 0.0 };
		}

		let area = ring_area(&points);
		self.simplifier.simplify(&mut points, self.tolerance);

		ProjectedRing { points, area }
	}

	pub fn project_polygon(&self, polygon: &PolygonGeometry) -> ProjectedPolygon {
		let mut rings = Vec::with_capacity(polygon.len());
		rings.extend(polygon.iter().map(|ring| self.project_ring(ring)));
		ProjectedPolygon(rings)
	}

	pub fn project_multi_point(&self, multi: &MultiPointGeometry) -> ProjectedMultiPoint {
		let mut points = Vec::with_capacity(multi.len());
		points.extend(multi.iter().map(Self::project_point));
		ProjectedMultiPoint(points)
	}

	pub fn project_multi_line_string(&self, multi: &MultiLineStringGeometry) -> ProjectedMultiLineString {
		let mut lines = Vec::with_capacity(multi.len());
		lines.extend(multi.iter().map(|line| self.project_line_string(line)));
		ProjectedMultiLineString(lines)
	}

	pub fn project_multi_polygon(&self, multi: &MultiPolygonGeometry) -> ProjectedMultiPolygon {
		let mut polygons = Vec::with_capacity(multi.len());
		polygons.extend(multi.iter().map(|polygon| self.project_polygon(polygon)));
		ProjectedMultiPolygon(polygons)
	}

	pub fn project_collection(&self, list: &[Geometry]) -> Vec<ProjectedGeometry> {
		let mut geometries = Vec::with_capacity(list.len());
		geometries.extend(list.iter().map(|geometry| self.project(geometry)));
		geometries
	}
}

fn project_all(coords: &[Coordinates]) -> Vec<ProjectedPoint> {
	let mut points = Vec::with_capacity(coords.len());
	points.extend(coords.iter().map(project_point));
	points
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use pretty_assertions::assert_eq;
	use std::cell::Cell;

	/// Records how often it was called and with how many points.
	#[derive(Default)]
	struct CountingSimplifier {
		calls: Cell<usize>,
		points: Cell<usize>,
	}

	impl Simplifier for CountingSimplifier {
		fn simplify(&self, points: &mut [ProjectedPoint], _tolerance: f64) {
			self.calls.set(self.calls.get() + 1);
			self.points.set(self.points.get() + points.len());
		}
	}

	fn projected(lon: f64, lat: f64) -> ProjectedPoint {
		project_point(&Coordinates::new(lon, lat))
	}

	#[test]
	fn empty_is_identity() {
		let projector = GeometryProjector::new(0.1, &DouglasPeucker);
		assert_eq!(projector.project(&Geometry::Empty), ProjectedGeometry::Empty);
	}

	#[test]
	fn point() {
		let projector = GeometryProjector::new(0.1, &DouglasPeucker);
		assert_eq!(
			projector.project(&Geometry::new_point([90.0, 0.0])),
			ProjectedGeometry::Point(ProjectedPoint { x: 0.75, y: 0.5, z: 0.0 })
		);
	}

	#[test]
	fn point_needs_no_projector_state() {
		let point = PointGeometry::from([-90.0, 0.0]);
		assert_eq!(
			GeometryProjector::<DouglasPeucker>::project_point(&point),
			ProjectedPoint::new(0.25, 0.5)
		);
	}

	#[test]
	fn empty_line_is_not_simplified() {
		let simplifier = CountingSimplifier::default();
		let projector = GeometryProjector::new(0.1, &simplifier);
		let line = projector.project_line_string(&LineStringGeometry::new());
		assert_eq!(line, ProjectedLineString::default());
		assert_eq!(simplifier.calls.get(), 0);
	}

	#[test]
	fn single_point_line_is_not_simplified() {
		let simplifier = CountingSimplifier::default();
		let projector = GeometryProjector::new(0.1, &simplifier);
		let line = projector.project_line_string(&LineStringGeometry::from(&[[10.0, 20.0]]));
		assert_eq!(line.points, vec![projected(10.0, 20.0)]);
		assert_eq!((line.dist, line.seg_start, line.seg_end), (0.0, 0.0, 0.0));
		assert_eq!(simplifier.calls.get(), 0);
	}

	#[test]
	fn line_length_and_span() {
		let simplifier = CountingSimplifier::default();
		let projector = GeometryProjector::new(0.1, &simplifier);
		let input = LineStringGeometry::from(&[[0.0, 0.0], [36.0, 0.0], [36.0, 30.0], [-20.0, -45.0]]);
		let line = projector.project_line_string(&input);

		let expected: Vec<_> = input.iter().map(project_point).collect();
		assert_eq!(line.points, expected);

		let sum: f64 = expected
			.windows(2)
			.map(|w| ((w[1].x - w[0].x).powi(2) + (w[1].y - w[0].y).powi(2)).sqrt())
			.sum();
		assert_abs_diff_eq!(line.dist, sum, epsilon = 1e-12);
		assert_eq!(line.seg_start, 0.0);
		assert_eq!(line.seg_end, line.dist);
		assert_eq!(simplifier.calls.get(), 1);
		assert_eq!(simplifier.points.get(), 4);
	}

	#[test]
	fn line_is_annotated_by_the_simplifier() {
		let projector = GeometryProjector::new(0.001, &DouglasPeucker);
		let line = projector.project_line_string(&LineStringGeometry::from(&[[0.0, 0.0], [10.0, 10.0], [20.0, 0.0]]));
		assert_eq!(line.points[0].z, 1.0);
		assert_eq!(line.points[2].z, 1.0);
		assert!(line.points[1].z > 0.0);
	}

	#[test]
	fn ring_area_ignores_winding() {
		let projector = GeometryProjector::new(0.0, &DouglasPeucker);
		let ccw = RingGeometry::from(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]);
		let mut reversed = ccw.clone();
		reversed.0.reverse();

		let a = projector.project_ring(&ccw);
		let b = projector.project_ring(&reversed);
		assert!(a.area > 0.0);
		assert_abs_diff_eq!(a.area, b.area, epsilon = 1e-15);
	}

	#[test]
	fn degenerate_rings() {
		let simplifier = CountingSimplifier::default();
		let projector = GeometryProjector::new(0.1, &simplifier);

		let empty = projector.project_ring(&RingGeometry::new());
		assert_eq!(empty, ProjectedRing::default());

		let single = projector.project_ring(&RingGeometry::from(&[[1.0, 1.0]]));
		assert_eq!(single.len(), 1);
		assert_eq!(single.area, 0.0);
		assert_eq!(simplifier.calls.get(), 0);

		let flat = projector.project_ring(&RingGeometry::from(&[[0.0, 0.0], [1.0, 1.0], [0.0, 0.0]]));
		assert_eq!(flat.area, 0.0);
		assert_eq!(simplifier.calls.get(), 1);
	}

	#[test]
	fn composites_keep_shape() {
		let simplifier = CountingSimplifier::default();
		let projector = GeometryProjector::new(0.1, &simplifier);
		let geometry = Geometry::GeometryCollection(vec![
			Geometry::new_multi_point(vec![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]),
			Geometry::new_multi_line_string(vec![vec![[0.0, 0.0], [1.0, 1.0]], vec![[5.0, 5.0], [6.0, 6.0], [7.0, 5.0]]]),
			Geometry::GeometryCollection(vec![Geometry::Empty, Geometry::new_point([3.0, 3.0])]),
		]);

		let ProjectedGeometry::GeometryCollection(list) = projector.project(&geometry) else {
			panic!("expected a collection");
		};
		assert_eq!(list.len(), 3);

		let ProjectedGeometry::MultiPoint(points) = &list[0] else {
			panic!("expected a multi point");
		};
		assert_eq!(points.0, vec![projected(0.0, 0.0), projected(1.0, 1.0), projected(2.0, 2.0)]);

		let ProjectedGeometry::MultiLineString(lines) = &list[1] else {
			panic!("expected a multi line string");
		};
		assert_eq!(lines.0.iter().map(ProjectedLineString::len).collect::<Vec<_>>(), vec![2, 3]);

		assert_eq!(
			list[2],
			ProjectedGeometry::GeometryCollection(vec![
				ProjectedGeometry::Empty,
				ProjectedGeometry::Point(projected(3.0, 3.0)),
			])
		);

		// points are never simplified, lines once each
		assert_eq!(simplifier.calls.get(), 2);
	}

	#[test]
	fn multi_polygon_nesting_and_hole_areas() {
		let projector = GeometryProjector::new(0.0, &DouglasPeucker);
		let input = Geometry::new_example();
		let Geometry::MultiPolygon(source) = &input else {
			panic!("example is a multi polygon");
		};
		let ProjectedGeometry::MultiPolygon(output) = projector.project(&input) else {
			panic!("expected a multi polygon");
		};

		assert_eq!(output.0.len(), source.len());
		for (polygon, source_polygon) in output.0.iter().zip(source.iter()) {
			assert_eq!(polygon.0.len(), source_polygon.len());
			for (ring, source_ring) in polygon.0.iter().zip(source_polygon.iter()) {
				assert_eq!(ring.len(), source_ring.len());
				let pts: Vec<_> = source_ring.iter().map(project_point).collect();
				let mut sum = 0.0;
				for i in 0..pts.len() - 1 {
					sum += pts[i].x * pts[i + 1].y - pts[i + 1].x * pts[i].y;
				}
				assert_abs_diff_eq!(ring.area, (sum / 2.0).abs(), epsilon = 1e-18);
			}
		}
	}

	#[test]
	fn works_with_a_trait_object() {
		let simplifier: &dyn Simplifier = &DouglasPeucker;
		let projector = GeometryProjector::new(0.1, simplifier);
		let line = projector.project_line_string(&LineStringGeometry::from(&[[0.0, 0.0], [1.0, 1.0]]));
		assert_eq!(line.points[0].z, 1.0);
		assert_eq!(projector.tolerance(), 0.1);
	}
}
