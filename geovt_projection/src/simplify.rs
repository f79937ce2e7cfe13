use crate::ProjectedPoint;

/// Annotates a point sequence with per-point importance.
///
/// Implementations write only `z`: the number and order of points stay the
/// same. Both endpoints must always come out significant. `tolerance` is the
/// finest tolerance a consumer will display at: for any display tolerance
/// `t >= tolerance`, keeping the points with `z > t²` (plus the endpoints) must
/// keep the shape within `t` of the input. Below `tolerance` no refinement is
/// promised.
///
/// The slice is borrowed exclusively for the duration of the call.
pub trait Simplifier {
	fn simplify(&self, points: &mut [ProjectedPoint], tolerance: f64);
}

impl<S: Simplifier + ?Sized> Simplifier for &S {
	fn simplify(&self, points: &mut [ProjectedPoint], tolerance: f64) {
		(**self).simplify(points, tolerance);
	}
}

/// Douglas-Peucker importance annotation.
///
/// Endpoints get `z = 1`. Every point that splits a span because it lies
/// farther than `tolerance` from the span's chord gets its squared distance
/// as `z`. All other points keep `z = 0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DouglasPeucker;

impl Simplifier for DouglasPeucker {
	fn simplify(&self, points: &mut [ProjectedPoint], tolerance: f64) {
		let Some(last) = points.len().checked_sub(1) else {
			return;
		};
		points[0].z = 1.0;
		points[last].z = 1.0;

		let sq_tolerance = tolerance * tolerance;
		let mut spans = vec![(0, last)];
		while let Some((first, last)) = spans.pop() {
			if last - first < 2 {
				continue;
			}
			if let Some((index, sq_dist)) = farthest_point(points, first, last, sq_tolerance) {
				points[index].z = sq_dist;
				spans.push((first, index));
				spans.push((index, last));
			}
		}
	}
}

/// Finds the interior point of `first..=last` farthest from the chord, if it is
/// farther than the tolerance. Ties go to the point closest to the middle of the
/// span, which keeps the split balanced for degenerate input.
fn farthest_point(points: &[ProjectedPoint], first: usize, last: usize, sq_tolerance: f64) -> Option<(usize, f64)> {
	let a = points[first];
	let b = points[last];
	let mid = first + (last - first) / 2;

	let mut max_sq_dist = sq_tolerance;
	let mut index = None;
	let mut min_pos_to_mid = last - first;

	for (i, p) in points.iter().enumerate().take(last).skip(first + 1) {
		let sq_dist = sq_segment_distance(p, &a, &b);
		if sq_dist > max_sq_dist {
			index = Some(i);
			max_sq_dist = sq_dist;
			min_pos_to_mid = i.abs_diff(mid);
		} else if sq_dist == max_sq_dist && index.is_some() {
			let pos_to_mid = i.abs_diff(mid);
			if pos_to_mid < min_pos_to_mid {
				index = Some(i);
				min_pos_to_mid = pos_to_mid;
			}
		}
	}

	index.map(|i| (i, max_sq_dist))
}

/// Squared distance from `p` to the segment `a`–`b`.
fn sq_segment_distance(p: &ProjectedPoint, a: &ProjectedPoint, b: &ProjectedPoint) -> f64 {
	let mut x = a.x;
	let mut y = a.y;
	let dx = b.x - x;
	let dy = b.y - y;

	if dx != 0.0 || dy != 0.0 {
		let t = ((p.x - x) * dx + (p.y - y) * dy) / (dx * dx + dy * dy);
		if t > 1.0 {
			x = b.x;
			y = b.y;
		} else if t > 0.0 {
			x += dx * t;
			y += dy * t;
		}
	}

	let dx = p.x - x;
	let dy = p.y - y;
	dx * dx + dy * dy
}

/// Returns the points a consumer keeps when displaying at `tolerance`.
///
/// A tolerance of 0 keeps every point. Otherwise the endpoints and every point
/// with `z > tolerance²` are kept.
#[must_use]
pub fn retained_points(points: &[ProjectedPoint], tolerance: f64) -> Vec<ProjectedPoint> {
	if tolerance == 0.0 {
		return points.to_vec();
	}
	let sq_tolerance = tolerance * tolerance;
	let last = points.len().saturating_sub(1);
	points
		.iter()
		.enumerate()
		.filter(|(i, p)| *i == 0 || *i == last || p.z > sq_tolerance)
		.map(|(_, p)| *p)
		.collect()
}
