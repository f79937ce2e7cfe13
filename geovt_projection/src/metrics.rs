use crate::ProjectedPoint;

/// Cumulative planar length of a path in tile-space units.
///
/// Fewer than two points have length 0.
#[must_use]
pub fn path_length(points: &[ProjectedPoint]) -> f64 {
	points.windows(2).map(|w| (w[1].x - w[0].x).hypot(w[1].y - w[0].y)).sum()
}

/// Absolute area of a closed ring in tile-space units (shoelace formula).
///
/// The ring is expected to repeat its first point at the end; no closing
/// segment is added. The result does not depend on the winding direction.
#[must_use]
pub fn ring_area(points: &[ProjectedPoint]) -> f64 {
	let sum: f64 = points.windows(2).map(|w| w[0].x * w[1].y - w[1].x * w[0].y).sum();
	(sum / 2.0).abs()
}
