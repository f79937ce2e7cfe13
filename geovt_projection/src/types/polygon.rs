use super::ProjectedRing;

/// Projected polygon: outer ring first, holes after, in input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectedPolygon(pub Vec<ProjectedRing>);
