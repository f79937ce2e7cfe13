use super::{ProjectedLineString, ProjectedPolygon};
use crate::ProjectedPoint;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectedMultiPoint(pub Vec<ProjectedPoint>);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectedMultiLineString(pub Vec<ProjectedLineString>);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectedMultiPolygon(pub Vec<ProjectedPolygon>);
