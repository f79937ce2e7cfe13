use anyhow::Result;
use std::fmt::Debug;

/// Basic interface shared by all geometry types of the input model.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Verifies the structural validity of the geometry.
	///
	/// For example, checks whether a line has enough points or whether a ring is closed.
	/// Invalid geometries can still be projected; this only reports the problem.
	fn verify(&self) -> Result<()>;

	/// Returns the total number of coordinates contained in the geometry.
	fn num_points(&self) -> usize;
}

/// Composite geometries are ordered collections of simpler elements.
/// For example, a polygon is made of rings, and a ring is made of coordinates.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Creates a new, empty composite geometry.
	fn new() -> Self;

	/// Returns an immutable reference to the inner collection of elements.
	fn as_vec(&self) -> &Vec<Item>;

	/// Returns a mutable reference to the inner collection of elements.
	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	/// Consumes the composite geometry and returns the inner collection of elements.
	fn into_inner(self) -> Vec<Item>;

	/// Iterates over the elements in order.
	fn iter(&self) -> std::slice::Iter<'_, Item> {
		self.as_vec().iter()
	}

	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	fn len(&self) -> usize {
		self.as_vec().len()
	}

	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}
