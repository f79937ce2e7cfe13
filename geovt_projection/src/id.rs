use geovt_geometry::GeoId;

/// Generator state for feature identifiers.
///
/// The counter is owned by the caller and passed into every conversion, so it
/// can be kept and reused across calls (for example when features are added to
/// an existing index). It has no internal synchronization: callers sharing one
/// counter between threads must guard it themselves, e.g. with a `Mutex`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdCounter {
	next: u64,
}

impl IdCounter {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// A counter whose first generated id is `next`.
	#[must_use]
	pub fn starting_at(next: u64) -> Self {
		Self { next }
	}

	/// The id the next call to [`IdCounter::next_id`] returns.
	#[must_use]
	pub fn peek(&self) -> u64 {
		self.next
	}

	pub fn next_id(&mut self) -> u64 {
		let id = self.next;
		self.next = self.next.wrapping_add(1);
		id
	}
}

/// How a converter decides the output identifier of a feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdPolicy {
	/// Keep every original identifier.
	Keep,
	/// Assign a fresh identifier to every feature, discarding the original.
	Generate,
	/// Assign a fresh identifier only where the original is `GeoId::Null`.
	GenerateMissing,
}

impl IdPolicy {
	#[must_use]
	pub fn new(generate_id: bool, updating: bool) -> Self {
		match (generate_id, updating) {
			(false, _) => IdPolicy::Keep,
			(true, false) => IdPolicy::Generate,
			(true, true) => IdPolicy::GenerateMissing,
		}
	}

	/// Resolves the output identifier, advancing `counter` once per assignment.
	pub fn resolve(self, id: &GeoId, counter: &mut IdCounter) -> GeoId {
		match self {
			IdPolicy::Keep => id.clone(),
			IdPolicy::GenerateMissing if !id.is_null() => id.clone(),
			IdPolicy::Generate | IdPolicy::GenerateMissing => GeoId::UInt(counter.next_id()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn counter_is_monotonic() {
		let mut counter = IdCounter::new();
		assert_eq!(counter.next_id(), 0);
		assert_eq!(counter.next_id(), 1);
		assert_eq!(counter.peek(), 2);

		let mut resumed = IdCounter::starting_at(100);
		assert_eq!(resumed.next_id(), 100);
		assert_eq!(resumed.peek(), 101);
	}

	#[rstest]
	#[case(false, false, IdPolicy::Keep)]
	#[case(false, true, IdPolicy::Keep)]
	#[case(true, false, IdPolicy::Generate)]
	#[case(true, true, IdPolicy::GenerateMissing)]
	fn policy_from_flags(#[case] generate_id: bool, #[case] updating: bool, #[case] expected: IdPolicy) {
		assert_eq!(IdPolicy::new(generate_id, updating), expected);
	}

	#[rstest]
	#[case(IdPolicy::Keep, GeoId::Null, GeoId::Null, 5)]
	#[case(IdPolicy::Keep, GeoId::from("a"), GeoId::from("a"), 5)]
	#[case(IdPolicy::Generate, GeoId::Null, GeoId::UInt(5), 6)]
	#[case(IdPolicy::Generate, GeoId::from(9u64), GeoId::UInt(5), 6)]
	#[case(IdPolicy::GenerateMissing, GeoId::Null, GeoId::UInt(5), 6)]
	#[case(IdPolicy::GenerateMissing, GeoId::from(9u64), GeoId::UInt(9), 5)]
	#[case(IdPolicy::GenerateMissing, GeoId::from(-1i64), GeoId::Int(-1), 5)]
	fn resolve(#[case] policy: IdPolicy, #[case] input: GeoId, #[case] expected: GeoId, #[case] next: u64) {
		let mut counter = IdCounter::starting_at(5);
		assert_eq!(policy.resolve(&input, &mut counter), expected);
		assert_eq!(counter.peek(), next);
	}
}
