/// Capacity of the recurrence coefficient tables. Orders must be strictly below this.
pub const MAX_ORDER_CAPACITY: usize = 32;

/// Highest order accepted by the moment computation.
pub const MAX_ORDER: usize = MAX_ORDER_CAPACITY - 1;

/// Order used when the caller does not request one (or passes a non-positive value).
pub const DEFAULT_ORDER: usize = 15;

/// Number of (n, m) pairs emitted at `MAX_ORDER`: sum over n of (n / 2 + 1).
pub const MAX_MOMENT_COUNT: usize = 272;

/// Pixels closer than this to the centroid (in unit-disk coordinates) are skipped;
/// their angle is undefined.
pub const CENTROID_EPSILON: f64 = f64::EPSILON;
