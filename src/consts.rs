/// String form of an [`Instant`](crate::Instant) (local wall-clock, millisecond precision)
pub const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Date-only string form, accepted when parsing and read as midnight
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Separator between the two bounds of a serialized range
pub const RANGE_SEPARATOR: char = '/';

/// Zero-based month number for January
pub const JANUARY: u32 = 0;
/// Zero-based month number for December
pub const DECEMBER: u32 = 11;

/// Largest valid millisecond-of-second value
pub const MAX_MILLISECOND: u32 = 999;

/// Nanoseconds in one millisecond
pub(crate) const NANOS_PER_MILLI: u32 = 1_000_000;
