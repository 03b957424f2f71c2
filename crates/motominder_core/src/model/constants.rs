//! Field limits for motorcycle records.

/// Minimum number of characters in a make.
pub const MIN_MAKE_LENGTH: usize = 1;
/// Maximum number of characters in a make.
pub const MAX_MAKE_LENGTH: usize = 20;
/// Minimum number of characters in a model.
pub const MIN_MODEL_LENGTH: usize = 1;
/// Maximum number of characters in a model.
pub const MAX_MODEL_LENGTH: usize = 20;
/// Oldest accepted model year (inclusive).
pub const MIN_YEAR: i32 = 1999;
/// Newest accepted model year (inclusive).
pub const MAX_YEAR: i32 = 2020;
/// Exact number of characters in a VIN.
pub const VIN_LENGTH: usize = 17;
/// Manufacturer rejected by business rule, compared case-insensitively.
pub const REJECTED_MANUFACTURER: &str = "Ford";
