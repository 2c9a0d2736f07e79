//! Holds the primitive aliases used across the crate.
//!
//! These are plain aliases so the bindings see ordinary integers. Range checks live on the types
//! that own the values ([`crate::Date`], [`crate::Car`]).

/// Counter for days of a month.
pub type Dom = u8;

/// Counter for months of a year (1 is January).
pub type Month = u8;

/// Counter for years.
pub type Year = i32;

/// The ordinal day number of a date, see [`crate::ordinal`].
pub type Ordinal = i32;

/// Counter for consecutive days (rental durations, date differences).
pub type DayCount = u32;

/// The identifier of a car (7 digits when valid).
pub type CarId = u32;

/// An amount charged for a rental.
///
/// Wide enough for the longest rental at any [`u32`] rate; beyond that prices saturate.
pub type Price = u64;

/// The difference between two [`Price`]s.
pub type PriceDelta = i64;
