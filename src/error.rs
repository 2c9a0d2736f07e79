//! Errors for the strict constructors (`try_new`).
//!
//! The default constructors never fail and fall back to a fixed value instead, these errors are
//! only produced when a caller explicitly asks for strict validation.

use crate::{CarId, Date, Dom, Month, Year};

/// Why a value could not be built from the given input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The triple is not a real calendar date between the years 1000 and 9999.
    #[error("{day:02}/{month:02}/{year} is not a valid date")]
    InvalidDate {
        /// The rejected day of month.
        day: Dom,
        /// The rejected month.
        month: Month,
        /// The rejected year.
        year: Year,
    },
    /// The car id is not a 7 digit number.
    #[error("{0} is not a valid car id, expected a value 1000000..=9999999")]
    InvalidCarId(CarId),
    /// The character does not name a car type.
    #[error("'{0}' is not a valid car type, expected one of 'A', 'B', 'C' or 'D'")]
    InvalidCarType(char),
    /// A rental must end at least a day after it starts.
    #[error("return date {returned} is not after pickup date {pickup}")]
    ReturnNotAfterPickup {
        /// The pickup date of the rejected rental.
        pickup: Date,
        /// The rejected return date.
        returned: Date,
    },
}
