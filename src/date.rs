//! [`Date`] and associated impls.

use core::{cmp::Ordering, fmt};

#[cfg(feature = "py")]
use pyo3::prelude::*;
#[cfg(feature = "py")]
use rental_proc::py_attr;
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::{Coerced, DayCount, Dom, Error, Month, Ordinal, Year, is_valid_date};

/// A calendar date between 01/01/1000 and 31/12/9999.
///
/// A `Date` is always valid. Constructing one from an invalid triple gives [`Date::FALLBACK`]
/// and setters ignore values that would make it invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyclass(eq, ord))]
pub struct Date {
    day: Dom,
    month: Month,
    year: Year,
}

impl Date {
    /// What an invalid input turns into, 01/01/2000.
    pub const FALLBACK: Self = Self {
        day: 1,
        month: 1,
        year: 2000,
    };

    /// Same as [`Self::new`] but tell whether the input was replaced by [`Self::FALLBACK`].
    pub fn new_coerced(day: Dom, month: Month, year: Year) -> Coerced<Self> {
        if is_valid_date(day, month, year) {
            return Coerced::accepted(Self { day, month, year });
        }
        tracing::debug!(day, month, year, "invalid date, using {}", Self::FALLBACK);
        Coerced::fallback(Self::FALLBACK)
    }

    /// Strict variant of [`Self::new`] for callers that treat invalid input as an error.
    pub fn try_new(day: Dom, month: Month, year: Year) -> Result<Self, Error> {
        if is_valid_date(day, month, year) {
            Ok(Self { day, month, year })
        } else {
            Err(Error::InvalidDate { day, month, year })
        }
    }
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
impl Date {
    /// Create a date, or [`Self::FALLBACK`] if the triple is not a valid date.
    #[cfg_attr(feature = "wasm", wasm_bindgen(constructor))]
    pub fn new(day: Dom, month: Month, year: Year) -> Self {
        Self::new_coerced(day, month, year).result
    }
}

#[cfg_attr(feature = "py", py_attr(pymethods, new))]
impl Date {
    /// Same as [`Self::new`] for callers with wider integers (Python), values that do not fit
    /// fall back as well.
    #[cfg_attr(not(feature = "py"), allow(dead_code))]
    pub(crate) fn from_wide(day: i64, month: i64, year: i64) -> Self {
        match (Dom::try_from(day), Month::try_from(month), Year::try_from(year)) {
            (Ok(day), Ok(month), Ok(year)) => Self::new(day, month, year),
            _ => {
                tracing::debug!(day, month, year, "invalid date, using {}", Self::FALLBACK);
                Self::FALLBACK
            }
        }
    }
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pymethods)]
impl Date {
    // getters

    /// Getter for the day of month.
    pub fn day(&self) -> Dom {
        self.day
    }

    /// Getter for the month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Getter for the year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Is the year of this date a leap year (see [`crate::is_leap_year`]).
    pub fn is_leap_year(&self) -> bool {
        crate::is_leap_year(self.year)
    }

    /// The ordinal day number of this date (see [`crate::ordinal`]).
    pub fn ordinal(&self) -> Ordinal {
        crate::ordinal(self.day, self.month, self.year)
    }

    // setters
    //
    // each returns whether the value was applied, an invalid result leaves the date untouched

    /// Set the day of month if the date stays valid.
    pub fn set_day(&mut self, day: Dom) -> bool {
        self.set(day, self.month, self.year)
    }

    /// Set the month if the date stays valid.
    pub fn set_month(&mut self, month: Month) -> bool {
        self.set(self.day, month, self.year)
    }

    /// Set the year if the date stays valid.
    pub fn set_year(&mut self, year: Year) -> bool {
        self.set(self.day, self.month, year)
    }

    // arithmetic

    /// Is this date strictly earlier than `other`.
    pub fn before(&self, other: &Date) -> bool {
        self.ordinal() < other.ordinal()
    }

    /// Is this date strictly later than `other`.
    pub fn after(&self, other: &Date) -> bool {
        other.before(self)
    }

    /// The number of days between the two dates, regardless of their order.
    pub fn difference(&self, other: &Date) -> DayCount {
        self.ordinal().abs_diff(other.ordinal())
    }

    /// The next calendar day.
    ///
    /// Rolls over to the next month and year as needed. The day after 31/12/9999 is out of range
    /// and gives [`Self::FALLBACK`].
    pub fn tomorrow(&self) -> Date {
        let Self { day, month, year } = *self;
        if is_valid_date(day + 1, month, year) {
            Self::new(day + 1, month, year)
        } else if is_valid_date(1, month + 1, year) {
            Self::new(1, month + 1, year)
        } else {
            Self::new(1, 1, year + 1)
        }
    }
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl Date {
    /// Check equality to another, JS has no way to call [`PartialEq`].
    pub fn equals(&self, other: &Date) -> bool {
        self == other
    }
}

impl Date {
    fn set(&mut self, day: Dom, month: Month, year: Year) -> bool {
        if !is_valid_date(day, month, year) {
            tracing::trace!(day, month, year, current = %self, "ignoring invalid date change");
            return false;
        }
        *self = Self { day, month, year };
        true
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}
