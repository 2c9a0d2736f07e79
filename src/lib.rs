#![doc = include_str!("../README.md")]
#![cfg_attr(feature = "py", allow(unsafe_op_in_unsafe_fn))] // pyo3 generated code

#[cfg(feature = "py")]
use pyo3::prelude::*;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

mod car;
mod date;
pub mod error;
pub mod primitive;
mod rent;
pub mod span;
pub mod tariff;
pub mod utility;

pub use crate::car::{Car, CarType};
pub use crate::date::Date;
pub use crate::error::Error;
pub use crate::primitive::*;
pub use crate::rent::Rent;
pub use crate::span::{Relation, Span};
pub use crate::tariff::{Rate, Tariff};
pub use crate::utility::Coerced;

#[cfg(feature = "py")]
#[pymodule]
fn rental(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(is_leap_year, m)?)?;
    m.add_function(wrap_pyfunction!(days_in_month, m)?)?;
    m.add_function(wrap_pyfunction!(is_valid_date, m)?)?;
    m.add_function(wrap_pyfunction!(ordinal, m)?)?;
    m.add_class::<Date>()?;
    m.add_class::<CarType>()?;
    m.add_class::<Car>()?;
    m.add_class::<Rent>()?;
    Ok(())
}

/// The earliest year a [`Date`] may hold.
pub const MIN_YEAR: Year = 1000;

/// The latest year a [`Date`] may hold.
pub const MAX_YEAR: Year = 9999;

/// Days in each month of a common year, January first.
const DAYS_IN_MONTH: [Dom; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap year: divisible by 400, or divisible by 4 and not by 100.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyfunction)]
pub fn is_leap_year(year: Year) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// The number of days in `month` of `year`, or 0 if the month is not within 1..=12.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyfunction)]
pub fn days_in_month(month: Month, year: Year) -> Dom {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[month as usize - 1],
        _ => 0,
    }
}

/// Whether the triple is a real calendar date between [`MIN_YEAR`] and [`MAX_YEAR`].
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyfunction)]
pub fn is_valid_date(day: Dom, month: Month, year: Year) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year) && day >= 1 && day <= days_in_month(month, year)
}

/// The ordinal day number of a date, counting from the start of the proleptic calendar.
///
/// January and February are counted as the 13th and 14th months of the previous year so the leap
/// day falls at the end of the counted year. All divisions truncate.
///
/// The value is only meaningful for valid dates and only to compare or subtract two of them.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyfunction)]
pub fn ordinal(day: Dom, month: Month, year: Year) -> Ordinal {
    let (mut y, mut m) = (year, month as Ordinal);
    if m < 3 {
        y -= 1;
        m += 12;
    }
    365 * y + y / 4 - y / 100 + y / 400 + ((m + 1) * 306) / 10 + (day as Ordinal - 62)
}
