//! Pricing of rentals per [`CarType`].

use crate::{CarType, DayCount, Price};

/// Length of the block billed at the weekly rate.
pub const DAYS_IN_WEEK: DayCount = 7;

/// What a car type costs per day and per full week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rate {
    /// Price of a single day.
    pub daily: Price,
    /// Flat price of a full [`DAYS_IN_WEEK`] block, normally discounted from 7 daily rates.
    pub weekly: Price,
}

impl Rate {
    /// A shorthand for creation.
    pub const fn new(daily: Price, weekly: Price) -> Self {
        Self { daily, weekly }
    }

    /// Full weeks at the weekly rate and the remaining days at the daily rate.
    ///
    /// Saturates at [`Price::MAX`] instead of overflowing.
    pub const fn price(&self, days: DayCount) -> Price {
        let weeks = (days / DAYS_IN_WEEK) as Price;
        let rest = (days % DAYS_IN_WEEK) as Price;
        weeks
            .saturating_mul(self.weekly)
            .saturating_add(rest.saturating_mul(self.daily))
    }
}

/// The price list, a [`Rate`] for each [`CarType`] that can be rented.
///
/// A type without a rate prices at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tariff {
    rates: [Option<Rate>; CarType::ALL.len()],
}

impl Tariff {
    /// The regular price list, weekly rates are 10% off seven days.
    pub const STANDARD: Self = Self {
        rates: [
            Some(Rate::new(100, 630)),
            Some(Rate::new(150, 945)),
            Some(Rate::new(180, 1134)),
            Some(Rate::new(240, 1512)),
        ],
    };

    /// A price list with no rates at all.
    pub const EMPTY: Self = Self {
        rates: [None; CarType::ALL.len()],
    };

    /// Return a copy that prices `car_type` at `rate`.
    #[must_use]
    pub const fn with_rate(mut self, car_type: CarType, rate: Rate) -> Self {
        self.rates[car_type.index()] = Some(rate);
        self
    }

    /// Return a copy without a rate for `car_type`.
    #[must_use]
    pub const fn without(mut self, car_type: CarType) -> Self {
        self.rates[car_type.index()] = None;
        self
    }

    /// The rate of `car_type`, if there is one.
    pub const fn rate(&self, car_type: CarType) -> Option<Rate> {
        self.rates[car_type.index()]
    }

    /// The price of renting a car of `car_type` for `days`.
    pub fn price(&self, car_type: CarType, days: DayCount) -> Price {
        match self.rate(car_type) {
            Some(rate) => rate.price(days),
            None => {
                tracing::warn!(%car_type, days, "no rate for car type, pricing at 0");
                0
            }
        }
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Self::STANDARD
    }
}
