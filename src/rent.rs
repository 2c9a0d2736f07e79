//! [`Rent`], a booking of a [`Car`] by a customer.

use core::fmt;

#[cfg(feature = "py")]
use pyo3::prelude::*;
#[cfg(feature = "py")]
use rental_proc::py_attr;
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::{Car, Coerced, Date, DayCount, Error, MAX_YEAR, Price, PriceDelta, Span, Tariff};

/// A customer renting a car from a pickup date to a return date.
///
/// The return date is always strictly after the pickup date. The rent owns its own copies of the
/// car and dates, nothing handed in or out is shared with the caller.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyclass(eq))]
pub struct Rent {
    name: String,
    car: Car,
    pick_date: Date,
    return_date: Date,
}

impl Rent {
    /// Same as [`Self::new`] but tell whether the dates were replaced.
    pub fn new_coerced(name: String, car: &Car, pick_date: &Date, return_date: &Date) -> Coerced<Self> {
        let did_fallback = !return_date.after(pick_date);
        let next = pick_date.tomorrow();
        let (pick_date, return_date) = if !did_fallback {
            (*pick_date, *return_date)
        } else if next.after(pick_date) {
            tracing::debug!(
                pick = %pick_date,
                returned = %return_date,
                "return date is not after pickup, returning on {next}"
            );
            (*pick_date, next)
        } else {
            // nothing after the last supported day, so rent the day before it instead
            let previous = Date::new(30, 12, MAX_YEAR);
            tracing::debug!(
                pick = %pick_date,
                returned = %return_date,
                "no day after pickup, picking up on {previous}"
            );
            (previous, *pick_date)
        };

        Coerced::new(
            did_fallback,
            Self {
                name,
                car: car.clone(),
                pick_date,
                return_date,
            },
        )
    }

    /// Strict variant of [`Self::new`] for callers that treat a bad return date as an error.
    pub fn try_new(name: String, car: &Car, pick_date: &Date, return_date: &Date) -> Result<Self, Error> {
        if !return_date.after(pick_date) {
            return Err(Error::ReturnNotAfterPickup {
                pickup: *pick_date,
                returned: *return_date,
            });
        }
        Ok(Self {
            name,
            car: car.clone(),
            pick_date: *pick_date,
            return_date: *return_date,
        })
    }

    /// Borrow the customer name, see [`Self::name`] for an owned copy.
    pub fn name_str(&self) -> &str {
        &self.name
    }

    /// Borrow the car, see [`Self::car`] for an owned copy.
    pub fn car_ref(&self) -> &Car {
        &self.car
    }

    /// The rented days as a [`Span`].
    pub fn span(&self) -> Span {
        Span::new_unchecked(self.pick_date, self.return_date)
    }

    /// The total price under a custom [`Tariff`].
    pub fn price_with(&self, tariff: &Tariff) -> Price {
        tariff.price(self.car.car_type(), self.how_many_days())
    }

    /// Same as [`Self::upgrade`] with prices from a custom [`Tariff`].
    pub fn upgrade_with(&mut self, new_car: &Car, tariff: &Tariff) -> PriceDelta {
        if !new_car.better(&self.car) {
            tracing::trace!(current = %self.car, offered = %new_car, "not an upgrade");
            return 0;
        }
        let before = self.price_with(tariff);
        self.car = new_car.clone();
        let after = self.price_with(tariff);
        let delta = i128::from(after) - i128::from(before);
        PriceDelta::try_from(delta).unwrap_or(if delta > 0 {
            PriceDelta::MAX
        } else {
            PriceDelta::MIN
        })
    }
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", py_attr(pymethods, new))]
impl Rent {
    /// Create a rent.
    ///
    /// If the return date is not after the pickup date, the car is returned the day after the
    /// pickup instead. A pickup on 31/12/9999 has no next day, it becomes a one day rent from
    /// 30/12/9999 instead.
    #[cfg_attr(feature = "wasm", wasm_bindgen(constructor))]
    pub fn new(name: String, car: &Car, pick_date: &Date, return_date: &Date) -> Self {
        Self::new_coerced(name, car, pick_date, return_date).result
    }
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pymethods)]
impl Rent {
    // getters

    /// A copy of the customer name.
    pub fn name(&self) -> String {
        self.name.clone()
    }

    /// A copy of the rented car.
    pub fn car(&self) -> Car {
        self.car.clone()
    }

    /// Getter for the pickup date.
    pub fn pick_date(&self) -> Date {
        self.pick_date
    }

    /// Getter for the return date.
    pub fn return_date(&self) -> Date {
        self.return_date
    }

    // setters

    /// Replace the car with a copy of `car`.
    pub fn set_car(&mut self, car: &Car) {
        self.car = car.clone();
    }

    /// Setter for the customer name.
    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Move the pickup if it stays before the return date, returns whether it was applied.
    pub fn set_pick_date(&mut self, pick_date: &Date) -> bool {
        if !pick_date.before(&self.return_date) {
            tracing::trace!(pick = %pick_date, returned = %self.return_date, "ignoring pickup date");
            return false;
        }
        self.pick_date = *pick_date;
        true
    }

    /// Move the return if it stays after the pickup date, returns whether it was applied.
    pub fn set_return_date(&mut self, return_date: &Date) -> bool {
        if !return_date.after(&self.pick_date) {
            tracing::trace!(pick = %self.pick_date, returned = %return_date, "ignoring return date");
            return false;
        }
        self.return_date = *return_date;
        true
    }

    // business rules

    /// The number of rented days, at least 1.
    pub fn how_many_days(&self) -> DayCount {
        self.pick_date.difference(&self.return_date)
    }

    /// The total price under [`Tariff::STANDARD`].
    ///
    /// Each full week is billed at the weekly rate of the car type, the remaining days at the
    /// daily rate.
    pub fn price(&self) -> Price {
        self.price_with(&Tariff::STANDARD)
    }

    /// Switch to `new_car` if it is better than the current car and return the price change.
    ///
    /// Returns 0 and keeps the current car otherwise. A better car can also cost the same (an
    /// automatic of the same type), then the car changes and 0 is returned as well.
    pub fn upgrade(&mut self, new_car: &Car) -> PriceDelta {
        self.upgrade_with(new_car, &Tariff::STANDARD)
    }

    /// Merge with `other` if both book the same car for the same customer on touching or
    /// overlapping days.
    ///
    /// The merged rent covers from the earlier pickup to the later return. Returns [`None`] for a
    /// different customer, a different car (see [`Car`] equality) or a gap of at least one day
    /// between the bookings. Neither rent is changed.
    pub fn overlap(&self, other: &Rent) -> Option<Rent> {
        if self.name != other.name || self.car != other.car {
            tracing::debug!(
                this = %self,
                other = %other,
                "not the same customer and car, nothing to merge"
            );
            return None;
        }

        let (a, b) = (self.span(), other.span());
        let relation = a.relation(&b);
        let merged = a.union(&b);
        tracing::debug!(this = %a, other = %b, ?relation, merged = merged.is_some(), "overlap");

        merged.map(|span| Self {
            name: self.name.clone(),
            car: self.car.clone(),
            pick_date: span.start(),
            return_date: span.end(),
        })
    }
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl Rent {
    /// Check equality to another, JS has no way to call [`PartialEq`].
    pub fn equals(&self, other: &Rent) -> bool {
        self == other
    }
}

impl PartialEq for Rent {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.pick_date == other.pick_date
            && self.return_date == other.return_date
            && self.car == other.car
    }
}

impl Eq for Rent {}

impl fmt::Display for Rent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name:{} From:{} To:{} Type:{} Days:{} Price:{}",
            self.name,
            self.pick_date,
            self.return_date,
            self.car.car_type(),
            self.how_many_days(),
            self.price()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CarType, Rate};

    fn june(day: u8) -> Date {
        Date::new(day, 6, 2023)
    }

    fn july(day: u8) -> Date {
        Date::new(day, 7, 2023)
    }

    fn toyota(t: char) -> Car {
        Car::new(1234567, t, "Toyota".into(), true)
    }

    fn rent(name: &str, car: &Car, pick: Date, ret: Date) -> Rent {
        Rent::new(name.into(), car, &pick, &ret)
    }

    #[test]
    fn test_new_valid() {
        let car = toyota('B');
        let r = rent("John Doe", &car, june(15), june(20));
        assert_eq!(r.name(), "John Doe");
        assert_eq!(r.car(), car);
        assert_eq!(r.pick_date(), june(15));
        assert_eq!(r.return_date(), june(20));
    }

    #[test]
    fn test_new_forces_return_after_pickup() {
        let car = toyota('B');
        assert_eq!(rent("a", &car, june(20), june(15)).return_date(), june(21));
        assert_eq!(rent("a", &car, june(20), june(20)).return_date(), june(21));
        assert_eq!(rent("a", &car, june(30), june(1)).return_date(), july(1));

        let c = Rent::new_coerced("a".into(), &car, &june(20), &june(20));
        assert!(c.did_fallback);
        assert!(!Rent::new_coerced("a".into(), &car, &june(20), &june(21)).did_fallback);
    }

    #[test]
    fn test_try_new() {
        let car = toyota('B');
        assert!(Rent::try_new("a".into(), &car, &june(1), &june(2)).is_ok());
        assert_eq!(
            Rent::try_new("a".into(), &car, &june(2), &june(2)),
            Err(Error::ReturnNotAfterPickup {
                pickup: june(2),
                returned: june(2)
            })
        );
    }

    #[test]
    fn test_copies_are_independent() {
        let mut car = toyota('B');
        let original = rent("John Doe", &car, june(15), june(20));
        car.set_brand("Honda".into());
        assert_eq!(original.car().brand(), "Toyota");

        let mut copy = original.clone();
        assert_eq!(copy, original);
        copy.set_name("Jane".into());
        copy.car.set_brand("Honda".into());
        assert_eq!(original.name(), "John Doe");
        assert_eq!(original.car_ref().brand_str(), "Toyota");

        let mut got = original.car();
        got.set_brand("Kia".into());
        assert_eq!(original.car_ref().brand_str(), "Toyota");
    }

    #[test]
    fn test_setters() {
        let mut r = rent("John Doe", &toyota('B'), june(15), june(20));
        let honda = Car::new(7654321, 'A', "Honda".into(), false);
        r.set_name("Jane Smith".into());
        r.set_car(&honda);
        assert_eq!(r.name(), "Jane Smith");
        assert_eq!(r.car(), honda);

        assert!(r.set_pick_date(&june(10)));
        assert_eq!(r.pick_date(), june(10));
        assert!(!r.set_pick_date(&june(20)));
        assert!(!r.set_pick_date(&june(25)));
        assert_eq!(r.pick_date(), june(10));

        assert!(r.set_return_date(&june(25)));
        assert_eq!(r.return_date(), june(25));
        assert!(!r.set_return_date(&june(10)));
        assert!(!r.set_return_date(&june(5)));
        assert_eq!(r.return_date(), june(25));
    }

    #[test]
    fn test_how_many_days() {
        assert_eq!(rent("a", &toyota('B'), june(15), june(20)).how_many_days(), 5);
        assert_eq!(rent("a", &toyota('B'), june(15), june(16)).how_many_days(), 1);
        assert_eq!(rent("a", &toyota('B'), june(30), july(1)).how_many_days(), 1);
    }

    #[test]
    fn test_price_type_a() {
        let a = toyota('A');
        assert_eq!(rent("a", &a, july(1), july(4)).price(), 300);
        assert_eq!(rent("a", &a, july(1), july(8)).price(), 630);
        assert_eq!(rent("a", &a, july(1), july(10)).price(), 830);
        assert_eq!(rent("a", &a, july(1), july(15)).price(), 1260);
        assert_eq!(rent("a", &a, june(15), june(16)).price(), 100);
    }

    #[test]
    fn test_price_all_types() {
        for (t, expected) in [('A', 300), ('B', 450), ('C', 540), ('D', 720)] {
            assert_eq!(rent("a", &toyota(t), june(15), june(18)).price(), expected);
        }
    }

    #[test]
    fn test_price_with_tariff() {
        let r = rent("a", &toyota('C'), july(1), july(9));
        let tariff = Tariff::STANDARD.with_rate(CarType::C, Rate::new(200, 1000));
        assert_eq!(r.price_with(&tariff), 1200);
        assert_eq!(r.price_with(&Tariff::EMPTY), 0);
        assert_eq!(r.price(), 1134 + 180);
    }

    #[test]
    fn test_upgrade() {
        let mut r = rent("John Doe", &toyota('A'), june(15), june(18));
        assert_eq!(r.price(), 300);
        let honda = Car::new(7654321, 'B', "Honda".into(), true);
        assert_eq!(r.upgrade(&honda), 150);
        assert_eq!(r.car().car_type(), CarType::B);
        assert_eq!(r.car(), honda);
        assert_eq!(r.price(), 450);
    }

    #[test]
    fn test_upgrade_rejected() {
        let mut r = rent("John Doe", &toyota('B'), june(15), june(18));
        let worse = Car::new(7654321, 'A', "Honda".into(), true);
        assert_eq!(r.upgrade(&worse), 0);
        assert_eq!(r.car().car_type(), CarType::B);

        // an equal car is not an upgrade either
        let same = toyota('B');
        assert_eq!(r.upgrade(&same), 0);
        assert_eq!(r.car().brand(), "Toyota");
    }

    #[test]
    fn test_upgrade_same_type_automatic() {
        let mut r = rent("John Doe", &toyota('B'), june(15), june(18));
        let auto = Car::new(7654321, 'B', "Honda".into(), false);
        assert_eq!(r.upgrade(&auto), 0);
        assert!(!r.car().is_manual());
        assert_eq!(r.car().brand(), "Honda");
    }

    #[test]
    fn test_upgrade_between_automatics() {
        let auto = Car::new(1234567, 'B', "Toyota".into(), false);
        let mut r = rent("John Doe", &auto, june(15), june(18));
        let other = Car::new(7654321, 'B', "Honda".into(), false);
        assert_eq!(r.upgrade(&other), 0);
        assert_eq!(r.car().brand(), "Toyota");
    }

    #[test]
    fn test_upgrade_with_long_rental() {
        let mut r = rent("John Doe", &toyota('A'), Date::new(1, 1, 1000), Date::new(31, 12, 9999));
        let tariff = Tariff::EMPTY
            .with_rate(CarType::A, Rate::new(1, 1))
            .with_rate(CarType::D, Rate::new(2000, 10_000));
        assert_eq!(r.price_with(&tariff), 469_597 + 2);
        let d = Car::new(7654321, 'D', "BMW".into(), true);
        assert_eq!(r.upgrade_with(&d, &tariff), 4_695_974_000 - 469_599);
        assert_eq!(r.price_with(&tariff), 4_695_974_000);

        // a better car without a rate prices at 0, the change saturates
        let cheap = Tariff::EMPTY.with_rate(CarType::C, Rate::new(Price::MAX, Price::MAX));
        let mut r = rent("John Doe", &toyota('C'), june(1), june(3));
        let d = Car::new(7654321, 'D', "BMW".into(), true);
        assert_eq!(r.upgrade_with(&d, &cheap), -PriceDelta::MAX - 1);
    }

    #[test]
    fn test_equality() {
        let car = toyota('B');
        let a = rent("John Doe", &car, june(15), june(20));
        assert_eq!(a, rent("John Doe", &car, june(15), june(20)));
        // car ids are not part of equality
        let twin = Car::new(7654321, 'B', "Toyota".into(), true);
        assert_eq!(a, rent("John Doe", &twin, june(15), june(20)));
        assert_ne!(a, rent("Jane Smith", &car, june(15), june(20)));
        assert_ne!(a, rent("John Doe", &car, june(16), june(20)));
        assert_ne!(a, rent("John Doe", &car, june(15), june(21)));
        assert_ne!(a, rent("John Doe", &toyota('C'), june(15), june(20)));
    }

    #[test]
    fn test_display() {
        let r = rent("John Doe", &toyota('B'), june(15), june(20));
        assert_eq!(
            r.to_string(),
            "Name:John Doe From:15/06/2023 To:20/06/2023 Type:B Days:5 Price:750"
        );
    }

    #[test]
    fn test_overlap_needs_same_customer_and_car() {
        let car = toyota('B');
        let a = rent("John Doe", &car, june(15), june(20));
        assert_eq!(a.overlap(&rent("Jane Smith", &car, june(15), june(20))), None);
        let honda = Car::new(7654321, 'A', "Honda".into(), false);
        assert_eq!(a.overlap(&rent("John Doe", &honda, june(15), june(20))), None);
        let auto = Car::new(1234567, 'B', "Toyota".into(), false);
        assert_eq!(a.overlap(&rent("John Doe", &auto, june(16), june(18))), None);
    }

    #[test]
    fn test_overlap_cases() {
        let car = toyota('B');
        let a = rent("John Doe", &car, june(10), june(20));
        let test = |pick: Date, ret: Date, expected: Option<(Date, Date)>| {
            let b = rent("John Doe", &car, pick, ret);
            let expected = expected.map(|(p, r)| rent("John Doe", &car, p, r));
            assert_eq!(a.overlap(&b), expected, "{b}");
            // the same result from the other side
            assert_eq!(b.overlap(&a), expected, "{b}");
        };

        // gap of a day or more
        test(june(22), june(25), None);
        test(june(21), june(25), None);
        test(june(1), june(9), None);
        // touching
        test(june(20), june(25), Some((june(10), june(25))));
        test(june(5), june(10), Some((june(5), june(20))));
        // partial overlap
        test(june(15), june(25), Some((june(10), june(25))));
        test(june(5), june(15), Some((june(5), june(20))));
        // containment
        test(june(12), june(18), Some((june(10), june(20))));
        test(june(5), june(25), Some((june(5), june(25))));
        test(june(10), june(15), Some((june(10), june(20))));
        test(june(15), june(20), Some((june(10), june(20))));
        // identical
        test(june(10), june(20), Some((june(10), june(20))));
    }

    #[test]
    fn test_overlap_does_not_mutate() {
        let car = toyota('B');
        let a = rent("John Doe", &car, june(10), june(20));
        let b = rent("John Doe", &car, june(15), june(25));
        let (a_before, b_before) = (a.clone(), b.clone());
        let merged = a.overlap(&b).unwrap();
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
        assert_eq!(merged.how_many_days(), 15);
        assert_eq!(merged.price(), 945 + 8 * 150);
    }

    #[test]
    fn test_overlap_across_months() {
        let car = toyota('D');
        let a = rent("John Doe", &car, june(25), july(3));
        let b = rent("John Doe", &car, july(3), july(10));
        let merged = a.overlap(&b).unwrap();
        assert_eq!((merged.pick_date(), merged.return_date()), (june(25), july(10)));
        assert_eq!(merged.span().days(), 15);
    }

    #[test]
    fn test_complete_scenario() {
        let mut r = rent("Alice Johnson", &toyota('A'), july(1), july(15));
        assert_eq!(r.how_many_days(), 14);
        assert_eq!(r.price(), 1260);

        let bmw = Car::new(7654321, 'C', "BMW".into(), false);
        assert_eq!(r.upgrade(&bmw), 2268 - 1260);
        assert_eq!(r.car().brand(), "BMW");

        let s = r.to_string();
        assert!(s.contains("Alice Johnson"));
        assert!(s.contains("Type:C"));
        assert!(s.contains("Days:14"));
    }

    #[test]
    fn test_last_supported_day() {
        let car = toyota('B');
        let last = Date::new(31, 12, 9999);
        let previous = Date::new(30, 12, 9999);

        let r = rent("John Doe", &car, last, last);
        assert_eq!((r.pick_date(), r.return_date()), (previous, last));
        assert_eq!(r.how_many_days(), 1);
        assert_eq!(r.price(), 150);
        assert!(Rent::new_coerced("a".into(), &car, &last, &june(1)).did_fallback);
        assert_eq!(rent("John Doe", &car, last, june(1)), r);

        let merged = r.overlap(&r.clone()).unwrap();
        assert_eq!(merged, r);
        let earlier = rent("John Doe", &car, Date::new(20, 12, 9999), previous);
        let merged = earlier.overlap(&r).unwrap();
        assert_eq!((merged.pick_date(), merged.return_date()), (Date::new(20, 12, 9999), last));
        assert_eq!(merged.how_many_days(), 11);

        assert!(Rent::try_new("a".into(), &car, &last, &last).is_err());
    }
}
