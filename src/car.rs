//! [`Car`] and its class, [`CarType`].

use core::{
    fmt,
    hash::{Hash, Hasher},
};

#[cfg(feature = "py")]
use pyo3::prelude::*;
#[cfg(feature = "py")]
use rental_proc::py_attr;
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::{CarId, Coerced, Error};

/// The class of a car, from the basic `A` to the premium `D`.
///
/// Variants are declared in quality order so the derived [`Ord`] ranks them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyclass(eq, eq_int, ord, hash, frozen))]
pub enum CarType {
    #[default]
    A,
    B,
    C,
    D,
}

impl CarType {
    /// All types, worst to best.
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Position of this type in [`Self::ALL`].
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

#[cfg_attr(feature = "py", py_attr(pymethods, staticmethod))]
impl CarType {
    /// Parse the letter naming a type, only uppercase `A` to `D` are accepted.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            _ => None,
        }
    }
}

#[cfg_attr(feature = "py", pymethods)]
impl CarType {
    /// The letter naming this type.
    pub fn as_char(&self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }
}

impl TryFrom<char> for CarType {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::from_char(value).ok_or(Error::InvalidCarType(value))
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A rentable car.
///
/// Two cars are equal when they are interchangeable for a customer: same [`CarType`], brand and
/// gearbox. The id is not part of equality (nor of the hash).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyclass(eq))]
pub struct Car {
    id: CarId,
    car_type: CarType,
    brand: String,
    is_manual: bool,
}

impl Car {
    /// The smallest valid id (7 digits).
    pub const MIN_ID: CarId = 1_000_000;

    /// The largest valid id (7 digits).
    pub const MAX_ID: CarId = 9_999_999;

    /// What an invalid id turns into.
    pub const FALLBACK_ID: CarId = 9_999_999;

    /// Is `id` a 7 digit number.
    pub const fn is_valid_id(id: CarId) -> bool {
        id >= Self::MIN_ID && id <= Self::MAX_ID
    }

    /// Same as [`Self::new`] but tell whether the id or the type was replaced by its fallback.
    pub fn new_coerced(id: CarId, car_type: char, brand: String, is_manual: bool) -> Coerced<Self> {
        let parsed = CarType::from_char(car_type);
        if parsed.is_none() {
            tracing::debug!(%car_type, "invalid car type, using {}", CarType::default());
        }
        let car = Self::with_type_coerced(id, parsed.unwrap_or_default(), brand, is_manual);
        Coerced::new(car.did_fallback || parsed.is_none(), car.result)
    }

    /// Same as [`Self::with_type`] but tell whether the id was replaced by its fallback.
    pub fn with_type_coerced(
        id: CarId,
        car_type: CarType,
        brand: String,
        is_manual: bool,
    ) -> Coerced<Self> {
        let did_fallback = !Self::is_valid_id(id);
        if did_fallback {
            tracing::debug!(id, "invalid car id, using {}", Self::FALLBACK_ID);
        }
        Coerced::new(
            did_fallback,
            Self {
                id: if did_fallback { Self::FALLBACK_ID } else { id },
                car_type,
                brand,
                is_manual,
            },
        )
    }

    /// Create a car of a known type, only the id is checked (see [`Self::new`]).
    pub fn with_type(id: CarId, car_type: CarType, brand: String, is_manual: bool) -> Self {
        Self::with_type_coerced(id, car_type, brand, is_manual).result
    }

    /// Strict variant of [`Self::new`] for callers that treat invalid input as an error.
    pub fn try_new(id: CarId, car_type: char, brand: String, is_manual: bool) -> Result<Self, Error> {
        if !Self::is_valid_id(id) {
            return Err(Error::InvalidCarId(id));
        }
        Ok(Self {
            id,
            car_type: CarType::try_from(car_type)?,
            brand,
            is_manual,
        })
    }

    /// Borrow the brand, see [`Self::brand`] for an owned copy.
    pub fn brand_str(&self) -> &str {
        &self.brand
    }

    /// Set the type from a known [`CarType`], always applies.
    pub fn set_type(&mut self, car_type: CarType) {
        self.car_type = car_type;
    }
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
impl Car {
    /// Create a car.
    ///
    /// An id that is not 7 digits becomes [`Self::FALLBACK_ID`] and a type letter other than
    /// `A` to `D` becomes [`CarType::A`]. Brand and gearbox are taken as given.
    #[cfg_attr(feature = "wasm", wasm_bindgen(constructor))]
    pub fn new(id: CarId, car_type: char, brand: String, is_manual: bool) -> Self {
        Self::new_coerced(id, car_type, brand, is_manual).result
    }
}

#[cfg_attr(feature = "py", py_attr(pymethods, new))]
impl Car {
    /// Same as [`Self::new`] with a wider id (Python), ids that do not fit fall back as well.
    #[cfg_attr(not(feature = "py"), allow(dead_code))]
    pub(crate) fn from_wide(id: i64, car_type: char, brand: String, is_manual: bool) -> Self {
        let id = CarId::try_from(id).unwrap_or_else(|_| {
            tracing::debug!(id, "invalid car id, using {}", Self::FALLBACK_ID);
            Self::FALLBACK_ID
        });
        Self::new(id, car_type, brand, is_manual)
    }
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pymethods)]
impl Car {
    // getters

    /// Getter for the id.
    pub fn id(&self) -> CarId {
        self.id
    }

    /// Getter for the type.
    pub fn car_type(&self) -> CarType {
        self.car_type
    }

    /// A copy of the brand.
    pub fn brand(&self) -> String {
        self.brand.clone()
    }

    /// Getter for the gearbox, true if manual.
    pub fn is_manual(&self) -> bool {
        self.is_manual
    }

    // setters

    /// Set the id if it is 7 digits, returns whether it was applied.
    pub fn set_id(&mut self, id: CarId) -> bool {
        if !Self::is_valid_id(id) {
            tracing::trace!(id, current = self.id, "ignoring invalid car id");
            return false;
        }
        self.id = id;
        true
    }

    /// Set the type from its letter if valid, returns whether it was applied.
    pub fn set_car_type(&mut self, car_type: char) -> bool {
        match CarType::from_char(car_type) {
            Some(v) => {
                self.car_type = v;
                true
            }
            None => {
                tracing::trace!(%car_type, current = %self.car_type, "ignoring invalid car type");
                false
            }
        }
    }

    /// Setter for the brand.
    pub fn set_brand(&mut self, brand: String) {
        self.brand = brand;
    }

    /// Setter for the gearbox.
    pub fn set_is_manual(&mut self, is_manual: bool) {
        self.is_manual = is_manual;
    }

    // comparison

    /// Is this car strictly better than `other`.
    ///
    /// A higher type is better. On the same type an automatic is better than a manual.
    pub fn better(&self, other: &Car) -> bool {
        match self.car_type.cmp(&other.car_type) {
            core::cmp::Ordering::Greater => true,
            core::cmp::Ordering::Less => false,
            core::cmp::Ordering::Equal => !self.is_manual && other.is_manual,
        }
    }

    /// Is this car strictly worse than `other`, the mirror of [`Self::better`].
    pub fn worse(&self, other: &Car) -> bool {
        other.better(self)
    }
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl Car {
    /// Check equality to another, JS has no way to call [`PartialEq`].
    pub fn equals(&self, other: &Car) -> bool {
        self == other
    }
}

impl PartialEq for Car {
    fn eq(&self, other: &Self) -> bool {
        self.car_type == other.car_type
            && self.brand == other.brand
            && self.is_manual == other.is_manual
    }
}

impl Eq for Car {}

impl Hash for Car {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.car_type.hash(state);
        self.brand.hash(state);
        self.is_manual.hash(state);
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gear = if self.is_manual { "manual" } else { "auto" };
        write!(
            f,
            "id:{} type:{} brand:{} gear:{}",
            self.id, self.car_type, self.brand, gear
        )
    }
}
