//! A closed-open range of [`Date`]s and how two of them relate.
//!
//! A rental from 01/03 to 05/03 holds the car on the 1st to the 4th and gives it back on the 5th,
//! so its [`Span`] is `[01/03, 05/03)`. A second rental picking up on 05/03 [`Relation::Meets`]
//! the first one: there is no gap between them.

use core::{cmp::Ordering, fmt};

use crate::{Date, DayCount};

/// How a [`Span`] relates to another one.
///
/// Read as "`self` *relation* `other`". The variants are listed in the order the start of `self`
/// moves from left of `other` to right of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `self` ends with at least one free day before `other` starts.
    Before,
    /// `self` ends on the day `other` starts.
    Meets,
    /// `self` starts first and ends inside `other`.
    Overlaps,
    /// `other` lies within `self` and they are not equal (they may share one bound).
    Contains,
    /// Same start and end.
    Equals,
    /// `self` lies within `other` and they are not equal (they may share one bound).
    ContainedBy,
    /// `other` starts first and ends inside `self`.
    OverlappedBy,
    /// `self` starts on the day `other` ends.
    MetBy,
    /// `self` starts with at least one free day after `other` ends.
    After,
}

impl Relation {
    /// The relation seen from the other span.
    pub const fn inverse(self) -> Self {
        match self {
            Self::Before => Self::After,
            Self::Meets => Self::MetBy,
            Self::Overlaps => Self::OverlappedBy,
            Self::Contains => Self::ContainedBy,
            Self::Equals => Self::Equals,
            Self::ContainedBy => Self::Contains,
            Self::OverlappedBy => Self::Overlaps,
            Self::MetBy => Self::Meets,
            Self::After => Self::Before,
        }
    }

    /// Whether there is a gap between the spans. Touching spans are not disjoint.
    pub const fn is_disjoint(self) -> bool {
        matches!(self, Self::Before | Self::After)
    }

    /// Whether the spans share at least one day.
    pub const fn intersects(self) -> bool {
        !matches!(self, Self::Before | Self::Meets | Self::MetBy | Self::After)
    }
}

/// The days from `start` (inclusive) to `end` (exclusive).
///
/// # Invariants
/// `start` is always strictly before `end`, a span holds at least one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    start: Date,
    end: Date,
}

impl Span {
    /// Create a span if `start` is strictly before `end`.
    pub fn new(start: Date, end: Date) -> Option<Self> {
        start.before(&end).then_some(Self { start, end })
    }

    /// Create a span without checking the order of the bounds.
    ///
    /// Only for callers that already hold the invariant (a [`crate::Rent`]).
    pub(crate) fn new_unchecked(start: Date, end: Date) -> Self {
        debug_assert!(start.before(&end), "span start {start} is not before end {end}");
        Self { start, end }
    }

    /// The first day of the span.
    pub const fn start(&self) -> Date {
        self.start
    }

    /// The day after the last day of the span.
    pub const fn end(&self) -> Date {
        self.end
    }

    /// The number of days in the span, at least 1.
    pub fn days(&self) -> DayCount {
        self.start.difference(&self.end)
    }

    /// Classify how this span relates to `other`.
    pub fn relation(&self, other: &Span) -> Relation {
        let (a0, a1) = (self.start.ordinal(), self.end.ordinal());
        let (b0, b1) = (other.start.ordinal(), other.end.ordinal());

        if a1 < b0 {
            return Relation::Before;
        }
        if b1 < a0 {
            return Relation::After;
        }
        if a1 == b0 {
            return Relation::Meets;
        }
        if b1 == a0 {
            return Relation::MetBy;
        }

        // from here on the spans share at least a day
        match (a0.cmp(&b0), a1.cmp(&b1)) {
            (Ordering::Equal, Ordering::Equal) => Relation::Equals,
            (Ordering::Less, Ordering::Less) => Relation::Overlaps,
            (Ordering::Greater, Ordering::Greater) => Relation::OverlappedBy,
            (Ordering::Less | Ordering::Equal, Ordering::Greater | Ordering::Equal) => {
                Relation::Contains
            }
            (Ordering::Greater | Ordering::Equal, Ordering::Less | Ordering::Equal) => {
                Relation::ContainedBy
            }
        }
    }

    /// The smallest span covering both, unless they are disjoint (see [`Relation::is_disjoint`]).
    pub fn union(&self, other: &Span) -> Option<Span> {
        if self.relation(other).is_disjoint() {
            return None;
        }
        Some(Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        })
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
