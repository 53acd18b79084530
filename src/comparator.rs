//! Building the ordering predicate handed to the sorting algorithms

use crate::config::{SortField, SortOrder};
use crate::record::City;

/// "Strictly precedes" predicate over cities for one field and direction.
///
/// Ascending is `a.field < b.field`, descending is `b.field < a.field`. Both
/// are strict weak orders as long as the float fields are finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldComparator {
    field: SortField,
    order: SortOrder,
}

impl FieldComparator {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    pub fn field(&self) -> SortField {
        self.field
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Returns true when `a` must come before `b`
    #[inline]
    pub fn is_less(&self, a: &City, b: &City) -> bool {
        match self.order {
            SortOrder::Ascending => field_less(self.field, a, b),
            SortOrder::Descending => field_less(self.field, b, a),
        }
    }

    /// Borrow the comparator as a plain closure for the algorithms
    pub fn as_fn(&self) -> impl Fn(&City, &City) -> bool + Copy + '_ {
        move |a, b| self.is_less(a, b)
    }
}

#[inline]
fn field_less(field: SortField, a: &City, b: &City) -> bool {
    match field {
        SortField::Name => a.name < b.name,
        SortField::Country => a.country < b.country,
        SortField::Population => a.population < b.population,
        SortField::Lat => a.lat < b.lat,
        SortField::Lng => a.lng < b.lng,
    }
}
