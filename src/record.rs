//! The city record sorted by every algorithm

use std::fmt;

/// A single row of the world cities dataset.
///
/// Sorting only permutes records; no algorithm reads anything but the
/// comparator's view of the fields, and none of them ever mutates a field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct City {
    pub name: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    pub population: i64,
}

impl City {
    pub fn new(name: &str, country: &str, lat: f64, lng: f64, population: i64) -> Self {
        Self {
            name: name.to_string(),
            country: country.to_string(),
            lat,
            lng,
            population,
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "City{{name: \"{}\", country: \"{}\", lat: {}, lng: {}, population: {}}}",
            self.name, self.country, self.lat, self.lng, self.population
        )
    }
}
