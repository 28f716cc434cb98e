//! Country list offered in the selector.
//!
//! The list is compiled into the binary from `assets/countries.json` and
//! parsed once at startup.

use crate::error::{GlobeError, Result};
use crate::geo::GeoCoordinate;
use serde::Deserialize;
use std::collections::HashSet;

/// Built-in country list: name plus the coordinate the camera centers on.
const BUILTIN_COUNTRIES: &str = include_str!("../../assets/countries.json");

/// A selectable country.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Country {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Country {
    pub fn coordinate(&self) -> GeoCoordinate {
        GeoCoordinate::new(self.latitude, self.longitude)
    }
}

/// Ordered, read-only list of countries with unique names.
#[derive(Debug, Clone, Default)]
pub struct CountryCatalog {
    countries: Vec<Country>,
}

impl CountryCatalog {
    /// Loads the compiled-in list.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_COUNTRIES)
    }

    /// Parses a JSON array of `{name, latitude, longitude}` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let countries: Vec<Country> =
            serde_json::from_str(json).map_err(|e| GlobeError::Catalog(e.to_string()))?;
        Ok(Self::from_countries(countries))
    }

    /// Builds a catalog, keeping the first entry for any repeated name.
    pub fn from_countries(countries: impl IntoIterator<Item = Country>) -> Self {
        let mut seen = HashSet::new();
        let countries = countries
            .into_iter()
            .filter(|country| {
                let fresh = seen.insert(country.name.clone());
                if !fresh {
                    log::warn!("Duplicate country '{}' ignored", country.name);
                }
                fresh
            })
            .collect();
        Self { countries }
    }

    /// Looks up a country by exact name.
    pub fn find(&self, name: &str) -> Result<&Country> {
        self.countries
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| GlobeError::SelectionNotFound {
                name: name.to_string(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|c| c.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
