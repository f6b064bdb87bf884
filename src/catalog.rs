// src/catalog.rs

use crate::display::resolve_display_label;
use crate::domain::{Booking, Laptop};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

const SAMPLE_CATALOG: &str = include_str!("../data/sample_catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("laptop id {0} appears more than once")]
    DuplicateLaptop(u32),

    #[error("booking {booking} refers to unknown laptop {laptop}")]
    UnknownLaptop { booking: u32, laptop: u32 },
}

/// Read-only set of laptops and bookings served by the site.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    laptops: Vec<Laptop>,
    #[serde(default)]
    bookings: Vec<Booking>,
}

impl Catalog {
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            laptops = catalog.laptops.len(),
            bookings = catalog.bookings.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::new();
        for laptop in &self.laptops {
            if !ids.insert(laptop.id) {
                return Err(CatalogError::DuplicateLaptop(laptop.id));
            }
        }

        for booking in &self.bookings {
            if !ids.contains(&booking.laptop_id) {
                return Err(CatalogError::UnknownLaptop {
                    booking: booking.id,
                    laptop: booking.laptop_id,
                });
            }
        }

        Ok(())
    }

    pub fn laptops(&self) -> &[Laptop] {
        &self.laptops
    }

    pub fn laptop(&self, id: u32) -> Option<&Laptop> {
        self.laptops.iter().find(|l| l.id == id)
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn bookings_for(&self, laptop_id: u32) -> impl Iterator<Item = &Booking> {
        self.bookings.iter().filter(move |b| b.laptop_id == laptop_id)
    }

    /// Laptops whose status resolves to the same label as `filter`.
    ///
    /// Comparing resolved labels lets a filter be a raw token in any case
    /// ("AVAILABLE"), a synonym ("renting" for "rented") or a label.
    pub fn laptops_with_status<'a>(&'a self, filter: &str) -> impl Iterator<Item = &'a Laptop> {
        let wanted = resolve_display_label(Some(filter));
        self.laptops
            .iter()
            .filter(move |l| resolve_display_label(l.status.as_deref()) == wanted)
    }

    /// Built-in catalog served when no catalog file is configured.
    pub fn sample() -> Result<Self, CatalogError> {
        Self::from_json_str(SAMPLE_CATALOG)
    }
}
