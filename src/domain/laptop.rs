// src/domain/laptop.rs

use crate::display::{
    format_price_vnd, resolve_display_label, resolve_image_url, resolve_style_tag, StyleTag,
};
use serde::{Deserialize, Serialize};

/// A rentable laptop as it comes out of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Laptop {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub cpu: String,
    pub ram_gb: u16,
    pub storage_gb: u32,
    /// Price per rental day, in VND.
    pub daily_price: i64,
    /// Raw backend status, e.g. "available" or "Renting".
    #[serde(default)]
    pub status: Option<String>,
}

/// What the pages and `/api/laptops` render for a laptop.
#[derive(Debug, Clone, Serialize)]
pub struct LaptopView {
    pub id: u32,
    pub name: String,
    pub brand: String,
    pub image_url: String,
    pub specs: String,
    pub daily_price: i64,
    pub price_label: String,
    pub status_label: String,
    pub status_tag: StyleTag,
}

impl LaptopView {
    pub fn from_laptop(laptop: &Laptop) -> Self {
        let status = laptop.status.as_deref();

        LaptopView {
            id: laptop.id,
            name: laptop.name.clone(),
            brand: laptop.brand.clone().unwrap_or_default(),
            image_url: resolve_image_url(
                laptop.image_url.as_deref(),
                Some(laptop.name.as_str()),
                laptop.brand.as_deref(),
            ),
            specs: format!(
                "{} · {} GB RAM · {} GB SSD",
                laptop.cpu, laptop.ram_gb, laptop.storage_gb
            ),
            daily_price: laptop.daily_price,
            price_label: format!("{} / ngày", format_price_vnd(laptop.daily_price)),
            status_label: resolve_display_label(status),
            status_tag: resolve_style_tag(status),
        }
    }

    pub fn is_bookable(&self) -> bool {
        self.status_tag == StyleTag::Success
    }
}
