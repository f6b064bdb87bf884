// src/domain/booking.rs

use crate::display::{
    format_date_range, format_price_vnd, rental_days, rental_total, resolve_display_label,
    resolve_style_tag, StyleTag,
};
use crate::domain::laptop::Laptop;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A rental of one laptop over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: u32,
    pub laptop_id: u32,
    pub customer_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingView {
    pub id: u32,
    pub laptop_id: u32,
    pub laptop_name: String,
    pub customer_name: String,
    pub period: String,
    pub days: i64,
    pub total_label: String,
    pub status_label: String,
    pub status_tag: StyleTag,
}

impl BookingView {
    pub fn from_booking(booking: &Booking, laptop: &Laptop) -> Self {
        let status = booking.status.as_deref();

        BookingView {
            id: booking.id,
            laptop_id: booking.laptop_id,
            laptop_name: laptop.name.clone(),
            customer_name: booking.customer_name.clone(),
            period: format_date_range(booking.start_date, booking.end_date),
            days: rental_days(booking.start_date, booking.end_date),
            total_label: format_price_vnd(rental_total(
                laptop.daily_price,
                booking.start_date,
                booking.end_date,
            )),
            status_label: resolve_display_label(status),
            status_tag: resolve_style_tag(status),
        }
    }
}
