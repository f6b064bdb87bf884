// src/display/format.rs

use chrono::NaiveDate;

const DATE_FORMAT: &str = "%d/%m/%Y";

/// `15000000` -> `15.000.000 ₫`
pub fn format_price_vnd(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-{grouped} ₫")
    } else {
        format!("{grouped} ₫")
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", format_date(start), format_date(end))
}

/// Inclusive number of billed days. Same-day and inverted ranges bill one day.
pub fn rental_days(start: NaiveDate, end: NaiveDate) -> i64 {
    ((end - start).num_days() + 1).max(1)
}

pub fn rental_total(daily_price: i64, start: NaiveDate, end: NaiveDate) -> i64 {
    daily_price.saturating_mul(rental_days(start, end))
}
