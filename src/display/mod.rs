pub mod format;
pub mod images;
pub mod status;

pub use format::{format_date_range, format_price_vnd, rental_days, rental_total};
pub use images::resolve_image_url;
pub use status::{resolve_display_label, resolve_style_tag, StyleTag};
