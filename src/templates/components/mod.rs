use crate::display::StyleTag;
use maud::{html, Markup};

pub mod card;
pub mod error;
pub mod laptop_card;

pub use card::card;
pub use error::error_page;
pub use laptop_card::laptop_card;

/// Pill showing a resolved status label, coloured by its tag.
pub fn status_badge(label: &str, tag: StyleTag) -> Markup {
    html! {
        span class={ "badge badge-" (tag.as_str()) } { (label) }
    }
}
