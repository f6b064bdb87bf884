use crate::domain::LaptopView;
use crate::templates::components::status_badge;
use maud::{html, Markup};

pub fn laptop_card(laptop: &LaptopView) -> Markup {
    html! {
        article class="card laptop-card" id={ "laptop-" (laptop.id) } {
            a href={ "/laptops/" (laptop.id) } {
                img src=(laptop.image_url) alt=(laptop.name) loading="lazy" width="300" height="200";
            }
            div class="card-body" {
                h3 {
                    a href={ "/laptops/" (laptop.id) } { (laptop.name) }
                }
                p class="text-gray-500 text-sm" { (laptop.specs) }
                p class="price" { strong { (laptop.price_label) } }
                (status_badge(&laptop.status_label, laptop.status_tag))
            }
        }
    }
}
