use maud::{html, Markup};

/// Titled section used for secondary blocks on a page.
pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 class="card-title" { (title) }
            div class="card-body" { (body) }
        }
    }
}
