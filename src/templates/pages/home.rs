// templates/pages/home.rs

use crate::display::resolve_display_label;
use crate::domain::LaptopView;
use crate::templates::{desktop_layout, laptop_card};
use maud::{html, Markup};

/// Raw status tokens offered as filters above the grid.
const STATUS_FILTERS: &[&str] = &["available", "rented", "maintenance"];

pub struct HomeVm {
    pub laptops: Vec<LaptopView>,
    /// The `?status=` value the grid was filtered by, if any.
    pub status_filter: Option<String>,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Laptop",
        html! {
            main class="container" {
                h1 { "Laptop cho thuê" }

                form action="/" method="get" class="filters" {
                    label for="status" class="sr-only" { "Trạng thái" }
                    select name="status" id="status" onchange="this.form.submit()" {
                        option value="" selected[vm.status_filter.is_none()] { "Tất cả" }
                        @for token in STATUS_FILTERS {
                            option value=(token) selected[vm.status_filter.as_deref() == Some(*token)] {
                                (resolve_display_label(Some(*token)))
                            }
                        }
                    }
                    noscript { button type="submit" { "Lọc" } }
                }

                @if vm.laptops.is_empty() {
                    p class="empty" { "Không có laptop nào phù hợp." }
                } @else {
                    p class="text-gray-700" { "Tìm thấy " strong { (vm.laptops.len()) } " laptop." }
                    div class="grid" {
                        @for laptop in &vm.laptops {
                            (laptop_card(laptop))
                        }
                    }
                }
            }
        },
    )
}
