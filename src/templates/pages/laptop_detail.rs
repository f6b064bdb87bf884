use crate::domain::{BookingView, LaptopView};
use crate::templates::{card, desktop_layout, status_badge};
use maud::{html, Markup};

pub fn laptop_detail_page(laptop: &LaptopView, bookings: &[BookingView]) -> Markup {
    desktop_layout(
        &laptop.name,
        html! {
            main class="container" {
                p { a href="/" { "← Tất cả laptop" } }

                div class="detail" {
                    img src=(laptop.image_url) alt=(laptop.name) width="600" height="400";

                    div {
                        h1 { (laptop.name) }
                        @if !laptop.brand.is_empty() {
                            p class="brand" { (laptop.brand) }
                        }
                        (status_badge(&laptop.status_label, laptop.status_tag))
                        p { (laptop.specs) }
                        p class="price" { strong { (laptop.price_label) } }

                        @if laptop.is_bookable() {
                            p class="hint" { "Máy đang sẵn sàng cho thuê." }
                        } @else {
                            p class="hint" { "Máy hiện chưa thể đặt thuê." }
                        }
                    }
                }

                (card("Lịch sử thuê", html! {
                    @if bookings.is_empty() {
                        p { "Chưa có đơn thuê nào." }
                    } @else {
                        ul {
                            @for booking in bookings {
                                li {
                                    (booking.customer_name) " · " (booking.period) " · "
                                    (status_badge(&booking.status_label, booking.status_tag))
                                }
                            }
                        }
                    }
                }))
            }
        },
    )
}
