use crate::domain::BookingView;
use crate::templates::{desktop_layout, status_badge};
use maud::{html, Markup};

pub fn bookings_page(bookings: &[BookingView]) -> Markup {
    desktop_layout(
        "Đơn thuê",
        html! {
            main class="container" {
                h1 { "Đơn thuê" }

                @if bookings.is_empty() {
                    p class="empty" { "Chưa có đơn thuê nào." }
                } @else {
                    div class="overflow-hidden border border-gray-200 rounded-lg shadow-sm" {
                        table class="min-w-full divide-y divide-gray-200" {
                            thead class="bg-gray-50" {
                                tr {
                                    th scope="col" { "#" }
                                    th scope="col" { "Laptop" }
                                    th scope="col" { "Khách hàng" }
                                    th scope="col" { "Thời gian" }
                                    th scope="col" { "Số ngày" }
                                    th scope="col" { "Tổng tiền" }
                                    th scope="col" { "Trạng thái" }
                                }
                            }
                            tbody class="bg-white divide-y divide-gray-200" {
                                @for booking in bookings {
                                    tr id={ "booking-" (booking.id) } {
                                        td { (booking.id) }
                                        td { a href={ "/laptops/" (booking.laptop_id) } { (booking.laptop_name) } }
                                        td { (booking.customer_name) }
                                        td { (booking.period) }
                                        td { (booking.days) }
                                        td { (booking.total_label) }
                                        td { (status_badge(&booking.status_label, booking.status_tag)) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
