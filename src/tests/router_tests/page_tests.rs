// src/tests/router_tests/page_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, content_type, get, sample_catalog};

#[test]
fn home_lists_every_laptop_with_badges() {
    let catalog = sample_catalog();

    let resp = handle(get("/"), &catalog).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(content_type(&resp), "text/html; charset=utf-8");

    let body = body_string(resp);
    assert!(body.contains("Tìm thấy <strong>6</strong> laptop."));
    assert!(body.contains("Dell XPS 13 9310"));
    assert!(body.contains(r#"class="badge badge-success""#));
    assert!(body.contains(r#"class="badge badge-warning""#));
    // "Renting" and "rented" share one label.
    assert_eq!(body.matches("badge-info\">Đang cho thuê").count(), 2);
    // No status at all.
    assert!(body.contains("badge-neutral\">Chưa xác định"));
}

#[test]
fn home_resolves_placeholder_images() {
    let catalog = sample_catalog();
    let body = body_string(handle(get("/"), &catalog).unwrap());

    assert!(body.contains("https://placehold.co/600x400/e2231a/ffffff?text=Lenovo"));
    // Unmatched name is escaped into the placeholder.
    assert!(body.contains("https://placehold.co/600x400?text=Workstation+Z-One"));
}

#[test]
fn home_filters_by_status_in_any_spelling() {
    let catalog = sample_catalog();

    let body = body_string(handle(get("/?status=RENTING"), &catalog).unwrap());
    assert!(body.contains("Tìm thấy <strong>2</strong> laptop."));
    assert!(body.contains("HP Pavilion 15"));
    assert!(body.contains("ASUS ROG Strix G15"));
    assert!(!body.contains("MacBook Air M2"));
}

#[test]
fn home_with_unmatched_filter_shows_empty_state() {
    let catalog = sample_catalog();

    let body = body_string(handle(get("/?status=lost"), &catalog).unwrap());
    assert!(body.contains("Không có laptop nào phù hợp."));
}

#[test]
fn blank_filter_is_ignored() {
    let catalog = sample_catalog();

    let body = body_string(handle(get("/?status=+"), &catalog).unwrap());
    assert!(body.contains("Tìm thấy <strong>6</strong> laptop."));
}

#[test]
fn laptop_detail_shows_status_and_history() {
    let catalog = sample_catalog();

    let resp = handle(get("/laptops/2"), &catalog).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<h1>HP Pavilion 15</h1>"));
    assert!(body.contains("150.000 ₫ / ngày"));
    assert!(body.contains("Nguyễn Văn An"));
    assert!(body.contains("10/10/2026 - 14/10/2026"));
    assert!(body.contains("badge-success\">Đã xác nhận"));
    assert!(body.contains("Máy hiện chưa thể đặt thuê."));
}

#[test]
fn laptop_without_bookings_says_so() {
    let catalog = sample_catalog();

    let body = body_string(handle(get("/laptops/6"), &catalog).unwrap());
    assert!(body.contains("Chưa có đơn thuê nào."));
}

#[test]
fn bookings_page_formats_totals_and_statuses() {
    let catalog = sample_catalog();

    let resp = handle(get("/bookings"), &catalog).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    // Booking 1: 5 days at 150.000 ₫.
    assert!(body.contains("750.000 ₫"));
    // Booking 2 is a single day at 350.000 ₫.
    assert!(body.contains("<td>350.000 ₫</td>"));
    assert!(body.contains("badge-danger\">Đã hủy"));
    assert!(body.contains("badge-warning\">Chờ duyệt"));
    assert!(body.contains("badge-info\">Đã trả máy"));
}

#[test]
fn health_is_plain_text() {
    let catalog = sample_catalog();

    let resp = handle(get("/health"), &catalog).unwrap();
    assert_eq!(content_type(&resp), "text/plain; charset=utf-8");
    assert_eq!(body_string(resp), "ok");
}
