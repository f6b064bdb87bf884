// src/tests/router_tests/api_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, content_type, get, sample_catalog};
use serde_json::{json, Value};

fn get_json(uri: &str) -> Value {
    let catalog = sample_catalog();
    let resp = handle(get(uri), &catalog).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(content_type(&resp), "application/json");

    serde_json::from_str(&body_string(resp)).unwrap()
}

#[test]
fn status_endpoint_resolves_label_and_tag() {
    assert_eq!(
        get_json("/api/status?value=%20%20RENTED%20"),
        json!({ "value": "  RENTED ", "label": "Đang cho thuê", "tag": "info", "known": true })
    );
}

#[test]
fn status_endpoint_echoes_unknown_values() {
    assert_eq!(
        get_json("/api/status?value=On+Hold"),
        json!({ "value": "On Hold", "label": "On Hold", "tag": "neutral", "known": false })
    );
}

#[test]
fn status_endpoint_without_value_is_undetermined() {
    assert_eq!(
        get_json("/api/status"),
        json!({ "value": null, "label": "Chưa xác định", "tag": "neutral", "known": false })
    );
    assert_eq!(get_json("/api/status?value=")["label"], "Chưa xác định");
}

#[test]
fn status_endpoint_accepts_its_own_labels() {
    let raw = get_json("/api/status?value=cancelled");
    let label = raw["label"].as_str().unwrap().to_string();

    let again = get_json(&format!(
        "/api/status?value={}",
        url::form_urlencoded::byte_serialize(label.as_bytes()).collect::<String>()
    ));
    assert_eq!(again["tag"], raw["tag"]);
    assert_eq!(again["tag"], "danger");
    assert_eq!(again["known"], true);
}

#[test]
fn image_endpoint_follows_the_fallback_chain() {
    assert_eq!(
        get_json("/api/image?url=http://x&name=Dell+XPS")["url"],
        "http://x"
    );
    assert_eq!(
        get_json("/api/image?name=Lenovo+IdeaPad+Gaming+3&brand=Lenovo")["url"],
        "https://placehold.co/600x400/e2231a/ffffff?text=Lenovo"
    );
    assert_eq!(
        get_json("/api/image?name=Unbranded%20Widget")["url"],
        "https://placehold.co/600x400?text=Unbranded+Widget"
    );
    assert_eq!(
        get_json("/api/image?brand=Dell")["url"],
        "https://placehold.co/600x400?text=Laptop"
    );
}

#[test]
fn laptops_endpoint_serializes_views() {
    let laptops = get_json("/api/laptops");
    let list = laptops.as_array().unwrap();
    assert_eq!(list.len(), 6);

    let first = &list[0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["status_label"], "Sẵn sàng");
    assert_eq!(first["status_tag"], "success");
    assert_eq!(first["price_label"], "250.000 ₫ / ngày");

    let last = &list[5];
    assert_eq!(last["brand"], "");
    assert_eq!(last["status_tag"], "neutral");
}
