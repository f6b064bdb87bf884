// src/tests/router_tests/error_tests.rs

use crate::errors::ServerError;
use crate::router::{handle, respond};
use crate::tests::utils::{body_string, get, request, sample_catalog};
use http::Method;

#[test]
fn unknown_path_is_not_found() {
    let catalog = sample_catalog();
    assert!(matches!(
        handle(get("/nope"), &catalog),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn unknown_laptop_is_not_found() {
    let catalog = sample_catalog();
    assert!(matches!(
        handle(get("/laptops/99"), &catalog),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn non_numeric_laptop_id_is_bad_request() {
    let catalog = sample_catalog();
    assert!(matches!(
        handle(get("/laptops/abc"), &catalog),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn wrong_method_on_known_path_is_rejected() {
    let catalog = sample_catalog();
    assert!(matches!(
        handle(request(Method::POST, "/bookings"), &catalog),
        Err(ServerError::MethodNotAllowed)
    ));
    assert!(matches!(
        handle(request(Method::DELETE, "/laptops/1"), &catalog),
        Err(ServerError::MethodNotAllowed)
    ));
    assert!(matches!(
        handle(request(Method::POST, "/nope"), &catalog),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn respond_renders_errors_as_pages() {
    let catalog = sample_catalog();

    let resp = respond(get("/nope"), &catalog);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));

    let resp = respond(get("/laptops/abc"), &catalog);
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("invalid laptop id: abc"));

    let resp = respond(request(Method::PUT, "/"), &catalog);
    assert_eq!(resp.status(), 405);
}

#[test]
fn respond_passes_successes_through() {
    let catalog = sample_catalog();
    let resp = respond(get("/health"), &catalog);
    assert_eq!(resp.status(), 200);
}
