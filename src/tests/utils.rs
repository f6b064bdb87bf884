use crate::catalog::Catalog;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// The built-in sample catalog every router test runs against.
pub fn sample_catalog() -> Catalog {
    Catalog::sample().unwrap_or_else(|e| panic!("Sample catalog failed to load: {e}"))
}

pub fn request(method: Method, uri: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get(uri: &str) -> Request {
    request(Method::GET, uri)
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn content_type(resp: &Response) -> &str {
    resp.headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
