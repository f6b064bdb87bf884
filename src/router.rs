use crate::catalog::Catalog;
use crate::display::status::is_known_status;
use crate::display::{resolve_display_label, resolve_image_url, resolve_style_tag, StyleTag};
use crate::domain::{BookingView, LaptopView};
use crate::errors::ServerError;
use crate::responses::{error_response, html_response, json_response, text_response, ResultResp};
use crate::templates::pages::{bookings_page, home_page, laptop_detail_page, HomeVm};
use astra::{Request, Response};
use serde::Serialize;
use std::collections::HashMap;
use std::time::Instant;
use tracing::info;
use url::form_urlencoded;

const KNOWN_PATHS: &[&str] = &[
    "/",
    "/bookings",
    "/api/laptops",
    "/api/status",
    "/api/image",
    "/health",
];

#[derive(Debug, Serialize)]
struct StatusResolution<'a> {
    value: Option<&'a str>,
    label: String,
    tag: StyleTag,
    known: bool,
}

#[derive(Debug, Serialize)]
struct ImageResolution {
    url: String,
}

/// Entry point used by the server: routes the request, renders failures as
/// error pages and logs the outcome.
pub fn respond(req: Request, catalog: &Catalog) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let resp = handle(req, catalog).unwrap_or_else(error_response);

    info!(
        %method,
        path = %path,
        status = resp.status().as_u16(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "request"
    );
    resp
}

pub fn handle(req: Request, catalog: &Catalog) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);

    match (method, path) {
        ("GET", "/") => home(catalog, &params),
        ("GET", "/bookings") => bookings(catalog),
        ("GET", "/api/laptops") => api_laptops(catalog),
        ("GET", "/api/status") => api_status(&params),
        ("GET", "/api/image") => api_image(&params),
        ("GET", "/health") => text_response("ok"),
        ("GET", p) if p.starts_with("/laptops/") => {
            laptop_detail(catalog, &p["/laptops/".len()..])
        }
        (_, p) if KNOWN_PATHS.contains(&p) || p.starts_with("/laptops/") => {
            Err(ServerError::MethodNotAllowed)
        }
        _ => Err(ServerError::NotFound),
    }
}

fn home(catalog: &Catalog, params: &HashMap<String, String>) -> ResultResp {
    let status_filter = params
        .get("status")
        .filter(|s| !s.trim().is_empty())
        .cloned();

    let laptops: Vec<LaptopView> = match &status_filter {
        Some(filter) => catalog
            .laptops_with_status(filter)
            .map(LaptopView::from_laptop)
            .collect(),
        None => catalog.laptops().iter().map(LaptopView::from_laptop).collect(),
    };

    html_response(home_page(&HomeVm {
        laptops,
        status_filter,
    }))
}

fn laptop_detail(catalog: &Catalog, raw_id: &str) -> ResultResp {
    let id: u32 = raw_id
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("invalid laptop id: {raw_id}")))?;

    let laptop = catalog.laptop(id).ok_or(ServerError::NotFound)?;
    let bookings: Vec<BookingView> = catalog
        .bookings_for(id)
        .map(|b| BookingView::from_booking(b, laptop))
        .collect();

    html_response(laptop_detail_page(&LaptopView::from_laptop(laptop), &bookings))
}

fn bookings(catalog: &Catalog) -> ResultResp {
    let views = booking_views(catalog)?;
    html_response(bookings_page(&views))
}

fn booking_views(catalog: &Catalog) -> Result<Vec<BookingView>, ServerError> {
    catalog
        .bookings()
        .iter()
        .map(|b| -> Result<BookingView, ServerError> {
            // The catalog validates references on load, so a miss here is a bug.
            let laptop = catalog.laptop(b.laptop_id).ok_or(ServerError::InternalError)?;
            Ok(BookingView::from_booking(b, laptop))
        })
        .collect()
}

fn api_laptops(catalog: &Catalog) -> ResultResp {
    let views: Vec<LaptopView> = catalog.laptops().iter().map(LaptopView::from_laptop).collect();
    json_response(&views)
}

fn api_status(params: &HashMap<String, String>) -> ResultResp {
    let value = params.get("value").map(String::as_str);

    json_response(&StatusResolution {
        value,
        label: resolve_display_label(value),
        tag: resolve_style_tag(value),
        known: value.is_some_and(is_known_status),
    })
}

fn api_image(params: &HashMap<String, String>) -> ResultResp {
    let url = resolve_image_url(
        params.get("url").map(String::as_str),
        params.get("name").map(String::as_str),
        params.get("brand").map(String::as_str),
    );

    json_response(&ImageResolution { url })
}

/// Decoded query parameters; the last occurrence of a key wins.
fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
