use crate::errors::ServerError;
use crate::templates::error_page;
use astra::{Body, Response, ResponseBuilder};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into an HTML error page with the matching status.
pub fn error_response(err: ServerError) -> Response {
    let status = err.status_code();

    if status >= 500 {
        tracing::error!(error = %err, "request failed");
    }

    let message = match &err {
        ServerError::BadRequest(msg) => msg.clone(),
        // Internal details stay in the log.
        ServerError::Serialization(_) => ServerError::InternalError.to_string(),
        other => other.to_string(),
    };

    let html = error_page(status, &message).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(html))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
