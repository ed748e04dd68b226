//! Request logging middleware

use super::super::state::ServerState;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::{
    http::{header::HeaderMap, Request, Response, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use std::time::Instant;
use tracing::{error, info};

#[derive(PartialEq, PartialOrd, Clone, Debug, Default, clap::ValueEnum)]
pub enum RequestsLoggingLevel {
    None,
    #[default]
    Path,
    Headers,
    Body,
}

impl std::fmt::Display for RequestsLoggingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

const MAX_LOGGABLE_BODY_LENGTH: usize = 1024;

enum ContentLength {
    Known(usize),
    Unknown(&'static str),
}

fn parse_content_length(headers: &HeaderMap) -> ContentLength {
    let value = match headers.get("content-length") {
        Some(x) => x,
        None => return ContentLength::Unknown("Content-length not set."),
    };

    let str_value = match value.to_str() {
        Ok(x) => x,
        Err(_) => return ContentLength::Unknown("Could not get Content-length string value."),
    };

    match str_value.parse::<usize>() {
        Ok(x) => ContentLength::Known(x),
        Err(_) => ContentLength::Unknown("Could not parse Content-length numeric value."),
    }
}

fn log_headers(label: &str, headers: &HeaderMap) {
    info!("  {} Headers:", label);
    for (name, value) in headers.iter() {
        info!("    {:?}: {:?}", name, value);
    }
}

/// Logs the body if it is small enough. The body is buffered, so the caller
/// gets back an equivalent one to forward.
async fn log_body(label: &str, headers: &HeaderMap, body: Body) -> Result<Body, axum::Error> {
    match parse_content_length(headers) {
        ContentLength::Unknown(reason) => {
            info!("  {} Body: {}", label, reason);
            Ok(body)
        }
        ContentLength::Known(size) if size < MAX_LOGGABLE_BODY_LENGTH => {
            let bytes: Bytes = axum::body::to_bytes(body, size).await?;
            info!("  {} Body:\n{}", label, String::from_utf8_lossy(&bytes));
            Ok(Body::from(bytes))
        }
        ContentLength::Known(size) => {
            info!(
                "  {} Body: Too big to log ({:#})",
                label,
                byte_unit::Byte::from(size)
            );
            Ok(body)
        }
    }
}

fn body_read_failure(what: &str, err: axum::Error) -> Response<Body> {
    error!("Failed to read {} body: {:?}", what, err);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

pub async fn log_requests(
    State(state): State<ServerState>,
    request: Request<Body>,
    next: Next,
) -> impl IntoResponse {
    let level = state.config.requests_logging_level.clone();
    let start = Instant::now();

    if level > RequestsLoggingLevel::None {
        info!(">>> {} {}", request.method(), request.uri());
    }

    let request = if level >= RequestsLoggingLevel::Headers {
        log_headers("Req", request.headers());
        if level >= RequestsLoggingLevel::Body {
            let (parts, body) = request.into_parts();
            match log_body("Req", &parts.headers, body).await {
                Ok(body) => Request::from_parts(parts, body),
                Err(err) => return body_read_failure("request", err),
            }
        } else {
            request
        }
    } else {
        request
    };

    let response = next.run(request).await;

    let response = if level >= RequestsLoggingLevel::Headers {
        log_headers("Resp", response.headers());
        if level >= RequestsLoggingLevel::Body {
            let (parts, body) = response.into_parts();
            match log_body("Resp", &parts.headers, body).await {
                Ok(body) => Response::from_parts(parts, body),
                Err(err) => return body_read_failure("response", err),
            }
        } else {
            response
        }
    } else {
        response
    };

    if level > RequestsLoggingLevel::None {
        info!(
            "<<< {} ({}ms)",
            response.status().as_u16(),
            start.elapsed().as_millis()
        );
    }

    response
}
