//! Development GraphQL proxy: forwards `POST /graphql` to the remote
//! backend so the listing client can talk to a same-origin endpoint.
//! A static forwarding rule, no caching.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use catalog_logging::{catalog_debug, catalog_warn};

#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    upstream_url: String,
}

impl ProxyState {
    pub fn new(upstream: &str) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: reqwest::Client::builder().build()?,
            upstream_url: format!("{}/graphql", upstream.trim_end_matches('/')),
        })
    }
}

pub fn router(state: ProxyState) -> Router {
    Router::new()
        .route("/graphql", post(forward))
        .with_state(state)
}

async fn forward(State(state): State<ProxyState>, headers: HeaderMap, body: Bytes) -> Response {
    catalog_debug!("forwarding {} bytes to {}", body.len(), state.upstream_url);
    match upstream_roundtrip(&state, &headers, body).await {
        Ok(response) => response,
        Err(err) => {
            catalog_warn!("upstream request failed: {err}");
            (StatusCode::BAD_GATEWAY, format!("upstream error: {err}")).into_response()
        }
    }
}

async fn upstream_roundtrip(
    state: &ProxyState,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<Response, reqwest::Error> {
    let mut request = state.client.post(&state.upstream_url).body(body.to_vec());
    for (name, value) in headers {
        if skip_header(name.as_str()) {
            continue;
        }
        let name = reqwest::header::HeaderName::from_bytes(name.as_str().as_bytes());
        let value = reqwest::header::HeaderValue::from_bytes(value.as_bytes());
        if let (Ok(name), Ok(value)) = (name, value) {
            request = request.header(name, value);
        }
    }

    let upstream = request.send().await?;
    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| HeaderValue::from_bytes(value.as_bytes()).ok());
    let bytes = upstream.bytes().await?;

    let mut response = (status, bytes.to_vec()).into_response();
    if let Some(content_type) = content_type {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}

/// Hop-by-hop and transport-managed headers; reqwest derives these from the
/// upstream URL and body itself.
fn skip_header(name: &str) -> bool {
    matches!(
        name,
        "host" | "content-length" | "connection" | "accept-encoding"
    )
}
