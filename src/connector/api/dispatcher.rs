use axum::extract::{Request, State};
use axum::http::header::ORIGIN;
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use super::cors::CorsPolicy;

/// Entry point for every inbound request.
///
/// `OPTIONS` is answered here with `204 No Content` and never reaches the
/// router. Every other request runs through the router and gets the CORS
/// headers laid over whatever the handler set.
pub async fn dispatch(State(cors): State<CorsPolicy>, request: Request, next: Next) -> Response {
    let origin_hint = request
        .headers()
        .get(ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    if request.method() == Method::OPTIONS {
        debug!(path = %request.uri().path(), "answering preflight");
        let mut response = StatusCode::NO_CONTENT.into_response();
        cors.apply(response.headers_mut(), origin_hint.as_deref());
        return response;
    }

    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let mut response = next.run(request).await;
    cors.apply(response.headers_mut(), origin_hint.as_deref());

    debug!(%method, %path, status = response.status().as_u16(), "request handled");
    response
}
