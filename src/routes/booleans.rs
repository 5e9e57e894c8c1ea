// ABOUTME: Route handlers for the boolean collection and item endpoints
// ABOUTME: Maps POST, GET, DELETE, PATCH, and PUT onto repository operations with uniform error envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Boolean routes
//!
//! The collection endpoint accepts only `POST` (create). The item endpoint
//! accepts `GET` (read), `DELETE`, `PATCH` (toggle), and `PUT` (replace an
//! existing id). Any other verb is rejected with `405` and an `Allow` header
//! before the request body is read.

use crate::booleans::BooleanEnvelope;
use crate::constants::{allow, routes};
use crate::errors::{AppError, AppResult};
use crate::resources::ServerResources;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, RawQuery, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post, MethodRouter},
    Json, Router,
};
use std::sync::Arc;
use tracing::debug;

/// Boolean routes implementation
pub struct BooleanRoutes;

impl BooleanRoutes {
    /// Create the collection and item routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                routes::BOOLEANS,
                post(Self::handle_create).fallback(Self::collection_method_not_allowed),
            )
            .route(routes::BOOLEAN_BY_ID, Self::item_router())
            .route(routes::BOOLEAN, Self::item_router())
            .route(routes::BOOLEAN_SLASH, Self::item_router())
            .with_state(resources)
    }

    fn item_router() -> MethodRouter<Arc<ServerResources>> {
        get(Self::handle_get)
            .delete(Self::handle_delete)
            .patch(Self::handle_toggle)
            .put(Self::handle_replace)
            .fallback(Self::item_method_not_allowed)
    }

    /// Resolve the target identifier from the captured segment or the path
    ///
    /// Without a capture the trailing path segment is used, so the bare item
    /// path resolves to `boolean`. An empty segment or one naming the
    /// collection is a missing identifier.
    fn resolve_id(captured: Option<Path<String>>, uri: &Uri) -> AppResult<String> {
        let id = match captured {
            Some(Path(id)) => id,
            None => uri
                .path()
                .trim_matches('/')
                .rsplit('/')
                .next()
                .unwrap_or_default()
                .to_owned(),
        };

        if id.is_empty() || id == routes::COLLECTION {
            debug!(path = %uri.path(), "Request is missing a boolean identifier");
            return Err(AppError::bad_request("Missing boolean identifier"));
        }

        Ok(id)
    }

    /// Surface a body that could not be buffered (too large, aborted) as a bad request
    fn buffered(body: Result<Bytes, BytesRejection>) -> AppResult<Bytes> {
        body.map_err(|rejection| {
            debug!(status = %rejection.status(), "Request body rejected: {rejection}");
            AppError::bad_request(format!("Failed to read request body: {rejection}"))
                .with_detail("request body could not be read")
        })
    }

    fn content_type(headers: &HeaderMap) -> Option<&str> {
        headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }

    /// Handle POST /api/v1/booleans - Create a boolean with a generated id
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        RawQuery(query): RawQuery,
        headers: HeaderMap,
        body: Result<Bytes, BytesRejection>,
    ) -> Result<Response, AppError> {
        let body = Self::buffered(body)?;
        let draft = resources.decoder.decode(
            query.as_deref(),
            Self::content_type(&headers),
            &body,
            None,
        )?;

        let stored = resources.repository.save(draft).await?;

        Ok((StatusCode::OK, Json(BooleanEnvelope::from(stored))).into_response())
    }

    /// Handle GET /api/v1/boolean/:id - Read a boolean
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        captured: Option<Path<String>>,
        uri: Uri,
    ) -> Result<Response, AppError> {
        let id = Self::resolve_id(captured, &uri)?;
        let stored = resources.repository.get(&id).await?;

        Ok((StatusCode::OK, Json(BooleanEnvelope::from(stored))).into_response())
    }

    /// Handle DELETE /api/v1/boolean/:id - Delete a boolean
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        captured: Option<Path<String>>,
        uri: Uri,
    ) -> Result<Response, AppError> {
        let id = Self::resolve_id(captured, &uri)?;
        resources.repository.delete(&id).await?;

        Ok(StatusCode::NO_CONTENT.into_response())
    }

    /// Handle PATCH /api/v1/boolean/:id - Flip the value of a boolean
    async fn handle_toggle(
        State(resources): State<Arc<ServerResources>>,
        captured: Option<Path<String>>,
        uri: Uri,
    ) -> Result<Response, AppError> {
        let id = Self::resolve_id(captured, &uri)?;
        let stored = resources.repository.toggle(&id).await?;

        Ok((StatusCode::OK, Json(BooleanEnvelope::from(stored))).into_response())
    }

    /// Handle PUT /api/v1/boolean/:id - Replace an existing boolean
    async fn handle_replace(
        State(resources): State<Arc<ServerResources>>,
        captured: Option<Path<String>>,
        uri: Uri,
        RawQuery(query): RawQuery,
        headers: HeaderMap,
        body: Result<Bytes, BytesRejection>,
    ) -> Result<Response, AppError> {
        let id = Self::resolve_id(captured, &uri)?;
        let body = Self::buffered(body)?;

        let draft = resources.decoder.decode(
            query.as_deref(),
            Self::content_type(&headers),
            &body,
            Some(id),
        )?;

        let stored = resources.repository.save(draft).await?;

        Ok((StatusCode::OK, Json(BooleanEnvelope::from(stored))).into_response())
    }

    async fn collection_method_not_allowed(method: Method) -> AppError {
        AppError::method_not_allowed(method, allow::COLLECTION)
    }

    async fn item_method_not_allowed(method: Method) -> AppError {
        AppError::method_not_allowed(method, allow::ITEM)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn uri(path: &str) -> Uri {
        path.parse().unwrap()
    }

    #[test]
    fn test_resolve_captured_id() {
        let id = BooleanRoutes::resolve_id(
            Some(Path("abc".to_owned())),
            &uri("/api/v1/boolean/abc"),
        )
        .unwrap();
        assert_eq!(id, "abc");
    }

    #[test]
    fn test_resolve_collection_name_is_missing_id() {
        let err = BooleanRoutes::resolve_id(
            Some(Path("booleans".to_owned())),
            &uri("/api/v1/boolean/booleans"),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::BadRequest);
    }

    #[test]
    fn test_resolve_bare_item_path_uses_trailing_segment() {
        for path in ["/api/v1/boolean", "/api/v1/boolean/"] {
            assert_eq!(BooleanRoutes::resolve_id(None, &uri(path)).unwrap(), "boolean");
        }
    }

    #[test]
    fn test_resolve_empty_path_is_missing_id() {
        let err = BooleanRoutes::resolve_id(None, &uri("/")).unwrap_err();
        assert_eq!(err.code, ErrorCode::BadRequest);
    }
}
