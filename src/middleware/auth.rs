// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bearer token authentication middleware.
//!
//! Auth policy is a declared table of (method, route template) pairs
//! checked against axum's `MatchedPath`, so whether a route needs a token
//! is decided by the routing table, never by inspecting the raw URL. The
//! middleware runs as a `route_layer` (after routing), which is what makes
//! the matched template available.

use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{MatchedPath, Request, State},
    http::{header, Method},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// The routes that require a bearer token: workout mutations and the
/// per-user listing. Everything else (login, registration, public reads)
/// is open.
fn auth_requise(method: &Method, route: &str) -> bool {
    let protegees = [
        (&Method::GET, "/api/entrainements/utilisateur/{utilisateur}"),
        (&Method::POST, "/api/entrainements/{id}"),
        (&Method::PUT, "/api/entrainements"),
        (&Method::DELETE, "/api/entrainements/{id}"),
    ];

    protegees
        .iter()
        .any(|(m, r)| *m == method && *r == route)
}

/// Middleware enforcing the auth policy table.
///
/// Missing or non-Bearer Authorization header rejects with 401; a present
/// but invalid token rejects with 403. On success the request continues
/// unchanged; no identity is attached, downstream services re-fetch by
/// id as needed.
pub async fn require_jeton(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string());

    let protegee = route
        .as_deref()
        .is_some_and(|r| auth_requise(request.method(), r));

    if !protegee {
        return Ok(next.run(request).await);
    }

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(h) if h.starts_with("Bearer ") => &h[7..],
        _ => {
            return Err(AppError::Unauthorized(
                "Jeton d'authentification requis".to_string(),
            ))
        }
    };

    state.jeton_service.verifier(token)?;

    Ok(next.run(request).await)
}
