// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Token issuance route.

use crate::error::{AppError, Result};
use crate::services::utilisateur::IDENTIFIANTS_INCORRECTS_ERR;
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/generertoken", post(generer_token))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenererTokenBody {
    #[serde(default)]
    email: String,
    #[serde(default)]
    mot_de_passe: String,
}

#[derive(Serialize)]
struct TokenResponse {
    token: String,
}

/// Issue a bearer token for a verified email/password pair.
///
/// Any credential failure, unknown email included, is a single 401
/// response, so login attempts can't probe which emails exist.
async fn generer_token(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GenererTokenBody>,
) -> Result<Json<TokenResponse>> {
    let utilisateur = state
        .utilisateur_service
        .authentifier(&body.email, &body.mot_de_passe)
        .await
        .map_err(|err| match err {
            AppError::NotFound(_) | AppError::Unauthorized(_) => {
                AppError::Unauthorized(IDENTIFIANTS_INCORRECTS_ERR.to_string())
            }
            other => other,
        })?;

    // `generer` re-checks the stored record and yields None instead of an
    // error when it no longer matches; absence means "not authenticated".
    let token = state
        .jeton_service
        .generer(&utilisateur)
        .await?
        .ok_or_else(|| AppError::Unauthorized(IDENTIFIANTS_INCORRECTS_ERR.to_string()))?;

    tracing::debug!(email = %body.email, "Jeton émis");

    Ok(Json(TokenResponse { token }))
}
