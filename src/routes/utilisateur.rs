// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User routes: registration and id lookup.

use crate::error::{AppError, Result};
use crate::models::Utilisateur;
use crate::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/utilisateurs/id", post(get_id))
        .route("/api/utilisateurs/add", post(add))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentifiantsBody {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    mot_de_passe: Option<String>,
}

#[derive(Serialize)]
struct IdResponse {
    id: String,
}

/// Look up a user's id from their credentials.
async fn get_id(
    State(state): State<Arc<AppState>>,
    Json(body): Json<IdentifiantsBody>,
) -> Result<Json<IdResponse>> {
    let (email, mot_de_passe) = match (body.email, body.mot_de_passe) {
        (Some(e), Some(m)) if !e.is_empty() && !m.is_empty() => (e, m),
        _ => {
            return Err(AppError::BadRequest(
                "Email et mot de passe requis.".to_string(),
            ))
        }
    };

    let utilisateur = state
        .utilisateur_service
        .authentifier(&email, &mot_de_passe)
        .await?;

    let id = utilisateur
        .id
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("stored user without id")))?;

    Ok(Json(IdResponse { id }))
}

#[derive(Serialize)]
struct UtilisateurResponse {
    utilisateur: Utilisateur,
}

/// Register a new user.
///
/// The body is taken as raw JSON so a missing `{"utilisateur": ...}`
/// envelope or a malformed payload maps to 400 with the contract's
/// message instead of axum's 422.
async fn add(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<UtilisateurResponse>)> {
    let valeur = body
        .get("utilisateur")
        .cloned()
        .ok_or_else(|| AppError::BadRequest("Utilisateur requis".to_string()))?;

    let utilisateur: Utilisateur = serde_json::from_value(valeur)
        .map_err(|e| AppError::BadRequest(format!("Utilisateur invalide : {}", e)))?;

    utilisateur.valider().map_err(AppError::BadRequest)?;

    let utilisateur = state.utilisateur_service.add(utilisateur).await?;

    Ok((
        StatusCode::CREATED,
        Json(UtilisateurResponse { utilisateur }),
    ))
}
