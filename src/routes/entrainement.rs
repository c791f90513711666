// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout routes.
//!
//! `/api/entrainements/{id}` carries three methods: GET (public read by
//! workout id), POST (create, where the path parameter is the *owner's* id) and
//! DELETE (by workout id, owner passed as a query parameter). The POST and
//! DELETE entries of the auth table in `middleware::auth` protect the
//! mutating methods.

use crate::error::{AppError, Result};
use crate::models::Entrainement;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/entrainements", get(get_all).put(update))
        .route(
            "/api/entrainements/{id}",
            get(get_one).post(add).delete(delete),
        )
        .route(
            "/api/entrainements/categorie/{categorie}",
            get(get_by_categorie),
        )
        .route("/api/entrainements/calories/{calorie}", get(get_by_calories))
        .route(
            "/api/entrainements/utilisateur/{utilisateur}",
            get(get_all_by_utilisateur),
        )
}

#[derive(Serialize)]
struct EntrainementResponse {
    entrainement: Entrainement,
}

#[derive(Serialize)]
struct EntrainementsResponse {
    entrainements: Vec<Entrainement>,
}

/// Read all public workouts.
async fn get_all(State(state): State<Arc<AppState>>) -> Result<Json<EntrainementsResponse>> {
    let entrainements = state.entrainement_service.get_all().await?;
    Ok(Json(EntrainementsResponse { entrainements }))
}

/// Read one workout by id (private ones come back as 404).
async fn get_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<EntrainementResponse>> {
    let entrainement = state.entrainement_service.get_one(&id).await?;
    Ok(Json(EntrainementResponse { entrainement }))
}

/// Read public workouts filtered by category.
async fn get_by_categorie(
    State(state): State<Arc<AppState>>,
    Path(categorie): Path<String>,
) -> Result<Json<EntrainementsResponse>> {
    let entrainements = state.entrainement_service.get_by_categorie(&categorie).await?;
    Ok(Json(EntrainementsResponse { entrainements }))
}

/// Read public workouts that burned at least the given calories.
async fn get_by_calories(
    State(state): State<Arc<AppState>>,
    Path(calorie): Path<u32>,
) -> Result<Json<EntrainementsResponse>> {
    let entrainements = state.entrainement_service.get_by_calories(calorie).await?;
    Ok(Json(EntrainementsResponse { entrainements }))
}

/// Read all workouts owned by a user (bearer required).
async fn get_all_by_utilisateur(
    State(state): State<Arc<AppState>>,
    Path(utilisateur): Path<String>,
) -> Result<Json<EntrainementsResponse>> {
    let entrainements = state
        .entrainement_service
        .get_all_by_utilisateur(&utilisateur)
        .await?;
    Ok(Json(EntrainementsResponse { entrainements }))
}

/// Unwrap and validate the `{"entrainement": ...}` envelope, mapping every
/// failure to 400 with the contract's messages.
fn extraire_entrainement(body: serde_json::Value) -> Result<Entrainement> {
    let valeur = body
        .get("entrainement")
        .cloned()
        .ok_or_else(|| AppError::BadRequest("Entrainement requis".to_string()))?;

    let entrainement: Entrainement = serde_json::from_value(valeur)
        .map_err(|e| AppError::BadRequest(format!("Entrainement invalide : {}", e)))?;

    entrainement.valider().map_err(AppError::BadRequest)?;

    Ok(entrainement)
}

/// Create a workout for the user in the path (bearer required).
async fn add(
    State(state): State<Arc<AppState>>,
    Path(utilisateur): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<EntrainementResponse>)> {
    let entrainement = extraire_entrainement(body)?;
    let entrainement = state
        .entrainement_service
        .add(entrainement, &utilisateur)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(EntrainementResponse { entrainement }),
    ))
}

/// Update a workout; the body must carry `_id` (bearer required).
async fn update(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<EntrainementResponse>> {
    let entrainement = extraire_entrainement(body)?;
    let entrainement = state.entrainement_service.update(entrainement).await?;
    Ok(Json(EntrainementResponse { entrainement }))
}

#[derive(Deserialize)]
struct DeleteParams {
    utilisateur: String,
}

/// Delete a workout and prune it from its owner (bearer required).
async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode> {
    state
        .entrainement_service
        .delete(&id, &params.utilisateur)
        .await?;
    Ok(StatusCode::OK)
}
