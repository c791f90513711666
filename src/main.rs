// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Carnet-Entrainement API Server
//!
//! Workout journal backend: JWT-authenticated CRUD over entrainements and
//! utilisateurs, stored in Firestore.

use carnet_entrainement::{
    config::Config,
    db::FirestoreDb,
    services::{EntrainementService, JetonService, UtilisateurService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment. A missing JWT_SECRET fails here,
    // at startup, never per-request.
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Carnet-Entrainement API");

    // Initialize Firestore database
    let db = FirestoreDb::new(&config.gcp_project_id)
        .await
        .expect("Failed to connect to Firestore");

    // The token service owns the signing secret from here on
    let jeton_service = JetonService::new(&config.jwt_secret, db.clone());
    let utilisateur_service = UtilisateurService::new(db.clone());
    let entrainement_service = EntrainementService::new(db.clone());

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        jeton_service,
        utilisateur_service,
        entrainement_service,
    });

    // Build router
    let app = carnet_entrainement::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("carnet_entrainement=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
