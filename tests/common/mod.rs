// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use carnet_entrainement::config::Config;
use carnet_entrainement::db::FirestoreDb;
use carnet_entrainement::routes::create_router;
use carnet_entrainement::services::{EntrainementService, JetonService, UtilisateurService};
use carnet_entrainement::AppState;
use std::sync::Arc;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a mock database connection (offline).
#[allow(dead_code)]
pub fn test_db_offline() -> FirestoreDb {
    FirestoreDb::new_mock()
}

/// Create a test app backed by the Firestore emulator.
#[allow(dead_code)]
pub async fn create_emulator_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = FirestoreDb::new(&config.gcp_project_id)
        .await
        .expect("Failed to connect to Firestore emulator");

    let jeton_service = JetonService::new(&config.jwt_secret, db.clone());
    let utilisateur_service = UtilisateurService::new(db.clone());
    let entrainement_service = EntrainementService::new(db.clone());

    let state = Arc::new(AppState {
        config,
        db,
        jeton_service,
        utilisateur_service,
        entrainement_service,
    });

    (create_router(state.clone()), state)
}

/// Create a test app with offline mock dependencies.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = test_db_offline();

    let jeton_service = JetonService::new(&config.jwt_secret, db.clone());
    let utilisateur_service = UtilisateurService::new(db.clone());
    let entrainement_service = EntrainementService::new(db.clone());

    let state = Arc::new(AppState {
        config,
        db,
        jeton_service,
        utilisateur_service,
        entrainement_service,
    });

    (create_router(state.clone()), state)
}

/// Create a signed bearer token the way the token service does.
#[allow(dead_code)]
pub fn create_test_jeton(state: &Arc<AppState>, email: &str) -> String {
    state
        .jeton_service
        .signer(email)
        .expect("Failed to sign test token")
}
