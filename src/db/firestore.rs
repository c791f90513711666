// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Utilisateurs (profiles with credentials and workout refs)
//! - Entrainements (workout records with visibility and categories)
//!
//! Repositories stay free of business logic: absence comes back as `None`
//! or an empty `Vec` and the service layer decides what that means.

use crate::db::collections;
use crate::error::AppError;
use crate::models::{Entrainement, Utilisateur};
use futures_util::{stream, StreamExt};

const MAX_CONCURRENT_DB_OPS: usize = 50;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── Utilisateur Operations ──────────────────────────────────

    /// Get a user by document ID.
    pub async fn get_utilisateur(&self, id: &str) -> Result<Option<Utilisateur>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::UTILISATEURS)
            .obj()
            .one(id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a user by email (unique field).
    pub async fn get_utilisateur_par_email(
        &self,
        email: &str,
    ) -> Result<Option<Utilisateur>, AppError> {
        let email = email.to_string();
        let utilisateurs: Vec<Utilisateur> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::UTILISATEURS)
            .filter(move |q| q.field("email").eq(email.clone()))
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(utilisateurs.into_iter().next())
    }

    /// Create or update a user. The record must carry its document ID.
    pub async fn upsert_utilisateur(&self, utilisateur: &Utilisateur) -> Result<(), AppError> {
        let id = utilisateur
            .id
            .as_deref()
            .ok_or_else(|| AppError::Database("Utilisateur sans id".to_string()))?;

        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::UTILISATEURS)
            .document_id(id)
            .object(utilisateur)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Entrainement Operations ─────────────────────────────────

    /// Get a workout by document ID.
    pub async fn get_entrainement(&self, id: &str) -> Result<Option<Entrainement>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::ENTRAINEMENTS)
            .obj()
            .one(id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get all public workouts.
    pub async fn get_entrainements_publics(&self) -> Result<Vec<Entrainement>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::ENTRAINEMENTS)
            .filter(|q| q.field("publique").eq(true))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get public workouts carrying the given category.
    pub async fn get_publics_par_categorie(
        &self,
        categorie: &str,
    ) -> Result<Vec<Entrainement>, AppError> {
        let categorie = categorie.to_string();
        self.get_client()?
            .fluent()
            .select()
            .from(collections::ENTRAINEMENTS)
            .filter(move |q| {
                q.for_all([
                    q.field("publique").eq(true),
                    q.field("categories").array_contains(categorie.clone()),
                ])
            })
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get public workouts that burned at least `calories`.
    pub async fn get_publics_par_calories(
        &self,
        calories: u32,
    ) -> Result<Vec<Entrainement>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::ENTRAINEMENTS)
            .filter(move |q| {
                q.for_all([
                    q.field("publique").eq(true),
                    q.field("caloriesBrulees").greater_than_or_equal(calories),
                ])
            })
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Fetch workouts by ID, skipping dangling references.
    ///
    /// Used for a user's owned-workout list; reads run concurrently with a
    /// limit to avoid overloading Firestore.
    pub async fn get_entrainements_par_ids(
        &self,
        ids: &[String],
    ) -> Result<Vec<Entrainement>, AppError> {
        let resultats: Vec<Result<Option<Entrainement>, AppError>> = stream::iter(ids.to_vec())
            .map(|id| async move { self.get_entrainement(&id).await })
            .buffer_unordered(MAX_CONCURRENT_DB_OPS)
            .collect()
            .await;

        let mut entrainements = Vec::with_capacity(ids.len());
        for resultat in resultats {
            if let Some(entrainement) = resultat? {
                entrainements.push(entrainement);
            }
        }
        Ok(entrainements)
    }

    /// Create or update a workout. The record must carry its document ID.
    pub async fn upsert_entrainement(&self, entrainement: &Entrainement) -> Result<(), AppError> {
        let id = entrainement
            .id
            .as_deref()
            .ok_or_else(|| AppError::Database("Entrainement sans id".to_string()))?;

        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::ENTRAINEMENTS)
            .document_id(id)
            .object(entrainement)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Delete a workout document.
    pub async fn delete_entrainement(&self, id: &str) -> Result<(), AppError> {
        self.get_client()?
            .fluent()
            .delete()
            .from(collections::ENTRAINEMENTS)
            .document_id(id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}
