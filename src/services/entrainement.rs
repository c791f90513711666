// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout service: visibility rules, ownership bookkeeping, error mapping.
//!
//! Empty-result semantics are deliberately asymmetric: "no public workouts
//! at all" is `NotFound`, but an empty *filtered* list (by category, by
//! calories, by owner) is `EmptyResult`, HTTP 200 with an explanatory
//! message. Both shapes are part of the API contract.

use crate::db::FirestoreDb;
use crate::error::{AppError, Result};
use crate::models::{Categorie, Entrainement};
use crate::services::utilisateur::UTILISATEUR_NOT_FOUND_ERR;

pub const ENTRAINEMENT_NOT_FOUND_ERR: &str = "Entraînement non trouvé";

#[derive(Clone)]
pub struct EntrainementService {
    db: FirestoreDb,
}

impl EntrainementService {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }

    /// Look up a workout by ID.
    ///
    /// A private workout is reported as `NotFound` with the same message as
    /// a missing one, hiding its existence from the requester.
    pub async fn get_one(&self, id: &str) -> Result<Entrainement> {
        let entrainement = self
            .db
            .get_entrainement(id)
            .await?
            .ok_or_else(|| AppError::NotFound(ENTRAINEMENT_NOT_FOUND_ERR.to_string()))?;

        if !entrainement.publique {
            return Err(AppError::NotFound(ENTRAINEMENT_NOT_FOUND_ERR.to_string()));
        }

        Ok(entrainement)
    }

    /// All public workouts. An empty store is `NotFound`, unlike the
    /// filtered queries below.
    pub async fn get_all(&self) -> Result<Vec<Entrainement>> {
        let entrainements = self.db.get_entrainements_publics().await?;

        if entrainements.is_empty() {
            return Err(AppError::NotFound("Aucun entraînements trouvés".to_string()));
        }

        Ok(entrainements)
    }

    /// All workouts referenced by a user's record, private ones included.
    pub async fn get_all_by_utilisateur(&self, utilisateur_id: &str) -> Result<Vec<Entrainement>> {
        let utilisateur = self
            .db
            .get_utilisateur(utilisateur_id)
            .await?
            .ok_or_else(|| AppError::NotFound(UTILISATEUR_NOT_FOUND_ERR.to_string()))?;

        let entrainements = self
            .db
            .get_entrainements_par_ids(&utilisateur.entrainements)
            .await?;

        if entrainements.is_empty() {
            return Err(AppError::EmptyResult(
                "Aucun entraînement trouvé pour cet utilisateur".to_string(),
            ));
        }

        Ok(entrainements)
    }

    /// Public workouts filtered by category.
    pub async fn get_by_categorie(&self, categorie: &str) -> Result<Vec<Entrainement>> {
        let entrainements = self.db.get_publics_par_categorie(categorie).await?;

        if entrainements.is_empty() {
            return Err(AppError::EmptyResult(format!(
                "Aucun entraînement trouvé dans cette catégorie. \
                 Les catégories disponibles sont : {}",
                Categorie::NOMS.join(", ")
            )));
        }

        Ok(entrainements)
    }

    /// Public workouts that burned at least `calories`.
    pub async fn get_by_calories(&self, calories: u32) -> Result<Vec<Entrainement>> {
        let entrainements = self.db.get_publics_par_calories(calories).await?;

        if entrainements.is_empty() {
            return Err(AppError::EmptyResult(
                "Aucun entraînement trouvé avec ces calories brûlées".to_string(),
            ));
        }

        Ok(entrainements)
    }

    /// Add a workout and record it on its owner.
    ///
    /// Two writes, no transaction: the workout is inserted first, then its
    /// id is appended to the owner's reference list. If the second write
    /// fails the workout exists without a back-reference; concurrent adds
    /// for the same owner can also race on the list. Accepted contract.
    pub async fn add(
        &self,
        mut entrainement: Entrainement,
        utilisateur_id: &str,
    ) -> Result<Entrainement> {
        let mut utilisateur = self
            .db
            .get_utilisateur(utilisateur_id)
            .await?
            .ok_or_else(|| AppError::NotFound(UTILISATEUR_NOT_FOUND_ERR.to_string()))?;

        let id = uuid::Uuid::new_v4().to_string();
        entrainement.id = Some(id.clone());
        entrainement.date = chrono::Utc::now();

        self.db.upsert_entrainement(&entrainement).await?;

        utilisateur.entrainements.push(id.clone());
        self.db.upsert_utilisateur(&utilisateur).await?;

        tracing::info!(
            entrainement_id = %id,
            utilisateur_id = %utilisateur_id,
            "Entraînement créé"
        );

        Ok(entrainement)
    }

    /// Update a workout (full-record overwrite).
    ///
    /// The id must be present in the body and the record must already
    /// exist; existence is re-checked right before the write.
    pub async fn update(&self, entrainement: Entrainement) -> Result<Entrainement> {
        let id = entrainement
            .id
            .clone()
            .ok_or_else(|| AppError::BadRequest("L'id de l'entrainement est manquante".to_string()))?;

        if self.db.get_entrainement(&id).await?.is_none() {
            return Err(AppError::NotFound(ENTRAINEMENT_NOT_FOUND_ERR.to_string()));
        }

        self.db.upsert_entrainement(&entrainement).await?;
        Ok(entrainement)
    }

    /// Delete a workout and prune it from its owner's reference list.
    ///
    /// Two steps, no transaction: if the owner lookup fails after the
    /// document is deleted, this reports `NotFound` even though the delete
    /// already happened. Irreversible partial effect, kept as specified.
    pub async fn delete(&self, id: &str, utilisateur_id: &str) -> Result<()> {
        if self.db.get_entrainement(id).await?.is_none() {
            return Err(AppError::NotFound(ENTRAINEMENT_NOT_FOUND_ERR.to_string()));
        }

        self.db.delete_entrainement(id).await?;

        let mut utilisateur = self
            .db
            .get_utilisateur(utilisateur_id)
            .await?
            .ok_or_else(|| AppError::NotFound(ENTRAINEMENT_NOT_FOUND_ERR.to_string()))?;

        utilisateur.entrainements.retain(|e| e != id);
        self.db.upsert_utilisateur(&utilisateur).await?;

        tracing::info!(
            entrainement_id = %id,
            utilisateur_id = %utilisateur_id,
            "Entraînement supprimé"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_update_sans_id_est_bad_request() {
        let service = EntrainementService::new(FirestoreDb::new_mock());
        let entrainement = Entrainement {
            id: None,
            titre: "Pompes".to_string(),
            description: None,
            duree: 15,
            date: chrono::Utc::now(),
            publique: true,
            categories: vec![Categorie::Force],
            repetitions: Some(20),
            calories_brulees: 100,
        };

        let err = service.update(entrainement).await.unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert_eq!(msg, "L'id de l'entrainement est manquante"),
            other => panic!("attendu BadRequest, obtenu {other:?}"),
        }
    }
}
