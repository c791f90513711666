// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User service: credential verification and account management.

use crate::db::FirestoreDb;
use crate::error::{AppError, Result};
use crate::models::utilisateur::{est_hache, hacher_mot_de_passe, verifier_mot_de_passe};
use crate::models::Utilisateur;

pub const UTILISATEUR_NOT_FOUND_ERR: &str = "Utilisateur non trouvé";
pub const IDENTIFIANTS_INCORRECTS_ERR: &str = "Email ou mot de passe incorrect.";

#[derive(Clone)]
pub struct UtilisateurService {
    db: FirestoreDb,
}

impl UtilisateurService {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }

    /// Verify an email/plaintext-password pair.
    ///
    /// Unknown email is `NotFound`; a password mismatch is `Unauthorized`.
    /// Success returns the stored record, workout refs included.
    pub async fn authentifier(&self, email: &str, mot_de_passe: &str) -> Result<Utilisateur> {
        let utilisateur = self
            .db
            .get_utilisateur_par_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(UTILISATEUR_NOT_FOUND_ERR.to_string()))?;

        if !verifier_mot_de_passe(mot_de_passe, &utilisateur.mot_de_passe) {
            return Err(AppError::Unauthorized(
                IDENTIFIANTS_INCORRECTS_ERR.to_string(),
            ));
        }

        Ok(utilisateur)
    }

    /// Look up a user by ID.
    pub async fn get_by_id(&self, id: &str) -> Result<Utilisateur> {
        self.db
            .get_utilisateur(id)
            .await?
            .ok_or_else(|| AppError::NotFound(UTILISATEUR_NOT_FOUND_ERR.to_string()))
    }

    /// Register a new user.
    ///
    /// Email uniqueness is checked before insert; the password is hashed
    /// and the registration timestamp stamped here, so plaintext never
    /// reaches the store.
    pub async fn add(&self, mut utilisateur: Utilisateur) -> Result<Utilisateur> {
        if self
            .db
            .get_utilisateur_par_email(&utilisateur.email)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest("Email déjà utilisé".to_string()));
        }

        utilisateur.id = Some(uuid::Uuid::new_v4().to_string());
        utilisateur.mot_de_passe = hacher_mot_de_passe(&utilisateur.mot_de_passe)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("bcrypt failure: {}", e)))?;
        utilisateur.date_inscription = chrono::Utc::now();

        self.db.upsert_utilisateur(&utilisateur).await?;

        tracing::info!(email = %utilisateur.email, "Utilisateur créé");
        Ok(utilisateur)
    }

    /// Update an existing user (full-record overwrite).
    ///
    /// The password is re-hashed whenever the incoming value is not already
    /// a bcrypt hash, so a plaintext change never lands in the store.
    pub async fn update(&self, mut utilisateur: Utilisateur) -> Result<Utilisateur> {
        let id = utilisateur
            .id
            .clone()
            .ok_or_else(|| AppError::BadRequest("L'id de l'utilisateur est requis".to_string()))?;

        if self.db.get_utilisateur(&id).await?.is_none() {
            return Err(AppError::NotFound(UTILISATEUR_NOT_FOUND_ERR.to_string()));
        }

        if !est_hache(&utilisateur.mot_de_passe) {
            utilisateur.mot_de_passe = hacher_mot_de_passe(&utilisateur.mot_de_passe)
                .map_err(|e| AppError::Internal(anyhow::anyhow!("bcrypt failure: {}", e)))?;
        }

        self.db.upsert_utilisateur(&utilisateur).await?;
        Ok(utilisateur)
    }
}
