// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Token service: issues and verifies the bearer tokens.
//!
//! The signing secret is injected at construction; nothing here reads the
//! environment. Tokens bind an email and carry no expiry claim, so a token
//! stays valid until the secret rotates.

use crate::db::FirestoreDb;
use crate::error::{AppError, Result};
use crate::models::Utilisateur;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

pub const JETON_INVALIDE_ERR: &str = "Jeton invalide";

/// Signed claim bound to an identity's email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's email
    pub sub: String,
}

/// Issues and verifies bearer tokens. Exclusive owner of token internals.
#[derive(Clone)]
pub struct JetonService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    db: FirestoreDb,
}

impl JetonService {
    pub fn new(secret: &[u8], db: FirestoreDb) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            db,
        }
    }

    /// Sign a claim for the given email.
    pub fn signer(&self, email: &str) -> Result<String> {
        let claims = Claims {
            sub: email.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("JWT encoding failed: {}", e)))
    }

    /// Issue a token for a verified identity.
    ///
    /// Re-fetches the stored record and compares password hashes; if the
    /// record is gone or the hashes no longer match, returns `Ok(None)`
    /// rather than an error. Callers must treat absence as "not
    /// authenticated" (the login handler maps it to 401).
    pub async fn generer(&self, utilisateur: &Utilisateur) -> Result<Option<String>> {
        let stocke = self.db.get_utilisateur_par_email(&utilisateur.email).await?;

        match stocke {
            Some(enregistre) if enregistre.mot_de_passe == utilisateur.mot_de_passe => {
                Ok(Some(self.signer(&utilisateur.email)?))
            }
            _ => Ok(None),
        }
    }

    /// Verify a token's signature and structure.
    ///
    /// Fails with `Forbidden` on any mismatch or malformed input. Expiry is
    /// not checked: these tokens carry no `exp` claim.
    pub fn verifier(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::Forbidden(JETON_INVALIDE_ERR.to_string()))
    }
}
