// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User ("utilisateur") model: profile, credentials, owned workout refs.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Stored user record.
///
/// `mot_de_passe` only ever holds a bcrypt hash once persisted; the
/// plaintext exists transiently in registration/login request bodies.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Utilisateur {
    /// Document ID (uuid, assigned at insert)
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name
    #[validate(custom(function = valider_nom))]
    pub nom: String,
    /// Email address, unique across users
    #[validate(email(message = "L'adresse email est invalide"))]
    pub email: String,
    /// bcrypt hash of the password (plaintext pre-insert only)
    #[validate(custom(function = valider_mot_de_passe))]
    pub mot_de_passe: String,
    /// Registration timestamp, set at insert
    #[serde(default = "chrono::Utc::now")]
    pub date_inscription: chrono::DateTime<chrono::Utc>,
    /// IDs of workouts owned by this user
    #[serde(default)]
    pub entrainements: Vec<String>,
}

fn valider_nom(nom: &str) -> Result<(), ValidationError> {
    if nom.is_empty() {
        return Err(erreur("nom", "Le nom de l'utilisateur est obligatoire"));
    }
    if nom.chars().count() > 100 {
        return Err(erreur("nom", "Le nom ne doit pas dépasser 100 caractères"));
    }
    Ok(())
}

const CARACTERES_SPECIAUX: &str = "@$!%*?&";

/// Password policy: at least 8 chars with an uppercase letter, a lowercase
/// letter, a digit and a special character, nothing outside that alphabet.
/// An already-hashed value (bcrypt `$2` prefix) passes untouched, so stored
/// records round-trip through validation.
fn valider_mot_de_passe(mot_de_passe: &str) -> Result<(), ValidationError> {
    if est_hache(mot_de_passe) {
        return Ok(());
    }

    let autorise = |c: char| c.is_ascii_alphanumeric() || CARACTERES_SPECIAUX.contains(c);
    let valide = mot_de_passe.len() >= 8
        && mot_de_passe.chars().all(autorise)
        && mot_de_passe.chars().any(|c| c.is_ascii_lowercase())
        && mot_de_passe.chars().any(|c| c.is_ascii_uppercase())
        && mot_de_passe.chars().any(|c| c.is_ascii_digit())
        && mot_de_passe.chars().any(|c| CARACTERES_SPECIAUX.contains(c));

    if !valide {
        return Err(erreur(
            "mot_de_passe",
            "Le mot de passe doit contenir au moins 8 caractères, une majuscule, \
             une minuscule, un chiffre, un caractère spécial (@$!%*?&) et sans espace",
        ));
    }
    Ok(())
}

fn erreur(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Whether the value is already a bcrypt hash.
pub fn est_hache(mot_de_passe: &str) -> bool {
    mot_de_passe.starts_with("$2")
}

/// Hash a plaintext password with bcrypt.
pub fn hacher_mot_de_passe(plaintext: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(plaintext, bcrypt::DEFAULT_COST)
}

/// One-way comparison of a plaintext candidate against a stored hash.
pub fn verifier_mot_de_passe(plaintext: &str, hash: &str) -> bool {
    bcrypt::verify(plaintext, hash).unwrap_or(false)
}

impl Utilisateur {
    /// Run field validation, returning the French constraint messages.
    pub fn valider(&self) -> Result<(), String> {
        self.validate().map_err(|errors| {
            let messages: Vec<String> = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .collect();
            messages.join(", ")
        })
    }
}
