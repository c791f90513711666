// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout ("entrainement") model for storage and API.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Fixed set of workout categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Categorie {
    Cardio,
    Force,
    Endurance,
    Puissance,
    #[serde(rename = "Flexibilité")]
    Flexibilite,
}

impl Categorie {
    /// All category names, for the empty-filter help message.
    pub const NOMS: [&'static str; 5] =
        ["Cardio", "Force", "Endurance", "Puissance", "Flexibilité"];
}

/// Stored workout record.
///
/// Wire names match the original API: `_id`, `caloriesBrulees`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Entrainement {
    /// Document ID (uuid, assigned at insert)
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Title, required
    #[validate(custom(function = valider_titre))]
    pub titre: String,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "La description ne doit pas dépasser 500 caractères"))]
    pub description: Option<String>,
    /// Duration in minutes
    #[validate(range(min = 1, message = "La durée doit être d’au moins 1 minute"))]
    pub duree: u32,
    /// When the workout took place (overwritten with "now" at insert)
    pub date: chrono::DateTime<chrono::Utc>,
    /// Public workouts are globally readable; private ones are hidden
    pub publique: bool,
    /// One or more categories from the fixed set
    #[validate(custom(function = au_moins_une_categorie))]
    pub categories: Vec<Categorie>,
    /// Repetition count, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Le nombre de répétitions doit être supérieur à 0"))]
    pub repetitions: Option<u32>,
    /// Calories burned (unsigned, so >= 0 by construction)
    pub calories_brulees: u32,
}

fn valider_titre(titre: &str) -> Result<(), ValidationError> {
    if titre.is_empty() {
        return Err(erreur("titre", "Le titre de l'entraînement est obligatoire"));
    }
    if titre.chars().count() > 100 {
        return Err(erreur("titre", "Le titre ne doit pas dépasser 100 caractères"));
    }
    Ok(())
}

fn au_moins_une_categorie(categories: &[Categorie]) -> Result<(), ValidationError> {
    if categories.is_empty() {
        return Err(erreur("categories", "Au moins une catégorie est obligatoire"));
    }
    Ok(())
}

fn erreur(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

impl Entrainement {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn entrainement_valide() -> Entrainement {
        Entrainement {
            id: None,
            titre: "Course matinale".to_string(),
            description: Some("5km autour du parc".to_string()),
            duree: 30,
            date: chrono::Utc::now(),
            publique: true,
            categories: vec![Categorie::Cardio],
            repetitions: None,
            calories_brulees: 250,
        }
    }

    #[test]
    fn test_entrainement_valide() {
        assert!(entrainement_valide().valider().is_ok());
    }

    #[test]
    fn test_titre_trop_long() {
        let mut e = entrainement_valide();
        e.titre = "a".repeat(101);
        let msg = e.valider().unwrap_err();
        assert!(msg.contains("100 caractères"));
    }

    #[test]
    fn test_titre_obligatoire() {
        let mut e = entrainement_valide();
        e.titre = String::new();
        assert!(e.valider().is_err());
    }

    #[test]
    fn test_duree_minimum() {
        let mut e = entrainement_valide();
        e.duree = 0;
        let msg = e.valider().unwrap_err();
        assert!(msg.contains("au moins 1 minute"));
    }

    #[test]
    fn test_au_moins_une_categorie() {
        let mut e = entrainement_valide();
        e.categories = vec![];
        let msg = e.valider().unwrap_err();
        assert!(msg.contains("catégorie"));
    }

    #[test]
    fn test_repetitions_zero_rejetees() {
        let mut e = entrainement_valide();
        e.repetitions = Some(0);
        assert!(e.valider().is_err());
    }

    #[test]
    fn test_categorie_accentuee_serde() {
        let json = serde_json::to_string(&Categorie::Flexibilite).unwrap();
        assert_eq!(json, "\"Flexibilité\"");

        let parsed: Categorie = serde_json::from_str("\"Flexibilité\"").unwrap();
        assert_eq!(parsed, Categorie::Flexibilite);
    }

    #[test]
    fn test_wire_names() {
        let e = entrainement_valide();
        let value = serde_json::to_value(&e).unwrap();
        assert!(value.get("caloriesBrulees").is_some());
        assert!(value.get("calories_brulees").is_none());
        // No id assigned yet, so "_id" is omitted
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn test_categorie_inconnue_rejetee() {
        let result: Result<Categorie, _> = serde_json::from_str("\"Yoga\"");
        assert!(result.is_err());
    }
}
