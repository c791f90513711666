// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod entrainement;
pub mod jeton;
pub mod utilisateur;

pub use entrainement::EntrainementService;
pub use jeton::{Claims, JetonService};
pub use utilisateur::UtilisateurService;
