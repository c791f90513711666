// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod entrainement;
pub mod utilisateur;

pub use entrainement::{Categorie, Entrainement};
pub use utilisateur::Utilisateur;
