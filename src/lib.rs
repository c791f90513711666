// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Carnet-Entrainement: a workout journal API.
//!
//! This crate provides the backend for logging workouts ("entrainements"),
//! managing user accounts ("utilisateurs") and issuing the bearer tokens
//! that gate mutations and per-user listings.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::FirestoreDb;
use services::{EntrainementService, JetonService, UtilisateurService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub jeton_service: JetonService,
    pub utilisateur_service: UtilisateurService,
    pub entrainement_service: EntrainementService,
}
