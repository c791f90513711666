//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    pub const UTILISATEURS: &str = "utilisateurs";
    pub const ENTRAINEMENTS: &str = "entrainements";
}
