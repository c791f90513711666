// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API input validation tests: envelope handling and the French
//! constraint messages.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

mod common;

async fn corps_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn entrainement_valide_json() -> serde_json::Value {
    serde_json::json!({
        "titre": "Course matinale",
        "description": "5km autour du parc",
        "duree": 30,
        "date": "2024-01-15T10:00:00Z",
        "publique": true,
        "categories": ["Cardio"],
        "caloriesBrulees": 250
    })
}

#[tokio::test]
async fn test_put_sans_id_renvoie_le_message_exact() {
    let (app, state) = common::create_test_app();
    let jeton = common::create_test_jeton(&state, "a@b.com");

    // Valid workout body, but no `_id`: the service rejects before any
    // store access, with the exact contract message.
    let body = serde_json::json!({ "entrainement": entrainement_valide_json() });

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/entrainements")
                .header(header::AUTHORIZATION, format!("Bearer {}", jeton))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let corps = corps_json(response).await;
    assert_eq!(corps["error"], "L'id de l'entrainement est manquante");
}

#[tokio::test]
async fn test_enveloppe_entrainement_manquante() {
    let (app, state) = common::create_test_app();
    let jeton = common::create_test_jeton(&state, "a@b.com");

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/entrainements/abc123")
                .header(header::AUTHORIZATION, format!("Bearer {}", jeton))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let corps = corps_json(response).await;
    assert_eq!(corps["error"], "Entrainement requis");
}

#[tokio::test]
async fn test_titre_trop_long_rejete() {
    let (app, state) = common::create_test_app();
    let jeton = common::create_test_jeton(&state, "a@b.com");

    let mut entrainement = entrainement_valide_json();
    entrainement["titre"] = serde_json::json!("a".repeat(101));
    let body = serde_json::json!({ "entrainement": entrainement });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/entrainements/abc123")
                .header(header::AUTHORIZATION, format!("Bearer {}", jeton))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let corps = corps_json(response).await;
    assert!(corps["error"]
        .as_str()
        .unwrap()
        .contains("100 caractères"));
}

#[tokio::test]
async fn test_categorie_inconnue_rejetee() {
    let (app, state) = common::create_test_app();
    let jeton = common::create_test_jeton(&state, "a@b.com");

    let mut entrainement = entrainement_valide_json();
    entrainement["categories"] = serde_json::json!(["Yoga"]);
    let body = serde_json::json!({ "entrainement": entrainement });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/entrainements/abc123")
                .header(header::AUTHORIZATION, format!("Bearer {}", jeton))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_enveloppe_utilisateur_manquante() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/utilisateurs/add")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let corps = corps_json(response).await;
    assert_eq!(corps["error"], "Utilisateur requis");
}

#[tokio::test]
async fn test_mot_de_passe_faible_rejete() {
    let (app, _state) = common::create_test_app();

    let body = serde_json::json!({
        "utilisateur": {
            "nom": "Jean Tremblay",
            "email": "jean@exemple.com",
            "motDePasse": "faible"
        }
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/utilisateurs/add")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let corps = corps_json(response).await;
    assert!(corps["error"].as_str().unwrap().contains("mot de passe"));
}

#[tokio::test]
async fn test_identifiants_manquants_pour_id() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/utilisateurs/id")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"email":"jean@exemple.com"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let corps = corps_json(response).await;
    assert_eq!(corps["error"], "Email et mot de passe requis.");
}

#[tokio::test]
async fn test_calorie_non_numerique_rejetee() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/entrainements/calories/beaucoup")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
