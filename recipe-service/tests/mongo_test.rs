mod common;

use common::{pancakes, TestApp};
use mongodb::bson::{doc, oid::ObjectId};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "Requires MongoDB at TEST_MONGODB_URI (default mongodb://localhost:27017)"]
async fn crud_round_trip_against_mongodb() {
    let app = TestApp::spawn_with_mongo().await;

    let response = app.create(pancakes()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: serde_json::Value = response.json().await.unwrap();
    let id = created["_id"].as_str().unwrap().to_string();

    // Stored document uses the wire field names
    let (db, _) = app.mongo.as_ref().unwrap();
    let stored = db
        .database()
        .collection::<mongodb::bson::Document>("recipes")
        .find_one(doc! { "_id": ObjectId::parse_str(&id).unwrap() }, None)
        .await
        .unwrap()
        .expect("Recipe not found in DB");
    assert_eq!(stored.get_str("type").unwrap(), "breakfast");
    assert_eq!(stored.get_f64("id").unwrap(), 7.0);

    let response = app
        .update(json!({ "id": id, "recipe": { "name": "Blueberry pancakes" } }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let recipes = app.select_all().await;
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0]["name"], "Blueberry pancakes");
    assert_eq!(recipes[0]["calories"], 520);

    let response = app.delete(&id).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(app.select_all().await.is_empty());

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "Requires MongoDB at TEST_MONGODB_URI (default mongodb://localhost:27017)"]
async fn unknown_ids_are_not_errors_against_mongodb() {
    let app = TestApp::spawn_with_mongo().await;
    let unknown = ObjectId::new().to_hex();

    let response = app
        .update(json!({ "id": unknown, "recipe": { "name": "Ghost" } }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.delete(&unknown).await;
    assert_eq!(response.status(), StatusCode::OK);

    app.cleanup().await;
}
