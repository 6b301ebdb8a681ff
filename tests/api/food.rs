use foody::client::schema::{ApiResponse, Food, PatchOperation};
use foody::domain::food::NewFood;
use reqwest::StatusCode;
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, ResponseTemplate,
};

use crate::helper::{fake_food, spawn_app, TestApp};

#[tokio::test]
async fn create_food_posts_the_food_fields() {
    let app = spawn_app().await;
    let session = app.session().await;
    let food = fake_food();

    Mock::given(method("POST"))
        .and(path("/api/Food/Create"))
        .and(header("Authorization", TestApp::bearer().as_str()))
        .and(body_json(json!({
            "Name": food.name.as_ref(),
            "Description": food.description,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "foodId": "1" })))
        .expect(1)
        .mount(&app.foody_server)
        .await;

    let reply = session.create_food(&food).await.unwrap();
    let body: ApiResponse = reply.json().unwrap();

    assert_eq!(StatusCode::CREATED, reply.status);
    assert_eq!(Some("1"), body.food_id.as_deref());
}

#[tokio::test]
async fn create_food_without_description_omits_the_field() {
    let app = spawn_app().await;
    let session = app.session().await;
    let food = NewFood {
        description: None,
        ..fake_food()
    };

    Mock::given(method("POST"))
        .and(path("/api/Food/Create"))
        .and(body_json(json!({ "Name": food.name.as_ref() })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "foodId": "2" })))
        .expect(1)
        .mount(&app.foody_server)
        .await;

    let reply = session.create_food(&food).await.unwrap();

    assert_eq!(StatusCode::CREATED, reply.status);
}

#[tokio::test]
async fn edit_food_sends_a_patch_array() {
    let app = spawn_app().await;
    let session = app.session().await;

    Mock::given(method("PATCH"))
        .and(path("/api/Food/Edit/42"))
        .and(header("Authorization", TestApp::bearer().as_str()))
        .and(body_json(json!([
            { "path": "/name", "op": "replace", "value": "Name Updated" }
        ])))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "msg": "Successfully edited" })),
        )
        .expect(1)
        .mount(&app.foody_server)
        .await;

    let reply = session
        .edit_food("42", &[PatchOperation::replace("/name", "Name Updated")])
        .await
        .unwrap();
    let body: ApiResponse = reply.json().unwrap();

    assert_eq!(StatusCode::OK, reply.status);
    assert_eq!(Some("Successfully edited"), body.message.as_deref());
}

#[tokio::test]
async fn all_foods_returns_the_listing() {
    let app = spawn_app().await;
    let session = app.session().await;

    Mock::given(method("GET"))
        .and(path("/api/Food/All"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "Banitsa", "description": "Pastry" },
            { "name": "Tarator", "description": null }
        ])))
        .expect(1)
        .mount(&app.foody_server)
        .await;

    let reply = session.all_foods().await.unwrap();
    let foods: Vec<Food> = reply.json().unwrap();

    assert_eq!(StatusCode::OK, reply.status);
    assert_eq!(2, foods.len());
    assert_eq!("Banitsa", foods[0].name);
    assert_eq!(None, foods[1].description);
}

#[tokio::test]
async fn delete_unknown_food_keeps_the_error_message() {
    let app = spawn_app().await;
    let session = app.session().await;

    Mock::given(method("DELETE"))
        .and(path("/api/Food/Delete/invalidId"))
        .and(header("Authorization", TestApp::bearer().as_str()))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "msg": "Unable to delete this food revue!"
        })))
        .expect(1)
        .mount(&app.foody_server)
        .await;

    let reply = session.delete_food("invalidId").await.unwrap();
    let body: ApiResponse = reply.json().unwrap();

    assert_eq!(StatusCode::BAD_REQUEST, reply.status);
    assert_eq!(
        Some("Unable to delete this food revue!"),
        body.message.as_deref()
    );
}

#[tokio::test]
async fn edit_food_sends_every_operation_in_order() {
    let app = spawn_app().await;
    let session = app.session().await;

    Mock::given(method("PATCH"))
        .and(path("/api/Food/Edit/42"))
        .and(body_json(json!([
            { "path": "/name", "op": "test", "value": "Some name" },
            { "path": "/description", "op": "copy", "from": "/name" },
            { "path": "/name", "op": "move", "from": "/description" },
            { "path": "/description", "op": "add", "value": "Crispy" }
        ])))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "msg": "Successfully edited" })),
        )
        .expect(1)
        .mount(&app.foody_server)
        .await;

    let operations = [
        PatchOperation::test("/name", "Some name"),
        PatchOperation::copy_from("/name", "/description"),
        PatchOperation::move_from("/description", "/name"),
        PatchOperation::add("/description", "Crispy"),
    ];
    let reply = session.edit_food("42", &operations).await.unwrap();

    assert_eq!(StatusCode::OK, reply.status);
}
