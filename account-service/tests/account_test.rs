//! Account lifecycle integration tests.

mod common;

use common::{error_message, TestApp};
use serde_json::{json, Value};

const CPF: &str = "111.111.111-11";

#[tokio::test]
async fn create_account_returns_201_with_customer() {
    let app = TestApp::spawn().await;

    let response = app.create_account(CPF, "Alice").await;
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["data"]["cpf"], CPF);
    assert_eq!(body["data"]["name"], "Alice");
    assert_eq!(body["data"]["statement"], json!([]));
    assert!(uuid::Uuid::parse_str(body["data"]["id"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn duplicate_cpf_is_rejected() {
    let app = TestApp::spawn().await;
    app.create_account(CPF, "Alice").await;

    let response = app.create_account(CPF, "Bob").await;

    assert_eq!(response.status(), 400);
    assert_eq!(error_message(response).await, "Customer already exists!");
    assert_eq!(app.ledger.len(), 1);
    assert_eq!(app.ledger.find_account(CPF).unwrap().name, "Alice");
}

#[tokio::test]
async fn create_account_requires_cpf() {
    let app = TestApp::spawn().await;

    let response = app.create_account("", "Alice").await;

    assert_eq!(response.status(), 400);
    assert_eq!(error_message(response).await, "cpf field is required.");
    assert!(app.ledger.is_empty());
}

#[tokio::test]
async fn create_account_without_name_key_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .post(app.url("/account"))
        .json(&json!({ "cpf": CPF }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 400);
    assert_eq!(error_message(response).await, "name field is required.");
    assert!(app.ledger.is_empty());
}

#[tokio::test]
async fn get_account_returns_customer() {
    let app = TestApp::spawn().await;
    app.create_account(CPF, "Alice").await;

    let response = app.get_with_cpf("/account", CPF).await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["name"], "Alice");
}

#[tokio::test]
async fn unknown_cpf_is_not_found() {
    let app = TestApp::spawn().await;

    let response = app.get_with_cpf("/account", "000.000.000-00").await;

    assert_eq!(response.status(), 400);
    assert_eq!(error_message(response).await, "Customer not found...");
}

#[tokio::test]
async fn missing_cpf_header_is_not_found() {
    let app = TestApp::spawn().await;
    app.create_account(CPF, "Alice").await;

    let response = app
        .client()
        .get(app.url("/account"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    assert_eq!(error_message(response).await, "Customer not found...");
}

#[tokio::test]
async fn update_account_overwrites_name() {
    let app = TestApp::spawn().await;
    let created: Value = app.create_account(CPF, "Alice").await.json().await.unwrap();

    let response = app
        .client()
        .put(app.url("/account"))
        .header("cpf", CPF)
        .json(&json!({ "name": "Alice Smith" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["name"], "Alice Smith");
    assert_eq!(body["data"]["id"], created["data"]["id"]);
    assert_eq!(body["data"]["cpf"], CPF);
}

#[tokio::test]
async fn update_unknown_account_is_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .put(app.url("/account"))
        .header("cpf", CPF)
        .json(&json!({ "name": "Ghost" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    assert_eq!(error_message(response).await, "Customer not found...");
}

#[tokio::test]
async fn delete_account_returns_removed_customer() {
    let app = TestApp::spawn().await;
    app.create_account(CPF, "Alice").await;
    app.create_account("222.222.222-22", "Bob").await;
    app.deposit(CPF, 10.0, None).await;

    let response = app
        .client()
        .delete(app.url("/account"))
        .header("cpf", CPF)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["cpf"], CPF);
    assert_eq!(body["data"]["statement"].as_array().unwrap().len(), 1);

    let response = app.get_with_cpf("/account", CPF).await;
    assert_eq!(response.status(), 400);

    let response = app.get_with_cpf("/account", "222.222.222-22").await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn deleted_cpf_can_be_registered_again() {
    let app = TestApp::spawn().await;
    app.create_account(CPF, "Alice").await;
    app.client()
        .delete(app.url("/account"))
        .header("cpf", CPF)
        .send()
        .await
        .unwrap();

    let response = app.create_account(CPF, "Alice").await;

    assert_eq!(response.status(), 201);
}
