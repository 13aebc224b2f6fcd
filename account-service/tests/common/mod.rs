//! Common test utilities for account-service integration tests.

#![allow(dead_code)]

use account_service::config::AccountConfig;
use account_service::startup::Application;
use account_service::Ledger;
use reqwest::{Client, Response};
use serde_json::{json, Value};
use service_core::config::Config as CommonConfig;
use std::sync::{Arc, Once};

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,account_service=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub ledger: Arc<Ledger>,
    client: Client,
}

impl TestApp {
    /// Start the application on a random port with an empty ledger.
    pub async fn spawn() -> Self {
        init_tracing();

        let config = AccountConfig {
            common: CommonConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            service_name: "account-service-test".to_string(),
            ..AccountConfig::default()
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build application");

        let port = app.port();
        let ledger = app.ledger();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let client = Client::new();

        // Wait for server to be ready by polling health endpoint
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        }

        TestApp {
            address,
            port,
            ledger,
            client,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn create_account(&self, cpf: &str, name: &str) -> Response {
        self.client
            .post(self.url("/account"))
            .json(&json!({ "cpf": cpf, "name": name }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_with_cpf(&self, path: &str, cpf: &str) -> Response {
        self.client
            .get(self.url(path))
            .header("cpf", cpf)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_with_cpf(&self, path: &str, cpf: &str, body: Value) -> Response {
        self.client
            .post(self.url(path))
            .header("cpf", cpf)
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn deposit(&self, cpf: &str, amount: f64, description: Option<&str>) -> Response {
        self.post_with_cpf(
            "/deposit",
            cpf,
            json!({ "amount": amount, "description": description }),
        )
        .await
    }

    pub async fn withdraw(&self, cpf: &str, amount: f64) -> Response {
        self.post_with_cpf("/withdraw", cpf, json!({ "amount": amount }))
            .await
    }

    pub async fn balance(&self, cpf: &str) -> f64 {
        let body: Value = self
            .get_with_cpf("/balance", cpf)
            .await
            .json()
            .await
            .expect("Failed to parse JSON");
        body["data"].as_f64().expect("balance must be a number")
    }

    pub async fn statement(&self, cpf: &str) -> Vec<Value> {
        let body: Value = self
            .get_with_cpf("/statement", cpf)
            .await
            .json()
            .await
            .expect("Failed to parse JSON");
        body["data"]
            .as_array()
            .expect("statement must be an array")
            .clone()
    }
}

/// Message of an `{"error": {"message": ...}}` envelope.
pub async fn error_message(response: Response) -> String {
    let body: Value = response.json().await.expect("Failed to parse JSON");
    body["error"]["message"]
        .as_str()
        .expect("error envelope must carry a message")
        .to_string()
}
