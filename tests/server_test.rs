//! HTTP surface tests: routing, status mapping, and verbatim error
//! pass-through, exercised against a live listener.

use anyhow::Result;
use fintab::server::AppState;
use fintab::AppConfig;
use httpmock::prelude::*;
use serde_json::{json, Value};
use std::sync::Arc;

fn test_config(base_url: String) -> AppConfig {
    let mut config = AppConfig::default();
    config.plaid.environment = base_url;
    config.plaid.client_id = "test-client".to_string();
    config.plaid.secret = "test-secret".to_string();
    config.plaid.access_token = "access-sandbox-test".to_string();
    config.poller.interval_ms = 1;
    config
}

async fn spawn_app(config: AppConfig) -> String {
    let state = Arc::new(AppState::new(config).unwrap());
    let app = fintab::server::router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_fetch_returns_table_json() -> Result<()> {
    let plaid = MockServer::start();
    plaid.mock(|when, then| {
        when.method(POST).path("/accounts/get");
        then.status(200).json_body(json!({
            "accounts": [
                {"account_id": "a1", "name": "Plaid Checking", "mask": "0000",
                 "subtype": "checking",
                 "balances": {"available": 100.0, "current": 110.0, "iso_currency_code": "USD"}},
            ]
        }));
    });

    let base = spawn_app(test_config(plaid.base_url())).await;
    let response = reqwest::get(format!("{}/fetch/accounts", base)).await?;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    assert_eq!(
        body,
        json!({
            "columns": [
                {"title": "Name", "rightAligned": false},
                {"title": "Balance", "rightAligned": true},
                {"title": "Subtype", "rightAligned": false},
                {"title": "Mask", "rightAligned": false},
            ],
            "rows": [
                {"cells": ["Plaid Checking", "$110.00", "checking", "0000"]},
            ],
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_upstream_error_passes_through_as_400() -> Result<()> {
    let plaid = MockServer::start();
    plaid.mock(|when, then| {
        when.method(POST).path("/accounts/get");
        then.status(400).json_body(json!({
            "error_type": "ITEM_ERROR",
            "error_code": "ITEM_LOGIN_REQUIRED",
            "error_message": "the login details of this item have changed",
            "display_message": null,
            "request_id": "req-42",
            "suggested_action": "prompt the user to re-link",
        }));
    });

    let base = spawn_app(test_config(plaid.base_url())).await;
    let response = reqwest::get(format!("{}/fetch/accounts", base)).await?;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await?;
    assert_eq!(body["error_code"], "ITEM_LOGIN_REQUIRED");
    assert_eq!(body["request_id"], "req-42");
    // 未建模的欄位也要原樣帶回
    assert_eq!(body["suggested_action"], "prompt the user to re-link");
    Ok(())
}

#[tokio::test]
async fn test_unreachable_upstream_maps_to_502() -> Result<()> {
    // Nothing listens on this port; the connection is refused.
    let base = spawn_app(test_config("http://127.0.0.1:9".to_string())).await;
    let response = reqwest::get(format!("{}/fetch/accounts", base)).await?;

    assert_eq!(response.status(), 502);
    Ok(())
}

#[tokio::test]
async fn test_poll_exhaustion_maps_to_504() -> Result<()> {
    let plaid = MockServer::start();
    plaid.mock(|when, then| {
        when.method(POST).path("/asset_report/create");
        then.status(200)
            .json_body(json!({"asset_report_token": "assets-sandbox-token"}));
    });
    plaid.mock(|when, then| {
        when.method(POST).path("/asset_report/get");
        then.status(400).json_body(json!({
            "error_type": "ASSET_REPORT_ERROR",
            "error_code": "PRODUCT_NOT_READY",
            "error_message": "the requested product is not yet ready",
        }));
    });

    let mut config = test_config(plaid.base_url());
    config.poller.max_attempts = 2;

    let base = spawn_app(config).await;
    let response = reqwest::get(format!("{}/fetch/assets", base)).await?;

    assert_eq!(response.status(), 504);
    Ok(())
}

#[tokio::test]
async fn test_request_deadline_aborts_slow_upstream() -> Result<()> {
    let plaid = MockServer::start();
    plaid.mock(|when, then| {
        when.method(POST).path("/accounts/get");
        then.status(200)
            .delay(std::time::Duration::from_secs(5))
            .json_body(json!({"accounts": []}));
    });

    let mut config = test_config(plaid.base_url());
    config.server.request_timeout_secs = 1;

    let base = spawn_app(config).await;
    let response = reqwest::get(format!("{}/fetch/accounts", base)).await?;

    assert_eq!(response.status(), 504);
    Ok(())
}

#[tokio::test]
async fn test_unknown_operation_is_404() -> Result<()> {
    let base = spawn_app(test_config("http://127.0.0.1:9".to_string())).await;
    let response = reqwest::get(format!("{}/fetch/nonsense", base)).await?;

    assert_eq!(response.status(), 404);
    Ok(())
}

#[tokio::test]
async fn test_health_probe() -> Result<()> {
    let base = spawn_app(test_config("http://127.0.0.1:9".to_string())).await;
    let response = reqwest::get(format!("{}/health", base)).await?;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}
