#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
    Router,
};
use policynth_api::{app, Settings};

pub const TEST_TOKEN: &str = "16bf0d621ee347f1a4b56589f04b1d3430e0b93e3a4faa109f64b4789400e9d8";
pub const RUN_PATH: &str = "/api/v1/hackrx/run";

pub fn test_app() -> Router {
    app(Settings::new(TEST_TOKEN))
}

pub fn bearer() -> String {
    format!("Bearer {}", TEST_TOKEN)
}

pub fn authorized_post(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(RUN_PATH)
        .header("authorization", bearer())
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
