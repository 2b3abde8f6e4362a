//! Test helpers: build the router around a chosen storage backend.
//!
//! Run from workspace root: `cargo test -p mediagate-api`.

#![allow(dead_code)]

pub mod fixtures;
pub mod storage;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use mediagate_api::constants;
use mediagate_api::setup::build_app;
use mediagate_core::Config;
use mediagate_storage::Storage;
use std::collections::HashMap;
use std::sync::Arc;

pub const TEST_ENDPOINT: &str = "http://localhost:9000";
pub const TEST_BUCKET: &str = "media-test";

/// API path prefix for tests (e.g. `/api/v0`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_PREFIX, path)
}

/// Config with complete storage settings and any extra variables applied.
pub fn test_config_with(extra: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = [
        ("S3_ENDPOINT", TEST_ENDPOINT),
        ("S3_ACCESS_KEY_ID", "test-key"),
        ("S3_SECRET_ACCESS_KEY", "test-secret"),
        ("S3_BUCKET", TEST_BUCKET),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    for (k, v) in extra {
        vars.insert(k.to_string(), v.to_string());
    }

    Config::from_map(&vars).expect("Invalid test config")
}

pub fn test_config() -> Config {
    test_config_with(&[])
}

pub fn test_server(storage: Arc<dyn Storage>) -> TestServer {
    test_server_with_config(test_config(), storage)
}

pub fn test_server_with_config(config: Config, storage: Arc<dyn Storage>) -> TestServer {
    let (_state, router) = build_app(config, storage).expect("Failed to build app");
    TestServer::new(router.into_make_service()).expect("Failed to create test server")
}

/// Multipart form with a single `file` field.
pub fn file_form(data: Vec<u8>, filename: &str, mime_type: &str) -> MultipartForm {
    let part = Part::bytes(bytes::Bytes::from(data))
        .file_name(filename)
        .mime_type(mime_type);
    MultipartForm::new().add_part("file", part)
}
