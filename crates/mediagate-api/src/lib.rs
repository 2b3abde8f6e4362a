//! Mediagate HTTP API
//!
//! One upload endpoint per media category. Each upload is sniffed, checked
//! against the category allow-list and, only when accepted, written to
//! S3-compatible storage.

pub mod api_doc;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod utils;
