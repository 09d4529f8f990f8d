//! The validation session flow with local and remote documents.

use crate::common::fixtures::{speed_schema, vehicle_page, vehicle_schema};
use crate::common::{init_logging, messages};
use asset_attributes::fetch::{FetchError, FetchResult};
use asset_attributes::schema::Schema;
use asset_attributes::{EngineError, RemoteFetcher, SessionState, ValidationSession};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves fixed pages and records every requested reference.
#[derive(Default)]
struct RecordingFetcher {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl RecordingFetcher {
    fn serve(mut self, reference: &str, text: String) -> Self {
        self.pages.insert(reference.to_string(), text);
        self
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl RemoteFetcher for RecordingFetcher {
    async fn fetch_text(&self, reference: &str) -> FetchResult<String> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(reference.to_string());
        }
        self.pages
            .get(reference)
            .cloned()
            .ok_or_else(|| FetchError::transport(reference, "connection refused"))
    }
}

#[tokio::test]
async fn test_remote_page_flow() {
    init_logging();
    let reference = "https://vendor.example.com/carrier-7";
    let fetcher = RecordingFetcher::default().serve(reference, vehicle_page());

    let mut session = ValidationSession::new();
    assert_eq!(session.load_schema(vehicle_schema()), SessionState::SchemaLoaded);

    let state = session.load_document_from(reference, &fetcher).await.unwrap();
    assert_eq!(state, SessionState::Valid);
    assert_eq!(session.indexable_reference(), Some(reference));
    assert_eq!(fetcher.requests(), vec![reference.to_string()]);
}

#[tokio::test]
async fn test_single_request_without_retry() {
    let fetcher = RecordingFetcher::default();
    let mut session = ValidationSession::new();
    session.load_schema(speed_schema());

    let error = session
        .load_document_from("https://down.example.com", &fetcher)
        .await
        .unwrap_err();
    assert!(matches!(error, EngineError::Fetch(FetchError::Transport { .. })));
    assert_eq!(fetcher.requests().len(), 1);
    assert!(session.errors().is_empty());
    assert!(session.load_error().is_some());
}

#[test]
fn test_invalid_then_schema_swap() {
    let mut session = ValidationSession::new();
    session
        .load_document_text(r#"[{"speed": 3}, {"speed": 12}]"#)
        .unwrap();
    assert_eq!(session.state(), SessionState::DocumentLoaded);

    session.load_schema(speed_schema());
    assert_eq!(session.state(), SessionState::Invalid);
    assert_eq!(
        messages(session.errors()),
        vec!["Object 2: value for 'speed' must be ≤ 10"]
    );

    session.load_schema(vehicle_schema());
    assert_eq!(session.state(), SessionState::Valid);
    assert_eq!(
        session.projected().cloned().map(|p| p.into_value()),
        Some(json!([{}, {}]))
    );
}

#[test]
fn test_empty_schema_leaves_document_unchecked() {
    init_logging();
    let mut session = ValidationSession::new();
    session.load_schema(Schema::from_json("[]").unwrap());
    assert_eq!(session.state(), SessionState::SchemaLoaded);

    let state = session.load_document_text(r#"{"speed": 3}"#).unwrap();
    assert_eq!(state, SessionState::DocumentLoaded);
    assert!(session.errors().is_empty());
    assert!(session.projected().is_none());
}
