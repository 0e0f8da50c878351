//! `docforge-client`: HTTP binding to the document-recognition backend.
//!
//! Three operations, all pass-throughs: multipart upload, text search, and
//! aggregate stats. Wire shapes mirror the backend's JSON bodies; response
//! fields the client does not display are ignored.

use anyhow::Context;
use docforge_core::{DocForgeError, SearchHit, SelectedFile, StatsSnapshot, UploadResult};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

/// Default origin for a locally-running recognition backend.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// HTTP client for the document-recognition service.
pub struct RecognitionClient {
    http: Client,
    base_url: String,
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Search response envelope.
#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

impl RecognitionClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Swap the underlying HTTP client, e.g. to apply a request timeout.
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Upload a validated file for recognition.
    ///
    /// The binary payload travels as the multipart field `file`, keeping the
    /// original filename and declared media type.
    pub async fn upload(&self, file: &SelectedFile) -> Result<UploadResult, DocForgeError> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, filename = %file.filename, media_type = %file.media_type, "Uploading document");

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.filename.clone())
            .mime_str(&file.media_type)
            .context("invalid media type for multipart part")?;
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(format!("{}/documents/upload/", self.base_url))
            .multipart(form)
            .send()
            .await
            .context("upload request failed")?;

        Self::decode(response).await
    }

    /// Search stored documents. The query travels URL-encoded as `q`.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>, DocForgeError> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, query, "Searching documents");

        let url = format!(
            "{}/documents/search/?q={}",
            self.base_url,
            urlencoding::encode(query)
        );
        let response = self
            .http
            .get(url)
            .send()
            .await
            .context("search request failed")?;

        let envelope: SearchResponse = Self::decode(response).await?;
        Ok(envelope.results)
    }

    /// Fetch aggregate counts by document type.
    pub async fn stats(&self) -> Result<StatsSnapshot, DocForgeError> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, "Fetching document stats");

        let response = self
            .http
            .get(format!("{}/documents/stats/", self.base_url))
            .send()
            .await
            .context("stats request failed")?;

        Self::decode(response).await
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, DocForgeError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DocForgeError::Backend {
                status: status.as_u16(),
                body,
            });
        }
        let value = response
            .json()
            .await
            .context("failed to decode backend response")?;
        Ok(value)
    }
}

impl Default for RecognitionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Multipart, Query};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use docforge_core::DocumentId;
    use std::collections::HashMap;

    async fn spawn_backend(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client(base_url: &str) -> RecognitionClient {
        RecognitionClient::new().with_base_url(base_url)
    }

    async fn upload_route(mut multipart: Multipart) -> Json<serde_json::Value> {
        let mut field_name = String::new();
        let mut filename = String::new();
        let mut size = 0;
        while let Some(field) = multipart.next_field().await.unwrap() {
            field_name = field.name().unwrap_or_default().to_string();
            filename = field.file_name().unwrap_or_default().to_string();
            size = field.bytes().await.unwrap().len();
        }
        Json(serde_json::json!({
            "message": "File uploaded and processed successfully",
            "document_id": "doc-1",
            "extracted_text": format!("{}:{}:{}", field_name, filename, size),
            "metadata": { "pages": "2" },
        }))
    }

    #[tokio::test]
    async fn test_upload_sends_multipart_file_field() {
        let base = spawn_backend(Router::new().route("/documents/upload/", post(upload_route))).await;

        let file = SelectedFile::new("scan.pdf", "application/pdf", vec![0u8; 16]);
        let result = client(&base).upload(&file).await.unwrap();

        assert_eq!(result.extracted_text, "file:scan.pdf:16");
        assert_eq!(result.metadata.get("pages").map(String::as_str), Some("2"));
        assert_eq!(result.document_id.as_deref(), Some("doc-1"));
    }

    #[tokio::test]
    async fn test_upload_metadata_defaults_empty_when_absent() {
        let base = spawn_backend(Router::new().route(
            "/documents/upload/",
            post(|_: Multipart| async {
                Json(serde_json::json!({ "extracted_text": "Hello" }))
            }),
        ))
        .await;

        let file = SelectedFile::new("scan.png", "image/png", vec![1, 2, 3]);
        let result = client(&base).upload(&file).await.unwrap();

        assert_eq!(result.extracted_text, "Hello");
        assert!(result.metadata.is_empty());
    }

    #[tokio::test]
    async fn test_search_query_survives_encoding() {
        let base = spawn_backend(Router::new().route(
            "/documents/search/",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let q = params.get("q").cloned().unwrap_or_default();
                Json(serde_json::json!({
                    "results": [{ "id": 1, "file": "/f1.pdf", "text": q }]
                }))
            }),
        ))
        .await;

        let hits = client(&base).search("invoice #42 & receipts").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, DocumentId::Number(1));
        assert_eq!(hits[0].text, "invoice #42 & receipts");
    }

    #[tokio::test]
    async fn test_stats_accepts_null_document_type() {
        let base = spawn_backend(Router::new().route(
            "/documents/stats/",
            get(|| async {
                Json(serde_json::json!({
                    "total_documents": 5,
                    "document_types": [{ "document_type": null, "count": 5 }]
                }))
            }),
        ))
        .await;

        let snapshot = client(&base).stats().await.unwrap();
        assert_eq!(snapshot.total_documents, 5);
        assert_eq!(snapshot.document_types.len(), 1);
        assert!(snapshot.document_types[0].document_type.is_none());
    }

    #[tokio::test]
    async fn test_non_success_status_is_a_backend_error() {
        let base = spawn_backend(Router::new().route(
            "/documents/stats/",
            get(|| async { (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        ))
        .await;

        let err = client(&base).stats().await.unwrap_err();
        match err {
            DocForgeError::Backend { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected backend error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_transport_error() {
        // Port 1 is reserved and closed; the connection is refused.
        let err = client("http://127.0.0.1:1")
            .stats()
            .await
            .unwrap_err();
        assert!(!err.is_validation());
        assert!(matches!(err, DocForgeError::Other(_)));
    }
}
