use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Media types the recognition backend accepts for upload.
pub const ALLOWED_MEDIA_TYPES: [&str; 3] = ["image/png", "image/jpeg", "application/pdf"];

/// A user-chosen file pending upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub filename: String,
    /// Declared media type, validated against [`ALLOWED_MEDIA_TYPES`] before
    /// the file is ever stored in view state.
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(
        filename: impl Into<String>,
        media_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            filename: filename.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Whether a declared media type is on the upload allow-list.
    pub fn is_supported(media_type: &str) -> bool {
        ALLOWED_MEDIA_TYPES.contains(&media_type)
    }
}

/// Extracted text and metadata from the most recent successful upload.
///
/// Replaced wholesale per upload; never partially updated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    #[serde(default)]
    pub extracted_text: String,
    /// Empty when the backend reports no metadata for the document.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    /// Id the backend assigned to the stored document.
    #[serde(default)]
    pub document_id: Option<String>,
}

/// A document id as the backend serializes it: integer row ids and UUID
/// strings both appear on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentId {
    Number(i64),
    Text(String),
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentId::Number(n) => write!(f, "{}", n),
            DocumentId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One document returned by a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: DocumentId,
    /// URL reference to the stored file.
    pub file: String,
    pub text: String,
}

/// Aggregate document counts by type.
///
/// Replaced wholesale per fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total_documents: u64,
    #[serde(default)]
    pub document_types: Vec<TypeCount>,
}

/// Count of stored documents sharing one type label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    /// `None` when the backend never classified the documents.
    pub document_type: Option<String>,
    pub count: u64,
}
