//! Pure projections of view state into displayable structures.
//!
//! No independent state and no network access; the front ends decide how the
//! returned lines are drawn.

use docforge_core::{SearchHit, StatsSnapshot, UploadResult};

/// Longest excerpt shown per search hit before truncation.
const EXCERPT_CHARS: usize = 100;

/// Label shown when the backend has no type for a document group.
const UNKNOWN_TYPE_LABEL: &str = "Unknown";

/// Extracted text plus key-sorted metadata rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadView {
    pub extracted_text: String,
    pub metadata_rows: Vec<String>,
}

/// A search hit reduced to its display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitView {
    pub id: String,
    pub file: String,
    pub excerpt: String,
}

/// Stats reduced to display lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub total: u64,
    pub type_rows: Vec<String>,
}

pub fn upload_view(result: &UploadResult) -> UploadView {
    // Metadata arrives as an unordered map; sort the rows so repeated renders
    // of the same result are identical.
    let mut rows: Vec<String> = result
        .metadata
        .iter()
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect();
    rows.sort();
    UploadView {
        extracted_text: result.extracted_text.clone(),
        metadata_rows: rows,
    }
}

pub fn hit_view(hit: &SearchHit) -> HitView {
    HitView {
        id: hit.id.to_string(),
        file: hit.file.clone(),
        excerpt: excerpt(&hit.text),
    }
}

pub fn stats_view(snapshot: &StatsSnapshot) -> StatsView {
    let type_rows = snapshot
        .document_types
        .iter()
        .map(|entry| {
            format!(
                "{} - {} documents",
                type_label(entry.document_type.as_deref()),
                entry.count
            )
        })
        .collect();
    StatsView {
        total: snapshot.total_documents,
        type_rows,
    }
}

/// First 100 characters of the text, with a trailing ellipsis when longer.
pub fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_CHARS {
        return text.to_string();
    }
    let head: String = text.chars().take(EXCERPT_CHARS).collect();
    format!("{}...", head)
}

fn type_label(document_type: Option<&str>) -> &str {
    match document_type {
        Some(label) if !label.is_empty() => label,
        _ => UNKNOWN_TYPE_LABEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docforge_core::{DocumentId, TypeCount};
    use std::collections::HashMap;

    #[test]
    fn test_excerpt_short_text_unchanged() {
        let text = "a".repeat(100);
        assert_eq!(excerpt(&text), text);
    }

    #[test]
    fn test_excerpt_truncates_past_100_chars() {
        let text = "a".repeat(101);
        let shown = excerpt(&text);
        assert_eq!(shown.chars().count(), 103);
        assert!(shown.ends_with("..."));
        assert!(shown.starts_with(&"a".repeat(100)));
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        // 120 two-byte characters; byte-indexed truncation would split one.
        let text = "é".repeat(120);
        let shown = excerpt(&text);
        assert_eq!(shown.chars().count(), 103);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn test_hit_view_renders_numeric_id() {
        let hit = SearchHit {
            id: DocumentId::Number(1),
            file: "/f1.pdf".into(),
            text: "Invoice number 123".into(),
        };
        let view = hit_view(&hit);
        assert_eq!(view.id, "1");
        assert_eq!(view.file, "/f1.pdf");
        assert_eq!(view.excerpt, "Invoice number 123");
    }

    #[test]
    fn test_stats_view_defaults_missing_label_to_unknown() {
        let snapshot = StatsSnapshot {
            total_documents: 5,
            document_types: vec![
                TypeCount { document_type: None, count: 5 },
                TypeCount { document_type: Some(String::new()), count: 2 },
                TypeCount { document_type: Some("invoice".into()), count: 1 },
            ],
        };
        let view = stats_view(&snapshot);
        assert_eq!(view.total, 5);
        assert_eq!(
            view.type_rows,
            vec![
                "Unknown - 5 documents",
                "Unknown - 2 documents",
                "invoice - 1 documents",
            ]
        );
    }

    #[test]
    fn test_upload_view_sorts_metadata_rows() {
        let mut metadata = HashMap::new();
        metadata.insert("pages".to_string(), "2".to_string());
        metadata.insert("author".to_string(), "unknown".to_string());
        let result = UploadResult {
            extracted_text: "Hello".into(),
            metadata,
            document_id: None,
        };
        let view = upload_view(&result);
        assert_eq!(view.extracted_text, "Hello");
        assert_eq!(view.metadata_rows, vec!["author: unknown", "pages: 2"]);
    }
}
