//! View State
//!
//! The single owner of everything the panes display.
//!
//! Mutations are discrete named transitions so each one can be exercised
//! without a UI harness. Every transition replaces whole fields; readers
//! never observe a partially-updated view.

use crate::types::{SearchHit, SelectedFile, StatsSnapshot, UploadResult};

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    selected: Option<SelectedFile>,
    upload: Option<UploadResult>,
    query: String,
    results: Vec<SearchHit>,
    stats: Option<StatsSnapshot>,
    uploading: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn upload(&self) -> Option<&UploadResult> {
        self.upload.as_ref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchHit] {
        &self.results
    }

    pub fn stats(&self) -> Option<&StatsSnapshot> {
        self.stats.as_ref()
    }

    /// Whether an upload request is currently out.
    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// A validated file replaces any previous selection.
    pub fn file_selected(&mut self, file: SelectedFile) {
        self.selected = Some(file);
    }

    /// A rejected candidate leaves no file behind.
    pub fn selection_cleared(&mut self) {
        self.selected = None;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Opens the upload window. Paired with [`ViewState::upload_finished`],
    /// which runs on success and failure alike.
    pub fn upload_started(&mut self) {
        self.uploading = true;
    }

    pub fn upload_finished(&mut self) {
        self.uploading = false;
    }

    /// A successful upload replaces the previous result wholesale.
    pub fn upload_succeeded(&mut self, result: UploadResult) {
        self.upload = Some(result);
    }

    /// A successful search replaces the hit list wholesale.
    pub fn results_replaced(&mut self, hits: Vec<SearchHit>) {
        self.results = hits;
    }

    /// A fresh snapshot replaces the previous one wholesale.
    pub fn stats_replaced(&mut self, snapshot: StatsSnapshot) {
        self.stats = Some(snapshot);
    }
}
