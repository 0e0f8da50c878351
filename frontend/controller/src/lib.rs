//! Upload/search/stats controllers for the DocForge client.
//!
//! One [`DocumentController`] instance owns the view state; every mutation
//! happens in its own resolution handler. Validation failures surface as a
//! single notice and never reach the network; backend failures surface as a
//! single notice, go to the diagnostic log, and leave previously fetched
//! state untouched.

pub mod render;

use std::sync::Arc;

use docforge_client::RecognitionClient;
use docforge_core::{DocForgeError, NoticeKind, Notifier, SelectedFile, ViewState};
use tracing::error;

// ---------------------------------------------------------------------------
// User-facing notice copy, fixed per operation
// ---------------------------------------------------------------------------

pub const MSG_INVALID_TYPE: &str = "Invalid file format. Please upload PNG, JPG, or PDF.";
pub const MSG_NO_FILE: &str = "Please select a valid file to upload.";
pub const MSG_UPLOADING: &str = "Uploading file...";
pub const MSG_UPLOAD_OK: &str = "File uploaded and processed successfully!";
pub const MSG_UPLOAD_FAILED: &str = "Failed to upload file. Please try again.";
pub const MSG_EMPTY_QUERY: &str = "Please enter a search query.";
pub const MSG_SEARCH_OK: &str = "Search completed successfully!";
pub const MSG_SEARCH_FAILED: &str = "Failed to search documents.";
pub const MSG_STATS_FAILED: &str = "Failed to fetch document stats.";

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

pub struct DocumentController {
    client: RecognitionClient,
    notifier: Arc<dyn Notifier>,
    state: ViewState,
}

impl DocumentController {
    pub fn new(client: RecognitionClient, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            notifier,
            state: ViewState::new(),
        }
    }

    /// Read access for the render layer.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Validate a candidate file against the upload allow-list.
    ///
    /// A rejected candidate clears any prior selection so a stale file can
    /// never be uploaded by accident.
    pub async fn select_file(&mut self, file: SelectedFile) -> Result<(), DocForgeError> {
        if !SelectedFile::is_supported(&file.media_type) {
            let media_type = file.media_type;
            self.state.selection_cleared();
            self.notifier.notify(NoticeKind::Error, MSG_INVALID_TYPE).await;
            return Err(DocForgeError::UnsupportedFileType(media_type));
        }
        self.state.file_selected(file);
        Ok(())
    }

    /// Upload the current selection and store the recognition result.
    ///
    /// The in-flight flag opens strictly between dispatch and resolution and
    /// closes on success and failure alike. Overlapping uploads cannot occur:
    /// the exclusive borrow serializes calls, and the TUI additionally
    /// ignores the trigger while a request is out.
    pub async fn upload(&mut self) -> Result<(), DocForgeError> {
        let Some(file) = self.state.selected().cloned() else {
            self.notifier.notify(NoticeKind::Error, MSG_NO_FILE).await;
            return Err(DocForgeError::NoFileSelected);
        };

        self.state.upload_started();
        self.notifier.notify(NoticeKind::Info, MSG_UPLOADING).await;

        let outcome = self.client.upload(&file).await;
        self.state.upload_finished();

        match outcome {
            Ok(result) => {
                self.state.upload_succeeded(result);
                self.notifier.notify(NoticeKind::Success, MSG_UPLOAD_OK).await;
                Ok(())
            }
            Err(err) => {
                error!(error = %err, filename = %file.filename, "Upload failed");
                self.notifier.notify(NoticeKind::Error, MSG_UPLOAD_FAILED).await;
                Err(err)
            }
        }
    }

    /// Run a search and replace the hit list.
    pub async fn search(&mut self, query: &str) -> Result<(), DocForgeError> {
        self.state.set_query(query);
        let trimmed = query.trim();
        if trimmed.is_empty() {
            self.notifier.notify(NoticeKind::Error, MSG_EMPTY_QUERY).await;
            return Err(DocForgeError::EmptyQuery);
        }

        match self.client.search(trimmed).await {
            Ok(hits) => {
                self.state.results_replaced(hits);
                self.notifier.notify(NoticeKind::Success, MSG_SEARCH_OK).await;
                Ok(())
            }
            Err(err) => {
                error!(error = %err, query = trimmed, "Search failed");
                self.notifier.notify(NoticeKind::Error, MSG_SEARCH_FAILED).await;
                Err(err)
            }
        }
    }

    /// Fetch aggregate stats and replace the snapshot.
    pub async fn fetch_stats(&mut self) -> Result<(), DocForgeError> {
        match self.client.stats().await {
            Ok(snapshot) => {
                self.state.stats_replaced(snapshot);
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "Stats fetch failed");
                self.notifier.notify(NoticeKind::Error, MSG_STATS_FAILED).await;
                Err(err)
            }
        }
    }
}
