pub mod error;
pub mod notify;
pub mod state;
pub mod types;

pub use error::DocForgeError;
pub use notify::{MemoryNotifier, Notice, NoticeKind, Notifier};
pub use state::ViewState;
pub use types::{
    DocumentId, SearchHit, SelectedFile, StatsSnapshot, TypeCount, UploadResult,
    ALLOWED_MEDIA_TYPES,
};
