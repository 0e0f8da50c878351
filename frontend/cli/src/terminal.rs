//! Terminal Notifier
//!
//! Prints toasts as stderr lines for one-shot commands.

use async_trait::async_trait;

use docforge_core::{NoticeKind, Notifier};

/// Writes each notice to stderr, prefixed with its kind. Stdout stays
/// reserved for command output.
pub struct TerminalNotifier;

#[async_trait]
impl Notifier for TerminalNotifier {
    fn name(&self) -> &str {
        "terminal"
    }

    async fn notify(&self, kind: NoticeKind, message: &str) {
        eprintln!("[{}] {}", kind, message);
    }
}
