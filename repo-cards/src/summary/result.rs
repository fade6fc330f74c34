//! Processing result types.

use std::path::PathBuf;

/// Outcome for a single configured repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingResult {
    /// A card was written.
    Rendered {
        /// Repository name.
        repository: String,
        /// Path of the written card.
        card_path: PathBuf,
    },

    /// The repository was not rendered.
    Skipped {
        /// Repository name.
        repository: String,
        /// Reason for skipping.
        reason: String,
    },
}
