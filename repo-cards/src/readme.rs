//! Marked-region updates of markdown documents.
//!
//! The generated section lives between two HTML comments:
//!
//! ```text
//! <!-- repo-cards:start -->
//! ...generated content...
//! <!-- repo-cards:end -->
//! ```
//!
//! The region runs from the first opening marker to the nearest closing marker
//! after it. Everything outside the region is left untouched.

use regex::{NoExpand, Regex};
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{debug, info};

/// Opening marker of the generated region.
pub const OPEN_MARKER: &str = "<!-- repo-cards:start -->";

/// Closing marker of the generated region.
pub const CLOSE_MARKER: &str = "<!-- repo-cards:end -->";

/// Errors that can occur while updating a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to read or write the document.
    #[error("Failed to access document '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

static REGION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        "(?s){}.*?{}",
        regex::escape(OPEN_MARKER),
        regex::escape(CLOSE_MARKER)
    );
    Regex::new(&pattern).expect("valid regex")
});

/// Wraps `content` in the region markers.
#[must_use]
pub fn marked_region(content: &str) -> String {
    format!("{OPEN_MARKER}\n{content}\n{CLOSE_MARKER}")
}

/// Replaces the marked region of `document` with `content`, or appends a new
/// region when none exists.
#[must_use]
pub fn splice_region(document: &str, content: &str) -> String {
    let region = marked_region(content);

    if REGION_RE.is_match(document) {
        return REGION_RE.replace(document, NoExpand(&region)).into_owned();
    }

    if document.is_empty() {
        format!("{region}\n")
    } else if document.ends_with('\n') {
        format!("{document}\n{region}\n")
    } else {
        format!("{document}\n\n{region}\n")
    }
}

/// Splices `content` into the document at `path`, creating it if missing.
///
/// # Errors
///
/// Returns [`DocumentError`] if the document can't be read or written.
pub fn update_document(path: &Path, content: &str) -> Result<(), DocumentError> {
    let existing = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "Document not found, creating");
            String::new()
        }
        Err(e) => {
            return Err(DocumentError::IoError {
                path: path.display().to_string(),
                source: e,
            })
        }
    };

    let updated = splice_region(&existing, content);
    std::fs::write(path, updated).map_err(|e| DocumentError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    info!(path = %path.display(), "Updated document section");
    Ok(())
}

/// Writes `content` as a standalone document, replacing any previous file.
///
/// # Errors
///
/// Returns [`DocumentError`] if the file can't be written.
pub fn write_section(path: &Path, content: &str) -> Result<(), DocumentError> {
    std::fs::write(path, content).map_err(|e| DocumentError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    info!(path = %path.display(), "Wrote section file");
    Ok(())
}
