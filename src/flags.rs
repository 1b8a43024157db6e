//! Persisted one-way session flags.
//!
//! The assistant runs new visitors through a short profile interview. Once
//! it signals that the interview is done, the client remembers that across
//! sessions and asks the server to skip the questions from then on. The
//! latch is monotonic: there is deliberately no reset path.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::paths;

/// File name of the latch under the state directory.
const FLAG_FILE: &str = "profile_complete";

/// Stored value. Anything else (or an absent file) reads as "not complete".
const FLAG_VALUE: &str = "true";

// TODO: replace the substring heuristic with a structured `done` field once
// the chat API exposes one.
const COMPLETION_MARKERS: &[&str] = &["All set,", "How can I help"];

/// Returns `true` if assistant content signals that the profile interview
/// is finished.
pub fn matches_completion_marker(content: &str) -> bool {
    COMPLETION_MARKERS
        .iter()
        .any(|marker| content.contains(marker))
}

/// The persisted `profile_complete` latch.
///
/// Read before every submit to decide whether the request should carry
/// `skipProfile`; written (once) after a reply matches a completion marker.
pub struct ProfileFlag {
    path: PathBuf,
}

impl ProfileFlag {
    /// Creates a flag handle at the default state-dir location.
    pub fn new() -> Self {
        Self {
            path: paths::state_dir().join(FLAG_FILE),
        }
    }

    /// Creates a flag handle at an explicit path.
    pub const fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the latch. An absent file or any unexpected content is `false`.
    pub fn is_complete(&self) -> bool {
        fs::read_to_string(&self.path).is_ok_and(|content| content.trim() == FLAG_VALUE)
    }

    /// Sets the latch. Idempotent; there is no way to unset it.
    pub fn mark_complete(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create state directory: {}", parent.display())
            })?;
        }

        crate::fs::atomic_write(&self.path, FLAG_VALUE)
            .with_context(|| format!("Failed to write flag file: {}", self.path.display()))
    }
}

impl Default for ProfileFlag {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn flag_in(temp_dir: &TempDir) -> ProfileFlag {
        ProfileFlag::at(temp_dir.path().join("state").join(FLAG_FILE))
    }

    #[test]
    fn test_absent_file_reads_false() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!flag_in(&temp_dir).is_complete());
    }

    #[test]
    fn test_mark_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let flag = flag_in(&temp_dir);

        flag.mark_complete().unwrap();

        assert!(flag.is_complete());
    }

    #[test]
    fn test_mark_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let flag = flag_in(&temp_dir);

        flag.mark_complete().unwrap();
        flag.mark_complete().unwrap();

        assert!(flag.is_complete());
    }

    #[test]
    fn test_unexpected_content_reads_false() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(FLAG_FILE);
        std::fs::write(&path, "yes").unwrap();

        assert!(!ProfileFlag::at(path).is_complete());
    }

    #[test]
    fn test_stored_value_is_the_literal_string_true() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(FLAG_FILE);
        let flag = ProfileFlag::at(path.clone());

        flag.mark_complete().unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "true");
    }

    #[test]
    fn test_completion_markers() {
        assert!(matches_completion_marker("All set, your profile is ready."));
        assert!(matches_completion_marker("How can I help you today?"));
        assert!(matches_completion_marker(
            "Thanks! All set, ask me anything."
        ));
        assert!(!matches_completion_marker("Tell me about your team size."));
        // Case-sensitive, as in the original widget
        assert!(!matches_completion_marker("all set, done"));
    }
}
