//! Markdown checklist line detection.
//!
//! Two distinct predicates are deliberately kept separate because behavior
//! differs by context: section scans look for a full `- [ ]` / `- [x]` bullet,
//! while pending scans only require the `[ ]` marker somewhere on the line.

use once_cell::sync::Lazy;
use regex::Regex;

/// The pending marker as written in a markdown checklist.
pub const PENDING_MARKER: &str = "[ ]";

/// The done marker as written in a markdown checklist.
pub const DONE_MARKER: &str = "[x]";

/// Matches the pending marker anywhere on a line.
static PENDING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[ \]").unwrap());

/// Completion state of a checklist line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoState {
    /// The item still has an unchecked box.
    Pending,
    /// The item has been checked off.
    Done,
}

/// Whether a line is a checklist bullet, pending or done.
///
/// This is the predicate used when scanning a document for its todo section.
#[must_use]
pub fn is_checklist_line(line: &str) -> bool {
    line.contains("- [ ]") || line.contains("- [x]")
}

/// Whether a line carries an unchecked box anywhere.
///
/// Looser than [`is_checklist_line`]: this is the predicate used when
/// collecting pending todos across note files.
#[must_use]
pub fn is_pending(line: &str) -> bool {
    PENDING_RE.is_match(line)
}

/// Extract the completion state of a line, if it has a state marker at all.
#[must_use]
pub fn state(line: &str) -> Option<TodoState> {
    if line.contains(PENDING_MARKER) {
        Some(TodoState::Pending)
    } else if line.contains(DONE_MARKER) {
        Some(TodoState::Done)
    } else {
        None
    }
}

/// Normalize user-supplied todo text into a full checklist line.
///
/// Plain text gets the `- [ ] ` prefix. Bullet text without a state marker
/// gets `[ ]` injected after the bullet. Text that already carries a bullet
/// and a state marker passes through unchanged.
#[must_use]
pub fn normalize_item(text: &str) -> String {
    let trimmed = text.trim_start();
    if let Some(rest) = trimmed.strip_prefix('-') {
        if trimmed.contains(PENDING_MARKER) || trimmed.contains(DONE_MARKER) {
            text.to_string()
        } else {
            format!("- {PENDING_MARKER} {}", rest.trim_start())
        }
    } else {
        format!("- {PENDING_MARKER} {text}")
    }
}
