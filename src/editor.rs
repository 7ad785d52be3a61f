//! The markdown todo-list editor.
//!
//! Pure text transformations over a note's content: flipping a checklist
//! line's completion marker in place, and splicing a newly authored checklist
//! line next to its logical section. The document is an ordered sequence of
//! lines rejoined with `\n`; neither operation reorders or rewrites any line
//! it does not touch. Persistence is the caller's responsibility.

use crate::checklist::{self, DONE_MARKER, PENDING_MARKER};
use crate::error::{Error, Result};

/// Result of completing a todo line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// The full reassembled document text.
    pub content: String,
    /// Index of the line that was flipped, for confirmation to the caller.
    pub line_index: usize,
}

/// Result of inserting a todo line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertOutcome {
    /// The full reassembled document text.
    pub content: String,
    /// Index at which the new line was spliced in.
    pub line_index: usize,
}

/// Mark the first matching pending todo line as done.
///
/// Scans lines in order and flips the first line whose trimmed text equals
/// the trimmed `target_text` and which still carries the `[ ]` marker. Only
/// that one line is mutated; the first occurrence of `[ ]` within it becomes
/// `[x]`. First match wins.
///
/// # Errors
///
/// Returns [`Error::TodoNotFound`] if no line satisfies both conditions.
/// An already-completed line fails the same way, since its `[ ]` is gone.
pub fn toggle_todo(content: &str, target_text: &str) -> Result<ToggleOutcome> {
    let target = target_text.trim();
    let mut lines: Vec<String> = content.lines().map(ToString::to_string).collect();

    let matched = lines
        .iter()
        .position(|line| line.trim() == target && line.contains(PENDING_MARKER));

    match matched {
        Some(index) => {
            lines[index] = lines[index].replacen(PENDING_MARKER, DONE_MARKER, 1);
            Ok(ToggleOutcome { content: lines.join("\n"), line_index: index })
        }
        None => Err(Error::TodoNotFound(target.to_string())),
    }
}

/// Insert a new todo line at its logical place in the document.
///
/// The item text is normalized first (see [`checklist::normalize_item`]),
/// then placed:
///
/// 1. An empty or whitespace-only document becomes a single blank line
///    followed by the item.
/// 2. If the document has checklist lines, the item goes directly after the
///    last one, whether or not a header owns that run of todos.
/// 3. With no checklist lines anywhere, the item goes after the first
///    header's first body line, clamped to the document end; with no headers
///    either, it is appended at the end.
pub fn insert_todo(content: &str, item_text: &str) -> InsertOutcome {
    let item = checklist::normalize_item(item_text);

    if content.trim().is_empty() {
        // Deliberate special case: the item becomes the whole document,
        // prefixed by one blank line.
        return InsertOutcome { content: format!("\n{item}"), line_index: 1 };
    }

    let mut lines: Vec<&str> = content.lines().collect();

    let mut first_checklist = None;
    let mut last_checklist = None;
    for (i, line) in lines.iter().enumerate() {
        if checklist::is_checklist_line(line) {
            if first_checklist.is_none() {
                first_checklist = Some(i);
            }
            last_checklist = Some(i);
        }
    }

    // The section that owns the todo run: nearest header above the first
    // checklist line, if any.
    let owner_header = first_checklist
        .and_then(|start| lines[..start].iter().rposition(|line| is_header(line)));

    let index = match (owner_header, last_checklist) {
        // Existing todo run, with or without an owning header: append to it.
        (_, Some(last)) => last + 1,
        // Owning header but no checklist beneath it. Unreachable as long as
        // owner_header is derived from a found checklist line; kept so a
        // violated precondition still lands somewhere sensible.
        (Some(header), None) => (header + 2).min(lines.len()),
        // No todos anywhere: after the first header's body line, else at end.
        (None, None) => lines
            .iter()
            .position(|line| is_header(line))
            .map_or(lines.len(), |h| (h + 2).min(lines.len())),
    };

    lines.insert(index, &item);
    InsertOutcome { content: lines.join("\n"), line_index: index }
}

/// Whether a line is a markdown ATX header of any level.
fn is_header(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
