use thiserror::Error;

/// Failure modes of the link flows.
///
/// All are non-fatal and handled at the boundary where they are detected;
/// the `Display` strings are the user-facing notification texts. No
/// variant is retried, and every failure leaves editor state unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// No heading exists at or above the cursor; the copy flow aborts.
    #[error("No heading found above the cursor")]
    NoHeadingFound,

    /// The active document has no resolvable path; the copy flow aborts.
    #[error("The current document has no associated file")]
    NoAssociatedFile,

    /// The search flow was triggered with no selected text; no session opens.
    #[error("Select some text before searching headings")]
    EmptySelection,

    /// A selected search result is missing required fields; the replace
    /// action aborts and the session stays open.
    #[error("The selected result is missing its path or heading")]
    IncompleteMatchResult,

    /// The clipboard sink rejected the write. Logged, never surfaced as a
    /// crash; the link text is lost.
    #[error("Failed to write the link to the clipboard")]
    ClipboardWriteFailed,
}
