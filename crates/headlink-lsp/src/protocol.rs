use serde::{Deserialize, Serialize};
use tower_lsp::lsp_types::{Range, Url};

/// Command identifiers advertised in the initialize response.
pub const COPY_HEADING_LINK: &str = "headlink/copyHeadingLink";
pub const START_HEADING_SEARCH: &str = "headlink/startHeadingSearch";
pub const SEARCH_HEADINGS: &str = "headlink/searchHeadings";
pub const INSERT_HEADING_LINK: &str = "headlink/insertHeadingLink";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyHeadingLinkParams {
    /// Document the cursor is in
    pub uri: Url,
    /// Zero-based cursor line
    pub line: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyHeadingLinkResult {
    /// Rendered `[[...]]` link for the client to place on the clipboard
    pub link: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartHeadingSearchParams {
    /// The triggering text selection; the flow refuses to start when empty
    pub selection: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHeadingsParams {
    /// The live query, sent on every input change
    pub query: String,
}

/// One search hit. Must not contain UI fields like label or icon.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingMatch {
    pub path: String,
    pub heading_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHeadingsResult {
    pub matches: Vec<HeadingMatch>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertHeadingLinkParams {
    /// Document holding the selection to replace
    pub uri: Url,
    /// The selection range the link is spliced over
    pub range: Range,
    /// Vault-relative path of the selected match
    pub path: Option<String>,
    /// Heading text of the selected match
    pub heading_text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertHeadingLinkResult {
    pub link: String,
}

/// Client-pushed settings under the `headlink` configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSettings {
    pub link_format: Option<String>,
}
