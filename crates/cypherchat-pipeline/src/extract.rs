//! Extraction of a single Cypher query from raw model output.
//!
//! Models either answer with a fenced code block (optionally tagged with a
//! language) or with the bare query, sometimes wrapped in quotes. Both shapes
//! are handled by a small two-branch parser; query syntax is never checked
//! here, a malformed query only surfaces when the database runs it.

const FENCE: &str = "```";

/// A query pulled out of model output, tagged by the branch that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedQuery {
    /// Content of the first complete fenced block, trimmed
    Fenced(String),
    /// Whole response with fences removed and one pair of quotes stripped
    Unfenced(String),
}

impl ExtractedQuery {
    pub fn as_str(&self) -> &str {
        match self {
            ExtractedQuery::Fenced(query) | ExtractedQuery::Unfenced(query) => query,
        }
    }

    pub fn into_query(self) -> String {
        match self {
            ExtractedQuery::Fenced(query) | ExtractedQuery::Unfenced(query) => query,
        }
    }

    pub fn is_fenced(&self) -> bool {
        matches!(self, ExtractedQuery::Fenced(_))
    }
}

/// Extract the query from raw model output
pub fn extract_query(raw: &str) -> ExtractedQuery {
    match find_fenced_block(raw) {
        Some(content) => ExtractedQuery::Fenced(content.trim().to_string()),
        None => ExtractedQuery::Unfenced(strip_unfenced(raw)),
    }
}

/// Leftmost block of the form: fence, optional word-character tag, newline,
/// shortest content, fence.
fn find_fenced_block(raw: &str) -> Option<&str> {
    let mut search_from = 0;

    while let Some(offset) = raw[search_from..].find(FENCE) {
        let open = search_from + offset;
        if let Some(content) = block_at(raw, open) {
            return Some(content);
        }
        // Advance one character so overlapping fences ("````") are tried too
        search_from = open + 1;
    }

    None
}

fn block_at(raw: &str, open: usize) -> Option<&str> {
    let after_fence = &raw[open + FENCE.len()..];
    let tag_len: usize = after_fence
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .map(char::len_utf8)
        .sum();

    let body = after_fence[tag_len..].strip_prefix('\n')?;
    let close = body.find(FENCE)?;
    Some(&body[..close])
}

fn strip_unfenced(raw: &str) -> String {
    let query = raw.replace(FENCE, "");
    let query = query.trim();

    for quote in ['"', '\''] {
        if query.starts_with(quote) && query.ends_with(quote) {
            // A lone quote character is both prefix and suffix
            let inner = if query.len() > quote.len_utf8() {
                &query[quote.len_utf8()..query.len() - quote.len_utf8()]
            } else {
                ""
            };
            return inner.trim().to_string();
        }
    }

    query.to_string()
}
