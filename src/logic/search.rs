//! Search Logic
//!
//! Pure functions for filtering documents and folders by search queries.
//! Supports wildcard patterns using the glob crate.

use crate::domain::Document;

/// Match a search query against a piece of text using wildcard patterns
///
/// # Pattern Rules
/// - "*" matches any sequence of characters, "?" a single character
/// - Matches are case-insensitive
/// - A query without wildcards matches as a substring
///
/// # Examples
/// ```
/// use docdeck::logic::search::search_matches;
///
/// assert!(search_matches("manual", "Quality Manual"));
/// assert!(search_matches("q*manual", "Quality Manual"));
/// assert!(search_matches("audit", "Finance/Internal Audit"));
/// assert!(!search_matches("q*z", "Quality Manual"));
/// ```
pub fn search_matches(query: &str, text: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }

    let query_lower = query.to_lowercase();
    let text_lower = text.to_lowercase();

    let has_wildcards = query_lower.contains('*') || query_lower.contains('?');
    if has_wildcards {
        if let Ok(pattern) = glob::Pattern::new(&query_lower) {
            if pattern.matches(&text_lower) {
                return true;
            }
            // Allow a pattern to match inside the text as well
            if let Ok(inner) = glob::Pattern::new(&format!("*{}*", query_lower)) {
                return inner.matches(&text_lower);
            }
            return false;
        }
    }

    // Plain query (or invalid glob): substring match
    text_lower.contains(&query_lower)
}

/// Whether a document matches on title, tags, uploader, type or department
pub fn document_matches(query: &str, doc: &Document) -> bool {
    if query.trim().is_empty() {
        return true;
    }

    search_matches(query, &doc.title)
        || doc.tags.iter().any(|tag| search_matches(query, tag))
        || search_matches(query, &doc.uploaded_by)
        || search_matches(query, &doc.doc_type)
        || search_matches(query, &doc.department)
}

/// Keep the documents that match `query`, preserving order
pub fn filter_documents<'a>(docs: Vec<&'a Document>, query: &str) -> Vec<&'a Document> {
    if query.trim().is_empty() {
        return docs;
    }

    docs.into_iter()
        .filter(|doc| document_matches(query, doc))
        .collect()
}
