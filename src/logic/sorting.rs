//! Sorting comparison logic
//!
//! Pure functions for ordering documents by a sort key and direction.
//! Sorting never mutates its input and is stable: documents with equal keys
//! keep their original relative order in both directions.

use crate::domain::{Document, SecurityLevel};
use crate::logic::formatting::parse_instant;
use crate::{SortDirection, SortKey};
use std::cmp::Ordering;

/// Rank used when ordering by security level
///
/// Public=1, Restricted=2, Confidential=3, Top Secret=4. Missing levels and
/// levels outside that table take Public's rank.
///
/// # Examples
/// ```
/// use docdeck::domain::SecurityLevel;
/// use docdeck::logic::sorting::security_rank;
///
/// assert_eq!(security_rank(Some(SecurityLevel::TopSecret)), 4);
/// assert_eq!(security_rank(None), 1);
/// ```
pub fn security_rank(level: Option<SecurityLevel>) -> u8 {
    match level {
        Some(SecurityLevel::Restricted) => 2,
        Some(SecurityLevel::Confidential) => 3,
        Some(SecurityLevel::TopSecret) => 4,
        _ => 1,
    }
}

/// Compare two record timestamps
///
/// Parseable timestamps compare as instants. Unparseable ones compare equal
/// to each other and greater than every parseable one, so they come last in
/// ascending order and first once `compare_documents` flips for descending.
pub fn compare_dates(a: &str, b: &str) -> Ordering {
    match (parse_instant(a), parse_instant(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Compare two documents according to the given key and direction
///
/// # Sort Rules
/// - Text keys (title, uploader, status) compare case-insensitively
/// - Date keys compare as instants (see `compare_dates`)
/// - Security level compares by `security_rank`
/// - Descending flips the comparison result
pub fn compare_documents(
    a: &Document,
    b: &Document,
    key: SortKey,
    direction: SortDirection,
) -> Ordering {
    let result = match key {
        SortKey::Title => compare_text(&a.title, &b.title),
        SortKey::UploadedBy => compare_text(&a.uploaded_by, &b.uploaded_by),
        SortKey::ApprovalStatus => {
            compare_text(a.approval_status.as_str(), b.approval_status.as_str())
        }
        SortKey::SecurityLevel => {
            security_rank(a.security_level).cmp(&security_rank(b.security_level))
        }
        SortKey::UploadedAt => compare_dates(&a.uploaded_at, &b.uploaded_at),
        SortKey::LastModified => compare_dates(&a.last_modified, &b.last_modified),
    };

    if direction.is_descending() {
        result.reverse()
    } else {
        result
    }
}

/// Order borrowed documents in place (stable)
pub fn sort_document_refs(docs: &mut [&Document], key: SortKey, direction: SortDirection) {
    docs.sort_by(|a, b| compare_documents(a, b, key, direction));
}

/// Return a new, sorted copy of `docs`
pub fn sort_documents(docs: &[Document], key: SortKey, direction: SortDirection) -> Vec<Document> {
    let mut refs: Vec<&Document> = docs.iter().collect();
    sort_document_refs(&mut refs, key, direction);
    refs.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccessType, ApprovalStatus};

    fn make_doc(id: &str, title: &str) -> Document {
        Document {
            id: id.to_string(),
            title: title.to_string(),
            doc_type: "Policy".to_string(),
            file_type: "pdf".to_string(),
            file_size: "1 MB".to_string(),
            department: "Quality".to_string(),
            uploaded_by: "Alex".to_string(),
            uploaded_at: "2024-01-01".to_string(),
            last_modified: "2024-01-01".to_string(),
            access_type: AccessType::Public,
            approval_status: ApprovalStatus::Pending,
            security_level: None,
            tags: vec![],
            approver: None,
            assigned_to: None,
            assigned_date: None,
            expiry_date: None,
        }
    }

    fn ids(docs: &[Document]) -> Vec<&str> {
        docs.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_title_ascending_and_descending() {
        let docs = vec![make_doc("a", "Zeta"), make_doc("b", "Alpha")];

        let asc = sort_documents(&docs, SortKey::Title, SortDirection::Asc);
        assert_eq!(ids(&asc), vec!["b", "a"]);

        let desc = sort_documents(&docs, SortKey::Title, SortDirection::Desc);
        assert_eq!(ids(&desc), vec!["a", "b"]);
    }

    #[test]
    fn test_title_is_case_insensitive() {
        let docs = vec![make_doc("a", "beta"), make_doc("b", "Alpha")];
        let sorted = sort_documents(&docs, SortKey::Title, SortDirection::Asc);
        assert_eq!(ids(&sorted), vec!["b", "a"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let docs = vec![make_doc("a", "Zeta"), make_doc("b", "Alpha")];
        let _ = sort_documents(&docs, SortKey::Title, SortDirection::Asc);
        assert_eq!(ids(&docs), vec!["a", "b"]);
    }

    #[test]
    fn test_security_rank_table() {
        assert_eq!(security_rank(Some(SecurityLevel::Public)), 1);
        assert_eq!(security_rank(Some(SecurityLevel::Restricted)), 2);
        assert_eq!(security_rank(Some(SecurityLevel::Confidential)), 3);
        assert_eq!(security_rank(Some(SecurityLevel::TopSecret)), 4);
        // Not in the table: falls back to Public
        assert_eq!(security_rank(Some(SecurityLevel::HighlyConfidential)), 1);
        assert_eq!(security_rank(None), 1);
    }

    #[test]
    fn test_security_level_ordering() {
        let mut secret = make_doc("s", "S");
        secret.security_level = Some(SecurityLevel::TopSecret);
        let mut restricted = make_doc("r", "R");
        restricted.security_level = Some(SecurityLevel::Restricted);
        let unset = make_doc("u", "U");

        let docs = vec![secret, restricted, unset];
        let sorted = sort_documents(&docs, SortKey::SecurityLevel, SortDirection::Asc);
        assert_eq!(ids(&sorted), vec!["u", "r", "s"]);
    }

    #[test]
    fn test_dates_compare_as_instants() {
        let mut older = make_doc("old", "Old");
        older.uploaded_at = "2023-12-31T23:59:59Z".to_string();
        let mut newer = make_doc("new", "New");
        newer.uploaded_at = "2024-01-01".to_string();

        assert_eq!(
            compare_documents(&older, &newer, SortKey::UploadedAt, SortDirection::Asc),
            Ordering::Less
        );
        assert_eq!(
            compare_documents(&older, &newer, SortKey::UploadedAt, SortDirection::Desc),
            Ordering::Greater
        );
    }

    #[test]
    fn test_invalid_dates_do_not_panic_and_group_together() {
        let mut bad1 = make_doc("bad1", "B1");
        bad1.last_modified = "garbage".to_string();
        let mut good = make_doc("good", "G");
        good.last_modified = "2024-05-01".to_string();
        let mut bad2 = make_doc("bad2", "B2");
        bad2.last_modified = String::new();

        assert_eq!(compare_dates("garbage", ""), Ordering::Equal);

        let docs = vec![bad1, good, bad2];
        let sorted = sort_documents(&docs, SortKey::LastModified, SortDirection::Asc);
        assert_eq!(ids(&sorted), vec!["good", "bad1", "bad2"]);
    }

    #[test]
    fn test_status_sorts_by_label() {
        let mut approved = make_doc("ap", "A");
        approved.approval_status = ApprovalStatus::Approved;
        let mut revision = make_doc("rv", "R");
        revision.approval_status = ApprovalStatus::Revision;
        let pending = make_doc("pe", "P");

        let docs = vec![revision, pending, approved];
        let sorted = sort_documents(&docs, SortKey::ApprovalStatus, SortDirection::Asc);
        assert_eq!(ids(&sorted), vec!["ap", "pe", "rv"]);
    }

    #[test]
    fn test_equal_keys_keep_original_order_in_both_directions() {
        let docs = vec![
            make_doc("1", "Same"),
            make_doc("2", "Other"),
            make_doc("3", "same"),
        ];

        let asc = sort_documents(&docs, SortKey::Title, SortDirection::Asc);
        assert_eq!(ids(&asc), vec!["2", "1", "3"]);

        let desc = sort_documents(&docs, SortKey::Title, SortDirection::Desc);
        assert_eq!(ids(&desc), vec!["1", "3", "2"]);
    }
}
