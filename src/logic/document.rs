//! Document helpers
//!
//! Pure functions over single documents: folder membership, expiry,
//! values derived from file names, and the field changes behind the
//! approve, rename, notify and upload actions.

use chrono::NaiveDate;

use crate::domain::{AccessType, ApprovalStatus, Approver, Document};
use crate::logic::formatting::parse_instant;
use crate::model::UserProfile;

/// Notification recipient when no target names anyone
pub const DEFAULT_RECIPIENT: &str = "Document owners";

/// Derive a `fileType` from a file name's extension
///
/// # Examples
/// ```
/// use docdeck::logic::document::file_type_from_name;
///
/// assert_eq!(file_type_from_name("Audit Plan.PDF"), "pdf");
/// assert_eq!(file_type_from_name("archive.tar.gz"), "gz");
/// assert_eq!(file_type_from_name("README"), "file");
/// assert_eq!(file_type_from_name(".hidden"), "file");
/// ```
pub fn file_type_from_name(name: &str) -> String {
    match name.trim().rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_lowercase(),
        _ => "file".to_string(),
    }
}

/// Title for an uploaded file: the name without its extension
///
/// # Examples
/// ```
/// use docdeck::logic::document::title_from_name;
///
/// assert_eq!(title_from_name("Risk Register.xlsx"), "Risk Register");
/// assert_eq!(title_from_name("  notes  "), "notes");
/// ```
pub fn title_from_name(name: &str) -> String {
    let name = name.trim();
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => stem.to_string(),
        _ => name.to_string(),
    }
}

/// A pending document for a simulated upload of `file_name` into the
/// folder at `folder_path` (empty at the page root)
pub fn uploaded_document(id: String, file_name: &str, folder_path: &str, uploader: &str, now: &str) -> Document {
    Document {
        id,
        title: title_from_name(file_name),
        doc_type: "Document".to_string(),
        file_type: file_type_from_name(file_name),
        file_size: crate::utils::simulated_file_size(file_name),
        department: folder_path.to_string(),
        uploaded_by: uploader.to_string(),
        uploaded_at: now.to_string(),
        last_modified: now.to_string(),
        access_type: AccessType::Department,
        approval_status: ApprovalStatus::Pending,
        security_level: None,
        tags: Vec::new(),
        approver: None,
        assigned_to: None,
        assigned_date: None,
        expiry_date: None,
    }
}

/// Set the approval status and return the previous one.
///
/// Approving records `user` as the approver. Any other status keeps the
/// existing approver, marked as not approved.
pub fn apply_approval(doc: &mut Document, status: ApprovalStatus, user: &UserProfile, now: &str) -> ApprovalStatus {
    let previous = std::mem::replace(&mut doc.approval_status, status);
    doc.last_modified = now.to_string();
    if status == ApprovalStatus::Approved {
        doc.approver = Some(Approver {
            id: user.id.clone(),
            name: user.name.clone(),
            title: user.title.clone(),
            email: user.email.clone(),
            approved: true,
        });
    } else if let Some(approver) = doc.approver.as_mut() {
        approver.approved = false;
    }
    previous
}

/// Rename and return the old title, or `None` if the title is unchanged
pub fn apply_rename(doc: &mut Document, title: &str, now: &str) -> Option<String> {
    if doc.title == title {
        return None;
    }
    doc.last_modified = now.to_string();
    Some(std::mem::replace(&mut doc.title, title.to_string()))
}

/// Who should hear about `doc`: its assignee, else its approver
pub fn notify_recipient(doc: &Document) -> Option<String> {
    doc.assigned_to
        .clone()
        .or_else(|| doc.approver.as_ref().map(|a| a.name.clone()))
}

/// Recipient of one notification covering `docs`: the first document
/// that names someone, else [`DEFAULT_RECIPIENT`]
pub fn notification_recipient(docs: &[&Document]) -> String {
    docs.iter()
        .find_map(|doc| notify_recipient(doc))
        .unwrap_or_else(|| DEFAULT_RECIPIENT.to_string())
}

/// Whether the document's expiry date lies before `today`
///
/// Documents without an expiry date, or with one that cannot be parsed,
/// never expire.
pub fn is_expired(doc: &Document, today: NaiveDate) -> bool {
    doc.expiry_date
        .as_deref()
        .and_then(parse_instant)
        .map(|instant| instant.date_naive() < today)
        .unwrap_or(false)
}

/// Whether the document sits directly in the folder at `path`
///
/// Compared case-insensitively, ignoring surrounding slashes.
pub fn in_folder(doc: &Document, path: &str) -> bool {
    normalize_path(&doc.department) == normalize_path(path)
}

/// Whether the document sits in the folder at `path` or anywhere beneath it
pub fn in_subtree(doc: &Document, path: &str) -> bool {
    let department = normalize_path(&doc.department);
    let path = normalize_path(path);
    department == path || department.starts_with(&format!("{}/", path))
}

fn normalize_path(path: &str) -> String {
    path.trim().trim_matches('/').to_lowercase()
}
