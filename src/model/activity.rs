//! Activity Model
//!
//! Audit trail and notification log. Entries are appended as document
//! actions happen and live only for the session.

use chrono::{DateTime, Utc};

use crate::domain::{ApprovalStatus, Framework};

/// What happened to a document
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuditAction {
    Uploaded,
    Edited { from: String, to: String },
    StatusChanged { from: ApprovalStatus, to: ApprovalStatus },
    Deleted,
    Notified,
}

impl AuditAction {
    pub fn describe(&self) -> String {
        match self {
            AuditAction::Uploaded => "uploaded".to_string(),
            AuditAction::Edited { from, to } => format!("renamed '{}' to '{}'", from, to),
            AuditAction::StatusChanged { from, to } => {
                format!("status {} → {}", from.as_str(), to.as_str())
            }
            AuditAction::Deleted => "deleted".to_string(),
            AuditAction::Notified => "notified".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub framework: Framework,
    pub document_id: String,
    /// Title at the time of the action (the document may be gone since)
    pub document_title: String,
    pub action: AuditAction,
    pub actor: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub timestamp: DateTime<Utc>,
    pub recipient: String,
    pub message: String,
    pub document_ids: Vec<String>,
}

/// Session activity log
#[derive(Clone, Debug, Default)]
pub struct ActivityModel {
    audit: Vec<AuditEntry>,
    notifications: Vec<Notification>,
}

impl ActivityModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: AuditEntry) {
        tracing::info!(
            document_id = %entry.document_id,
            actor = %entry.actor,
            action = %entry.action.describe(),
            "audit"
        );
        self.audit.push(entry);
    }

    pub fn notify(&mut self, notification: Notification) {
        tracing::info!(
            recipient = %notification.recipient,
            documents = notification.document_ids.len(),
            "notification sent"
        );
        self.notifications.push(notification);
    }

    /// Audit entries for one framework page, newest first, optionally
    /// restricted to a single document
    pub fn audit_for(&self, framework: Framework, document_id: Option<&str>) -> Vec<&AuditEntry> {
        self.audit
            .iter()
            .rev()
            .filter(|e| e.framework == framework)
            .filter(|e| document_id.map_or(true, |id| e.document_id == id))
            .collect()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn audit_len(&self) -> usize {
        self.audit.len()
    }
}
