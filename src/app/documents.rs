//! Document action orchestration methods
//!
//! Approve / reject / request revision, notify, simulated upload, rename
//! and delete. Every change goes through the page's repository and is
//! written to the audit trail; failures become "Error: ..." toasts.

use chrono::Utc;

use docdeck::domain::{ApprovalStatus, Document};
use docdeck::logic;
use docdeck::model::{
    AuditAction, AuditEntry, AuditPopupState, ConfirmDeleteState, Notification, TextInputPurpose,
    TextInputState,
};

use crate::App;

fn now_string() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

impl App {
    fn audit(&mut self, document_id: &str, document_title: &str, action: AuditAction) {
        let Some(framework) = self.model.page().map(|p| p.config.framework) else {
            return;
        };
        let entry = AuditEntry {
            timestamp: Utc::now(),
            framework,
            document_id: document_id.to_string(),
            document_title: document_title.to_string(),
            action,
            actor: self.model.current_user.name.clone(),
        };
        self.model.activity.record(entry);
    }

    /// Targets of a document action, or a toast if there are none
    fn targets_or_toast(&mut self) -> Option<Vec<String>> {
        let targets = self.model.page()?.action_targets();
        if targets.is_empty() {
            self.model.show_toast("No document selected".to_string());
            return None;
        }
        Some(targets)
    }

    // ============================================
    // APPROVAL
    // ============================================

    pub(crate) fn set_approval(&mut self, status: ApprovalStatus) {
        let Some(page) = self.model.page() else {
            return;
        };
        if !page.config.approval_visible {
            let message = format!("Approvals are not available on {}", page.config.title);
            self.model.show_toast(message);
            return;
        }
        let Some(targets) = self.targets_or_toast() else {
            return;
        };

        let user = self.model.current_user.clone();
        let mut changed = 0;
        for id in targets {
            let Some(page) = self.model.page_mut() else {
                return;
            };
            let Some(mut doc) = page.document(&id).cloned() else {
                self.model.ui.show_error(format!("document '{}' not found", id));
                continue;
            };

            let previous = logic::document::apply_approval(&mut doc, status, &user, &now_string());

            let title = doc.title.clone();
            match page.update_document(doc) {
                Ok(_) => {
                    changed += 1;
                    self.audit(&id, &title, AuditAction::StatusChanged { from: previous, to: status });
                }
                Err(e) => self.model.ui.show_error(e),
            }
        }

        if changed > 0 {
            let verb = match status {
                ApprovalStatus::Approved => "Approved",
                ApprovalStatus::Rejected => "Rejected",
                ApprovalStatus::Revision => "Requested revision of",
                ApprovalStatus::Pending => "Reset",
            };
            self.model.show_toast(format!("{} {} document(s)", verb, changed));
        }
    }

    // ============================================
    // NOTIFY
    // ============================================

    pub(crate) fn notify_targets(&mut self) {
        let Some(targets) = self.targets_or_toast() else {
            return;
        };
        let Some(page) = self.model.page() else {
            return;
        };

        let found: Vec<&Document> = targets.iter().filter_map(|id| page.document(id)).collect();
        let recipient = logic::document::notification_recipient(&found);
        let docs: Vec<(String, String)> = found
            .iter()
            .map(|doc| (doc.id.clone(), doc.title.clone()))
            .collect();

        let message = match docs.as_slice() {
            [(_, title)] => format!("Please review '{}'", title),
            _ => format!("Please review {} documents", docs.len()),
        };

        self.model.activity.notify(Notification {
            timestamp: Utc::now(),
            recipient: recipient.clone(),
            message,
            document_ids: docs.iter().map(|(id, _)| id.clone()).collect(),
        });
        for (id, title) in &docs {
            self.audit(id, title, AuditAction::Notified);
        }
        self.model.show_toast(format!("Notified {}", recipient));
    }

    // ============================================
    // UPLOAD / RENAME
    // ============================================

    pub(crate) fn start_upload(&mut self) {
        let Some(page) = self.model.page() else {
            return;
        };
        if !page.config.upload_enabled {
            let message = format!("Uploads are disabled for {}", page.config.title);
            self.model.show_toast(message);
            return;
        }
        self.model.ui.text_input = Some(TextInputState::new(TextInputPurpose::Upload, ""));
    }

    pub(crate) fn start_edit(&mut self) {
        let Some(doc) = self.model.page().and_then(|p| p.cursor_document()) else {
            self.model.show_toast("No document under cursor".to_string());
            return;
        };
        let state = TextInputState::new(
            TextInputPurpose::Rename {
                document_id: doc.id.clone(),
            },
            &doc.title,
        );
        self.model.ui.text_input = Some(state);
    }

    /// Enter in the text input dialog
    pub(crate) fn submit_text_input(&mut self) {
        let Some(state) = self.model.ui.text_input.take() else {
            return;
        };
        let value = state.buffer.trim().to_string();
        if value.is_empty() {
            self.model.ui.show_error("name must not be empty");
            return;
        }

        match state.purpose {
            TextInputPurpose::Upload => self.upload(&value),
            TextInputPurpose::Rename { document_id } => self.rename(&document_id, &value),
        }
    }

    fn upload(&mut self, file_name: &str) {
        let uploader = self.model.current_user.name.clone();
        let Some(page) = self.model.page_mut() else {
            return;
        };

        let doc = logic::document::uploaded_document(
            page.repository.next_id(),
            file_name,
            page.current_path().unwrap_or_default(),
            &uploader,
            &now_string(),
        );

        let (id, title) = (doc.id.clone(), doc.title.clone());
        match page.create_document(doc) {
            Ok(()) => {
                self.audit(&id, &title, AuditAction::Uploaded);
                self.model.show_toast(format!("Uploaded {}", title));
            }
            Err(e) => self.model.ui.show_error(e),
        }
    }

    fn rename(&mut self, document_id: &str, new_title: &str) {
        let Some(page) = self.model.page_mut() else {
            return;
        };
        let Some(mut doc) = page.document(document_id).cloned() else {
            self.model.ui.show_error(format!("document '{}' not found", document_id));
            return;
        };
        let Some(previous) = logic::document::apply_rename(&mut doc, new_title, &now_string()) else {
            return;
        };
        match page.update_document(doc) {
            Ok(_) => {
                self.audit(
                    document_id,
                    new_title,
                    AuditAction::Edited {
                        from: previous,
                        to: new_title.to_string(),
                    },
                );
                self.model.show_toast(format!("Renamed to {}", new_title));
            }
            Err(e) => self.model.ui.show_error(e),
        }
    }

    // ============================================
    // DELETE
    // ============================================

    pub(crate) fn request_delete(&mut self) {
        let Some(targets) = self.targets_or_toast() else {
            return;
        };
        let Some(page) = self.model.page() else {
            return;
        };
        let description = match targets.as_slice() {
            [id] => page
                .document(id)
                .map(|d| d.title.clone())
                .unwrap_or_else(|| id.clone()),
            _ => format!("{} documents", targets.len()),
        };
        self.model.ui.confirm_delete = Some(ConfirmDeleteState {
            document_ids: targets,
            description,
        });
    }

    pub(crate) fn confirm_delete(&mut self) {
        let Some(state) = self.model.ui.confirm_delete.take() else {
            return;
        };
        let Some(page) = self.model.page_mut() else {
            return;
        };
        match page.delete_documents(&state.document_ids) {
            Ok(deleted) => {
                for doc in &deleted {
                    self.audit(&doc.id, &doc.title, AuditAction::Deleted);
                }
                self.model.show_toast(format!("Deleted {} document(s)", deleted.len()));
            }
            Err(e) => self.model.ui.show_error(e),
        }
    }

    // ============================================
    // POPUPS
    // ============================================

    pub(crate) fn show_info(&mut self) {
        match self.model.page().and_then(|p| p.cursor_document()).map(|d| d.id.clone()) {
            Some(id) => self.model.ui.info_popup = Some(id),
            None => self.model.show_toast("No document under cursor".to_string()),
        }
    }

    /// Audit trail for the document under the cursor, or the whole page
    pub(crate) fn show_audit(&mut self) {
        let document_id = self
            .model
            .page()
            .and_then(|p| p.cursor_document())
            .map(|d| d.id.clone());
        self.model.ui.audit_popup = Some(AuditPopupState {
            document_id,
            scroll_offset: 0,
        });
    }

    /// Audit trail for the whole page, whatever is under the cursor
    pub(crate) fn show_page_audit(&mut self) {
        self.model.ui.audit_popup = Some(AuditPopupState::default());
    }
}
