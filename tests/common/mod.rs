//! Fixtures shared by the integration tests

#![allow(dead_code)]

use docdeck::domain::{AccessType, ApprovalStatus, Document, Framework, Section, SecurityLevel};
use docdeck::model::{PageConfig, PageModel};

pub fn doc(id: &str, title: &str, department: &str) -> Document {
    Document {
        id: id.to_string(),
        title: title.to_string(),
        doc_type: "Procedure".to_string(),
        file_type: "pdf".to_string(),
        file_size: "1 MB".to_string(),
        department: department.to_string(),
        uploaded_by: "Alex Kim".to_string(),
        uploaded_at: "2024-01-01".to_string(),
        last_modified: "2024-01-01".to_string(),
        access_type: AccessType::Department,
        approval_status: ApprovalStatus::Pending,
        security_level: Some(SecurityLevel::Public),
        tags: Vec::new(),
        approver: None,
        assigned_to: None,
        assigned_date: None,
        expiry_date: None,
    }
}

pub fn section(id: &str, name: &str, parent: Option<&str>) -> Section {
    Section {
        id: id.to_string(),
        name: name.to_string(),
        color: "blue".to_string(),
        document_count: 0,
        parent_id: parent.map(String::from),
        path: None,
        children: Vec::new(),
    }
}

/// Finance > Budget Reports > 2024 Q1, plus HR > Reports and Finance > Reports
pub fn finance_sections() -> Vec<Section> {
    vec![
        section("hr", "HR", None),
        section("hr-reports", "Reports", Some("hr")),
        section("finance", "Finance", None),
        section("budget", "Budget Reports", Some("finance")),
        section("q1", "2024 Q1", Some("budget")),
        section("fin-reports", "Reports", Some("finance")),
    ]
}

pub fn finance_page(documents: Vec<Document>) -> PageModel {
    PageModel::new(
        PageConfig::for_framework(Framework::Iso9001),
        &finance_sections(),
        documents,
    )
}
