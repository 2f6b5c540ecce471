//! Document domain types
//!
//! Serde representations of documents and sections as they appear in seed
//! data (camelCase field names).

use serde::{Deserialize, Serialize};

/// Compliance framework a page of documents belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Iso9001,
    Iso2,
    Edc,
    Ce,
}

impl Framework {
    pub const ALL: [Framework; 4] = [
        Framework::Iso9001,
        Framework::Iso2,
        Framework::Edc,
        Framework::Ce,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Iso9001 => "ISO 9001",
            Framework::Iso2 => "ISO2",
            Framework::Edc => "EDC",
            Framework::Ce => "CE",
        }
    }
}

impl std::str::FromStr for Framework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "iso9001" | "iso9000" => Ok(Framework::Iso9001),
            "iso2" => Ok(Framework::Iso2),
            "edc" => Ok(Framework::Edc),
            "ce" => Ok(Framework::Ce),
            _ => Err(format!("unknown framework '{}'", s)),
        }
    }
}

/// Who may see a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    Public,
    Department,
    Restricted,
}

impl AccessType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessType::Public => "public",
            AccessType::Department => "department",
            AccessType::Restricted => "restricted",
        }
    }
}

/// Workflow state of a document. Any state may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
    Revision,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
            ApprovalStatus::Revision => "revision",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityLevel {
    Public,
    Restricted,
    Confidential,
    #[serde(rename = "Top Secret")]
    TopSecret,
    #[serde(rename = "Highly Confidential")]
    HighlyConfidential,
}

impl SecurityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityLevel::Public => "Public",
            SecurityLevel::Restricted => "Restricted",
            SecurityLevel::Confidential => "Confidential",
            SecurityLevel::TopSecret => "Top Secret",
            SecurityLevel::HighlyConfidential => "Highly Confidential",
        }
    }
}

/// Person responsible for approving a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approver {
    pub id: String,
    pub name: String,
    pub title: String,
    pub email: String,
    #[serde(default)]
    pub approved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub file_type: String,
    pub file_size: String,
    /// Slash-delimited folder path, e.g. "HR/Policies/Guidelines"
    pub department: String,
    pub uploaded_by: String,
    pub uploaded_at: String,
    pub last_modified: String,
    pub access_type: AccessType,
    pub approval_status: ApprovalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_level: Option<SecurityLevel>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approver: Option<Approver>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

/// A department/section as given in seed data.
///
/// Sections may be flat (linked through `parent_id`) or nested through
/// `children`; both forms end up in the same `FolderTree`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default = "default_section_color")]
    pub color: String,
    #[serde(default)]
    pub document_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Section>,
}

fn default_section_color() -> String {
    "blue".to_string()
}
