//! Document storage
//!
//! The view layer talks to documents only through `DocumentRepository`, so the
//! in-memory store can be swapped for a persistent one without touching the
//! collection logic.

use crate::domain::Document;
use crate::error::{RepositoryError, RepositoryResult};

/// CRUD access to a document collection
pub trait DocumentRepository {
    /// Find a document by id
    fn get(&self, id: &str) -> RepositoryResult<&Document>;

    /// All documents in storage order
    fn list(&self) -> &[Document];

    /// Insert a new document. Fails if the id is already taken.
    fn create(&mut self, document: Document) -> RepositoryResult<()>;

    /// Replace an existing document (matched by id) and return the previous version
    fn update(&mut self, document: Document) -> RepositoryResult<Document>;

    /// Remove a document and return it
    fn delete(&mut self, id: &str) -> RepositoryResult<Document>;
}

/// Vec-backed repository preserving insertion order
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    documents: Vec<Document>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from seed documents. Later duplicates of an id are dropped.
    pub fn from_documents(documents: Vec<Document>) -> Self {
        let mut repo = Self::new();
        for doc in documents {
            let id = doc.id.clone();
            if let Err(e) = repo.create(doc) {
                tracing::warn!(document_id = %id, error = %e, "skipping seed document");
            }
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Smallest `doc-N` id not yet used
    pub fn next_id(&self) -> String {
        let mut n = self.documents.len() + 1;
        loop {
            let candidate = format!("doc-{}", n);
            if !self.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.documents.iter().position(|d| d.id == id)
    }
}

impl DocumentRepository for InMemoryRepository {
    fn get(&self, id: &str) -> RepositoryResult<&Document> {
        self.documents
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    fn list(&self) -> &[Document] {
        &self.documents
    }

    fn create(&mut self, document: Document) -> RepositoryResult<()> {
        if document.id.trim().is_empty() {
            return Err(RepositoryError::InvalidDocument(
                "id must not be empty".to_string(),
            ));
        }
        if self.contains(&document.id) {
            return Err(RepositoryError::DuplicateId(document.id));
        }
        self.documents.push(document);
        Ok(())
    }

    fn update(&mut self, document: Document) -> RepositoryResult<Document> {
        let idx = self
            .position(&document.id)
            .ok_or_else(|| RepositoryError::NotFound(document.id.clone()))?;
        Ok(std::mem::replace(&mut self.documents[idx], document))
    }

    fn delete(&mut self, id: &str) -> RepositoryResult<Document> {
        let idx = self
            .position(id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        Ok(self.documents.remove(idx))
    }
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
            file_size: "1.0 MB".to_string(),
            department: "HR".to_string(),
            uploaded_by: "Test User".to_string(),
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

    #[test]
    fn test_create_and_get() {
        let mut repo = InMemoryRepository::new();
        repo.create(make_doc("a", "Alpha")).unwrap();

        assert_eq!(repo.get("a").unwrap().title, "Alpha");
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_create_rejects_duplicate_id() {
        let mut repo = InMemoryRepository::new();
        repo.create(make_doc("a", "Alpha")).unwrap();

        let err = repo.create(make_doc("a", "Again")).unwrap_err();
        assert_eq!(err, RepositoryError::DuplicateId("a".to_string()));
        assert_eq!(repo.get("a").unwrap().title, "Alpha");
    }

    #[test]
    fn test_create_rejects_empty_id() {
        let mut repo = InMemoryRepository::new();
        assert!(matches!(
            repo.create(make_doc("  ", "Blank")),
            Err(RepositoryError::InvalidDocument(_))
        ));
    }

    #[test]
    fn test_update_returns_previous_version() {
        let mut repo = InMemoryRepository::new();
        repo.create(make_doc("a", "Alpha")).unwrap();

        let previous = repo.update(make_doc("a", "Alpha v2")).unwrap();
        assert_eq!(previous.title, "Alpha");
        assert_eq!(repo.get("a").unwrap().title, "Alpha v2");
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut repo = InMemoryRepository::new();
        assert_eq!(
            repo.update(make_doc("x", "X")).unwrap_err(),
            RepositoryError::NotFound("x".to_string())
        );
    }

    #[test]
    fn test_delete_preserves_order_of_rest() {
        let mut repo = InMemoryRepository::from_documents(vec![
            make_doc("a", "A"),
            make_doc("b", "B"),
            make_doc("c", "C"),
        ]);

        let removed = repo.delete("b").unwrap();
        assert_eq!(removed.id, "b");
        let ids: Vec<&str> = repo.list().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(repo.delete("b").is_err());
    }

    #[test]
    fn test_from_documents_drops_duplicates() {
        let repo = InMemoryRepository::from_documents(vec![
            make_doc("a", "First"),
            make_doc("a", "Second"),
        ]);
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get("a").unwrap().title, "First");
    }

    #[test]
    fn test_next_id_skips_taken_ids() {
        let repo = InMemoryRepository::from_documents(vec![
            make_doc("doc-2", "Two"),
            make_doc("doc-3", "Three"),
        ]);
        assert_eq!(repo.next_id(), "doc-4");

        let empty = InMemoryRepository::new();
        assert_eq!(empty.next_id(), "doc-1");
    }
}
