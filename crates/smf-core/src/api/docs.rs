//! Flattened document records across the three catalog kinds.
//!
//! Listings and the view/get commands work on one shape regardless of
//! whether a document is a syllabus, question paper, or note.

use anyhow::{bail, Result};
use serde_json::Value;
use std::fmt;

use super::{ApiClient, Document};

/// The three document kinds a subject carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    Syllabus,
    QuestionPaper,
    Note,
}

impl DocKind {
    pub fn label(&self) -> &'static str {
        match self {
            DocKind::Syllabus => "syllabus",
            DocKind::QuestionPaper => "paper",
            DocKind::Note => "note",
        }
    }
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One document of any kind, reduced to what listing and retrieval need.
#[derive(Debug, Clone)]
pub struct DocRecord {
    pub kind: DocKind,
    pub title: String,
    pub file_name: Option<String>,
    /// Raw stored file reference; resolution happens at use time.
    pub file_ref: Value,
    pub file_size: Option<u64>,
    pub created_at: String,
}

impl DocRecord {
    fn from_document(kind: DocKind, doc: &dyn Document) -> Self {
        Self {
            kind,
            title: doc.title().to_string(),
            file_name: doc.file_name().map(str::to_string),
            file_ref: doc.file_ref().clone(),
            file_size: doc.file_size(),
            created_at: doc.created_at().to_string(),
        }
    }
}

impl ApiClient {
    /// All documents of a subject, flattened; `kind` restricts to one kind.
    pub fn documents(&self, subject_id: &str, kind: Option<DocKind>) -> Result<Vec<DocRecord>> {
        let mut records = Vec::new();
        let want = |k: DocKind| kind.is_none() || kind == Some(k);

        if want(DocKind::Syllabus) {
            for s in self.syllabus_for_subject(subject_id)? {
                records.push(DocRecord::from_document(DocKind::Syllabus, &s));
            }
        }
        if want(DocKind::QuestionPaper) {
            for q in self.question_papers_for_subject(subject_id)? {
                records.push(DocRecord::from_document(DocKind::QuestionPaper, &q));
            }
        }
        if want(DocKind::Note) {
            for n in self.notes_for_subject(subject_id)? {
                records.push(DocRecord::from_document(DocKind::Note, &n));
            }
        }
        Ok(records)
    }
}

/// Picks the document a user named: a case-insensitive exact title match
/// wins, else a unique substring match. Ambiguity lists the candidates.
pub fn select_by_title(records: Vec<DocRecord>, title: &str) -> Result<DocRecord> {
    let wanted = title.trim().to_lowercase();
    if wanted.is_empty() {
        bail!("empty document title");
    }

    if let Some(exact) = records
        .iter()
        .find(|r| r.title.to_lowercase() == wanted)
    {
        return Ok(exact.clone());
    }

    let matches: Vec<&DocRecord> = records
        .iter()
        .filter(|r| r.title.to_lowercase().contains(&wanted))
        .collect();

    match matches.as_slice() {
        [] => bail!("no document titled \"{title}\""),
        [one] => Ok((*one).clone()),
        many => {
            let names: Vec<String> = many
                .iter()
                .map(|r| format!("{} ({})", r.title, r.kind))
                .collect();
            bail!(
                "\"{title}\" matches {} documents: {}",
                many.len(),
                names.join(", ")
            )
        }
    }
}
