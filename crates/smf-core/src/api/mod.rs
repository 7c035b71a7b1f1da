//! Typed REST client for the catalog backend.
//!
//! Read-only GETs against the hierarchy endpoints, each response wrapped in
//! a `{ "data": ... }` envelope. Blocking (libcurl underneath); call from
//! `spawn_blocking` when used from async code.

mod docs;
mod entities;

pub use docs::{DocKind, DocRecord, select_by_title};
pub use entities::*;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::config::SmfConfig;
use crate::fetch::{fetch_bytes, FetchOptions};

/// Envelope every backend response arrives in. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    data: T,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    options: FetchOptions,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, options: FetchOptions) -> Self {
        Self {
            base_url: base_url.into(),
            options,
        }
    }

    pub fn from_config(cfg: &SmfConfig) -> Self {
        Self::new(cfg.api_base_url(), cfg.fetch_options())
    }

    /// The base URL requests are issued against (env override applied).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The HTTP tuning this client was built with, for reuse by document
    /// retrieval.
    pub fn fetch_options(&self) -> FetchOptions {
        self.options
    }

    pub fn universities(&self) -> Result<Vec<University>> {
        self.get("universities", &[])
    }

    pub fn university(&self, id: &str) -> Result<University> {
        self.get(&format!("universities/{id}"), &[])
    }

    pub fn courses(&self, university_id: &str) -> Result<Vec<Course>> {
        self.get("courses", &[("universityId", university_id)])
    }

    pub fn course(&self, id: &str) -> Result<Course> {
        self.get(&format!("courses/{id}"), &[])
    }

    pub fn terms(&self, course_id: &str) -> Result<Vec<Term>> {
        self.get("terms", &[("courseId", course_id)])
    }

    pub fn term(&self, id: &str) -> Result<Term> {
        self.get(&format!("terms/{id}"), &[])
    }

    pub fn subjects_by_term(&self, term_id: &str) -> Result<Vec<Subject>> {
        self.get("subjects", &[("termId", term_id)])
    }

    pub fn subjects_by_course(&self, course_id: &str) -> Result<Vec<Subject>> {
        self.get("subjects", &[("courseId", course_id)])
    }

    pub fn subject(&self, id: &str) -> Result<Subject> {
        self.get(&format!("subjects/{id}"), &[])
    }

    pub fn syllabus_for_subject(&self, subject_id: &str) -> Result<Vec<Syllabus>> {
        self.get(&format!("syllabus/subject/{subject_id}"), &[])
    }

    pub fn question_papers_for_subject(&self, subject_id: &str) -> Result<Vec<QuestionPaper>> {
        self.get(&format!("question-papers/subject/{subject_id}"), &[])
    }

    pub fn notes_for_subject(&self, subject_id: &str) -> Result<Vec<Note>> {
        self.get(&format!("notes/subject/{subject_id}"), &[])
    }

    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.endpoint(path, query)?;
        let body = fetch_bytes(url.as_str(), self.options)
            .with_context(|| format!("GET {url}"))?;
        let envelope: ApiResponse<T> = serde_json::from_slice(&body)
            .with_context(|| format!("decode response from {url}"))?;
        Ok(envelope.data)
    }

    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        let joined = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let mut url = Url::parse(&joined)
            .with_context(|| format!("invalid API base URL: {}", self.base_url))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}
