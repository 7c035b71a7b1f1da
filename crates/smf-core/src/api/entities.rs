//! Catalog entities as the backend serializes them (camelCase wire names).
//!
//! Hierarchy: University → Course → Term → Subject → documents (Syllabus,
//! QuestionPaper, Note). Timestamps stay strings on the wire and are parsed
//! leniently at display time; document file references stay raw JSON values
//! because the backend sometimes ships non-string junk in them.

use serde::Deserialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Whether a course is divided into semesters or years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemeType {
    Semester,
    Year,
}

impl SchemeType {
    /// Noun used when presenting terms of this scheme.
    pub fn term_noun(&self) -> &'static str {
        match self {
            SchemeType::Semester => "Semester",
            SchemeType::Year => "Year",
        }
    }
}

impl fmt::Display for SchemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.term_noun())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    pub university_id: String,
    #[serde(default)]
    pub scheme_type: Option<SchemeType>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    pub id: String,
    pub course_id: String,
    #[serde(rename = "type")]
    pub scheme: SchemeType,
    pub value: i64,
    pub label: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub semester: Option<i64>,
    #[serde(default)]
    pub credits: Option<i64>,
    pub term_id: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Syllabus {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_url: Value,
    #[serde(default)]
    pub file_path: Value,
    #[serde(default)]
    pub file_size: Option<u64>,
    pub subject_id: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPaper {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub exam_type: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_url: Value,
    #[serde(default)]
    pub file_path: Value,
    #[serde(default)]
    pub file_size: Option<u64>,
    pub subject_id: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub unit: Option<i64>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_url: Value,
    #[serde(default)]
    pub file_path: Value,
    #[serde(default)]
    pub file_size: Option<u64>,
    pub subject_id: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Common surface of the three document kinds, for listing and binding.
pub trait Document {
    fn title(&self) -> &str;
    fn file_name(&self) -> Option<&str>;
    /// Raw stored file reference: `filePath` when present, else `fileUrl`.
    /// Deliberately untyped; resolution decides what it means.
    fn file_ref(&self) -> &Value;
    fn file_size(&self) -> Option<u64>;
    fn created_at(&self) -> &str;
}

macro_rules! impl_document {
    ($ty:ty) => {
        impl Document for $ty {
            fn title(&self) -> &str {
                &self.title
            }
            fn file_name(&self) -> Option<&str> {
                self.file_name.as_deref()
            }
            fn file_ref(&self) -> &Value {
                if self.file_path.is_null() {
                    &self.file_url
                } else {
                    &self.file_path
                }
            }
            fn file_size(&self) -> Option<u64> {
                self.file_size
            }
            fn created_at(&self) -> &str {
                &self.created_at
            }
        }
    };
}

impl_document!(Syllabus);
impl_document!(QuestionPaper);
impl_document!(Note);
