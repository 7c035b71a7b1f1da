//! Client-side listing search.
//!
//! Each level of the hierarchy filters locally on a query string; the
//! backend is never asked to search.

use crate::api::{Course, DocRecord, Subject, University};

/// Entities that expose fields the listing search looks at.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for University {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(short) = self.short_name.as_deref() {
            fields.push(short);
        }
        fields
    }
}

impl Searchable for Course {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(code) = self.code.as_deref() {
            fields.push(code);
        }
        fields
    }
}

impl Searchable for Subject {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(code) = self.code.as_deref() {
            fields.push(code);
        }
        fields
    }
}

impl Searchable for DocRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }
}

/// Keeps the items whose fields contain `query`, case-insensitively.
/// A blank query keeps everything.
pub fn filter_by_query<T: Searchable>(items: Vec<T>, query: &str) -> Vec<T> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| {
            item.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
        })
        .collect()
}
