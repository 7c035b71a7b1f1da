//! CLI command handlers. Each command is in its own file.

mod completions;
mod courses;
mod docs;
mod get;
mod subjects;
mod terms;
mod universities;
mod view;

pub use completions::run_completions;
pub use courses::run_courses;
pub use docs::run_docs;
pub use get::run_get;
pub use subjects::run_subjects;
pub use terms::run_terms;
pub use universities::run_universities;
pub use view::run_view;
