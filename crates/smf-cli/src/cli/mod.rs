//! CLI for the SMF study-materials catalog client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use smf_core::api::{ApiClient, DocKind};
use smf_core::config;
use std::path::PathBuf;

use commands::{
    run_completions, run_courses, run_docs, run_get, run_subjects, run_terms, run_universities,
    run_view,
};

/// Top-level CLI for the SMF catalog client.
#[derive(Debug, Parser)]
#[command(name = "smf")]
#[command(about = "SMF: browse study materials and fetch documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Document kind filter as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocKindArg {
    Syllabus,
    Papers,
    Notes,
}

impl From<DocKindArg> for DocKind {
    fn from(arg: DocKindArg) -> Self {
        match arg {
            DocKindArg::Syllabus => DocKind::Syllabus,
            DocKindArg::Papers => DocKind::QuestionPaper,
            DocKindArg::Notes => DocKind::Note,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List universities.
    Universities {
        /// Filter by name or short name.
        #[arg(long)]
        query: Option<String>,
    },

    /// List courses offered by a university.
    Courses {
        /// University identifier.
        university_id: String,
        /// Filter by name or code.
        #[arg(long)]
        query: Option<String>,
    },

    /// List terms (semesters or years) of a course.
    Terms {
        /// Course identifier.
        course_id: String,
    },

    /// List subjects taught in a term.
    Subjects {
        /// Term identifier.
        term_id: String,
        /// Filter by name or code.
        #[arg(long)]
        query: Option<String>,
    },

    /// List documents (syllabus, question papers, notes) for a subject.
    Docs {
        /// Subject identifier.
        subject_id: String,
        /// Restrict to one document kind.
        #[arg(long, value_enum)]
        kind: Option<DocKindArg>,
        /// Filter by title.
        #[arg(long)]
        query: Option<String>,
    },

    /// Open a document in the system browser.
    View {
        /// Subject identifier.
        subject_id: String,
        /// Document title (case-insensitive; unique substring accepted).
        title: String,
    },

    /// Download a document (falls back to opening it on failure).
    Get {
        /// Subject identifier.
        subject_id: String,
        /// Document title (case-insensitive; unique substring accepted).
        title: String,
        /// Directory to save into (default: configured dir or cwd).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Completions need no config or network.
        if let CliCommand::Completions { shell } = &cli.command {
            return run_completions(*shell);
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let client = ApiClient::from_config(&cfg);

        match cli.command {
            CliCommand::Universities { query } => run_universities(client, query).await?,
            CliCommand::Courses {
                university_id,
                query,
            } => run_courses(client, university_id, query).await?,
            CliCommand::Terms { course_id } => run_terms(client, course_id).await?,
            CliCommand::Subjects { term_id, query } => {
                run_subjects(client, term_id, query).await?
            }
            CliCommand::Docs {
                subject_id,
                kind,
                query,
            } => run_docs(client, subject_id, kind.map(DocKind::from), query).await?,
            CliCommand::View { subject_id, title } => run_view(client, subject_id, title).await?,
            CliCommand::Get {
                subject_id,
                title,
                dir,
            } => {
                let dir = match dir {
                    Some(d) => d,
                    None => cfg.download_dir()?,
                };
                run_get(client, subject_id, title, dir).await?;
            }
            CliCommand::Completions { .. } => unreachable!("handled above"),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
