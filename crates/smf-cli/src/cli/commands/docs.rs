//! `smf docs <subject-id>` – list a subject's documents.

use anyhow::Result;
use smf_core::actions::FileControl;
use smf_core::api::{ApiClient, DocKind};
use smf_core::filter::filter_by_query;
use smf_core::format::{format_date, format_file_size};

pub async fn run_docs(
    client: ApiClient,
    subject_id: String,
    kind: Option<DocKind>,
    query: Option<String>,
) -> Result<()> {
    let api_base = client.base_url().to_string();
    let (subject, records) = tokio::task::spawn_blocking(move || {
        let subject = client.subject(&subject_id)?;
        let records = client.documents(&subject_id, kind)?;
        anyhow::Ok((subject, records))
    })
    .await??;

    match subject.code.as_deref() {
        Some(code) => println!("{} ({})\n", subject.name, code),
        None => println!("{}\n", subject.name),
    }

    let searched = query.is_some();
    let records = filter_by_query(records, query.as_deref().unwrap_or(""));

    if records.is_empty() {
        if searched {
            println!("No documents found.");
        } else {
            println!("No documents available.");
        }
        return Ok(());
    }

    println!(
        "{:<10} {:<12} {:<13} {:<13} {}",
        "KIND", "FILE", "SIZE", "ADDED", "TITLE"
    );
    for r in records {
        let control = FileControl::for_record(&r, &api_base);
        let file = if control.is_available() {
            "available"
        } else {
            "unavailable"
        };
        println!(
            "{:<10} {:<12} {:<13} {:<13} {}",
            r.kind.label(),
            file,
            format_file_size(r.file_size),
            format_date(&r.created_at),
            r.title
        );
    }
    Ok(())
}
