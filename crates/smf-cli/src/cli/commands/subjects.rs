//! `smf subjects <term-id>` – list subjects of a term.

use anyhow::Result;
use smf_core::api::ApiClient;
use smf_core::filter::filter_by_query;

pub async fn run_subjects(
    client: ApiClient,
    term_id: String,
    query: Option<String>,
) -> Result<()> {
    let (term, list) = tokio::task::spawn_blocking(move || {
        let term = client.term(&term_id)?;
        let subjects = client.subjects_by_term(&term_id)?;
        anyhow::Ok((term, subjects))
    })
    .await??;

    println!("{}\n", term.label);

    let searched = query.is_some();
    let list = filter_by_query(list, query.as_deref().unwrap_or(""));

    if list.is_empty() {
        if searched {
            println!("No subjects found.");
        } else {
            println!("No subjects available.");
        }
        return Ok(());
    }

    println!("{:<26} {:<10} {:<8} {}", "ID", "CODE", "CREDITS", "NAME");
    for s in list {
        let credits = s
            .credits
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<26} {:<10} {:<8} {}",
            s.id,
            s.code.as_deref().unwrap_or("-"),
            credits,
            s.name
        );
    }
    Ok(())
}
