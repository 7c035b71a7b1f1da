//! `smf courses <university-id>` – list courses of a university.

use anyhow::Result;
use smf_core::api::ApiClient;
use smf_core::filter::filter_by_query;

pub async fn run_courses(
    client: ApiClient,
    university_id: String,
    query: Option<String>,
) -> Result<()> {
    let (university, list) = tokio::task::spawn_blocking(move || {
        let university = client.university(&university_id)?;
        let courses = client.courses(&university_id)?;
        anyhow::Ok((university, courses))
    })
    .await??;

    match university.short_name.as_deref() {
        Some(short) => println!("{} ({})\n", university.name, short),
        None => println!("{}\n", university.name),
    }

    let searched = query.is_some();
    let list = filter_by_query(list, query.as_deref().unwrap_or(""));

    if list.is_empty() {
        if searched {
            println!("No courses found.");
        } else {
            println!("No courses available.");
        }
        return Ok(());
    }

    println!("{:<26} {:<10} {:<10} {}", "ID", "CODE", "SCHEME", "NAME");
    for c in list {
        let scheme = c
            .scheme_type
            .map(|s| s.term_noun().to_lowercase())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<26} {:<10} {:<10} {}",
            c.id,
            c.code.as_deref().unwrap_or("-"),
            scheme,
            c.name
        );
    }
    Ok(())
}
