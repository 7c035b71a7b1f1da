//! `smf terms <course-id>` – list terms of a course.

use anyhow::Result;
use smf_core::api::ApiClient;

pub async fn run_terms(client: ApiClient, course_id: String) -> Result<()> {
    let (course, list) = tokio::task::spawn_blocking(move || {
        let course = client.course(&course_id)?;
        let terms = client.terms(&course_id)?;
        anyhow::Ok((course, terms))
    })
    .await??;

    println!("{}\n", course.name);

    if list.is_empty() {
        println!("No terms available.");
        return Ok(());
    }

    println!("{:<26} {:<10} {:<6} {}", "ID", "SCHEME", "VALUE", "LABEL");
    for t in list {
        println!(
            "{:<26} {:<10} {:<6} {}",
            t.id,
            t.scheme.term_noun().to_lowercase(),
            t.value,
            t.label
        );
    }
    Ok(())
}
