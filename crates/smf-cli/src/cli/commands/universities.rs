//! `smf universities` – list universities.

use anyhow::Result;
use smf_core::api::ApiClient;
use smf_core::filter::filter_by_query;

pub async fn run_universities(client: ApiClient, query: Option<String>) -> Result<()> {
    let list = tokio::task::spawn_blocking(move || client.universities()).await??;
    let searched = query.is_some();
    let list = filter_by_query(list, query.as_deref().unwrap_or(""));

    if list.is_empty() {
        if searched {
            println!("No universities found.");
        } else {
            println!("No universities available.");
        }
        return Ok(());
    }

    println!("{:<26} {:<10} {}", "ID", "SHORT", "NAME");
    for u in list {
        println!(
            "{:<26} {:<10} {}",
            u.id,
            u.short_name.as_deref().unwrap_or("-"),
            u.name
        );
    }
    Ok(())
}
