//! `smf view <subject-id> <title>` – open a document externally.

use anyhow::Result;
use smf_core::actions::FileControl;
use smf_core::api::{select_by_title, ApiClient};
use smf_core::retrieve::{SystemOpener, FILE_UNAVAILABLE_NOTICE};

pub async fn run_view(client: ApiClient, subject_id: String, title: String) -> Result<()> {
    let api_base = client.base_url().to_string();
    let records =
        tokio::task::spawn_blocking(move || client.documents(&subject_id, None)).await??;
    let record = select_by_title(records, &title)?;

    match FileControl::for_record(&record, &api_base) {
        FileControl::Available(file) => {
            println!("Opening {}", file.url());
            file.view(&SystemOpener);
        }
        FileControl::Unavailable => println!("{FILE_UNAVAILABLE_NOTICE}"),
    }
    Ok(())
}
