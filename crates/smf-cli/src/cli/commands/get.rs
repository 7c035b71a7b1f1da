//! `smf get <subject-id> <title>` – download a document.

use anyhow::Result;
use smf_core::actions::FileControl;
use smf_core::api::{select_by_title, ApiClient};
use smf_core::retrieve::{Outcome, SystemOpener, FILE_UNAVAILABLE_NOTICE};
use std::path::PathBuf;

pub async fn run_get(
    client: ApiClient,
    subject_id: String,
    title: String,
    dir: PathBuf,
) -> Result<()> {
    let api_base = client.base_url().to_string();
    let fetch_opts = client.fetch_options();
    let records =
        tokio::task::spawn_blocking(move || client.documents(&subject_id, None)).await??;
    let record = select_by_title(records, &title)?;

    match FileControl::for_record(&record, &api_base) {
        FileControl::Available(file) => {
            let outcome =
                tokio::task::spawn_blocking(move || file.download(&dir, fetch_opts, &SystemOpener))
                    .await?;
            match outcome {
                Outcome::Saved(path) => println!("Saved to {}", path.display()),
                Outcome::OpenedFallback(reason) => {
                    println!("Download failed ({reason}); opened in the browser instead.")
                }
                Outcome::Refused => println!("{FILE_UNAVAILABLE_NOTICE}"),
                Outcome::Opened => {}
            }
        }
        FileControl::Unavailable => println!("{FILE_UNAVAILABLE_NOTICE}"),
    }
    Ok(())
}
