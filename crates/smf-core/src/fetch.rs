//! HTTP GET plumbing over libcurl.
//!
//! One buffered GET primitive serves both catalog JSON fetches and document
//! retrieval. Redirects are followed; a non-2xx final status is an error.
//! Runs in the current thread; call from `spawn_blocking` if used from
//! async code.

use std::time::Duration;

/// Failure of a single GET: transport error or HTTP error status.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, TLS, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// The final response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
}

/// Connection tuning shared by catalog and document fetches.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(120),
        }
    }
}

/// GET `url`, following redirects, buffering the whole body in memory.
pub fn fetch_bytes(url: &str, opts: FetchOptions) -> Result<Vec<u8>, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }
    Ok(body)
}
