use reqwest::Client;

use crate::error::AppError;

/// Shared async client. No timeout is set: a hung server blocks the UI
/// until the connection gives up.
pub fn build_client() -> Result<Client, AppError> {
    let client = Client::builder()
        .use_rustls_tls()
        .user_agent(concat!("hop/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}
