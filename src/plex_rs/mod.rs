use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::SyncError;

pub mod library;
pub mod playlist;

// Docs:
// https://developer.plex.tv/pms/#section/API-Info/Authenticating-with-Plex

/* ---------- Shared container ---------- */

/// Plex wraps every list endpoint in a top level `MediaContainer`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlexResponse<T> {
    #[serde(rename = "MediaContainer")]
    pub media_container: T,
}

/// `MediaContainer` for endpoints returning `Metadata` items.
///
/// `metadata` is omitted entirely by Plex when the list is empty.
#[derive(Debug, Clone, Deserialize)]
pub struct PlexMetadataContainer<T> {
    #[serde(rename = "Metadata", default = "Vec::new")]
    pub metadata: Vec<T>,
}

/// Issue an authenticated GET against the Plex server and decode the JSON body.
pub(crate) async fn plex_get<T: DeserializeOwned>(
    client: &Client,
    url: Url,
    user_token: &str,
) -> Result<T, SyncError> {
    let endpoint = url.path().to_string();
    log::debug!("GET Plex {}", endpoint);

    let res = client
        .get(url)
        .header("Accept", "application/json")
        .header("X-Plex-Token", user_token)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| SyncError::upstream(&endpoint, e))?;

    res.json::<T>()
        .await
        .map_err(|e| SyncError::upstream(&endpoint, e))
}
