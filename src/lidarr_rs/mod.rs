use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::SyncError;

pub mod album;
pub mod tag;

// Docs:
// https://lidarr.audio/docs/api/

const API_PREFIX: &str = "api/v1/";

/// Build `{base_url}/api/v1/{path}`.
pub fn api_url(base_url: &Url, path: &str) -> Result<Url, SyncError> {
    Ok(base_url.join(API_PREFIX)?.join(path)?)
}

/// Attach the API key, send, and reject non-2xx statuses.
pub(crate) async fn send(
    request: RequestBuilder,
    api_key: &str,
    endpoint: &str,
) -> Result<Response, SyncError> {
    request
        .header("Accept", "application/json")
        .header("X-Api-Key", api_key)
        .send()
        .await
        .and_then(Response::error_for_status)
        .map_err(|e| SyncError::upstream(endpoint, e))
}

pub(crate) async fn lidarr_get<T: DeserializeOwned>(
    client: &Client,
    base_url: &Url,
    api_key: &str,
    path: &str,
) -> Result<T, SyncError> {
    let url = api_url(base_url, path)?;
    log::debug!("GET Lidarr {}", path);

    send(client.get(url), api_key, path)
        .await?
        .json::<T>()
        .await
        .map_err(|e| SyncError::upstream(path, e))
}
