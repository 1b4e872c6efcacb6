use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SyncError;
use crate::lidarr_rs::{api_url, lidarr_get, send};

/* ---------- Albums ---------- */

#[derive(Debug, Clone, Deserialize)]
pub struct LidarrArtist {
    #[serde(rename = "artistName", default)]
    pub artist_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LidarrAlbum {
    pub id: i64,

    pub title: String,

    #[serde(default)]
    pub artist: Option<LidarrArtist>,

    #[serde(default)]
    pub tags: Vec<i64>,
}

/// Fetch every album Lidarr knows about.
///
/// Endpoint
/// - `GET /api/v1/album`
pub async fn get_albums(
    client: &Client,
    base_url: &Url,
    api_key: &str,
) -> Result<Vec<LidarrAlbum>, SyncError> {
    lidarr_get(client, base_url, api_key, "album").await
}

/// Delete an album.
///
/// Endpoint
/// - `DELETE /api/v1/album/{id}?deleteFiles=..&addImportListExclusion=..`
pub async fn delete_album(
    client: &Client,
    base_url: &Url,
    api_key: &str,
    album_id: i64,
    delete_files: bool,
    add_import_list_exclusion: bool,
) -> Result<(), SyncError> {
    let path = format!("album/{}", album_id);
    let mut url = api_url(base_url, &path)?;
    url.query_pairs_mut()
        .append_pair("deleteFiles", &delete_files.to_string())
        .append_pair("addImportListExclusion", &add_import_list_exclusion.to_string());

    log::debug!("DELETE Lidarr {}", url.path());
    send(client.delete(url), api_key, &path).await?;
    Ok(())
}

/* ---------- Album editor ---------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplyTags {
    Add,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumEditorRequest {
    pub album_ids: Vec<i64>,
    pub tags: Vec<i64>,
    pub apply_tags: ApplyTags,
}

/// Bulk edit albums.
///
/// Endpoint
/// - `POST /api/v1/album/editor`
pub async fn edit_albums(
    client: &Client,
    base_url: &Url,
    api_key: &str,
    request: &AlbumEditorRequest,
) -> Result<(), SyncError> {
    let path = "album/editor";
    let url = api_url(base_url, path)?;

    log::debug!("POST Lidarr {}", path);
    send(client.post(url).json(request), api_key, path).await?;
    Ok(())
}
