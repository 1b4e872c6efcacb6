use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::error::SyncError;
use crate::plex_rs::{PlexMetadataContainer, PlexResponse, plex_get};

/* ---------- Playlists ---------- */

#[derive(Debug, Clone, Deserialize)]
pub struct PlexPlaylist {
    #[serde(rename = "ratingKey")]
    pub rating_key: String,

    pub title: String,

    #[serde(rename = "playlistType")]
    pub playlist_type: String,
}

pub async fn get_playlists(
    client: &Client,
    base_url: &Url,
    user_token: &str,
) -> Result<Vec<PlexPlaylist>, SyncError> {
    let url = base_url.join("playlists?playlistType=audio")?;
    let res: PlexResponse<PlexMetadataContainer<PlexPlaylist>> =
        plex_get(client, url, user_token).await?;
    Ok(res.media_container.metadata)
}

/// Find a music playlist by its exact title.
pub fn find_playlist<'a>(playlists: &'a [PlexPlaylist], title: &str) -> Option<&'a PlexPlaylist> {
    playlists
        .iter()
        .find(|playlist| playlist.playlist_type == "audio" && playlist.title == title)
}

/* ---------- Playlist items ---------- */

/// One entry of a playlist.
///
/// Only tracks carry `parentTitle` (their album). Other item kinds leave it unset.
#[derive(Debug, Clone, Deserialize)]
pub struct PlexPlaylistItem {
    pub title: String,

    #[serde(rename = "parentTitle", default)]
    pub album: Option<String>,
}

pub async fn get_playlist_items(
    client: &Client,
    base_url: &Url,
    user_token: &str,
    playlist_id: &str,
) -> Result<Vec<PlexPlaylistItem>, SyncError> {
    let url = base_url.join(&format!("playlists/{}/items", playlist_id))?;
    let res: PlexResponse<PlexMetadataContainer<PlexPlaylistItem>> =
        plex_get(client, url, user_token).await?;
    Ok(res.media_container.metadata)
}
