use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr};
use reqwest::Client;
use url::Url;

use crate::error::SyncError;
use crate::plex_rs::library::{find_music_section, get_library_sections};
use crate::plex_rs::playlist::{PlexPlaylistItem, find_playlist, get_playlist_items, get_playlists};
use crate::ports::plex::{PlaylistItem, PlaylistSource};

pub struct PlexHttpAdapter {
    client: Client,
    server_url: Url,
    token: String,
}

impl PlexHttpAdapter {
    pub fn new(server_url: Url, token: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .wrap_err("Failed to build Plex HTTP client")?;

        Ok(Self {
            client,
            server_url,
            token,
        })
    }
}

impl From<PlexPlaylistItem> for PlaylistItem {
    fn from(item: PlexPlaylistItem) -> Self {
        Self {
            title: item.title,
            album: item.album,
        }
    }
}

#[async_trait::async_trait]
impl PlaylistSource for PlexHttpAdapter {
    async fn ensure_music_library(&self, library_name: &str) -> Result<()> {
        let sections = get_library_sections(&self.client, &self.server_url, &self.token)
            .await
            .wrap_err("Failed to fetch Plex library sections")?;

        let section = find_music_section(&sections, library_name)
            .ok_or_else(|| SyncError::not_found("Plex music library", library_name))?;
        log::debug!(
            "Using Plex library '{}' (section {})",
            section.title,
            section.key
        );
        Ok(())
    }

    async fn get_playlist_items(&self, playlist_name: &str) -> Result<Vec<PlaylistItem>> {
        let playlists = get_playlists(&self.client, &self.server_url, &self.token)
            .await
            .wrap_err("Failed to fetch Plex playlists")?;

        let playlist = find_playlist(&playlists, playlist_name)
            .ok_or_else(|| SyncError::not_found("Plex playlist", playlist_name))?;

        let items = get_playlist_items(
            &self.client,
            &self.server_url,
            &self.token,
            &playlist.rating_key,
        )
        .await
        .wrap_err_with(|| format!("Failed to fetch items of Plex playlist '{}'", playlist_name))?;

        Ok(items.into_iter().map(PlaylistItem::from).collect())
    }
}
