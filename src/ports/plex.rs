use color_eyre::eyre::Result;

/// Decoupled representation of a Plex playlist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistItem {
    pub title: String,
    /// The album (`parentTitle`) of the entry. `None` for items that are not album tracks.
    pub album: Option<String>,
}

#[cfg(test)]
impl PlaylistItem {
    pub fn new(title: impl Into<String>, album: Option<&str>) -> Self {
        Self {
            title: title.into(),
            album: album.map(str::to_string),
        }
    }
}

/// Port trait wrapping the Plex reads the sync needs.
///
/// Implementations live in `services::plex::client` (production) or test mocks.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PlaylistSource: Send + Sync {
    /// Fails with `SyncError::NotFound` when no music library has this title.
    async fn ensure_music_library(&self, library_name: &str) -> Result<()>;

    /// Fails with `SyncError::NotFound` when no playlist has this title.
    async fn get_playlist_items(&self, playlist_name: &str) -> Result<Vec<PlaylistItem>>;
}
