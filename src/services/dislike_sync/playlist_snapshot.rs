use std::collections::BTreeSet;

use color_eyre::eyre::{Result, WrapErr};

use crate::ports::plex::{PlaylistItem, PlaylistSource};

/// Album titles taken from the `parentTitle` of every playlist entry.
pub type DislikedKeys = BTreeSet<String>;

/// Collapse playlist entries into the set of disliked album titles.
///
/// Entries without an album (anything that is not an album track) are skipped.
pub fn disliked_keys(items: impl IntoIterator<Item = PlaylistItem>) -> DislikedKeys {
    items
        .into_iter()
        .filter_map(|item| {
            if item.album.is_none() {
                log::debug!("Skipping playlist item without album: {}", item.title);
            }
            item.album
        })
        .collect()
}

/// Read the named playlist from the named music library.
///
/// An unknown library or playlist fails the run with `SyncError::NotFound`.
pub async fn read_disliked_albums<P: PlaylistSource + ?Sized>(
    source: &P,
    library_name: &str,
    playlist_name: &str,
) -> Result<DislikedKeys> {
    source.ensure_music_library(library_name).await?;

    log::info!("Loading Plex playlist: {}", playlist_name);
    let items = source
        .get_playlist_items(playlist_name)
        .await
        .wrap_err_with(|| format!("Failed to load Plex playlist '{}'", playlist_name))?;
    log::debug!("Playlist '{}' has {} items", playlist_name, items.len());

    Ok(disliked_keys(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyncError;
    use crate::ports::plex::MockPlaylistSource;

    #[test]
    fn test_disliked_keys_dedupes_and_skips_items_without_album() {
        let keys = disliked_keys(vec![
            PlaylistItem::new("Track 1", Some("X")),
            PlaylistItem::new("Track 2", Some("X")),
            PlaylistItem::new("Clip", None),
            PlaylistItem::new("Track 3", Some("Y ")),
        ]);
        assert_eq!(
            keys.into_iter().collect::<Vec<_>>(),
            vec!["X".to_string(), "Y ".to_string()]
        );
    }

    #[tokio::test]
    async fn test_read_empty_playlist() {
        let mut source = MockPlaylistSource::new();
        source.expect_ensure_music_library().returning(|_| Ok(()));
        source.expect_get_playlist_items().returning(|_| Ok(vec![]));

        let keys = read_disliked_albums(&source, "Music", "Disliked")
            .await
            .unwrap();
        assert!(keys.is_empty());
    }

    #[tokio::test]
    async fn test_read_missing_playlist_is_not_found() {
        let mut source = MockPlaylistSource::new();
        source.expect_ensure_music_library().returning(|_| Ok(()));
        source
            .expect_get_playlist_items()
            .returning(|name| Err(SyncError::not_found("Plex playlist", name).into()));

        let err = read_disliked_albums(&source, "Music", "Disliked")
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SyncError>(),
            Some(SyncError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_read_missing_library_skips_playlist_fetch() {
        let mut source = MockPlaylistSource::new();
        source
            .expect_ensure_music_library()
            .returning(|name| Err(SyncError::not_found("Plex music library", name).into()));
        source.expect_get_playlist_items().never();

        let result = read_disliked_albums(&source, "Nope", "Disliked").await;
        assert!(result.is_err());
    }
}
