use color_eyre::eyre::Result;

use crate::ports::lidarr::CatalogClient;
use crate::ports::plex::PlaylistSource;
use crate::services::dislike_sync::catalog_snapshot::read_catalog;
use crate::services::dislike_sync::matcher::match_albums;
use crate::services::dislike_sync::playlist_snapshot::read_disliked_albums;
use crate::services::dislike_sync::remediation::{RemediationMode, RemediationStrategy};

/// Everything a run needs besides the two service clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub library_name: String,
    pub playlist_name: String,
    pub mode: RemediationMode,
    pub dry_run: bool,
}

/// Summary of one finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncResult {
    pub processed_count: usize,
    pub dry_run: bool,
}

pub struct SyncRunner<P: PlaylistSource, C: CatalogClient> {
    config: SyncConfig,
    playlist_source: P,
    catalog: C,
}

impl<P: PlaylistSource, C: CatalogClient> SyncRunner<P, C> {
    pub fn new(config: SyncConfig, playlist_source: P, catalog: C) -> Self {
        Self {
            config,
            playlist_source,
            catalog,
        }
    }

    /// One reconciliation pass: playlist, catalog, match, remediate.
    ///
    /// The first error aborts the run. Albums already remediated stay
    /// remediated and are not reported.
    pub async fn run(&self) -> Result<SyncResult> {
        let dry_run = self.config.dry_run;
        if dry_run {
            log::info!("DRY RUN MODE ENABLED - No changes will be made to Lidarr");
        }

        let disliked = read_disliked_albums(
            &self.playlist_source,
            &self.config.library_name,
            &self.config.playlist_name,
        )
        .await?;
        log::info!("Found {} disliked albums in Plex", disliked.len());

        let catalog = read_catalog(&self.catalog).await?;
        let matches = match_albums(&disliked, catalog);
        log::debug!("{} Lidarr albums match the playlist", matches.len());

        let strategy =
            RemediationStrategy::prepare(&self.config.mode, &self.catalog, dry_run).await?;

        let mut processed_count = 0;
        for pair in &matches {
            log::debug!("'{}' matches Lidarr album {}", pair.key, pair.album.id);
            let outcome = strategy.apply(&self.catalog, &pair.album, dry_run).await?;
            if outcome.is_counted() {
                processed_count += 1;
            }
        }

        log::info!(
            "Sync complete. {} {} albums",
            self.config.mode.verb(),
            processed_count
        );

        Ok(SyncResult {
            processed_count,
            dry_run,
        })
    }
}
