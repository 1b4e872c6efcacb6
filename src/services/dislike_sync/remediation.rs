use color_eyre::eyre::Result;

use crate::ports::lidarr::{AlbumTagEdit, CatalogAlbum, CatalogClient, DeleteAlbumOptions, TagId};
use crate::services::dislike_sync::tag_registrar::TagRegistrar;

/// What to do with a disliked album, as chosen in configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemediationMode {
    /// Delete the album and its files, and exclude it from future imports.
    Delete,
    /// Add a tag so the album can be filtered later.
    Tag { label: String },
}

impl RemediationMode {
    /// Past-tense verb for the run summary.
    pub fn verb(&self) -> &'static str {
        match self {
            RemediationMode::Delete => "Deleted",
            RemediationMode::Tag { .. } => "Tagged",
        }
    }
}

/// Final state of a single matched album.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemediationOutcome {
    DryRunSkipped,
    Deleted,
    Tagged,
    /// No tag id was available, so nothing was applied.
    SkippedNoTag,
}

impl RemediationOutcome {
    /// Whether the album counts toward `SyncResult::processed_count`.
    pub fn is_counted(self) -> bool {
        !matches!(self, RemediationOutcome::SkippedNoTag)
    }
}

/// The remediation applied to each matched album during a run.
///
/// Built once per run by [`RemediationStrategy::prepare`], which for tagging
/// resolves the tag id up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemediationStrategy {
    Delete,
    Tag { tag_id: Option<TagId> },
}

const DELETE_OPTIONS: DeleteAlbumOptions = DeleteAlbumOptions {
    delete_files: true,
    add_import_list_exclusion: true,
};

impl RemediationStrategy {
    pub async fn prepare<C: CatalogClient + ?Sized>(
        mode: &RemediationMode,
        client: &C,
        dry_run: bool,
    ) -> Result<Self> {
        match mode {
            RemediationMode::Delete => Ok(RemediationStrategy::Delete),
            RemediationMode::Tag { label } => {
                let tag_id = TagRegistrar::new(client, dry_run).resolve(label).await?;
                Ok(RemediationStrategy::Tag { tag_id })
            }
        }
    }

    /// Apply the strategy to one album. Dry runs never issue a mutating call.
    pub async fn apply<C: CatalogClient + ?Sized>(
        &self,
        client: &C,
        album: &CatalogAlbum,
        dry_run: bool,
    ) -> Result<RemediationOutcome> {
        match self {
            RemediationStrategy::Delete => {
                if dry_run {
                    log::info!(
                        "Skipping delete due to dry-run: {} - {}",
                        album.artist_name,
                        album.title
                    );
                    return Ok(RemediationOutcome::DryRunSkipped);
                }

                log::info!(
                    "Deleting album in Lidarr: {} - {}",
                    album.artist_name,
                    album.title
                );
                client.delete_album(album.id, DELETE_OPTIONS).await?;
                Ok(RemediationOutcome::Deleted)
            }
            RemediationStrategy::Tag { tag_id } => {
                if dry_run {
                    log::info!(
                        "Skipping tag due to dry-run: {} - {}",
                        album.artist_name,
                        album.title
                    );
                    return Ok(RemediationOutcome::DryRunSkipped);
                }

                let Some(tag_id) = *tag_id else {
                    log::warn!(
                        "No tag id resolved, skipping: {} - {}",
                        album.artist_name,
                        album.title
                    );
                    return Ok(RemediationOutcome::SkippedNoTag);
                };

                // Set union: re-tagging an album that already carries the tag is a no-op.
                let mut tags = album.tags.clone();
                tags.insert(tag_id);

                log::info!(
                    "Tagging album in Lidarr: {} - {}",
                    album.artist_name,
                    album.title
                );
                client
                    .add_album_tags(AlbumTagEdit {
                        album_ids: vec![album.id],
                        tags: tags.into_iter().collect(),
                    })
                    .await?;
                Ok(RemediationOutcome::Tagged)
            }
        }
    }
}
