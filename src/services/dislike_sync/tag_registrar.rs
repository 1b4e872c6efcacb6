use color_eyre::eyre::{Result, WrapErr};

use crate::ports::lidarr::{CatalogClient, TagId};

/// Resolves a tag label to a Lidarr tag id, creating the tag when it is missing.
///
/// `resolve` consumes the registrar so a run can only resolve once. Lidarr
/// does not deduplicate tag creation, so resolving per album could create the
/// same label several times.
pub struct TagRegistrar<'a, C: CatalogClient + ?Sized> {
    client: &'a C,
    dry_run: bool,
}

impl<'a, C: CatalogClient + ?Sized> TagRegistrar<'a, C> {
    pub fn new(client: &'a C, dry_run: bool) -> Self {
        Self { client, dry_run }
    }

    /// Returns `None` only when the tag is missing and this is a dry run.
    pub async fn resolve(self, label: &str) -> Result<Option<TagId>> {
        let tags = self
            .client
            .get_tags()
            .await
            .wrap_err("Failed to fetch Lidarr tags")?;

        if let Some(tag) = tags.into_iter().find(|tag| tag.label == label) {
            log::info!("Using existing Lidarr tag '{}' (id {})", label, tag.id);
            return Ok(Some(tag.id));
        }

        if self.dry_run {
            log::info!("Skipping tag creation due to dry-run: {}", label);
            return Ok(None);
        }

        log::info!("Creating Lidarr tag: {}", label);
        let tag = self.client.create_tag(label).await?;
        Ok(Some(tag.id))
    }
}
