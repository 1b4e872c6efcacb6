use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr};
use reqwest::Client;
use url::Url;

use crate::lidarr_rs::album::{
    AlbumEditorRequest, ApplyTags, LidarrAlbum, delete_album, edit_albums, get_albums,
};
use crate::lidarr_rs::tag::{LidarrTag, create_tag, get_tags};
use crate::ports::lidarr::{
    AlbumId, AlbumTagEdit, CatalogAlbum, CatalogClient, DeleteAlbumOptions, Tag, TagId,
};

pub struct LidarrHttpAdapter {
    client: Client,
    server_url: Url,
    api_key: String,
}

impl LidarrHttpAdapter {
    pub fn new(server_url: Url, api_key: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .wrap_err("Failed to build Lidarr HTTP client")?;

        Ok(Self {
            client,
            server_url,
            api_key,
        })
    }
}

impl From<LidarrAlbum> for CatalogAlbum {
    fn from(album: LidarrAlbum) -> Self {
        let artist_name = album.artist.as_ref().and_then(|a| a.artist_name.as_deref());
        CatalogAlbum::new(album.id, album.title, artist_name).with_tags(album.tags)
    }
}

impl From<LidarrTag> for Tag {
    fn from(tag: LidarrTag) -> Self {
        Self {
            id: TagId(tag.id),
            label: tag.label,
        }
    }
}

#[async_trait::async_trait]
impl CatalogClient for LidarrHttpAdapter {
    async fn get_albums(&self) -> Result<Vec<CatalogAlbum>> {
        let albums = get_albums(&self.client, &self.server_url, &self.api_key)
            .await
            .wrap_err("Failed to fetch albums from Lidarr")?;
        Ok(albums.into_iter().map(CatalogAlbum::from).collect())
    }

    async fn delete_album(&self, album_id: AlbumId, options: DeleteAlbumOptions) -> Result<()> {
        delete_album(
            &self.client,
            &self.server_url,
            &self.api_key,
            album_id.0,
            options.delete_files,
            options.add_import_list_exclusion,
        )
        .await
        .wrap_err_with(|| format!("Failed to delete Lidarr album {}", album_id))
    }

    async fn get_tags(&self) -> Result<Vec<Tag>> {
        let tags = get_tags(&self.client, &self.server_url, &self.api_key)
            .await
            .wrap_err("Failed to fetch tags from Lidarr")?;
        Ok(tags.into_iter().map(Tag::from).collect())
    }

    async fn create_tag(&self, label: &str) -> Result<Tag> {
        let tag = create_tag(&self.client, &self.server_url, &self.api_key, label)
            .await
            .wrap_err_with(|| format!("Failed to create Lidarr tag '{}'", label))?;
        Ok(tag.into())
    }

    async fn add_album_tags(&self, edit: AlbumTagEdit) -> Result<()> {
        let request = AlbumEditorRequest {
            album_ids: edit.album_ids.iter().map(|id| id.0).collect(),
            tags: edit.tags.iter().map(|id| id.0).collect(),
            apply_tags: ApplyTags::Add,
        };
        edit_albums(&self.client, &self.server_url, &self.api_key, &request)
            .await
            .wrap_err("Failed to apply tags to Lidarr albums")
    }
}
