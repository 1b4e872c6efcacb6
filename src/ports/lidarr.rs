use std::collections::BTreeSet;
use std::fmt;

use color_eyre::eyre::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlbumId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagId(pub i64);

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Artist name used when Lidarr returns an album without one.
pub const UNKNOWN_ARTIST: &str = "Unknown";

/// Decoupled representation of a Lidarr album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogAlbum {
    pub id: AlbumId,
    pub title: String,
    pub artist_name: String,
    pub tags: BTreeSet<TagId>,
}

impl CatalogAlbum {
    pub fn new(id: i64, title: impl Into<String>, artist_name: Option<&str>) -> Self {
        Self {
            id: AlbumId(id),
            title: title.into(),
            artist_name: artist_name.unwrap_or(UNKNOWN_ARTIST).to_string(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = i64>) -> Self {
        self.tags = tags.into_iter().map(TagId).collect();
        self
    }
}

/// Decoupled representation of a Lidarr tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteAlbumOptions {
    /// Also remove the album's files from disk.
    pub delete_files: bool,
    /// Add the album to the import list exclusions so it is never grabbed again.
    pub add_import_list_exclusion: bool,
}

/// A bulk tag edit. Lidarr applies `tags` to every album in `album_ids` additively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumTagEdit {
    pub album_ids: Vec<AlbumId>,
    pub tags: Vec<TagId>,
}

/// Port trait wrapping the Lidarr API capabilities used by the sync.
///
/// Implementations live in `services::lidarr::client` (production) or test mocks.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    async fn get_albums(&self) -> Result<Vec<CatalogAlbum>>;

    async fn delete_album(&self, album_id: AlbumId, options: DeleteAlbumOptions) -> Result<()>;

    async fn get_tags(&self) -> Result<Vec<Tag>>;

    async fn create_tag(&self, label: &str) -> Result<Tag>;

    async fn add_album_tags(&self, edit: AlbumTagEdit) -> Result<()>;
}
